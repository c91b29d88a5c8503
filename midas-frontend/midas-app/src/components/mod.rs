pub mod background;
pub mod cta_button;
pub mod feature_card;
pub mod icon;
pub mod meta;
pub mod section_header;
