pub mod footer;
pub mod gaming;
pub mod hero;
pub mod navbar;
pub mod philosophy;
pub mod projects;
pub mod services;
