use leptos::prelude::*;
use leptos_meta::{Meta, Title};

pub const SITE_NAME: &str = "Midas Network";

/// What a route tells crawlers and link previews about itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// `None` for the landing page, which is titled by the site name alone.
    pub title: Option<&'static str>,
    pub description: &'static str,
}

impl PageInfo {
    pub fn full_title(&self) -> String {
        match self.title {
            Some(title) => format!("{title} - {SITE_NAME}"),
            None => SITE_NAME.to_string(),
        }
    }
}

/// Title, description and the open graph / twitter card copies of both.
#[component]
pub fn PageMeta(page: PageInfo) -> impl IntoView {
    let title = page.full_title();
    view! {
        <Title text=title.clone() />
        <Meta name="description" content=page.description />
        <Meta property="og:site_name" content=SITE_NAME />
        <Meta property="og:type" content="website" />
        <Meta property="og:locale" content="es_ES" />
        <Meta property="og:title" content=title.clone() />
        <Meta property="og:description" content=page.description />
        <Meta name="twitter:card" content="summary" />
        <Meta name="twitter:title" content=title />
        <Meta name="twitter:description" content=page.description />
        <Meta name="theme-color" content="#020617" />
    }
}
