pub mod components;
pub mod content;
pub mod motion;
pub mod routes;
pub mod sections;

use leptos::{config::LeptosOptions, prelude::*};
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use crate::routes::{home_page::HomePage, not_found::NotFound};

/// HTML document the server streams the app into.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body class="bg-slate-950">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/midas.css" />
        <Router>
            <Routes fallback=NotFound>
                <Route path=StaticSegment("") view=HomePage />
            </Routes>
        </Router>
    }
}

#[cfg(all(test, feature = "ssr"))]
pub(crate) mod test_util {
    use leptos::prelude::*;

    /// Server renders a view inside a fresh reactive owner.
    pub(crate) fn render<F, V>(view: F) -> String
    where
        F: FnOnce() -> V,
        V: IntoView,
    {
        Owner::new().with(|| view().into_view().to_html())
    }

    /// The opening tag of the first element whose markup contains `marker`.
    pub(crate) fn opening_tag<'a>(html: &'a str, marker: &str) -> &'a str {
        let at = html.find(marker).expect("marker in markup");
        let start = html[..at].rfind('<').expect("tag start");
        let end = at + html[at..].find('>').expect("tag end");
        &html[start..=end]
    }
}
