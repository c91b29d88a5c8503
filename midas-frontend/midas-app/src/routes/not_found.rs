use leptos::prelude::*;

use crate::components::background::Background;
use crate::components::cta_button::CtaButton;
use crate::components::meta::{PageInfo, PageMeta};

const PAGE: PageInfo = PageInfo {
    title: Some("Page Not Found"),
    description: "La página que buscas no existe en esta red.",
};

#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }
    view! {
        <PageMeta page=PAGE />
        <Background />
        <div class="relative z-10 flex flex-col items-center justify-center min-h-screen text-center space-y-10 p-4">
            <span class="font-mono text-xs text-amber-500 tracking-widest uppercase">"Error 404"</span>
            <h1 class="text-5xl font-black text-white tracking-tighter">"NODO NO ENCONTRADO"</h1>
            <p class="max-w-lg text-slate-400">"La página que buscas no existe en esta red."</p>
            <CtaButton href="/">"Volver al inicio"</CtaButton>
        </div>
    }
}
