use leptos::prelude::*;

use crate::components::background::Background;
use crate::components::meta::{PageInfo, PageMeta};
use crate::content::{
    DISCORD_URL, FOOTER_COLUMNS, GAMING_BACKDROP_URL, GAMING_HIGHLIGHTS, NAV_LINKS, PROJECTS,
    SERVICES,
};
use crate::sections::{
    footer::Footer, gaming::GamingDivision, hero::Hero, navbar::Navbar, philosophy::Philosophy,
    projects::Projects, services::Services,
};

const PAGE: PageInfo = PageInfo {
    title: None,
    description: "Desarrollo web full stack, arquitecturas de monolitos modulares y la división gaming de Midas Network.",
};

/// The whole landing page, top to bottom.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageMeta page=PAGE />
        <div class="w-full overflow-x-hidden min-h-screen bg-slate-950 text-slate-200 selection:bg-amber-500/30 selection:text-amber-100 font-sans">
            <Background />
            <Navbar links=NAV_LINKS />
            <main>
                <Hero />
                <Services services=SERVICES />
                <Philosophy />
                <GamingDivision
                    highlights=GAMING_HIGHLIGHTS
                    community_url=DISCORD_URL
                    backdrop_url=GAMING_BACKDROP_URL
                />
                <Projects projects=PROJECTS />
            </main>
            <Footer columns=FOOTER_COLUMNS />
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod test {
    use super::*;
    use crate::test_util::render;
    use leptos_meta::provide_meta_context;

    #[test]
    fn sections_in_order() {
        let html = render(|| {
            provide_meta_context();
            view! { <HomePage /> }
        });
        let order = [
            "<nav",
            "<main",
            "Midas Architecture v.2.0.4",
            r#"id="servicios""#,
            r#"id="filosofia""#,
            r#"id="gaming""#,
            r#"id="proyectos""#,
            "</main>",
            "<footer",
        ];
        let mut last = 0;
        for marker in order {
            let found = html[last..]
                .find(marker)
                .unwrap_or_else(|| panic!("{marker} missing or out of order"));
            last += found;
        }
    }
}
