use leptos::prelude::*;

use crate::content::NavLink;
use crate::motion::Loop;

#[component]
pub fn Navbar(links: &'static [NavLink]) -> impl IntoView {
    view! {
        <nav class="fixed top-0 w-full z-50 px-6 py-4 bg-slate-950/90 backdrop-blur-md border-b border-slate-800">
            <div class="max-w-7xl mx-auto flex justify-between items-center">
                <a
                    href="#"
                    class="font-bold text-lg tracking-widest text-white flex items-center gap-3 font-mono"
                >
                    <div class="w-3 h-3 bg-amber-500 rotate-45 border border-amber-300 shadow-[0_0_10px_rgba(245,158,11,0.5)]" />
                    "MIDAS_NETWORK"
                </a>
                <div class="hidden md:flex gap-10 text-xs font-bold tracking-widest text-slate-400 uppercase">
                    {links
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    class="hover:text-amber-400 transition-colors relative group"
                                >
                                    <span class="group-hover:opacity-100 opacity-0 absolute -left-3 text-amber-500 transition-opacity">
                                        "/"
                                    </span>
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex items-center gap-2 text-[10px] font-mono text-slate-500">
                    <span
                        class="w-2 h-2 bg-green-500 rounded-full"
                        style=Loop::STATUS_PULSE.style()
                    />
                    "SYSTEMS ONLINE"
                </div>
            </div>
        </nav>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod test {
    use super::*;
    use crate::content::NAV_LINKS;
    use crate::test_util::render;

    #[test]
    fn one_anchor_per_link() {
        let html = render(|| view! { <Navbar links=NAV_LINKS /> });
        for link in NAV_LINKS {
            assert!(html.contains(&format!(r#"href="{}""#, link.href)));
        }
        assert!(html.contains("SYSTEMS ONLINE"));
        assert!(html.contains("midas-pulse"));
    }
}
