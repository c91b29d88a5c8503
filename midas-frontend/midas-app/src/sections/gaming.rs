use icondata as i;
use leptos::{html::Div, prelude::*};

use crate::components::cta_button::CtaButton;
use crate::components::icon::Icon;
use crate::content::{anchor, Highlight};
use crate::motion::{timing, use_scroll_reveal};

/// Armor bar segments drawn in the mock game window.
const HUD_SEGMENTS: usize = 5;

#[component]
pub fn GamingDivision(
    highlights: &'static [Highlight],
    #[prop(into)] community_url: String,
    #[prop(into)] backdrop_url: String,
) -> impl IntoView {
    let copy = NodeRef::<Div>::new();
    let copy_shown = use_scroll_reveal(copy, true);

    view! {
        <section class="relative z-10 py-32 px-6 overflow-hidden bg-slate-950" id=anchor::GAMING>
            <div class="absolute right-0 top-0 w-1/2 h-full bg-gradient-to-l from-amber-900/5 to-transparent pointer-events-none" />

            <div class="max-w-7xl mx-auto grid grid-cols-1 lg:grid-cols-2 gap-20 items-center">
                <div node_ref=copy style=move || timing::GAMING_COPY.style(copy_shown.get())>
                    <div class="flex items-center gap-3 mb-6 text-amber-500">
                        <Icon icon=i::LuTerminal size="20" />
                        <span class="font-mono text-xs tracking-[0.2em] font-bold uppercase">
                            "Midas_Labs :: GTA V Roleplay"
                        </span>
                    </div>

                    <h2 class="text-4xl md:text-5xl font-bold text-white mb-6 leading-tight">
                        "MIDAS ROLEPLAY " <br /> "SERVER"
                    </h2>

                    <p class="text-slate-300 text-lg mb-8 leading-relaxed font-light border-l-2 border-amber-500/50 pl-6">
                        "Un ecosistema digital vivo. Implementamos scripts Lua optimizados, interfaces NUI reactivas (React dentro del juego) y sistemas de economía balanceados."
                    </p>

                    <div class="space-y-6 mb-10">
                        {highlights
                            .iter()
                            .map(|highlight| view! { <HighlightRow highlight=*highlight /> })
                            .collect_view()}
                    </div>

                    <div id=anchor::DISCORD>
                        <CtaButton href=community_url icon=i::LuDisc>
                            "Unirse al Discord"
                        </CtaButton>
                    </div>
                </div>

                <GameWindow backdrop_url=backdrop_url />
            </div>
        </section>
    }
}

#[component]
fn HighlightRow(highlight: Highlight) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4 group">
            <div class="w-10 h-10 bg-slate-900 rounded flex items-center justify-center border border-slate-700 text-amber-500 group-hover:border-amber-500 transition-colors">
                <Icon icon=highlight.icon size="18" />
            </div>
            <div>
                <h4 class="text-white font-bold uppercase text-sm">{highlight.title}</h4>
                <p class="text-slate-500 text-sm">{highlight.detail}</p>
            </div>
        </div>
    }
}

/// Purely decorative client window with a HUD overlay.
#[component]
fn GameWindow(backdrop_url: String) -> impl IntoView {
    let frame = NodeRef::<Div>::new();
    let shown = use_scroll_reveal(frame, true);
    let backdrop = format!(
        "background-image: linear-gradient(to bottom, transparent 50%, #000 100%), url('{backdrop_url}');"
    );

    view! {
        <div
            node_ref=frame
            class="relative"
            style=move || timing::GAMING_WINDOW.style(shown.get())
        >
            <div class="aspect-video bg-slate-900 border border-slate-700 relative overflow-hidden rounded-sm group shadow-2xl shadow-black/50">
                <div class="absolute inset-0 bg-slate-800 flex items-center justify-center overflow-hidden">
                    <div
                        class="w-full h-full bg-cover bg-center opacity-40 grayscale group-hover:grayscale-0 transition-all duration-700"
                        style=backdrop
                    />
                </div>

                <div class="absolute inset-0 bg-[linear-gradient(to_right,transparent_0%,rgba(251,191,36,0.05)_1px,transparent_2px)] bg-[size:30px_30px]" />

                <div class="absolute top-4 right-4 flex flex-col items-end gap-1">
                    <div class="flex gap-1">
                        {(0..HUD_SEGMENTS)
                            .map(|_| {
                                view! {
                                    <div class="hud-segment w-8 h-2 bg-slate-800 border border-slate-600 rounded-sm overflow-hidden">
                                        <div class="h-full bg-amber-500 w-full opacity-80" />
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <span class="font-mono text-[10px] text-amber-400">"ARMOR 100%"</span>
                </div>

                <div class="absolute bottom-0 left-0 right-0 p-6 bg-gradient-to-t from-slate-950 via-slate-950/80 to-transparent">
                    <div class="flex justify-between items-end">
                        <div>
                            <div class="flex items-center gap-2 mb-1">
                                <div class="w-2 h-2 bg-green-500 rounded-full animate-pulse shadow-[0_0_5px_#22c55e]" />
                                <span class="text-green-400 font-mono text-xs font-bold tracking-wider">
                                    "ONLINE"
                                </span>
                            </div>
                            <h3 class="text-2xl font-bold text-white tracking-tighter">
                                "MIDAS ROLEPLAY " <span class="text-amber-500">"v3.0"</span>
                            </h3>
                            <p class="text-slate-400 font-mono text-[10px] mt-1">
                                "ID: 194.55.20.11 :: LOS SANTOS REGION"
                            </p>
                        </div>
                        <div class="hidden sm:flex gap-2">
                            <span class="px-2 py-1 bg-slate-800/80 text-amber-500 border border-amber-500/30 text-[10px] rounded font-mono uppercase">
                                "ESX Legacy"
                            </span>
                            <span class="px-2 py-1 bg-slate-800/80 text-blue-400 border border-blue-500/30 text-[10px] rounded font-mono uppercase">
                                "Voice: PMA"
                            </span>
                        </div>
                    </div>
                </div>

                // crosshair
                <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-16 h-16 border border-white/20 rounded-full flex items-center justify-center pointer-events-none">
                    <div class="w-1 h-1 bg-amber-500/80" />
                    <div class="absolute top-0 bottom-0 w-px bg-white/10" />
                    <div class="absolute left-0 right-0 h-px bg-white/10" />
                </div>
            </div>

            <div class="absolute -bottom-3 -right-3 w-16 h-16 border-b-2 border-r-2 border-amber-500/50 -z-10" />
            <div class="absolute -top-3 -left-3 w-16 h-16 border-t-2 border-l-2 border-amber-500/50 -z-10" />
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod test {
    use super::*;
    use crate::content::{DISCORD_URL, GAMING_BACKDROP_URL, GAMING_HIGHLIGHTS};
    use crate::test_util::render;

    fn gaming() -> String {
        render(|| {
            view! {
                <GamingDivision
                    highlights=GAMING_HIGHLIGHTS
                    community_url=DISCORD_URL
                    backdrop_url=GAMING_BACKDROP_URL
                />
            }
        })
    }

    #[test]
    fn discord_button_targets_community() {
        let html = gaming();
        assert!(html.contains(r#"href="https://discord.gg/midasnetwork""#));
        assert!(html.contains(r#"id="discord""#));
        assert!(html.contains(r#"id="gaming""#));
    }

    #[test]
    fn hud_and_highlights() {
        let html = gaming();
        assert_eq!(html.matches("hud-segment ").count(), 5);
        assert!(html.contains("Recursos FiveM Propios"));
        assert!(html.contains("Seguridad &amp; Anti-Cheat"));
        assert!(html.contains("ID: 194.55.20.11 :: LOS SANTOS REGION"));
        assert!(html.contains("photo-1605218427306-635ba2439715"));
    }
}
