use leptos::{html::Div, prelude::*};

use crate::components::icon::Icon;
use crate::motion::{timing, use_scroll_reveal};

/// Bordered panel with an icon, a title and a short description.
///
/// Fades and slides in the first time it scrolls into view, `delay` seconds
/// after becoming visible.
#[component]
pub fn FeatureCard(
    icon: icondata_core::Icon,
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(optional)] delay: f32,
) -> impl IntoView {
    let target = NodeRef::<Div>::new();
    let shown = use_scroll_reveal(target, true);
    let motion = timing::FEATURE_CARD.delayed(delay);

    view! {
        <div node_ref=target class="h-full" style=move || motion.style(shown.get())>
            <div class="feature-card relative group p-8 border border-slate-800 bg-slate-900/40 backdrop-blur-sm hover:border-amber-500/50 transition-all duration-500 overflow-hidden flex flex-col h-full">
                <div class="absolute top-0 right-0 w-32 h-32 bg-gradient-to-br from-amber-500/10 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-500" />

                <div class="flex items-center gap-4 mb-6 relative z-10">
                    <div class="p-3 bg-slate-800/80 rounded-sm text-amber-400 group-hover:text-amber-300 transition-colors border border-slate-700 group-hover:border-amber-500/30 shadow-lg shadow-black/50">
                        <Icon icon=icon size="24" stroke_width="1.5" />
                    </div>
                    <h3 class="text-xl font-bold text-slate-100 tracking-wide font-mono">{title}</h3>
                </div>

                <p class="text-slate-400 text-sm leading-relaxed font-light relative z-10 flex-grow">
                    {description}
                </p>

                // HUD corners
                <div class="absolute bottom-0 left-0 w-3 h-3 border-b border-l border-slate-600 group-hover:border-amber-500 transition-colors duration-300" />
                <div class="absolute top-0 right-0 w-3 h-3 border-t border-r border-slate-600 group-hover:border-amber-500 transition-colors duration-300" />
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod test {
    use super::*;
    use crate::test_util::{opening_tag, render};

    #[test]
    fn renders_hidden_until_revealed() {
        let html = render(|| {
            view! {
                <FeatureCard
                    icon=icondata::LuBox
                    title="Monolitos Modulares"
                    description="Arquitectura"
                    delay=0.1
                />
            }
        });
        assert!(html.contains("Monolitos Modulares"));
        assert!(html.contains("Arquitectura"));
        assert!(html.contains("opacity: 0; transform: translate(0px, 20px) scale(1);"));
        assert!(html.contains("transition: opacity 0.5s ease-out 0.1s"));
    }

    #[test]
    fn hover_transition_not_overridden() {
        let html = render(|| {
            view! { <FeatureCard icon=icondata::LuBox title="Backend" description="Python" /> }
        });
        let card = opening_tag(&html, "feature-card ");
        assert!(card.contains("transition-all duration-500"));
        assert!(!card.contains("style="));
    }
}
