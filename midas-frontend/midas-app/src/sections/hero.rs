use icondata as i;
use leptos::prelude::*;

use crate::components::cta_button::{CtaButton, Variant};
use crate::content::anchor;
use crate::motion::{timing, use_mount_motion, Loop};

/// Full viewport opener. Everything enters once on load in a fixed stagger,
/// only the scroll hint keeps moving.
#[component]
pub fn Hero() -> impl IntoView {
    let entered = use_mount_motion();

    view! {
        <section class="relative z-10 min-h-screen flex flex-col justify-center items-center text-center px-6 pt-20 overflow-hidden">
            <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-[800px] h-[800px] bg-amber-500/5 rounded-full blur-3xl pointer-events-none" />

            <div class="mb-8" style=move || timing::HERO_BADGE.style(entered.get())>
                <span class="px-4 py-1.5 border border-amber-500/30 bg-amber-500/10 text-amber-400 text-[10px] font-mono tracking-[0.3em] uppercase backdrop-blur-md">
                    "Midas Architecture v.2.0.4"
                </span>
            </div>

            <div style=move || timing::HERO_HEADLINE.style(entered.get())>
                <h1 class="text-5xl md:text-8xl font-black text-white mb-8 tracking-tighter leading-none">
                    "ARQUITECTURA" <br />
                    <span class="text-transparent bg-clip-text bg-gradient-to-r from-amber-400 via-yellow-200 to-amber-600 drop-shadow-2xl">
                        "MODULAR"
                    </span>
                </h1>
            </div>

            <div
                class="max-w-3xl text-slate-400 text-lg md:text-xl mb-12 leading-relaxed font-light"
                style=move || timing::HERO_COPY.style(entered.get())
            >
                <p>
                    "Desarrollo Web "
                    <span class="text-slate-200 font-medium">"Full Stack"</span>
                    ". Conexión real entre lógica de negocios y experiencia UX/UI. Especialistas en arquitecturas de monolitos modulares, Python, Node.js y React."
                </p>
            </div>

            <div
                class="flex flex-col sm:flex-row gap-6 w-full sm:w-auto"
                style=move || timing::HERO_ACTIONS.style(entered.get())
            >
                <CtaButton href=format!("#{}", anchor::CONTACT) icon=i::LuArrowRight>
                    "Iniciar Proyecto"
                </CtaButton>
                <CtaButton
                    href=format!("#{}", anchor::GAMING)
                    variant=Variant::Secondary
                    icon=i::LuGamepad2
                >
                    "División Gaming"
                </CtaButton>
            </div>

            <div
                class="absolute bottom-10 left-1/2 -translate-x-1/2 flex flex-col items-center gap-2 text-slate-600 opacity-50"
                style=Loop::SCROLL_HINT.style()
            >
                <span class="text-[10px] uppercase tracking-widest font-mono">"Scroll Down"</span>
                <div class="w-px h-12 bg-gradient-to-b from-slate-600 to-transparent" />
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod test {
    use super::*;
    use crate::test_util::render;

    #[test]
    fn call_to_actions() {
        let html = render(|| view! { <Hero /> });
        assert!(html.contains(r##"href="#contact""##));
        assert!(html.contains(r##"href="#gaming""##));
        assert!(html.contains("Iniciar Proyecto"));
        assert!(html.contains("MODULAR"));
        assert!(html.contains("midas-bob"));
    }

    #[test]
    fn ships_initial_pose() {
        let html = render(|| view! { <Hero /> });
        assert!(html.contains(&timing::HERO_BADGE.style(false)));
        assert!(html.contains(&timing::HERO_ACTIONS.style(false)));
    }
}
