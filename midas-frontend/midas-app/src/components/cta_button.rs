use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::motion::{Gesture, PointerTracker};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Solid amber fill.
    #[default]
    Primary,
    /// Outlined, transparent fill.
    Secondary,
}

impl Variant {
    pub fn class(self) -> &'static str {
        match self {
            Variant::Primary => {
                "bg-amber-500 text-slate-950 border-amber-700 hover:bg-amber-400 hover:border-amber-600"
            }
            Variant::Secondary => {
                "text-slate-300 border-slate-700 hover:border-amber-500 hover:text-amber-400 bg-slate-900/50"
            }
        }
    }
}

/// Link styled as a button, with pointer feedback and a shine sweep on hover.
#[component]
pub fn CtaButton(
    #[prop(into)] href: String,
    #[prop(optional)] icon: Option<icondata_core::Icon>,
    #[prop(optional)] variant: Variant,
    children: Children,
) -> impl IntoView {
    let pointer = PointerTracker::new();
    let gesture = Gesture::BUTTON;

    view! {
        <span
            class="cta-gesture inline-flex"
            style=move || gesture.style(pointer.state.get())
            on:pointerenter=move |_| pointer.enter()
            on:pointerleave=move |_| pointer.leave()
            on:pointerdown=move |_| pointer.press()
            on:pointerup=move |_| pointer.release()
        >
            <a
                href=href
                class=format!(
                    "cta inline-flex items-center justify-center gap-3 px-8 py-4 w-full font-bold tracking-widest text-xs uppercase border-r-4 border-b-4 transition-colors group relative overflow-hidden {}",
                    variant.class(),
                )
            >
                <span class="relative z-10 flex items-center gap-2">
                    {children()} {icon.map(|icon| view! { <Icon icon=icon size="14" /> })}
                </span>
                // shine
                <div class="absolute inset-0 -translate-x-full group-hover:translate-x-full bg-gradient-to-r from-transparent via-white/20 to-transparent transition-transform duration-700 ease-in-out" />
            </a>
        </span>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod test {
    use super::*;
    use crate::content::DISCORD_URL;
    use crate::test_util::{opening_tag, render};

    #[test]
    fn links_to_configured_url() {
        let html = render(|| {
            view! {
                <CtaButton href=DISCORD_URL icon=icondata::LuDisc>
                    "Unirse al Discord"
                </CtaButton>
            }
        });
        assert!(html.contains(r#"href="https://discord.gg/midasnetwork""#));
        assert!(html.contains("Unirse al Discord"));
        assert!(html.contains("bg-amber-500"));
        assert!(html.contains("<svg"));
    }

    #[test]
    fn secondary_variant_is_outlined() {
        let html = render(|| {
            view! {
                <CtaButton href="#gaming" variant=Variant::Secondary>
                    "División Gaming"
                </CtaButton>
            }
        });
        assert!(html.contains(r##"href="#gaming""##));
        assert!(html.contains("bg-slate-900/50"));
        assert!(!html.contains("bg-amber-500 "));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn press_feedback_sits_outside_the_link() {
        let html = render(|| view! { <CtaButton href="/">"Volver"</CtaButton> });
        let gesture = opening_tag(&html, "cta-gesture ");
        assert!(gesture.contains("transform: translate(0px, 0px) scale(1)"));
        let link = opening_tag(&html, r#"class="cta "#);
        assert!(link.contains("transition-colors"));
        assert!(!link.contains("style="));
    }
}
