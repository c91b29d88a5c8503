use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
}

impl Align {
    fn text(self) -> &'static str {
        match self {
            Align::Left => "text-left",
            Align::Center => "text-center",
        }
    }

    fn justify(self) -> &'static str {
        match self {
            Align::Left => "justify-start",
            Align::Center => "justify-center",
        }
    }

    fn rule(self) -> &'static str {
        match self {
            Align::Left => "",
            Align::Center => "mx-auto",
        }
    }
}

/// Label, title and the amber rule that open every content section.
#[component]
pub fn SectionHeader(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    #[prop(optional)] align: Align,
) -> impl IntoView {
    view! {
        <div class=format!("mb-16 {}", align.text())>
            <div class=format!("flex items-center gap-3 mb-2 {}", align.justify())>
                <div class="w-2 h-2 bg-amber-500 rounded-sm animate-pulse" />
                <span class="font-mono text-xs text-amber-500 tracking-widest uppercase">
                    {subtitle}
                </span>
            </div>
            <h2 class="text-3xl md:text-5xl font-bold text-white tracking-tight">{title}</h2>
            <div class=format!(
                "h-px w-24 bg-gradient-to-r from-amber-500 to-transparent mt-4 {}",
                align.rule(),
            ) />
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod test {
    use super::*;
    use crate::test_util::render;

    #[test]
    fn centered_header() {
        let html = render(|| {
            view! { <SectionHeader title="PROYECTOS RECIENTES" subtitle="Deployment Log" align=Align::Center /> }
        });
        assert!(html.contains("PROYECTOS RECIENTES"));
        assert!(html.contains("Deployment Log"));
        assert!(html.contains("text-center"));
        assert!(html.contains("justify-center"));
        assert!(html.contains("mx-auto"));
    }

    #[test]
    fn left_is_default() {
        let html = render(|| view! { <SectionHeader title="" subtitle="" /> });
        assert!(html.contains("text-left"));
        assert!(html.contains("justify-start"));
        assert!(!html.contains("mx-auto"));
    }
}
