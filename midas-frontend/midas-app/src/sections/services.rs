use leptos::prelude::*;

use crate::components::feature_card::FeatureCard;
use crate::components::section_header::SectionHeader;
use crate::content::{anchor, ServiceRecord};
use crate::motion::timing::FEATURE_CARD_STAGGER;

#[component]
pub fn Services(services: &'static [ServiceRecord]) -> impl IntoView {
    view! {
        <section class="relative z-10 py-32 px-6 bg-slate-950" id=anchor::SERVICES>
            <div class="max-w-7xl mx-auto">
                <SectionHeader title="CAPACIDADES TÉCNICAS" subtitle="Core Systems" />
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {services
                        .iter()
                        .enumerate()
                        .map(|(index, service)| {
                            view! {
                                <FeatureCard
                                    icon=service.icon
                                    title=service.title
                                    description=service.description
                                    delay=index as f32 * FEATURE_CARD_STAGGER
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod test {
    use super::*;
    use crate::content::SERVICES;
    use crate::test_util::render;

    #[test]
    fn one_card_per_service_in_order() {
        let html = render(|| view! { <Services services=SERVICES /> });
        assert_eq!(html.matches("feature-card ").count(), SERVICES.len());
        assert!(html.contains(r#"id="servicios""#));

        let mut last = 0;
        for service in SERVICES {
            let title = service.title.replace('&', "&amp;");
            let position = html[last..]
                .find(&title)
                .unwrap_or_else(|| panic!("{} missing or out of order", service.title));
            last += position;
            assert!(html[last..].contains(service.description));
        }
    }

    #[test]
    fn cards_are_staggered() {
        let html = render(|| view! { <Services services=SERVICES /> });
        assert!(html.contains("ease-out 0s,"));
        assert!(html.contains("ease-out 0.1s,"));
        assert!(html.contains("ease-out 0.2s,"));
    }
}
