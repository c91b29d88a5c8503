use icondata as i;
use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::components::section_header::{Align, SectionHeader};
use crate::content::{anchor, ProjectRecord};
use crate::motion::{Gesture, PointerTracker};

pub const IMAGE_PLACEHOLDER: &str = "[ IMAGE_PLACEHOLDER ]";

#[component]
pub fn Projects(projects: &'static [ProjectRecord]) -> impl IntoView {
    view! {
        <section
            class="relative z-10 py-32 px-6 bg-slate-950 border-t border-slate-900"
            id=anchor::PROJECTS
        >
            <div class="max-w-7xl mx-auto">
                <SectionHeader title="PROYECTOS RECIENTES" subtitle="Deployment Log" align=Align::Center />

                <div class="grid grid-cols-1 md:grid-cols-3 lg:grid-cols-4 gap-8 mt-12">
                    {projects
                        .iter()
                        .map(|project| view! { <ProjectCard project=*project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Card linking out to the project in a new tab.
#[component]
fn ProjectCard(project: ProjectRecord) -> impl IntoView {
    let pointer = PointerTracker::new();
    let gesture = Gesture::CARD_LIFT;

    view! {
        <div
            class="h-full"
            style=move || gesture.style(pointer.state.get())
            on:pointerenter=move |_| pointer.enter()
            on:pointerleave=move |_| pointer.leave()
        >
            <a
                href=project.preview_url
                target="_blank"
                rel="noopener noreferrer"
                class="project-card relative bg-slate-900 border border-slate-800 p-5 group overflow-hidden block h-full shadow-xl shadow-black/20 hover:shadow-2xl hover:shadow-black/40 hover:border-amber-500/30 transition-all duration-300"
            >
                {project
                    .featured
                    .then(|| {
                        view! {
                            <span class="absolute top-3 right-3 text-[9px] font-mono bg-amber-500 text-black px-2 py-1 rounded-sm tracking-widest">
                                "FEATURED"
                            </span>
                        }
                    })}

                <div class="absolute inset-0 opacity-0 group-hover:opacity-20 transition-opacity bg-[radial-gradient(circle_at_center,rgba(251,191,36,0.2),transparent_70%)]" />

                <div class="relative z-10">
                    <div class="flex justify-between items-start mb-4">
                        <div class="p-2 bg-slate-950 border border-slate-700 text-amber-500">
                            <Icon icon=i::LuCode size="18" />
                        </div>
                        <span class=format!(
                            "text-[10px] font-mono px-2 py-1 border {}",
                            project.status.badge_class(),
                        )>{project.status.label()}</span>
                    </div>

                    <h3 class="text-lg font-bold text-white mb-1">{project.name}</h3>
                    <p class="text-slate-500 text-[11px] font-mono mb-4">{project.tag}</p>

                    <div class="w-full h-32 bg-slate-950 border border-slate-800/50 rounded-sm overflow-hidden relative">
                        {match project.preview_image() {
                            Some(url) => {
                                view! {
                                    <img
                                        src=url
                                        alt=project.name
                                        class="w-full h-full object-cover opacity-70 group-hover:opacity-100 transition duration-500 group-hover:scale-105"
                                    />
                                    <div class="absolute inset-0 bg-black/30 backdrop-blur-sm opacity-0 group-hover:opacity-40 transition-all" />
                                }
                                    .into_any()
                            }
                            None => {
                                view! {
                                    <div class="flex items-center justify-center h-full text-slate-600 text-xs font-mono">
                                        {IMAGE_PLACEHOLDER}
                                    </div>
                                }
                                    .into_any()
                            }
                        }}
                    </div>
                </div>
            </a>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod test {
    use super::*;
    use crate::content::{ProjectStatus, PROJECTS};
    use crate::test_util::{opening_tag, render};

    fn card(project: ProjectRecord) -> String {
        render(move || view! { <ProjectCard project=project /> })
    }

    #[test]
    fn one_card_per_project() {
        let html = render(|| view! { <Projects projects=PROJECTS /> });
        assert_eq!(html.matches("project-card ").count(), PROJECTS.len());
        assert!(html.contains(r#"id="proyectos""#));
        assert_eq!(html.matches(IMAGE_PLACEHOLDER).count(), 3);
        assert!(!html.contains("FEATURED"));
    }

    #[test]
    fn deployed_badge_is_green() {
        let html = card(PROJECTS[3]);
        assert!(html.contains("text-green-400 border-green-900 bg-green-900/20"));
        assert!(html.contains("Deployed"));
        assert!(!html.contains("amber-900"));
    }

    #[test]
    fn in_progress_badge_is_amber() {
        let html = card(PROJECTS[0]);
        assert!(html.contains("text-amber-400 border-amber-900 bg-amber-900/20"));
        assert!(html.contains("In Progress"));
        assert!(!html.contains("green-900"));
    }

    #[test]
    fn preview_image_or_placeholder() {
        let deployed = card(PROJECTS[3]);
        assert!(deployed
            .contains(r#"src="https://image.thum.io/get/width/1600/https://euroworklatin.com""#));
        assert!(!deployed.contains(IMAGE_PLACEHOLDER));

        let gowla = card(PROJECTS[0]);
        assert!(gowla.contains(IMAGE_PLACEHOLDER));
        assert!(!gowla.contains("<img"));
    }

    #[test]
    fn opens_in_new_tab() {
        let html = card(PROJECTS[3]);
        assert!(html.contains(r#"href="https://euroworklatin.com""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
    }

    #[test]
    fn lift_sits_outside_the_card() {
        let html = card(PROJECTS[1]);
        let link = opening_tag(&html, "project-card ");
        assert!(link.contains("transition-all"));
        assert!(!link.contains("style="));
        assert!(html.contains(&Gesture::CARD_LIFT.style(crate::motion::PointerState::Idle)));
    }

    #[test]
    fn featured_badge() {
        let html = card(ProjectRecord {
            featured: true,
            status: ProjectStatus::Deployed,
            ..PROJECTS[0]
        });
        assert!(html.contains("FEATURED"));
    }
}
