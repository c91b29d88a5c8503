use chrono::Datelike;
use leptos::prelude::*;

use crate::content::{anchor, FooterColumn};

/// Calendar year in UTC.
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

pub fn copyright_line(year: i32) -> String {
    format!("© {year} Midas Network EU. All Rights Reserved.")
}

#[component]
pub fn Footer(columns: &'static [FooterColumn]) -> impl IntoView {
    // computed on the server and shipped with the page, hydration reuses it
    let year = SharedValue::new(current_year).into_inner();

    view! {
        <footer
            class="relative z-10 bg-slate-950 border-t border-slate-800 pt-20 pb-10 px-6"
            id=anchor::CONTACT
        >
            <div class="max-w-7xl mx-auto flex flex-col md:flex-row justify-between items-start gap-12">
                <div class="max-w-xs">
                    <h2 class="text-2xl font-bold text-white tracking-tight font-mono flex items-center gap-2">
                        <div class="w-3 h-3 bg-amber-500" />
                        "MIDAS NETWORK"
                    </h2>
                    <p class="text-slate-500 text-sm mt-4 font-light leading-relaxed">
                        "Arquitectura digital avanzada y experiencias interactivas. Diseñando el futuro, un nodo a la vez."
                    </p>
                </div>

                <div class="flex gap-12">
                    {columns
                        .iter()
                        .map(|column| {
                            view! {
                                <div class="flex flex-col gap-4">
                                    <h4 class="text-white font-bold text-xs tracking-widest uppercase mb-2">
                                        {column.heading}
                                    </h4>
                                    {column
                                        .links
                                        .iter()
                                        .map(|link| {
                                            view! {
                                                <a
                                                    href=link.href
                                                    class="text-slate-500 hover:text-amber-500 text-sm transition-colors"
                                                >
                                                    {link.label}
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="max-w-7xl mx-auto mt-20 pt-8 border-t border-slate-900 flex flex-col md:flex-row justify-between items-center text-slate-600 text-[10px] font-mono uppercase tracking-widest">
                <p>{copyright_line(year)}</p>
                <p>"System Status: Operational"</p>
            </div>
        </footer>
    }
}
