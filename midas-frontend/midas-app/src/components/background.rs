use leptos::prelude::*;

/// Fixed decorative layer painted behind the whole page.
#[component]
pub fn Background() -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-0 pointer-events-none bg-slate-950" aria-hidden="true">
            // grid
            <div class="absolute inset-0 bg-[linear-gradient(to_right,#1e293b_1px,transparent_1px),linear-gradient(to_bottom,#1e293b_1px,transparent_1px)] bg-[size:4rem_4rem] [mask-image:radial-gradient(ellipse_80%_50%_at_50%_0%,#000_70%,transparent_100%)] opacity-20" />
            <svg class="absolute top-0 left-0 w-full h-full opacity-10" xmlns="http://www.w3.org/2000/svg">
                <circle
                    cx="50%"
                    cy="50%"
                    r="40%"
                    fill="none"
                    stroke="#fbbf24"
                    stroke-width="0.5"
                    stroke-dasharray="4 8"
                />
                <circle cx="50%" cy="50%" r="25%" fill="none" stroke="#38bdf8" stroke-width="0.5" />
            </svg>
            // scanlines
            <div class="absolute inset-0 bg-[linear-gradient(to_bottom,rgba(255,255,255,0.02)_1px,transparent_1px)] bg-[size:100%_3px] pointer-events-none" />
        </div>
    }
}
