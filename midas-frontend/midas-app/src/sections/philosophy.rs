use icondata as i;
use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::content::anchor;

#[component]
pub fn Philosophy() -> impl IntoView {
    view! {
        <section
            class="relative z-10 py-24 px-6 border-y border-slate-900 bg-slate-900/20"
            id=anchor::PHILOSOPHY
        >
            <div class="max-w-4xl mx-auto text-center">
                <div class="mb-6 inline-flex items-center justify-center p-3 bg-slate-800 rounded-full border border-slate-700 text-amber-500">
                    <Icon icon=i::LuCpu size="32" />
                </div>
                <h2 class="text-3xl md:text-5xl font-bold text-white mb-8">
                    "\"MIENTRAS JUGAMOS, " <br class="hidden md:block" />
                    <span class="text-slate-500">"TAMBIÉN CREAMOS.\""</span>
                </h2>
                <p class="text-slate-400 text-lg leading-relaxed">
                    "Creemos que la curiosidad lúdica es el motor de la innovación seria. Nuestros servidores de juego no son solo entretenimiento; son"
                    <span class="text-amber-400 font-medium">
                        " entornos de prueba de alta latencia"
                    </span>
                    " donde perfeccionamos nuestra capacidad para manejar comunidades, bases de datos en tiempo real y optimización de recursos."
                </p>
            </div>
        </section>
    }
}
