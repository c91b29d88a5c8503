use leptos::prelude::*;
use leptos::svg;

/// Inline svg for an [`icondata`] glyph, drawn with the current text color.
#[component]
pub fn Icon(
    #[prop(into)] icon: Signal<icondata_core::Icon>,
    #[prop(into, optional)] class: MaybeProp<String>,
    /// Edge length, defaults to `1em`.
    #[prop(into, optional)]
    size: MaybeProp<String>,
    #[prop(into, optional)] stroke_width: MaybeProp<String>,
) -> impl IntoView {
    move || {
        let icon = icon.get();

        // InertElement wants a single top level node
        let mut data = String::with_capacity(icon.data.len() + 7);
        data.push_str("<g>");
        data.push_str(icon.data);
        data.push_str("</g>");

        let size = size.get().unwrap_or_else(|| "1em".to_string());
        svg::svg()
            .attr("class", class.get())
            .style(icon.style.map(str::to_string))
            .attr("x", icon.x)
            .attr("y", icon.y)
            .attr("width", size.clone())
            .attr("height", size)
            .attr("viewBox", icon.view_box)
            .attr("stroke-linecap", icon.stroke_linecap)
            .attr("stroke-linejoin", icon.stroke_linejoin)
            .attr(
                "stroke-width",
                stroke_width.get().or(icon.stroke_width.map(str::to_string)),
            )
            .attr("stroke", icon.stroke)
            .attr("fill", icon.fill.unwrap_or("currentColor"))
            .attr("aria-hidden", "true")
            .child(svg::InertElement::new(data))
    }
}
