use leptos::prelude::*;
use tw_merge::tw_merge;

/// Horizontal bar filled to `value` percent (clamped to 0..=100).
#[component]
pub fn Progress(
    #[prop(into)] value: Signal<f64>,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "relative h-2 w-full overflow-hidden rounded-full bg-primary/20",
        class
    );
    let width = move || format!("width: {}%", value.get().clamp(0.0, 100.0));

    view! {
        <div
            data-name="Progress"
            class=merged_class
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || value.get().round().to_string()
        >
            <div class="h-full bg-primary transition-all" style=width />
        </div>
    }
}
