use crate::components::ui::Progress;
use crate::study::stats::bar_percent;
use leptos::prelude::*;

/// Labelled horizontal bars scaled against the largest value.
#[component]
pub fn BarList(
    /// `(label, value, rendered value)`
    rows: Vec<(String, f64, String)>,
    #[prop(optional)] max: Option<f64>,
) -> impl IntoView {
    let max = max.unwrap_or_else(|| rows.iter().map(|r| r.1).fold(0.0, f64::max));

    view! {
        <div class="space-y-3">
            {rows
                .into_iter()
                .map(|(label, value, shown)| {
                    view! {
                        <div class="space-y-1">
                            <div class="flex justify-between text-sm">
                                <span>{label}</span>
                                <span class="text-muted-foreground">{shown}</span>
                            </div>
                            <Progress value=bar_percent(value, max) />
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
