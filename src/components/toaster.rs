use crate::state::AppContext;
use crate::toast::{Toast, ToastKind};
use leptos::prelude::*;

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Info => "border bg-card text-card-foreground",
        ToastKind::Success => "border-green-200 bg-green-50 text-green-900",
        ToastKind::Destructive => "border-destructive bg-destructive text-white",
    }
}

/// Fixed stack of the live toasts, newest at the bottom.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<AppContext>().0.toasts;

    view! {
        <div
            class="pointer-events-none fixed bottom-4 right-4 z-50 flex w-full max-w-sm flex-col gap-2"
            aria-live="polite"
        >
            <For
                each=move || toasts.items()
                key=|t: &Toast| t.id
                children=move |t: Toast| {
                    let id = t.id;
                    view! {
                        <div
                            role="status"
                            class=format!(
                                "pointer-events-auto rounded-lg border p-4 shadow-lg {}",
                                toast_class(t.kind),
                            )
                        >
                            <div class="flex items-start justify-between gap-3">
                                <div class="min-w-0">
                                    <div class="text-sm font-semibold">{t.title}</div>
                                    {t.description.map(|d| view! { <div class="mt-1 text-sm opacity-90">{d}</div> })}
                                </div>
                                <button
                                    type="button"
                                    class="text-xs opacity-70 hover:opacity-100"
                                    aria-label="Dismiss"
                                    on:click=move |_| toasts.dismiss(id)
                                >
                                    "✕"
                                </button>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
