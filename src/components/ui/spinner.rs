use icons::Loader;
use leptos::prelude::*;
use tw_merge::tw_merge;

#[component]
pub fn Spinner(#[prop(into, optional)] class: String) -> impl IntoView {
    let merged_class = tw_merge!("size-4 animate-spin", class);

    view! { <Loader class=merged_class attr:role="status" attr:aria-label="Loading" /> }
}

/// Whole-viewport placeholder while the session or notebooks are still loading.
#[component]
pub fn LoadingScreen(#[prop(into, optional)] label: String) -> impl IntoView {
    view! {
        <div class="flex min-h-screen items-center justify-center bg-background">
            <div class="flex items-center gap-2 text-sm text-muted-foreground">
                <Spinner class="size-6" />
                {label}
            </div>
        </div>
    }
}
