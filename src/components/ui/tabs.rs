use leptos::prelude::*;
use leptos_ui::clx;
use tw_merge::tw_merge;

mod components {
    use super::*;
    clx! {TabsList, div, "bg-muted text-muted-foreground inline-flex h-9 w-fit items-center justify-center rounded-lg p-[3px]"}
}

pub use components::*;

/// One segment of a `TabsList`. Click handling is left to the caller.
#[component]
pub fn TabsTrigger(
    #[prop(into)] active: Signal<bool>,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let base = tw_merge!(
        "inline-flex h-[calc(100%-1px)] flex-1 items-center justify-center gap-1.5 rounded-md px-3 py-1 text-sm font-medium whitespace-nowrap transition-[color,box-shadow] hover:cursor-pointer data-[state=active]:bg-background data-[state=active]:text-foreground data-[state=active]:shadow-sm",
        class
    );

    view! {
        <button
            type="button"
            role="tab"
            class=base
            aria-selected=move || active.get().to_string()
            data-state=move || if active.get() { "active" } else { "inactive" }
        >
            {children()}
        </button>
    }
}
