use leptos::prelude::*;
use leptos_ui::clx;
use tw_merge::*;

#[component]
pub fn Alert(
    #[prop(optional)] variant: AlertVariant,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let class = AlertClass { variant }.with_class(class);

    view! {
        <div data-name="Alert" role="alert" class=class>
            {children()}
        </div>
    }
}

mod components {
    use super::*;
    clx! {AlertTitle, h4, "mb-1 font-medium tracking-tight leading-none"}
    clx! {AlertDescription, p, "text-sm [&_p]:leading-relaxed"}
}

pub use components::*;

#[derive(TwClass, Default)]
#[tw(class = "relative w-full rounded-lg border px-4 py-3 text-sm")]
pub struct AlertClass {
    variant: AlertVariant,
}

#[derive(TwVariant)]
pub enum AlertVariant {
    #[tw(default, class = "bg-card text-card-foreground")]
    Default,
    #[tw(class = "border-destructive/30 text-destructive [&_p]:text-destructive")]
    Destructive,
}
