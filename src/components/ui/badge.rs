use leptos::prelude::*;
use tw_merge::*;

#[component]
pub fn Badge(
    #[prop(optional)] variant: BadgeVariant,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let class = BadgeClass { variant }.with_class(class);

    view! {
        <span data-name="Badge" class=class>
            {children()}
        </span>
    }
}

#[derive(TwClass, Default)]
#[tw(class = "inline-flex items-center gap-1 rounded-md border px-2 py-0.5 text-xs font-medium whitespace-nowrap [&>svg]:size-3")]
pub struct BadgeClass {
    variant: BadgeVariant,
}

#[derive(TwVariant)]
pub enum BadgeVariant {
    #[tw(default, class = "border-transparent bg-primary text-primary-foreground")]
    Default,
    #[tw(class = "border-transparent bg-secondary text-secondary-foreground")]
    Secondary,
    #[tw(class = "text-foreground")]
    Outline,
    #[tw(class = "border-transparent bg-green-100 text-green-800")]
    Strong,
    #[tw(class = "border-transparent bg-yellow-100 text-yellow-800")]
    Moderate,
    #[tw(class = "border-transparent bg-red-100 text-red-800")]
    Weak,
}
