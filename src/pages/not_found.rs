use crate::routing::AppRoute;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex min-h-[60vh] flex-col items-center justify-center gap-4 text-center">
            <h1 class="text-4xl font-bold">"404"</h1>
            <p class="text-xl text-muted-foreground">"Oops! Page not found"</p>
            <a href=AppRoute::HOME.path() class="text-primary underline-offset-4 hover:underline">
                "Return to Home"
            </a>
        </div>
    }
}
