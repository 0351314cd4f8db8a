use crate::components::ui::{Button, ButtonSize, ButtonVariant, Separator, SeparatorOrientation};
use crate::routing::AppRoute;
use crate::state::AppContext;
use crate::storage::save_sidebar_collapsed;
use crate::util::initials;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dom::helpers::window_event_listener;
use leptos_router::hooks::use_location;
use wasm_bindgen::JsCast;

/// Sidebar navigation and header around every signed-in page.
#[component]
pub fn AppShell(children: ChildrenFn) -> impl IntoView {
    let app = expect_context::<AppContext>().0;
    let sidebar_collapsed = app.sidebar_collapsed;
    let location = use_location();
    let pathname = move || location.pathname.get();

    let signing_out: RwSignal<bool> = RwSignal::new(false);

    let toggle_sidebar = move || {
        sidebar_collapsed.update(|c| *c = !*c);
        save_sidebar_collapsed(sidebar_collapsed.get_untracked());
    };
    let on_toggle_sidebar = move |_| toggle_sidebar();

    // Cmd/Ctrl+B toggles the sidebar, except while typing.
    let key_handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        let typing = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .map(|el| matches!(el.tag_name().to_lowercase().as_str(), "input" | "textarea"))
            .unwrap_or(false);
        if typing {
            return;
        }
        if (ev.meta_key() || ev.ctrl_key()) && ev.key().to_lowercase() == "b" {
            ev.prevent_default();
            toggle_sidebar();
        }
    });
    on_cleanup(move || key_handle.remove());

    // The guard sends the visitor to sign-in once the session is gone.
    let on_sign_out = move |_| {
        if signing_out.get_untracked() {
            return;
        }
        signing_out.set(true);
        let auth = app.auth();
        spawn_local(async move {
            auth.sign_out().await;
            let _ = signing_out.try_set(false);
        });
    };

    let email = move || {
        app.session
            .user()
            .and_then(|u| u.email)
            .unwrap_or_default()
    };
    let active_name = move || app.notebooks.active_notebook().map(|nb| nb.name);

    let sidebar_width_class = move || {
        if sidebar_collapsed.get() {
            "w-14"
        } else {
            "w-64"
        }
    };

    let children = StoredValue::new(children);

    view! {
        <div class="flex min-h-screen bg-background text-foreground">
            <aside class=move || format!("{} shrink-0 border-r", sidebar_width_class())>
                <div class="sticky top-0 space-y-4 py-4">
                    <div class="flex items-center justify-between px-3">
                        <a href=AppRoute::HOME.path() class="text-lg font-semibold tracking-tight">
                            <Show when=move || !sidebar_collapsed.get() fallback=|| view! { "L" }>
                                "LearnAI"
                            </Show>
                        </a>
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Icon
                            on:click=on_toggle_sidebar
                            attr:title="Toggle sidebar (Ctrl+B)"
                            class="h-8 w-8"
                        >
                            <span class="text-xs text-muted-foreground">
                                {move || if sidebar_collapsed.get() { ">" } else { "<" }}
                            </span>
                        </Button>
                    </div>
                    <Separator />
                    <nav class="space-y-1 px-2" aria-label="Main">
                        {AppRoute::nav_items()
                            .map(|route| {
                                let is_current = move || AppRoute::from_path(&pathname()) == Some(route);
                                view! {
                                    <a
                                        href=route.path()
                                        aria-current=move || if is_current() { Some("page") } else { None }
                                        class=move || {
                                            format!(
                                                "flex h-8 w-full items-center rounded-md px-3 text-sm {}",
                                                if is_current() {
                                                    "bg-secondary font-medium text-secondary-foreground"
                                                } else {
                                                    "text-muted-foreground hover:bg-accent hover:text-accent-foreground"
                                                },
                                            )
                                        }
                                        title=route.label()
                                    >
                                        {move || {
                                            if sidebar_collapsed.get() {
                                                route.label().chars().next().unwrap_or('?').to_string()
                                            } else {
                                                route.label().to_string()
                                            }
                                        }}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                </div>
            </aside>

            <div class="flex min-w-0 flex-1 flex-col">
                <header class="flex h-16 items-center gap-4 border-b px-4 sm:px-6">
                    <div class="min-w-0 truncate text-sm">
                        <span class="text-muted-foreground">"Notebook: "</span>
                        <span class="font-medium">
                            {move || active_name().unwrap_or_else(|| "None selected".to_string())}
                        </span>
                    </div>
                    <div class="ml-auto flex items-center gap-3">
                        <Separator orientation=SeparatorOrientation::Vertical class="h-6" />
                        <div class="flex size-8 items-center justify-center rounded-full bg-primary text-xs font-semibold text-primary-foreground">
                            {move || initials(&email())}
                        </div>
                        <span class="hidden text-sm md:inline">{email}</span>
                        <Button
                            variant=ButtonVariant::Outline
                            size=ButtonSize::Sm
                            attr:disabled=move || signing_out.get()
                            on:click=on_sign_out
                        >
                            "Sign out"
                        </Button>
                    </div>
                </header>
                <main class="flex-1 p-6">
                    {move || children.with_value(|c| c())}
                </main>
            </div>
        </div>
    }
}
