use crate::components::ui::{
    Alert, AlertDescription, AlertTitle, AlertVariant, Badge, BadgeVariant, Button, ButtonSize, Card,
    CardContent, CardDescription, CardHeader, CardTitle, Input, Spinner,
};
use crate::models::{Material, Notebook};
use crate::routing::AppRoute;
use crate::state::AppContext;
use crate::util::format_timestamp;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

/// Name field plus submit; the new notebook becomes active on success.
#[component]
pub fn CreateNotebookForm() -> impl IntoView {
    let name: RwSignal<String> = RwSignal::new(String::new());
    let creating: RwSignal<bool> = RwSignal::new(false);
    let error: RwSignal<Option<String>> = RwSignal::new(None);

    let app = expect_context::<AppContext>().0;

    let can_submit = move || !creating.get() && !name.get().trim().is_empty();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if creating.get_untracked() {
            return;
        }
        let name_val = name.get_untracked();
        if name_val.trim().is_empty() {
            return;
        }

        creating.set(true);
        error.set(None);

        let auth = app.auth();
        let notebooks = app.notebooks;
        let toasts = app.toasts;
        spawn_local(async move {
            match notebooks.create_notebook(auth, name_val).await {
                Ok(nb) => {
                    let _ = name.try_set(String::new());
                    toasts.success("Notebook created", nb.name);
                }
                Err(e) => {
                    let _ = error.try_set(Some(e.to_string()));
                    toasts.error("Could not create notebook", e.to_string());
                }
            }
            let _ = creating.try_set(false);
        });
    };

    view! {
        <form class="flex max-w-md flex-col gap-2" on:submit=on_submit>
            <div class="flex items-center gap-2">
                <Input
                    id="notebook-name"
                    placeholder="Enter notebook name"
                    bind_value=name
                    disabled=Signal::derive(move || creating.get())
                    class="h-9 text-sm"
                />
                <Button attr:r#type="submit" attr:disabled=move || !can_submit()>
                    <Show when=move || creating.get() fallback=|| ().into_view()>
                        <Spinner />
                    </Show>
                    "Create Notebook"
                </Button>
            </div>

            {move || {
                error.get().map(|e| {
                    view! {
                        <Alert variant=AlertVariant::Destructive>
                            <AlertTitle>"Could not create notebook"</AlertTitle>
                            <AlertDescription class="text-xs">{e}</AlertDescription>
                        </Alert>
                    }
                })
            }}
        </form>
    }
}

#[component]
pub fn MaterialBadges(materials: Vec<Material>) -> impl IntoView {
    if materials.is_empty() {
        return view! { <Badge variant=BadgeVariant::Outline>"No learning materials yet"</Badge> }
            .into_any();
    }

    view! {
        <div class="flex flex-wrap gap-2">
            {materials
                .into_iter()
                .map(|m| {
                    view! {
                        <Badge variant=BadgeVariant::Secondary attr:title=m.kind.label()>
                            <span class="uppercase text-[10px] opacity-70">{m.kind.as_ref().to_string()}</span>
                            <span>{m.name}</span>
                        </Badge>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

#[component]
fn NotebookCard(notebook: Notebook) -> impl IntoView {
    let app = expect_context::<AppContext>().0;
    let navigate = StoredValue::new(use_navigate());

    let id = notebook.id.clone();
    let on_open = move |_| {
        app.notebooks.set_active_notebook(Some(id.clone()));
        navigate.with_value(|nav| nav(AppRoute::HOME.path(), Default::default()));
    };

    view! {
        <Card>
            <CardHeader class="w-full sm:flex sm:flex-row sm:items-center sm:justify-between">
                <div class="min-w-0 space-y-1.5">
                    <CardTitle class="truncate">{notebook.name}</CardTitle>
                    <CardDescription class="text-xs">
                        "Last accessed: " {format_timestamp(&notebook.last_accessed)}
                    </CardDescription>
                </div>
                <Button size=ButtonSize::Sm on:click=on_open>"Open"</Button>
            </CardHeader>
            <CardContent>
                <MaterialBadges materials=notebook.materials />
            </CardContent>
        </Card>
    }
}

/// Picker shown while the signed-in user has no notebook.
#[component]
pub fn NotebooksPage() -> impl IntoView {
    let app = expect_context::<AppContext>().0;
    let notebooks = app.notebooks;

    view! {
        <div class="min-h-screen bg-background">
            <div class="mx-auto max-w-3xl space-y-8 px-4 pt-16 sm:pt-24">
                <div class="space-y-2">
                    <h1 class="text-3xl font-bold">"Notebooks"</h1>
                    <p class="text-muted-foreground">
                        "Create a notebook to organize your learning. Each notebook holds your uploaded PDFs, useful links and notes."
                    </p>
                </div>

                <CreateNotebookForm />

                <div class="space-y-4">
                    <Show when=move || notebooks.is_loading()>
                        <div class="flex items-center gap-2 text-sm text-muted-foreground">
                            <Spinner />
                            "Refreshing notebooks..."
                        </div>
                    </Show>
                    <Show
                        when=move || !notebooks.notebooks().is_empty()
                        fallback=|| view! {
                            <p class="text-muted-foreground">"No notebooks yet. Create your first notebook above!"</p>
                        }
                    >
                        <For
                            each=move || notebooks.notebooks()
                            key=|nb: &Notebook| (nb.id.clone(), nb.materials.len(), nb.last_accessed.clone())
                            children=|nb: Notebook| view! { <NotebookCard notebook=nb /> }
                        />
                    </Show>
                </div>
            </div>
        </div>
    }
}
