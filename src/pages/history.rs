use crate::components::ui::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent, Input,
};
use crate::routing::AppRoute;
use crate::study::history::{filter_history, sample_history, ActivityKind, HistoryItem};
use crate::util::format_timestamp;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use strum::IntoEnumIterator;
use wasm_bindgen::JsCast;

const ALL_KINDS: &str = "all";

/// Value of the type `<select>` for the current filter.
fn filter_value(kind: Option<ActivityKind>) -> String {
    kind.map_or(ALL_KINDS.to_string(), |k| k.as_ref().to_string())
}

fn activity_route(kind: ActivityKind) -> AppRoute {
    match kind {
        ActivityKind::Notes => AppRoute::SmartNotes,
        ActivityKind::Chat => AppRoute::Chat,
        ActivityKind::Quiz => AppRoute::Quiz,
        ActivityKind::Flashcards => AppRoute::Flashcards,
        ActivityKind::MindMap => AppRoute::MindMap,
    }
}

#[component]
pub fn HistoryPage() -> impl IntoView {
    let items: RwSignal<Vec<HistoryItem>> = RwSignal::new(sample_history());
    let query: RwSignal<String> = RwSignal::new(String::new());
    let kind: RwSignal<Option<ActivityKind>> = RwSignal::new(None);
    let navigate = StoredValue::new(use_navigate());

    let filtered = Memo::new(move |_| {
        let q = query.get();
        let k = kind.get();
        items.with(|all| filter_history(all, &q, k))
    });

    let on_kind_change = move |ev: web_sys::Event| {
        let Some(select) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
        else {
            return;
        };
        // "all" fails to parse and clears the filter.
        kind.set(select.value().parse::<ActivityKind>().ok());
    };

    let clear_filters = move |_| {
        query.set(String::new());
        kind.set(None);
    };

    view! {
        <div class="space-y-6">
            <div class="space-y-2">
                <h1 class="text-3xl font-bold tracking-tight">"History"</h1>
                <p class="text-muted-foreground">"Revisit your past study sessions"</p>
            </div>

            <div class="flex flex-col gap-3 sm:flex-row">
                <Input placeholder="Search history..." class="sm:max-w-sm" bind_value=query />
                <select
                    class="h-9 rounded-md border border-input bg-transparent px-3 text-sm shadow-xs"
                    prop:value=move || filter_value(kind.get())
                    on:change=on_kind_change
                >
                    <option value=ALL_KINDS>"All Activities"</option>
                    {ActivityKind::iter()
                        .map(|k| view! { <option value=k.as_ref().to_string()>{k.filter_label()}</option> })
                        .collect_view()}
                </select>
            </div>

            <Show
                when=move || !filtered.with(|f| f.is_empty())
                fallback=move || view! {
                    <Card>
                        <CardContent class="flex flex-col items-center gap-3 py-12 text-center">
                            <p class="font-medium">"No activities found"</p>
                            <p class="text-sm text-muted-foreground">"Try a different search term or filter."</p>
                            <Button variant=ButtonVariant::Outline size=ButtonSize::Sm on:click=clear_filters>
                                "Clear search"
                            </Button>
                        </CardContent>
                    </Card>
                }
            >
                <div class="space-y-3">
                    <For each=move || filtered.get() key=|item| item.id let:item>
                        {
                            let id = item.id;
                            let route = activity_route(item.kind);
                            view! {
                                <Card>
                                    <CardContent class="flex items-start justify-between gap-4 p-4">
                                        <div class="min-w-0 space-y-1">
                                            <div class="flex items-center gap-2">
                                                <h3 class="truncate font-medium">{item.title}</h3>
                                                <Badge variant=BadgeVariant::Secondary>{item.kind.filter_label()}</Badge>
                                            </div>
                                            <p class="text-xs text-muted-foreground">{format_timestamp(item.date)}</p>
                                            <p class="text-sm text-muted-foreground">{item.preview}</p>
                                        </div>
                                        <div class="flex shrink-0 gap-2">
                                            <Button
                                                variant=ButtonVariant::Outline
                                                size=ButtonSize::Sm
                                                on:click=move |_| navigate.with_value(|nav| nav(route.path(), Default::default()))
                                            >
                                                "Open"
                                            </Button>
                                            <Button
                                                variant=ButtonVariant::Ghost
                                                size=ButtonSize::Sm
                                                on:click=move |_| items.update(|all| all.retain(|i| i.id != id))
                                            >
                                                "Delete"
                                            </Button>
                                        </div>
                                    </CardContent>
                                </Card>
                            }
                        }
                    </For>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_value_roundtrips_through_parse() {
        assert_eq!(filter_value(None), "all");
        assert!(filter_value(None).parse::<ActivityKind>().is_err());
        for k in ActivityKind::iter() {
            assert_eq!(filter_value(Some(k)).parse::<ActivityKind>().ok(), Some(k));
        }
        assert_eq!(filter_value(Some(ActivityKind::MindMap)), "mindmap");
    }

    #[test]
    fn test_every_activity_opens_a_signed_in_page() {
        for k in ActivityKind::iter() {
            assert!(activity_route(k).is_authenticated_page());
        }
    }
}
