use super::notebooks::MaterialBadges;
use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    Separator, TabsList, TabsTrigger,
};
use crate::state::AppContext;
use crate::study::fixtures::{MATERIAL_SOURCE, MATERIAL_TITLE, NOTES_KEY_POINTS, NOTES_SECTIONS, NOTES_SUMMARY};
use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum NotesTab {
    Notes,
    KeyPoints,
    Summary,
    Materials,
}

impl NotesTab {
    const ALL: [NotesTab; 4] = [Self::Notes, Self::KeyPoints, Self::Summary, Self::Materials];

    fn label(&self) -> &'static str {
        match self {
            Self::Notes => "Smart Notes",
            Self::KeyPoints => "Key Points",
            Self::Summary => "Summary",
            Self::Materials => "Materials",
        }
    }
}

#[component]
pub fn SmartNotesPage() -> impl IntoView {
    let notebooks = expect_context::<AppContext>().0.notebooks;
    let tab: RwSignal<NotesTab> = RwSignal::new(NotesTab::Notes);

    let on_print = move |_| {
        let _ = window().print();
    };

    view! {
        <div class="mx-auto max-w-4xl space-y-6">
            <div class="space-y-2">
                <h1 class="text-3xl font-bold tracking-tight">{MATERIAL_TITLE}</h1>
                <p class="text-muted-foreground">
                    {format!("AI-generated notes from {MATERIAL_SOURCE} to help you understand the material")}
                </p>
            </div>

            <Button variant=ButtonVariant::Outline size=ButtonSize::Sm on:click=on_print>
                "Print"
            </Button>

            <TabsList>
                {NotesTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <TabsTrigger active=Signal::derive(move || tab.get() == t) on:click=move |_| tab.set(t)>
                                {t.label()}
                            </TabsTrigger>
                        }
                    })
                    .collect_view()}
            </TabsList>

            {move || match tab.get() {
                NotesTab::Notes => view! {
                    <Card>
                        <CardContent class="space-y-6">
                            <p class="text-lg font-medium">{NOTES_SUMMARY}</p>
                            <Separator class="my-4" />
                            {NOTES_SECTIONS
                                .iter()
                                .map(|s| view! {
                                    <div class="mb-6">
                                        <h3 class="mb-2 text-xl font-semibold">{s.title}</h3>
                                        <p>{s.content}</p>
                                    </div>
                                })
                                .collect_view()}
                        </CardContent>
                    </Card>
                }
                .into_any(),
                NotesTab::KeyPoints => view! {
                    <Card>
                        <CardContent>
                            <ul class="space-y-3">
                                {NOTES_KEY_POINTS
                                    .iter()
                                    .enumerate()
                                    .map(|(i, point)| view! {
                                        <li class="flex items-start gap-2">
                                            <div class="flex size-6 shrink-0 items-center justify-center rounded-full bg-primary text-sm text-primary-foreground">
                                                {i + 1}
                                            </div>
                                            <p>{*point}</p>
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        </CardContent>
                    </Card>
                }
                .into_any(),
                NotesTab::Summary => view! {
                    <Card>
                        <CardContent>
                            <p class="text-lg">{NOTES_SUMMARY}</p>
                        </CardContent>
                    </Card>
                }
                .into_any(),
                NotesTab::Materials => view! {
                    <Card>
                        <CardHeader>
                            <CardTitle>
                                {move || notebooks
                                    .active_notebook()
                                    .map(|nb| nb.name)
                                    .unwrap_or_else(|| "No notebook selected".to_string())}
                            </CardTitle>
                            <CardDescription>"Everything saved in this notebook, oldest first."</CardDescription>
                        </CardHeader>
                        <CardContent>
                            {move || {
                                let materials = notebooks
                                    .active_notebook()
                                    .map(|nb| nb.materials)
                                    .unwrap_or_default();
                                view! { <MaterialBadges materials=materials /> }
                            }}
                        </CardContent>
                    </Card>
                }
                .into_any(),
            }}
        </div>
    }
}
