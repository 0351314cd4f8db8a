use super::notebooks::{CreateNotebookForm, MaterialBadges};
use crate::components::bars::BarList;
use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    Progress, TabsList, TabsTrigger,
};
use crate::models::{MaterialKind, Notebook};
use crate::state::AppContext;
use crate::study::stats::{
    average_score, total_hours, LEARNING_STREAK_DAYS, RECENT_ACTIVITY, SUBJECTS,
};
use crate::util::format_timestamp;
use leptos::prelude::*;
use strum::IntoEnumIterator;

#[derive(Clone, Copy, PartialEq, Eq)]
enum ChartTab {
    Hours,
    Scores,
}

#[component]
fn StatCard(title: &'static str, value: String, children: Children) -> impl IntoView {
    view! {
        <Card class="gap-2">
            <CardHeader class="pb-0">
                <CardTitle class="text-sm font-medium">{title}</CardTitle>
            </CardHeader>
            <CardContent>
                <div class="text-2xl font-bold">{value}</div>
                {children()}
            </CardContent>
        </Card>
    }
}

#[component]
fn ActiveNotebookCard() -> impl IntoView {
    let notebooks = expect_context::<AppContext>().0.notebooks;

    view! {
        {move || match notebooks.active_notebook() {
            None => view! {
                <Card>
                    <CardHeader>
                        <CardTitle>"No notebook selected"</CardTitle>
                        <CardDescription>"Pick one of your notebooks below."</CardDescription>
                    </CardHeader>
                </Card>
            }
            .into_any(),
            Some(nb) => {
                let counts = MaterialKind::iter()
                    .map(|k| format!("{} {}", nb.count_materials(k), k.label()))
                    .collect::<Vec<_>>()
                    .join(" · ");
                view! {
                    <Card>
                        <CardHeader>
                            <CardTitle>{nb.name.clone()}</CardTitle>
                            <CardDescription>
                                {counts} " · last accessed " {format_timestamp(&nb.last_accessed)}
                            </CardDescription>
                        </CardHeader>
                        <CardContent>
                            <MaterialBadges materials=nb.materials.clone() />
                        </CardContent>
                    </Card>
                }
                .into_any()
            }
        }}
    }
}

#[component]
fn NotebookSwitcher() -> impl IntoView {
    let notebooks = expect_context::<AppContext>().0.notebooks;
    let active_id = move || notebooks.active_notebook().map(|nb| nb.id);

    view! {
        <Card>
            <CardHeader>
                <CardTitle class="text-base">"Your notebooks"</CardTitle>
                <CardDescription>"Switch notebooks or start a new one."</CardDescription>
            </CardHeader>
            <CardContent class="space-y-4">
                <div class="flex flex-wrap gap-2">
                    <For
                        each=move || notebooks.notebooks()
                        key=|nb: &Notebook| nb.id.clone()
                        children=move |nb: Notebook| {
                            let id = StoredValue::new(nb.id);
                            let name = StoredValue::new(nb.name);
                            move || {
                                let is_active = active_id().as_deref() == Some(id.get_value().as_str());
                                let variant = if is_active { ButtonVariant::Secondary } else { ButtonVariant::Outline };
                                view! {
                                    <Button
                                        size=ButtonSize::Sm
                                        variant=variant
                                        attr:aria-pressed=is_active.to_string()
                                        on:click=move |_| notebooks.set_active_notebook(Some(id.get_value()))
                                    >
                                        {name.get_value()}
                                    </Button>
                                }
                            }
                        }
                    />
                </div>
                <CreateNotebookForm />
            </CardContent>
        </Card>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let tab: RwSignal<ChartTab> = RwSignal::new(ChartTab::Hours);

    let total = total_hours(&SUBJECTS);
    let avg = average_score(&SUBJECTS);

    let hour_rows = SUBJECTS
        .iter()
        .map(|s| (s.name.to_string(), f64::from(s.hours), format!("{}h", s.hours)))
        .collect::<Vec<_>>();
    let score_rows = SUBJECTS
        .iter()
        .map(|s| (s.name.to_string(), f64::from(s.quiz_score), format!("{}%", s.quiz_score)))
        .collect::<Vec<_>>();

    view! {
        <div class="space-y-6">
            <div class="space-y-2">
                <h2 class="text-3xl font-bold tracking-tight">"Dashboard"</h2>
                <p class="text-muted-foreground">"Welcome back! Here's an overview of your learning progress."</p>
            </div>

            <div class="grid gap-4 lg:grid-cols-2">
                <ActiveNotebookCard />
                <NotebookSwitcher />
            </div>

            <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-4">
                <StatCard title="Total Learning Time" value=format!("{total} hours")>
                    <p class="text-xs text-muted-foreground">"Across all subjects"</p>
                </StatCard>
                <StatCard title="Average Quiz Score" value=format!("{avg}%")>
                    <Progress value=f64::from(avg) class="mt-2" />
                </StatCard>
                <StatCard title="Active Subjects" value=SUBJECTS.len().to_string()>
                    <p class="text-xs text-muted-foreground">"Across various disciplines"</p>
                </StatCard>
                <StatCard title="Learning Streak" value=format!("{LEARNING_STREAK_DAYS} days")>
                    <p class="text-xs text-muted-foreground">"Keep it going!"</p>
                </StatCard>
            </div>

            <div class="space-y-4">
                <TabsList>
                    <TabsTrigger active=Signal::derive(move || tab.get() == ChartTab::Hours) on:click=move |_| tab.set(ChartTab::Hours)>
                        "Study Hours"
                    </TabsTrigger>
                    <TabsTrigger active=Signal::derive(move || tab.get() == ChartTab::Scores) on:click=move |_| tab.set(ChartTab::Scores)>
                        "Quiz Scores"
                    </TabsTrigger>
                </TabsList>
                <Card>
                    <CardHeader>
                        <CardTitle>
                            {move || if tab.get() == ChartTab::Hours { "Study Time by Subject" } else { "Quiz Performance" }}
                        </CardTitle>
                    </CardHeader>
                    <CardContent>
                        {move || match tab.get() {
                            ChartTab::Hours => view! { <BarList rows=hour_rows.clone() /> }.into_any(),
                            ChartTab::Scores => view! { <BarList rows=score_rows.clone() max=100.0 /> }.into_any(),
                        }}
                    </CardContent>
                </Card>
            </div>

            <Card>
                <CardHeader>
                    <CardTitle>"Recent Activity"</CardTitle>
                    <CardDescription>"Your latest learning activities"</CardDescription>
                </CardHeader>
                <CardContent>
                    <div class="space-y-4">
                        {RECENT_ACTIVITY
                            .iter()
                            .map(|a| {
                                let detail = match a.score {
                                    Some(score) => format!("{} • Score: {score}", a.kind.filter_label()),
                                    None => a.kind.filter_label().to_string(),
                                };
                                view! {
                                    <div class="flex items-center gap-4">
                                        <div class="flex-1 space-y-1">
                                            <p class="text-sm font-medium leading-none">{a.subject}</p>
                                            <p class="text-xs text-muted-foreground">{detail}</p>
                                        </div>
                                        <div class="text-xs text-muted-foreground">{a.when}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </CardContent>
            </Card>
        </div>
    }
}
