use crate::components::bars::BarList;
use crate::components::ui::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Separator,
};
use crate::state::AppContext;
use crate::study::stats::{ACHIEVEMENTS, PROFILE, SUBJECT_SHARES, WEEKLY_HOURS};
use crate::util::initials;
use leptos::prelude::*;

#[component]
fn StatTile(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="rounded-md border p-4 text-center">
            <div class="text-2xl font-bold">{value}</div>
            <div class="text-sm text-muted-foreground">{label}</div>
        </div>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let app = expect_context::<AppContext>().0;

    let email = move || {
        app.session
            .user()
            .and_then(|u| u.email)
            .unwrap_or_default()
    };

    let subject_rows: Vec<(String, f64, String)> = SUBJECT_SHARES
        .iter()
        .map(|s| {
            (
                s.name.to_string(),
                f64::from(s.percentage),
                format!("{}h ({}%)", s.hours, s.percentage),
            )
        })
        .collect();

    let weekly_rows: Vec<(String, f64, String)> = WEEKLY_HOURS
        .iter()
        .map(|d| (d.day.to_string(), d.hours, format!("{:.1}h", d.hours)))
        .collect();

    view! {
        <div class="space-y-6">
            <div class="space-y-2">
                <h1 class="text-3xl font-bold tracking-tight">"Profile"</h1>
                <p class="text-muted-foreground">"Your account and learning progress"</p>
            </div>

            <Card>
                <CardContent class="flex flex-col gap-6 p-6 sm:flex-row sm:items-center">
                    <div class="flex size-20 shrink-0 items-center justify-center rounded-full bg-primary text-2xl font-semibold text-primary-foreground">
                        {move || initials(&email())}
                    </div>
                    <div class="space-y-1">
                        <h2 class="text-xl font-semibold">{email}</h2>
                        <p class="text-sm text-muted-foreground">{format!("Member since {}", PROFILE.join_date)}</p>
                        <Badge variant=BadgeVariant::Secondary>
                            {format!("{} day learning streak", PROFILE.learning_streak_days)}
                        </Badge>
                    </div>
                </CardContent>
            </Card>

            <div class="grid grid-cols-2 gap-4 md:grid-cols-4">
                <StatTile label="Learning hours" value=PROFILE.total_hours.to_string() />
                <StatTile label="Quizzes completed" value=PROFILE.completed_quizzes.to_string() />
                <StatTile label="Subjects studied" value=PROFILE.studied_subjects.to_string() />
                <StatTile label="Day streak" value=PROFILE.learning_streak_days.to_string() />
            </div>

            <div class="grid gap-6 md:grid-cols-2">
                <Card>
                    <CardHeader>
                        <CardTitle>"Subjects"</CardTitle>
                        <CardDescription>"Share of total study time"</CardDescription>
                    </CardHeader>
                    <CardContent>
                        <BarList rows=subject_rows max=100.0 />
                    </CardContent>
                </Card>
                <Card>
                    <CardHeader>
                        <CardTitle>"This week"</CardTitle>
                        <CardDescription>"Hours studied per day"</CardDescription>
                    </CardHeader>
                    <CardContent>
                        <BarList rows=weekly_rows />
                    </CardContent>
                </Card>
            </div>

            <Card>
                <CardHeader>
                    <CardTitle>"Achievements"</CardTitle>
                </CardHeader>
                <CardContent>
                    {ACHIEVEMENTS
                        .iter()
                        .enumerate()
                        .map(|(i, a)| view! {
                            {(i > 0).then(|| view! { <Separator class="my-3" /> })}
                            <div class="flex items-center justify-between gap-4">
                                <div>
                                    <p class="font-medium">{a.title}</p>
                                    <p class="text-sm text-muted-foreground">{a.description}</p>
                                </div>
                                <span class="text-xs text-muted-foreground">{a.when}</span>
                            </div>
                        })
                        .collect_view()}
                </CardContent>
            </Card>
        </div>
    }
}
