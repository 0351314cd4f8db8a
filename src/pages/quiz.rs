use crate::components::ui::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription,
    CardFooter, CardHeader, CardTitle, Progress, TabsList, TabsTrigger, Textarea,
};
use crate::routing::AppRoute;
use crate::study::fixtures::{MATERIAL_TITLE, MCQ_QUESTIONS, SHORT_ANSWER_QUESTIONS};
use crate::study::quiz::{QuizMode, QuizSession, QuizType, Strength, TopicStrength};
use icons::{Check, X};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

fn strength_badge(strength: Strength) -> BadgeVariant {
    match strength {
        Strength::Strong => BadgeVariant::Strong,
        Strength::Moderate => BadgeVariant::Moderate,
        Strength::Weak => BadgeVariant::Weak,
    }
}

#[component]
fn TopicAssessment(topics: Vec<TopicStrength>) -> impl IntoView {
    view! {
        <div class="mb-6 rounded-md border bg-secondary/20 p-4">
            <h3 class="mb-3 text-lg font-semibold">"Topic Strength Assessment"</h3>
            <div class="space-y-4">
                {topics
                    .into_iter()
                    .map(|t| view! {
                        <div class="space-y-1">
                            <div class="flex items-center justify-between">
                                <span class="font-medium">{t.topic}</span>
                                <Badge variant=strength_badge(t.strength)>{t.strength.to_string()}</Badge>
                            </div>
                            <Progress value=f64::from(t.strength.progress()) />
                            <p class="text-sm text-muted-foreground">
                                <span class="font-medium">"Recommendation: "</span>
                                {t.recommendation}
                            </p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn QuizPreview(quiz: RwSignal<QuizSession>) -> impl IntoView {
    let kind = quiz.with_untracked(|q| q.kind());
    let questions = match kind {
        QuizType::Mcq => MCQ_QUESTIONS
            .iter()
            .enumerate()
            .map(|(i, q)| view! {
                <div class="rounded-md border p-4">
                    <p class="mb-3 font-medium">{format!("Question {}: {}", i + 1, q.question)}</p>
                    <ul class="list-disc space-y-2 pl-5 text-muted-foreground">
                        {q.options.iter().map(|o| view! { <li>{*o}</li> }).collect_view()}
                    </ul>
                </div>
            })
            .collect_view()
            .into_any(),
        QuizType::ShortAnswer => SHORT_ANSWER_QUESTIONS
            .iter()
            .enumerate()
            .map(|(i, q)| view! {
                <div class="rounded-md border p-4">
                    <p class="font-medium">{format!("Question {}: {}", i + 1, q.question)}</p>
                </div>
            })
            .collect_view()
            .into_any(),
    };

    view! {
        <Card>
            <CardHeader>
                <CardTitle class="text-xl">"Preview Questions"</CardTitle>
                <CardDescription>"Browse through the questions before starting the quiz."</CardDescription>
            </CardHeader>
            <CardContent class="space-y-6">{questions}</CardContent>
            <CardFooter>
                <Button class="w-full" on:click=move |_| quiz.update(|q| q.start())>"Start Quiz"</Button>
            </CardFooter>
        </Card>
    }
}

#[component]
fn QuizQuestion(quiz: RwSignal<QuizSession>) -> impl IntoView {
    let draft: RwSignal<String> = RwSignal::new(quiz.with_untracked(|q| q.draft().to_string()));

    // Keep the session's pending answer in step with the textarea.
    Effect::new(move |_| {
        let text = draft.get();
        quiz.update(|q| q.set_draft(text));
    });

    let current = move || quiz.with(|q| q.current());
    let count = move || quiz.with(|q| q.question_count());
    let kind = move || quiz.with(|q| q.kind());

    let on_next = move |_| {
        let mut advanced = false;
        quiz.update(|q| advanced = q.advance());
        if advanced {
            draft.set(String::new());
        }
    };

    view! {
        <Card>
            <CardHeader class="w-full">
                <div class="text-sm text-muted-foreground">
                    {move || format!("Question {} of {}", current() + 1, count())}
                </div>
                <Progress value=Signal::derive(move || quiz.with(|q| q.progress_percent())) />
                <CardTitle class="mt-4 text-xl">
                    {move || match kind() {
                        QuizType::Mcq => MCQ_QUESTIONS.get(current()).map(|q| q.question),
                        QuizType::ShortAnswer => SHORT_ANSWER_QUESTIONS.get(current()).map(|q| q.question),
                    }}
                </CardTitle>
            </CardHeader>
            <CardContent>
                {move || match kind() {
                    QuizType::Mcq => {
                        let options = MCQ_QUESTIONS.get(current()).map(|q| q.options).unwrap_or_default();
                        view! {
                            <div class="space-y-3" role="radiogroup">
                                {options
                                    .into_iter()
                                    .enumerate()
                                    .map(|(i, option)| {
                                        let id = format!("option-{i}");
                                        let label_for = id.clone();
                                        view! {
                                            <label for=label_for class="flex cursor-pointer items-center gap-2 rounded-md border p-3 hover:bg-accent">
                                                <input
                                                    type="radio"
                                                    name="quiz-option"
                                                    id=id
                                                    prop:checked=move || quiz.with(|q| q.selected() == Some(option))
                                                    on:change=move |_| quiz.update(|q| q.select(option))
                                                />
                                                <span class="flex-1">{option}</span>
                                            </label>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                    QuizType::ShortAnswer => view! {
                        <Textarea placeholder="Type your answer here..." class="min-h-[200px]" bind_value=draft />
                    }
                    .into_any(),
                }}
            </CardContent>
            <CardFooter class="justify-end">
                <Button
                    attr:disabled=move || !quiz.with(|q| q.can_advance())
                    on:click=on_next
                >
                    {move || if quiz.with(|q| q.is_last_question()) { "Finish Quiz" } else { "Next Question" }}
                </Button>
            </CardFooter>
        </Card>
    }
}

#[component]
fn QuizFeedback(quiz: RwSignal<QuizSession>) -> impl IntoView {
    let session = quiz.get_untracked();
    let topics = session.topic_strengths();

    let body = match session.kind() {
        QuizType::Mcq => {
            let reviews = session
                .review()
                .into_iter()
                .enumerate()
                .map(|(i, r)| {
                    let frame = if r.is_correct {
                        "rounded-md border border-green-200 bg-green-50 p-4"
                    } else {
                        "rounded-md border border-red-200 bg-red-50 p-4"
                    };
                    view! {
                        <div class=frame>
                            <div class="mb-2 flex items-start gap-2">
                                {if r.is_correct {
                                    view! { <Check class="size-5 shrink-0 text-green-600" /> }.into_any()
                                } else {
                                    view! { <X class="size-5 shrink-0 text-red-600" /> }.into_any()
                                }}
                                <div>
                                    <p class="font-medium">{format!("Question {}: {}", i + 1, r.question)}</p>
                                    <p class="mt-1 text-sm">
                                        <span class="font-medium">"Your answer: "</span>
                                        {r.answer.clone().unwrap_or_else(|| "No answer provided".to_string())}
                                    </p>
                                    {(!r.is_correct).then(|| view! {
                                        <p class="mt-1 text-sm text-green-600">
                                            <span class="font-medium">"Correct answer: "</span>
                                            {r.correct_answer}
                                        </p>
                                    })}
                                </div>
                            </div>
                            <div class="ml-7 mt-2">
                                <p class="text-sm font-medium">"Explanation:"</p>
                                <p class="text-sm text-muted-foreground">{r.explanation}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view();

            view! {
                <div class="mb-6 py-4 text-center">
                    <div class="mb-2 text-5xl font-bold">{format!("{}%", session.score_percent())}</div>
                    <p class="text-muted-foreground">{session.feedback_message()}</p>
                </div>
                <TopicAssessment topics=topics />
                <div class="space-y-6">{reviews}</div>
            }
            .into_any()
        }
        QuizType::ShortAnswer => {
            let answers = SHORT_ANSWER_QUESTIONS
                .iter()
                .enumerate()
                .map(|(i, q)| view! {
                    <div class="rounded-md border p-4">
                        <p class="mb-2 font-medium">{format!("Question {}: {}", i + 1, q.question)}</p>
                        <p class="mb-1 text-sm font-medium">"Your answer:"</p>
                        <p class="mb-3 text-sm whitespace-pre-wrap">{session.response(i).to_string()}</p>
                        <p class="mb-1 text-sm font-medium">"Sample answer:"</p>
                        <p class="text-sm text-muted-foreground">{q.sample_answer}</p>
                    </div>
                })
                .collect_view();

            view! {
                <TopicAssessment topics=topics />
                <div class="space-y-6">{answers}</div>
            }
            .into_any()
        }
    };

    let description = match session.kind() {
        QuizType::Mcq => format!(
            "You scored {} out of {} questions correctly.",
            session.score(),
            MCQ_QUESTIONS.len()
        ),
        QuizType::ShortAnswer => "Compare your answers with the sample answers below.".to_string(),
    };

    view! {
        <Card>
            <CardHeader>
                <CardTitle class="text-xl">"Quiz Results"</CardTitle>
                <CardDescription>{description}</CardDescription>
            </CardHeader>
            <CardContent>{body}</CardContent>
            <CardFooter>
                <Button variant=ButtonVariant::Outline class="w-full" on:click=move |_| quiz.update(|q| q.reset())>
                    "Try Again"
                </Button>
            </CardFooter>
        </Card>
    }
}

#[component]
pub fn QuizPage() -> impl IntoView {
    let quiz: RwSignal<QuizSession> = RwSignal::new(QuizSession::new(QuizType::Mcq));
    let navigate = StoredValue::new(use_navigate());

    let mode = Memo::new(move |_| quiz.with(|q| q.mode()));
    let kind = Memo::new(move |_| quiz.with(|q| q.kind()));

    view! {
        <div class="mx-auto max-w-3xl space-y-6">
            <div class="flex items-center justify-between gap-4">
                <div class="space-y-2">
                    <h1 class="text-3xl font-bold tracking-tight">"Quiz Me"</h1>
                    <p class="text-muted-foreground">"Test your understanding of the material"</p>
                </div>
                <div class="flex items-center gap-3">
                    <Badge variant=BadgeVariant::Outline>{MATERIAL_TITLE}</Badge>
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Sm
                        on:click=move |_| navigate.with_value(|nav| nav(AppRoute::Upload.path(), Default::default()))
                    >
                        "New Material"
                    </Button>
                </div>
            </div>

            <TabsList class="grid w-full grid-cols-2">
                {[QuizType::Mcq, QuizType::ShortAnswer]
                    .into_iter()
                    .map(|t| view! {
                        <TabsTrigger
                            active=Signal::derive(move || kind.get() == t)
                            on:click=move |_| quiz.update(|q| q.set_kind(t))
                        >
                            {t.label()}
                        </TabsTrigger>
                    })
                    .collect_view()}
            </TabsList>

            {move || {
                // Re-render only on mode or type changes; each view reads the session itself.
                let _ = kind.get();
                match mode.get() {
                    QuizMode::Preview => view! { <QuizPreview quiz=quiz /> }.into_any(),
                    QuizMode::InProgress => view! { <QuizQuestion quiz=quiz /> }.into_any(),
                    QuizMode::Feedback => view! { <QuizFeedback quiz=quiz /> }.into_any(),
                }
            }}
        </div>
    }
}
