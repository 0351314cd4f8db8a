use crate::components::ui::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent, Progress,
};
use crate::study::fixtures::MATERIAL_TITLE;
use crate::study::flashcards::Deck;
use icons::{Check, ChevronRight};
use leptos::prelude::*;

#[component]
pub fn FlashcardsPage() -> impl IntoView {
    let deck: RwSignal<Deck> = RwSignal::new(Deck::new());

    let card = move || deck.with(|d| d.card());
    let flipped = move || deck.with(|d| d.is_flipped());
    let current_known = move || deck.with(|d| d.is_known(d.current()));

    view! {
        <div class="mx-auto max-w-3xl space-y-6">
            <div class="flex items-center justify-between gap-4">
                <div class="space-y-2">
                    <h1 class="text-3xl font-bold tracking-tight">"Flashcards"</h1>
                    <p class="text-muted-foreground">"Review key concepts one card at a time"</p>
                </div>
                <Badge variant=BadgeVariant::Outline>{MATERIAL_TITLE}</Badge>
            </div>

            <div class="space-y-2">
                <div class="flex justify-between text-sm text-muted-foreground">
                    <span>{move || deck.with(|d| format!("Card {} of {}", d.current() + 1, d.len()))}</span>
                    <span>{move || deck.with(|d| format!("{} of {} known", d.known_count(), d.len()))}</span>
                </div>
                <Progress value=Signal::derive(move || deck.with(|d| d.progress_percent())) />
            </div>

            <Card
                class="min-h-[280px] cursor-pointer select-none"
                on:click=move |_| deck.update(|d| d.flip())
            >
                <CardContent class="flex min-h-[280px] flex-col items-center justify-center gap-4 p-8 text-center">
                    <span class="text-xs font-medium uppercase tracking-wide text-muted-foreground">
                        {move || if flipped() { "Answer" } else { "Question" }}
                    </span>
                    <p class="text-xl font-medium">
                        {move || card().map(|c| if flipped() { c.back } else { c.front })}
                    </p>
                    <Show when=current_known>
                        <Badge variant=BadgeVariant::Strong><Check />"Known"</Badge>
                    </Show>
                    <span class="text-sm text-muted-foreground">"Click the card to flip it"</span>
                </CardContent>
            </Card>

            <div class="flex flex-wrap items-center justify-between gap-2">
                <Button variant=ButtonVariant::Outline on:click=move |_| deck.update(|d| d.previous())>
                    "Previous"
                </Button>
                <div class="flex gap-2">
                    <Button variant=ButtonVariant::Secondary on:click=move |_| deck.update(|d| d.flip())>
                        "Flip"
                    </Button>
                    <Button on:click=move |_| deck.update(|d| d.mark_known())>
                        <Check />
                        "I know this"
                    </Button>
                </div>
                <Button variant=ButtonVariant::Outline on:click=move |_| deck.update(|d| d.next())>
                    "Next"
                    <ChevronRight />
                </Button>
            </div>

            <div class="flex justify-center gap-2">
                <Button variant=ButtonVariant::Ghost size=ButtonSize::Sm on:click=move |_| deck.update(|d| d.shuffle())>
                    "Shuffle"
                </Button>
                <Button variant=ButtonVariant::Ghost size=ButtonSize::Sm on:click=move |_| deck.update(|d| d.restart())>
                    "Restart"
                </Button>
            </div>
        </div>
    }
}
