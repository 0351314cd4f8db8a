use crate::components::ui::{
    Button, ButtonSize, Card, CardContent, CardDescription, CardHeader, CardTitle, Input,
    TabsList, TabsTrigger,
};
use crate::study::chat::{ChatMessage, ChatSession, Role, REPLY_DELAY_MS};
use crate::study::fixtures::{DOCUMENT_CHAPTERS, DOCUMENT_KEY_POINTS, DOCUMENT_TITLE};
use crate::util::schedule_or_run;
use leptos::prelude::*;

#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let is_user = message.role == Role::User;
    view! {
        <div class=if is_user { "mb-4 flex justify-end" } else { "mb-4 flex justify-start" }>
            <div class=if is_user {
                "max-w-[80%] rounded-lg bg-primary px-4 py-2 text-primary-foreground"
            } else {
                "max-w-[80%] rounded-lg bg-muted px-4 py-2"
            }>
                <p class="text-sm whitespace-pre-wrap">{message.content}</p>
            </div>
        </div>
    }
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let chat: RwSignal<ChatSession> = RwSignal::new(ChatSession::new());
    let input: RwSignal<String> = RwSignal::new(String::new());
    let show_structure: RwSignal<bool> = RwSignal::new(false);

    let pending = move || chat.with(|c| c.is_pending());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = input.get_untracked();
        let mut accepted = false;
        chat.update(|c| accepted = c.submit(&text));
        if !accepted {
            return;
        }
        input.set(String::new());
        let _ = schedule_or_run(REPLY_DELAY_MS, move || {
            let _ = chat.try_update(|c| c.receive_reply());
        });
    };

    view! {
        <div class="mx-auto max-w-6xl space-y-6">
            <div class="space-y-2">
                <h1 class="text-3xl font-bold tracking-tight">"Chat with PDF"</h1>
                <p class="text-muted-foreground">"Ask questions about your document and get instant answers"</p>
            </div>

            <div class="grid grid-cols-1 gap-4 lg:grid-cols-3">
                <Card class="flex h-[calc(100vh-220px)] flex-col lg:col-span-2">
                    <CardHeader class="border-b">
                        <CardTitle class="text-lg">"Document Chat"</CardTitle>
                        <CardDescription>{format!("Ask questions about \"{DOCUMENT_TITLE}.pdf\"")}</CardDescription>
                    </CardHeader>
                    <div class="flex-1 overflow-y-auto px-6">
                        <For
                            each=move || chat.with(|c| c.messages().iter().cloned().enumerate().collect::<Vec<_>>())
                            key=|(i, _)| *i
                            children=|(_, m)| view! { <MessageBubble message=m /> }
                        />
                        <Show when=pending>
                            <div class="mb-4 flex gap-2 rounded-lg bg-muted px-4 py-3 w-fit">
                                <div class="size-2 animate-pulse rounded-full bg-muted-foreground"></div>
                                <div class="size-2 animate-pulse rounded-full bg-muted-foreground"></div>
                                <div class="size-2 animate-pulse rounded-full bg-muted-foreground"></div>
                            </div>
                        </Show>
                    </div>
                    <form class="flex gap-2 border-t px-6 pt-4" on:submit=on_submit>
                        <Input
                            placeholder="Ask a question about the document..."
                            bind_value=input
                            disabled=Signal::derive(pending)
                        />
                        <Button
                            size=ButtonSize::Default
                            attr:r#type="submit"
                            attr:disabled=move || pending() || input.get().trim().is_empty()
                        >
                            "Send"
                        </Button>
                    </form>
                </Card>

                <Card class="lg:col-span-1">
                    <CardHeader class="border-b">
                        <CardTitle class="text-lg">"Document Overview"</CardTitle>
                    </CardHeader>
                    <CardContent class="space-y-4">
                        <TabsList class="grid w-full grid-cols-2">
                            <TabsTrigger active=Signal::derive(move || !show_structure.get()) on:click=move |_| show_structure.set(false)>
                                "Summary"
                            </TabsTrigger>
                            <TabsTrigger active=Signal::derive(move || show_structure.get()) on:click=move |_| show_structure.set(true)>
                                "Structure"
                            </TabsTrigger>
                        </TabsList>
                        <Show
                            when=move || show_structure.get()
                            fallback=|| view! {
                                <h3 class="mb-2 font-semibold">{DOCUMENT_TITLE}</h3>
                                <p class="mb-4 text-sm text-muted-foreground">"Key Points:"</p>
                                <ul class="space-y-2 text-sm">
                                    {DOCUMENT_KEY_POINTS
                                        .iter()
                                        .map(|p| view! { <li class="flex gap-2"><span>"•"</span><span>{*p}</span></li> })
                                        .collect_view()}
                                </ul>
                            }
                        >
                            <p class="mb-4 text-sm text-muted-foreground">"Document Structure:"</p>
                            <ul class="space-y-3 text-sm">
                                {DOCUMENT_CHAPTERS
                                    .iter()
                                    .map(|c| view! {
                                        <li class="border-b pb-2 last:border-0 last:pb-0">
                                            <div class="font-medium">{c.title}</div>
                                            <div class="text-xs text-muted-foreground">{format!("Pages {}", c.pages)}</div>
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        </Show>
                    </CardContent>
                </Card>
            </div>
        </div>
    }
}
