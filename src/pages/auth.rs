use crate::api::SignUpOutcome;
use crate::components::ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    Input, Label, Spinner,
};
use crate::state::AppContext;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthMode {
    SignIn,
    SignUp,
}

fn redirect_url() -> String {
    let origin = window().location().origin().unwrap_or_default();
    format!("{origin}/")
}

/// Sign-in / sign-up form. Leaving this page is the guard's job once a
/// session exists.
#[component]
pub fn AuthPage() -> impl IntoView {
    let email: RwSignal<String> = RwSignal::new(String::new());
    let password: RwSignal<String> = RwSignal::new(String::new());
    let mode: RwSignal<AuthMode> = RwSignal::new(AuthMode::SignIn);
    let loading: RwSignal<bool> = RwSignal::new(false);

    let app = expect_context::<AppContext>().0;
    let toasts = app.toasts;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }

        let email_val = email.get_untracked().trim().to_string();
        let password_val = password.get_untracked();
        if email_val.is_empty() || password_val.is_empty() {
            toasts.error("Missing fields", "Please enter your email and password.");
            return;
        }

        let current_mode = mode.get_untracked();
        let auth = app.auth();
        loading.set(true);

        spawn_local(async move {
            match current_mode {
                AuthMode::SignIn => match auth.sign_in_with_password(&email_val, &password_val).await {
                    Ok(()) => toasts.success("Logged in", "You've been logged in."),
                    Err(e) => toasts.error("Sign in failed", e.to_string()),
                },
                AuthMode::SignUp => match auth.sign_up(&email_val, &password_val, &redirect_url()).await {
                    Ok(SignUpOutcome::SignedIn(_)) => {
                        toasts.success("Account created", "You're signed in.")
                    }
                    Ok(SignUpOutcome::ConfirmationSent) => toasts.info(
                        "Check your email",
                        "Registration almost done. Confirm your address to sign in.",
                    ),
                    Err(e) => toasts.error("Sign up failed", e.to_string()),
                },
            }
            let _ = loading.try_set(false);
        });
    };

    let on_google = move |_| {
        if loading.get_untracked() {
            return;
        }
        if let Err(e) = app.auth().sign_in_with_oauth("google", &redirect_url()) {
            toasts.error("Sign in failed", e.to_string());
        }
    };

    let toggle_mode = move |_| {
        mode.update(|m| {
            *m = match m {
                AuthMode::SignIn => AuthMode::SignUp,
                AuthMode::SignUp => AuthMode::SignIn,
            }
        });
    };

    let is_sign_in = move || mode.get() == AuthMode::SignIn;

    view! {
        <div class="flex min-h-screen items-center justify-center bg-secondary p-4">
            <div class="w-full max-w-sm">
                <Card>
                    <CardHeader class="items-center text-center">
                        <CardTitle class="text-2xl">"LearnAI"</CardTitle>
                        <CardDescription>
                            {move || if is_sign_in() { "Sign in to your account" } else { "Create an account" }}
                        </CardDescription>
                    </CardHeader>

                    <CardContent>
                        <form class="flex flex-col gap-3" on:submit=on_submit>
                            <div class="flex flex-col gap-1.5">
                                <Label html_for="email" class="text-xs">"Email"</Label>
                                <Input
                                    id="email"
                                    r#type="email"
                                    placeholder="student@example.com"
                                    bind_value=email
                                    class="h-8 text-sm"
                                />
                            </div>

                            <div class="flex flex-col gap-1.5">
                                <Label html_for="password" class="text-xs">"Password"</Label>
                                <Input
                                    id="password"
                                    r#type="password"
                                    placeholder="Your password"
                                    bind_value=password
                                    class="h-8 text-sm"
                                />
                            </div>

                            <Button class="w-full" attr:r#type="submit" attr:disabled=move || loading.get()>
                                <span class="inline-flex items-center gap-2">
                                    <Show when=move || loading.get() fallback=|| ().into_view()>
                                        <Spinner />
                                    </Show>
                                    {move || if is_sign_in() { "Log in" } else { "Sign up" }}
                                </span>
                            </Button>

                            <Button
                                class="w-full"
                                variant=ButtonVariant::Outline
                                attr:r#type="button"
                                attr:disabled=move || loading.get()
                                on:click=on_google
                            >
                                "Continue with Google"
                            </Button>
                        </form>
                    </CardContent>

                    <CardFooter class="justify-center text-xs text-muted-foreground">
                        {move || if is_sign_in() { "Don't have an account? " } else { "Already have an account? " }}
                        <button type="button" class="text-primary underline underline-offset-4" on:click=toggle_mode>
                            {move || if is_sign_in() { "Sign up" } else { "Log in" }}
                        </button>
                    </CardFooter>
                </Card>
            </div>
        </div>
    }
}
