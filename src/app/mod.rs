use crate::components::toaster::Toaster;
use crate::components::ui::LoadingScreen;
use crate::pages::{
    AppShell, AuthPage, ChatPage, DashboardPage, FlashcardsPage, HistoryPage, MindMapPage,
    NotFoundPage, NotebooksPage, ProfilePage, QuizPage, SmartNotesPage, UploadPage,
};
use crate::routing::{evaluate, AppRoute, GuardDecision, GuardInput};
use crate::state::{AppContext, AppState};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::{path, NavigateOptions};

/// Applies the navigation guard to the current location.
///
/// Children are only mounted once the guard settles on rendering a page.
#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let app = expect_context::<AppContext>().0;
    let location = use_location();
    let navigate = StoredValue::new(use_navigate());

    let decision = Memo::new(move |_| {
        let user_id = app.session.user().map(|u| u.id);
        let input = GuardInput {
            session_loading: app.session.is_loading(),
            signed_in: user_id.is_some(),
            notebooks_loaded: app.notebooks.is_loaded_for(user_id.as_deref()),
            notebook_count: app.notebooks.len(),
        };
        evaluate(input, &location.pathname.get())
    });

    Effect::new(move |_| {
        let GuardDecision::Redirect(target) = decision.get() else {
            return;
        };
        let current = location.pathname.get_untracked();
        if AppRoute::from_path(&current) == Some(target) {
            return;
        }
        log!("guard: {current} -> {}", target.path());
        navigate.with_value(|nav| {
            nav(
                target.path(),
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            )
        });
    });

    let settled = move || {
        matches!(
            decision.get(),
            GuardDecision::Render(_) | GuardDecision::NotFound
        )
    };

    let children = StoredValue::new(children);

    view! {
        <Show when=settled fallback=|| view! { <LoadingScreen label="Loading..." /> }>
            {move || children.with_value(|c| c())}
        </Show>
    }
}

#[component]
pub fn App() -> impl IntoView {
    let app = AppState::new();
    provide_context(AppContext(app));

    app.session.start(&app.auth());

    // Notebooks follow the signed-in user; a sign-out reload empties the list.
    let user_id = Memo::new(move |_| app.session.user().map(|u| u.id));
    let session_ready = Memo::new(move |_| !app.session.is_loading());
    Effect::new(move |_| {
        let uid = user_id.get();
        if !session_ready.get() {
            return;
        }
        let api = app.auth().data_client();
        spawn_local(app.notebooks.load(api, uid, None));
    });

    view! {
        <Router>
            <RouteGuard>
                <Routes fallback=|| view! {
                    <AppShell>
                        <NotFoundPage />
                    </AppShell>
                }>
                    <Route path=path!("auth") view=AuthPage />
                    <Route path=path!("notebooks") view=NotebooksPage />
                    <Route path=path!("dashboard") view=move || view! {
                        <AppShell>
                            <DashboardPage />
                        </AppShell>
                    } />
                    <Route path=path!("upload") view=move || view! {
                        <AppShell>
                            <UploadPage />
                        </AppShell>
                    } />
                    <Route path=path!("smart-notes") view=move || view! {
                        <AppShell>
                            <SmartNotesPage />
                        </AppShell>
                    } />
                    <Route path=path!("chat-pdf") view=move || view! {
                        <AppShell>
                            <ChatPage />
                        </AppShell>
                    } />
                    <Route path=path!("quiz") view=move || view! {
                        <AppShell>
                            <QuizPage />
                        </AppShell>
                    } />
                    <Route path=path!("flashcards") view=move || view! {
                        <AppShell>
                            <FlashcardsPage />
                        </AppShell>
                    } />
                    <Route path=path!("mindmap") view=move || view! {
                        <AppShell>
                            <MindMapPage />
                        </AppShell>
                    } />
                    <Route path=path!("history") view=move || view! {
                        <AppShell>
                            <HistoryPage />
                        </AppShell>
                    } />
                    <Route path=path!("profile") view=move || view! {
                        <AppShell>
                            <ProfilePage />
                        </AppShell>
                    } />
                </Routes>
            </RouteGuard>
            <Toaster />
        </Router>
    }
}
