//! Which screen a visitor may see.
//!
//! The decision is a pure function of the session, the notebook list and the
//! requested path; `RouteGuard` in `app` applies it to the router.

use strum::{EnumIter, IntoEnumIterator};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub(crate) enum AppRoute {
    SignIn,
    Notebooks,
    Dashboard,
    Upload,
    SmartNotes,
    Chat,
    Quiz,
    Flashcards,
    MindMap,
    History,
    Profile,
}

impl AppRoute {
    /// Landing page once signed in with at least one notebook.
    pub const HOME: AppRoute = AppRoute::Dashboard;

    pub fn path(&self) -> &'static str {
        match self {
            Self::SignIn => "/auth",
            Self::Notebooks => "/notebooks",
            Self::Dashboard => "/dashboard",
            Self::Upload => "/upload",
            Self::SmartNotes => "/smart-notes",
            Self::Chat => "/chat-pdf",
            Self::Quiz => "/quiz",
            Self::Flashcards => "/flashcards",
            Self::MindMap => "/mindmap",
            Self::History => "/history",
            Self::Profile => "/profile",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SignIn => "Sign in",
            Self::Notebooks => "Notebooks",
            Self::Dashboard => "Dashboard",
            Self::Upload => "Upload",
            Self::SmartNotes => "Smart Notes",
            Self::Chat => "Chat with PDF",
            Self::Quiz => "Quiz Me",
            Self::Flashcards => "Flashcards",
            Self::MindMap => "Mind Map",
            Self::History => "History",
            Self::Profile => "Profile",
        }
    }

    /// Trailing slashes are ignored; query and fragment are not part of `path`.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        Self::iter().find(|r| r.path() == trimmed)
    }

    pub fn is_authenticated_page(&self) -> bool {
        !matches!(self, Self::SignIn | Self::Notebooks)
    }

    /// Entries of the side navigation, in display order.
    pub fn nav_items() -> impl Iterator<Item = AppRoute> {
        Self::iter().filter(|r| r.is_authenticated_page())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GuardState {
    Loading,
    Unauthenticated,
    NoNotebook,
    Ready,
}

/// Everything the guard looks at besides the path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct GuardInput {
    pub session_loading: bool,
    pub signed_in: bool,
    pub notebooks_loaded: bool,
    pub notebook_count: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GuardDecision {
    Loading,
    Redirect(AppRoute),
    Render(AppRoute),
    /// Signed in and ready, but the path names no page.
    NotFound,
}

impl GuardDecision {
    /// Path the visitor ends up on, if the decision is settled.
    pub fn resolved_path<'a>(&self, requested: &'a str) -> Option<&'a str> {
        match self {
            Self::Loading => None,
            Self::Redirect(r) => Some(r.path()),
            Self::Render(_) | Self::NotFound => Some(requested),
        }
    }
}

pub(crate) fn classify(input: GuardInput) -> GuardState {
    if input.session_loading {
        return GuardState::Loading;
    }
    // Session first: stale notebooks from a previous user never matter here.
    if !input.signed_in {
        return GuardState::Unauthenticated;
    }
    if !input.notebooks_loaded {
        return GuardState::Loading;
    }
    if input.notebook_count == 0 {
        GuardState::NoNotebook
    } else {
        GuardState::Ready
    }
}

pub(crate) fn resolve(state: GuardState, path: &str) -> GuardDecision {
    let route = AppRoute::from_path(path);

    let only = |allowed: AppRoute| match route {
        Some(r) if r == allowed => GuardDecision::Render(r),
        _ => GuardDecision::Redirect(allowed),
    };

    match state {
        GuardState::Loading => GuardDecision::Loading,
        GuardState::Unauthenticated => only(AppRoute::SignIn),
        GuardState::NoNotebook => only(AppRoute::Notebooks),
        GuardState::Ready => match route {
            Some(r) if r.is_authenticated_page() => GuardDecision::Render(r),
            Some(_) => GuardDecision::Redirect(AppRoute::HOME),
            None if path.trim_end_matches('/').is_empty() => GuardDecision::Redirect(AppRoute::HOME),
            // Catch-all page instead of a redirect; see DESIGN.md, open question decisions.
            None => GuardDecision::NotFound,
        },
    }
}

pub(crate) fn evaluate(input: GuardInput, path: &str) -> GuardDecision {
    resolve(classify(input), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIGNED_OUT: GuardInput = GuardInput {
        session_loading: false,
        signed_in: false,
        notebooks_loaded: false,
        notebook_count: 0,
    };

    fn signed_in(loaded: bool, count: usize) -> GuardInput {
        GuardInput {
            session_loading: false,
            signed_in: true,
            notebooks_loaded: loaded,
            notebook_count: count,
        }
    }

    fn all_paths() -> Vec<&'static str> {
        let mut paths: Vec<&'static str> = AppRoute::iter().map(|r| r.path()).collect();
        paths.extend(["/", "", "/nope", "/dashboard/extra", "/login"]);
        paths
    }

    #[test]
    fn test_from_path_roundtrip_and_trailing_slash() {
        for r in AppRoute::iter() {
            assert_eq!(AppRoute::from_path(r.path()), Some(r));
        }
        assert_eq!(AppRoute::from_path("/quiz/"), Some(AppRoute::Quiz));
        assert_eq!(AppRoute::from_path("/"), None);
        assert_eq!(AppRoute::from_path("/quizzes"), None);
    }

    #[test]
    fn test_nav_items_exclude_gate_pages() {
        let items: Vec<AppRoute> = AppRoute::nav_items().collect();
        assert_eq!(items.first(), Some(&AppRoute::Dashboard));
        assert_eq!(items.len(), 9);
        assert!(!items.contains(&AppRoute::SignIn));
        assert!(!items.contains(&AppRoute::Notebooks));
    }

    #[test]
    fn test_session_loading_is_loading_everywhere() {
        let input = GuardInput {
            session_loading: true,
            signed_in: false,
            notebooks_loaded: true,
            notebook_count: 3,
        };
        for p in all_paths() {
            assert_eq!(evaluate(input, p), GuardDecision::Loading);
        }
    }

    #[test]
    fn test_unauthenticated_resolves_to_sign_in_for_every_path() {
        for p in all_paths() {
            let d = evaluate(SIGNED_OUT, p);
            assert_eq!(d.resolved_path(p), Some("/auth"), "path {p}");
        }
        assert_eq!(evaluate(SIGNED_OUT, "/auth"), GuardDecision::Render(AppRoute::SignIn));
    }

    #[test]
    fn test_stale_notebooks_never_leak_into_signed_out_state() {
        let stale = GuardInput {
            session_loading: false,
            signed_in: false,
            notebooks_loaded: true,
            notebook_count: 0,
        };
        assert_eq!(classify(stale), GuardState::Unauthenticated);
        let stale_full = GuardInput {
            notebook_count: 4,
            ..stale
        };
        assert_eq!(classify(stale_full), GuardState::Unauthenticated);
    }

    #[test]
    fn test_signed_in_waits_for_notebooks() {
        assert_eq!(classify(signed_in(false, 0)), GuardState::Loading);
        assert_eq!(evaluate(signed_in(false, 2), "/dashboard"), GuardDecision::Loading);
    }

    #[test]
    fn test_empty_list_redirects_authenticated_pages_to_picker() {
        for r in AppRoute::nav_items() {
            assert_eq!(
                evaluate(signed_in(true, 0), r.path()),
                GuardDecision::Redirect(AppRoute::Notebooks)
            );
        }
        assert_eq!(
            evaluate(signed_in(true, 0), "/auth"),
            GuardDecision::Redirect(AppRoute::Notebooks)
        );
        assert_eq!(
            evaluate(signed_in(true, 0), "/notebooks"),
            GuardDecision::Render(AppRoute::Notebooks)
        );
    }

    #[test]
    fn test_ready_renders_pages_and_sends_gates_home() {
        let ready = signed_in(true, 1);
        for r in AppRoute::nav_items() {
            assert_eq!(evaluate(ready, r.path()), GuardDecision::Render(r));
        }
        for p in ["/auth", "/notebooks", "/", ""] {
            assert_eq!(evaluate(ready, p), GuardDecision::Redirect(AppRoute::Dashboard));
        }
    }

    #[test]
    fn test_unknown_path_is_not_found_only_when_ready() {
        assert_eq!(evaluate(signed_in(true, 1), "/nope"), GuardDecision::NotFound);
        assert_eq!(
            evaluate(signed_in(true, 1), "/nope").resolved_path("/nope"),
            Some("/nope")
        );
        assert_eq!(
            evaluate(signed_in(true, 0), "/nope"),
            GuardDecision::Redirect(AppRoute::Notebooks)
        );
        assert_eq!(evaluate(SIGNED_OUT, "/nope"), GuardDecision::Redirect(AppRoute::SignIn));
    }

    #[test]
    fn test_redirect_target_is_a_fixed_point() {
        let inputs = [SIGNED_OUT, signed_in(true, 0), signed_in(true, 2)];
        for input in inputs {
            for p in all_paths() {
                if let GuardDecision::Redirect(target) = evaluate(input, p) {
                    assert_eq!(
                        evaluate(input, target.path()),
                        GuardDecision::Render(target),
                        "redirect from {p} must settle"
                    );
                }
            }
        }
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let inputs = [SIGNED_OUT, signed_in(true, 0), signed_in(true, 2), signed_in(false, 0)];
        for input in inputs {
            for p in all_paths() {
                assert_eq!(evaluate(input, p), evaluate(input, p));
            }
        }
    }

    #[test]
    fn test_sign_in_then_empty_notebooks_scenario() {
        // Signed in as u1, notebook fetch returned nothing.
        let d = evaluate(signed_in(true, 0), "/auth");
        assert_eq!(d.resolved_path("/auth"), Some("/notebooks"));
    }

    #[test]
    fn test_create_first_notebook_scenario() {
        assert_eq!(
            evaluate(signed_in(true, 0), "/notebooks"),
            GuardDecision::Render(AppRoute::Notebooks)
        );
        // After "Biology" is created and the list reloads with one entry.
        assert_eq!(
            evaluate(signed_in(true, 1), "/notebooks"),
            GuardDecision::Redirect(AppRoute::Dashboard)
        );
    }
}
