use crate::api::{ApiClient, ApiError, ApiResult};
use crate::auth::AuthClient;
use crate::models::{Material, NewMaterial, Notebook};
use crate::storage::{load_active_notebook_id, save_active_notebook_id};
use crate::util::now_iso;
use leptos::logging::{error, log, warn};
use leptos::prelude::*;

/// Picks the active notebook after a reload.
///
/// A still-present selection is kept; otherwise the most recently accessed
/// notebook (list head) takes over, or nothing when the list is empty.
pub(crate) fn reconcile_active(current: Option<&str>, notebooks: &[Notebook]) -> Option<String> {
    current
        .filter(|id| notebooks.iter().any(|nb| nb.id == *id))
        .map(|id| id.to_string())
        .or_else(|| notebooks.first().map(|nb| nb.id.clone()))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct NotebookState {
    pub notebooks: Vec<Notebook>,
    pub active_id: Option<String>,

    /// Which user the list belongs to: `None` before the first load completes,
    /// `Some(None)` after loading for a signed-out visitor.
    pub loaded_for: Option<Option<String>>,
    pub loading: bool,

    /// Last reload ticket handed out; only its result may be applied.
    latest_ticket: u64,
}

impl NotebookState {
    pub fn new(active_id: Option<String>) -> Self {
        Self {
            notebooks: vec![],
            active_id,
            loaded_for: None,
            loading: false,
            latest_ticket: 0,
        }
    }

    pub fn begin_reload(&mut self) -> u64 {
        self.latest_ticket = self.latest_ticket.saturating_add(1);
        self.loading = true;
        self.latest_ticket
    }

    /// Applies a reload result if `ticket` is still the newest one issued.
    /// Returns whether the result was applied.
    pub fn finish_reload(
        &mut self,
        ticket: u64,
        user_id: Option<String>,
        notebooks: Vec<Notebook>,
        prefer_active: Option<&str>,
    ) -> bool {
        if ticket != self.latest_ticket {
            return false;
        }

        let wanted = prefer_active.or(self.active_id.as_deref());
        self.active_id = reconcile_active(wanted, &notebooks);
        self.notebooks = notebooks;
        self.loaded_for = Some(user_id);
        self.loading = false;
        true
    }

    pub fn select(&mut self, id: Option<&str>) -> bool {
        match id {
            None => {
                self.active_id = None;
                true
            }
            Some(id) if self.notebooks.iter().any(|nb| nb.id == id) => {
                self.active_id = Some(id.to_string());
                true
            }
            Some(_) => false,
        }
    }

    pub fn active(&self) -> Option<&Notebook> {
        let id = self.active_id.as_deref()?;
        self.notebooks.iter().find(|nb| nb.id == id)
    }

    pub fn is_loaded_for(&self, user_id: Option<&str>) -> bool {
        matches!(&self.loaded_for, Some(loaded) if loaded.as_deref() == user_id)
    }
}

#[derive(Clone, Copy)]
pub(crate) struct NotebookStore {
    state: RwSignal<NotebookState>,
}

impl NotebookStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(NotebookState::new(load_active_notebook_id())),
        }
    }

    pub fn notebooks(&self) -> Vec<Notebook> {
        self.state.with(|s| s.notebooks.clone())
    }

    pub fn active_notebook(&self) -> Option<Notebook> {
        self.state.with(|s| s.active().cloned())
    }

    pub fn active_notebook_untracked(&self) -> Option<Notebook> {
        self.state.with_untracked(|s| s.active().cloned())
    }

    pub fn is_loaded_for(&self, user_id: Option<&str>) -> bool {
        self.state.with(|s| s.is_loaded_for(user_id))
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn len(&self) -> usize {
        self.state.with(|s| s.notebooks.len())
    }

    /// Local selection only; remembered across visits as a UI preference.
    pub fn set_active_notebook(&self, id: Option<String>) {
        let mut changed = false;
        self.state.update(|s| changed = s.select(id.as_deref()));
        if changed {
            save_active_notebook_id(id.as_deref());
        }
    }

    /// Reloads every notebook of `user_id` with its materials.
    ///
    /// Read failures degrade to empty results and are only logged.
    pub async fn load(self, api: ApiClient, user_id: Option<String>, prefer_active: Option<String>) {
        let mut ticket = 0;
        self.state.update(|s| ticket = s.begin_reload());

        let notebooks = match &user_id {
            None => vec![],
            Some(uid) => fetch_notebooks_with_materials(&api, uid).await,
        };

        let count = notebooks.len();
        let mut applied = false;
        self.state.update(|s| {
            applied = s.finish_reload(ticket, user_id, notebooks, prefer_active.as_deref())
        });

        if applied {
            let active = self.state.with_untracked(|s| s.active_id.clone());
            save_active_notebook_id(active.as_deref());
            log!("notebooks: loaded {count}");
        } else {
            log!("notebooks: dropped stale reload #{ticket}");
        }
    }

    pub async fn create_notebook(self, auth: AuthClient, name: String) -> ApiResult<Notebook> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(ApiError::validation("Notebook name is required"));
        }
        let Some(session) = auth.current_session() else {
            return Err(ApiError::validation("Sign in to create a notebook"));
        };

        let api = auth.data_client();
        let created = api
            .insert_notebook(&session.user.id, &name, &now_iso())
            .await
            .inspect_err(|e| error!("notebooks: create failed: {e}"))?;

        self.load(api, Some(session.user.id), Some(created.id.clone()))
            .await;
        Ok(created)
    }

    /// Ownership of `notebook_id` is enforced by the backend's row policies.
    pub async fn add_material(
        self,
        auth: AuthClient,
        notebook_id: String,
        material: NewMaterial,
    ) -> ApiResult<Material> {
        if material.name.trim().is_empty() {
            return Err(ApiError::validation("Material name is required"));
        }

        let api = auth.data_client();
        let created = api
            .insert_material(&notebook_id, &material)
            .await
            .inspect_err(|e| error!("notebooks: add material failed: {e}"))?;

        let user_id = auth.current_session().map(|s| s.user.id);
        self.load(api, user_id, None).await;
        Ok(created)
    }
}

impl Default for NotebookStore {
    fn default() -> Self {
        Self::new()
    }
}

async fn fetch_notebooks_with_materials(api: &ApiClient, user_id: &str) -> Vec<Notebook> {
    let mut notebooks = match api.list_notebooks(user_id).await {
        Ok(list) => list,
        Err(e) => {
            warn!("notebooks: list failed, showing none: {e}");
            return vec![];
        }
    };

    for nb in notebooks.iter_mut() {
        nb.materials = match api.list_materials(&nb.id).await {
            Ok(list) => list,
            Err(e) => {
                warn!("notebooks: materials for {} failed: {e}", nb.id);
                vec![]
            }
        };
    }

    notebooks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nb(id: &str, name: &str) -> Notebook {
        Notebook {
            id: id.to_string(),
            name: name.to_string(),
            last_accessed: String::new(),
            created_at: String::new(),
            updated_at: String::new(),
            materials: vec![],
        }
    }

    #[test]
    fn test_reconcile_keeps_present_selection() {
        let list = vec![nb("n1", "A"), nb("n2", "B")];
        assert_eq!(reconcile_active(Some("n2"), &list).as_deref(), Some("n2"));
    }

    #[test]
    fn test_reconcile_falls_back_to_most_recent() {
        let list = vec![nb("n1", "A"), nb("n2", "B")];
        assert_eq!(reconcile_active(Some("gone"), &list).as_deref(), Some("n1"));
        assert_eq!(reconcile_active(None, &list).as_deref(), Some("n1"));
        assert_eq!(reconcile_active(Some("gone"), &[]), None);
    }

    #[test]
    fn test_reload_after_remote_delete_never_dangles() {
        let mut s = NotebookState::new(None);
        let t = s.begin_reload();
        s.finish_reload(t, Some("u1".into()), vec![nb("n1", "A"), nb("n2", "B")], None);
        assert!(s.select(Some("n2")));

        // n2 deleted elsewhere.
        let t = s.begin_reload();
        s.finish_reload(t, Some("u1".into()), vec![nb("n1", "A")], None);
        assert_eq!(s.active_id.as_deref(), Some("n1"));
        assert!(s.active().is_some());

        let t = s.begin_reload();
        s.finish_reload(t, Some("u1".into()), vec![], None);
        assert!(s.active_id.is_none());
        assert!(s.active().is_none());
    }

    #[test]
    fn test_latest_issued_reload_wins() {
        let mut s = NotebookState::new(None);
        let first = s.begin_reload();
        let second = s.begin_reload();

        // Second returns first.
        assert!(s.finish_reload(second, Some("u1".into()), vec![nb("n1", "A"), nb("n2", "B")], None));
        // First returns late with an older view.
        assert!(!s.finish_reload(first, Some("u1".into()), vec![nb("n1", "A")], None));

        assert_eq!(s.notebooks.len(), 2);
        assert!(!s.loading);
    }

    #[test]
    fn test_stale_result_keeps_loading_until_latest_arrives() {
        let mut s = NotebookState::new(None);
        let first = s.begin_reload();
        let second = s.begin_reload();
        assert!(!s.finish_reload(first, Some("u1".into()), vec![], None));
        assert!(s.loading);
        assert!(s.loaded_for.is_none());
        assert!(s.finish_reload(second, Some("u1".into()), vec![], None));
        assert!(!s.loading);
    }

    #[test]
    fn test_create_scenario_makes_new_notebook_active() {
        let mut s = NotebookState::new(None);
        let t = s.begin_reload();
        s.finish_reload(t, Some("u1".into()), vec![], None);
        assert!(s.active().is_none());

        let t = s.begin_reload();
        s.finish_reload(t, Some("u1".into()), vec![nb("bio", "Biology")], Some("bio"));
        let active = s.active().expect("created notebook should be active");
        assert_eq!(active.name, "Biology");
        assert_eq!(active, &s.notebooks[0]);
    }

    #[test]
    fn test_prefer_active_overrides_previous_selection() {
        let mut s = NotebookState::new(Some("n1".into()));
        let t = s.begin_reload();
        s.finish_reload(t, Some("u1".into()), vec![nb("n3", "C"), nb("n1", "A")], Some("n3"));
        assert_eq!(s.active_id.as_deref(), Some("n3"));
    }

    #[test]
    fn test_persisted_selection_survives_first_load() {
        let mut s = NotebookState::new(Some("n2".into()));
        let t = s.begin_reload();
        s.finish_reload(t, Some("u1".into()), vec![nb("n1", "A"), nb("n2", "B")], None);
        assert_eq!(s.active_id.as_deref(), Some("n2"));
    }

    #[test]
    fn test_signed_out_load_resets() {
        let mut s = NotebookState::new(None);
        let t = s.begin_reload();
        s.finish_reload(t, Some("u1".into()), vec![nb("n1", "A")], None);

        let t = s.begin_reload();
        s.finish_reload(t, None, vec![], None);
        assert!(s.notebooks.is_empty());
        assert!(s.active_id.is_none());
        assert!(s.is_loaded_for(None));
        assert!(!s.is_loaded_for(Some("u1")));
    }

    #[test]
    fn test_select_rejects_unknown_id_and_does_not_copy() {
        let mut s = NotebookState::new(None);
        let t = s.begin_reload();
        s.finish_reload(t, Some("u1".into()), vec![nb("n1", "A"), nb("n2", "B")], None);

        assert!(!s.select(Some("nope")));
        assert_eq!(s.active_id.as_deref(), Some("n1"));

        assert!(s.select(Some("n2")));
        s.notebooks[1].name = "Renamed".to_string();
        assert_eq!(s.active().map(|n| n.name.as_str()), Some("Renamed"));

        assert!(s.select(None));
        assert!(s.active().is_none());
    }

    #[test]
    fn test_is_loaded_for_tracks_user() {
        let mut s = NotebookState::new(None);
        assert!(!s.is_loaded_for(None));
        let t = s.begin_reload();
        s.finish_reload(t, Some("u1".into()), vec![], None);
        assert!(s.is_loaded_for(Some("u1")));
        assert!(!s.is_loaded_for(Some("u2")));
    }
}
