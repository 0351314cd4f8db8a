use crate::util::schedule;
use leptos::prelude::*;

/// How long a toast stays up unless dismissed.
pub(crate) const TOAST_DURATION_MS: i32 = 4_000;

/// Older toasts are dropped past this many.
const TOAST_LIMIT: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ToastKind {
    Info,
    Success,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(
        &mut self,
        kind: ToastKind,
        title: impl Into<String>,
        description: Option<String>,
    ) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            kind,
            title: title.into(),
            description,
        });
        if self.items.len() > TOAST_LIMIT {
            let overflow = self.items.len() - TOAST_LIMIT;
            self.items.drain(..overflow);
        }
        id
    }

    /// No-op for ids already gone.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Shared handle to the toast queue.
#[derive(Clone, Copy)]
pub(crate) struct Toasts {
    queue: RwSignal<ToastQueue>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn items(&self) -> Vec<Toast> {
        self.queue.with(|q| q.items().to_vec())
    }

    pub fn show(&self, kind: ToastKind, title: impl Into<String>, description: Option<String>) {
        let id = self.queue.try_update(|q| q.push(kind, title, description));
        let Some(id) = id else {
            return;
        };
        let queue = self.queue;
        let _ = schedule(TOAST_DURATION_MS, move || {
            // The owner may be gone by the time the timer fires.
            let _ = queue.try_update(|q| q.dismiss(id));
        });
    }

    pub fn info(&self, title: impl Into<String>, description: impl Into<String>) {
        self.show(ToastKind::Info, title, Some(description.into()));
    }

    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) {
        self.show(ToastKind::Success, title, Some(description.into()));
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.show(ToastKind::Destructive, title, Some(description.into()));
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut q = ToastQueue::default();
        let a = q.push(ToastKind::Info, "a", None);
        let b = q.push(ToastKind::Success, "b", Some("done".to_string()));
        assert!(b > a);
        assert_eq!(q.items().len(), 2);
        assert_eq!(q.items()[1].description.as_deref(), Some("done"));
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut q = ToastQueue::default();
        for i in 0..5 {
            q.push(ToastKind::Info, format!("t{i}"), None);
        }
        let titles: Vec<&str> = q.items().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["t2", "t3", "t4"]);
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut q = ToastQueue::default();
        let id = q.push(ToastKind::Destructive, "oops", None);
        q.push(ToastKind::Info, "keep", None);
        q.dismiss(id);
        q.dismiss(id);
        assert_eq!(q.items().len(), 1);
        assert_eq!(q.items()[0].title, "keep");
    }
}
