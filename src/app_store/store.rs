use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

use super::reducer::{reduce, Action};
use super::state::{AppState, Breadcrumb, Notification, NotificationKind, SectionError, Theme};

struct Inner {
    state: watch::Sender<AppState>,
    next_notification_id: AtomicU64,
}

/// Shared app state container.
///
/// Clone-friendly via Arc: clones dispatch into and read from the same state.
/// `dispatch` runs the reducer under the channel's lock, so actions apply one
/// at a time in call order.
#[derive(Clone)]
pub struct AppStore {
    inner: Arc<Inner>,
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AppStore {
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    pub fn with_state(state: AppState) -> Self {
        let (sender, _) = watch::channel(state);
        Self {
            inner: Arc::new(Inner {
                state: sender,
                next_notification_id: AtomicU64::new(1),
            }),
        }
    }

    pub fn dispatch(&self, action: Action) {
        tracing::trace!(?action, "dispatch");
        self.inner.state.send_modify(|state| {
            let current = std::mem::take(state);
            *state = reduce(current, action);
        });
    }

    /// Push a toast and return its id.
    pub fn notify(&self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        let id = self
            .inner
            .next_notification_id
            .fetch_add(1, Ordering::Relaxed);
        self.dispatch(Action::AddNotification(Notification {
            id,
            kind,
            message: message.into(),
        }));
        id
    }

    /// Observe every subsequent change.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.inner.state.subscribe()
    }

    pub fn snapshot(&self) -> AppState {
        self.inner.state.borrow().clone()
    }

    pub fn error_for(&self, section_id: &str) -> Option<SectionError> {
        self.inner.state.borrow().errors.get(section_id).cloned()
    }

    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        self.inner.state.borrow().breadcrumbs.clone()
    }

    pub fn theme(&self) -> Theme {
        self.inner.state.borrow().theme
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.inner.state.borrow().notifications.clone()
    }
}
