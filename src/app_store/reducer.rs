use super::state::{AppState, Breadcrumb, Notification, SectionError, SectionId};

/// Every way the app state can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetBreadcrumbs(Vec<Breadcrumb>),
    ClearBreadcrumbs,
    /// Replaces any error already recorded for the same section.
    SetError(SectionError),
    ClearError(SectionId),
    ToggleTheme,
    AddNotification(Notification),
    DismissNotification(u64),
    ClearNotifications,
}

/// Apply one action. Pure: the input is consumed and the next state returned.
pub fn reduce(mut state: AppState, action: Action) -> AppState {
    match action {
        Action::SetBreadcrumbs(breadcrumbs) => state.breadcrumbs = breadcrumbs,
        Action::ClearBreadcrumbs => state.breadcrumbs.clear(),
        Action::SetError(error) => {
            state.errors.insert(error.section_id.clone(), error);
        }
        Action::ClearError(section_id) => {
            state.errors.remove(&section_id);
        }
        Action::ToggleTheme => state.theme = state.theme.toggled(),
        Action::AddNotification(notification) => state.notifications.push(notification),
        Action::DismissNotification(id) => state.notifications.retain(|n| n.id != id),
        Action::ClearNotifications => state.notifications.clear(),
    }
    state
}
