use super::reducer::Action;
use super::state::Breadcrumb;
use super::store::AppStore;

/// Keeps a page's breadcrumbs registered. Dropping it clears them.
#[must_use = "breadcrumbs are cleared as soon as the registration is dropped"]
pub struct BreadcrumbRegistration {
    store: AppStore,
}

impl BreadcrumbRegistration {
    /// Replace the registered trail without re-registering.
    pub fn update(&self, breadcrumbs: Vec<Breadcrumb>) {
        self.store.dispatch(Action::SetBreadcrumbs(breadcrumbs));
    }
}

impl Drop for BreadcrumbRegistration {
    fn drop(&mut self) {
        self.store.dispatch(Action::ClearBreadcrumbs);
    }
}

/// Set the breadcrumb trail for the lifetime of the returned guard.
pub fn register_breadcrumbs(store: &AppStore, breadcrumbs: Vec<Breadcrumb>) -> BreadcrumbRegistration {
    store.dispatch(Action::SetBreadcrumbs(breadcrumbs));
    BreadcrumbRegistration {
        store: store.clone(),
    }
}
