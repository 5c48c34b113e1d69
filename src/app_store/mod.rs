//! app_store - cross-cutting dashboard state behind an injectable store.
//!
//! All writes go through [`Action`]s and the pure [`reduce`] function.
//! [`AppStore`] is a cheap, cloneable handle; layout code reads with the
//! selectors or watches for changes via [`AppStore::subscribe`].
//!
//! ```ignore
//! let store = AppStore::new();
//! let _crumbs = register_breadcrumbs(&store, vec![Breadcrumb::link("Roles", "/roles")]);
//!
//! let errors = ErrorHandler::new(store.clone());
//! if let Err(failure) = client.roles(&params).await {
//!     errors.handle(&failure, Some("roles-table"), "/roles?page=2");
//! }
//! assert!(store.error_for("roles-table").is_some());
//! ```

mod breadcrumbs;
mod error_handler;
mod reducer;
mod state;
mod store;

pub use breadcrumbs::{register_breadcrumbs, BreadcrumbRegistration};
pub use error_handler::{ErrorHandler, ErrorOutcome, DEFAULT_LOGIN_ROUTE, RETURN_URL_PARAM};
pub use reducer::{reduce, Action};
pub use state::{
    AppState, Breadcrumb, ErrorKind, Notification, NotificationKind, SectionError, SectionId,
    Theme,
};
pub use store::AppStore;
