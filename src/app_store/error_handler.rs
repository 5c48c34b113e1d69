use crate::fetch::RequestFailure;

use super::reducer::Action;
use super::state::{ErrorKind, NotificationKind, SectionError, SectionId};
use super::store::AppStore;

pub const DEFAULT_LOGIN_ROUTE: &str = "/login";
pub const RETURN_URL_PARAM: &str = "returnUrl";

const NETWORK_MESSAGE: &str = "Network error. Please check your connection.";
const UNAUTHORIZED_MESSAGE: &str = "Your session has expired. Please sign in again.";
const FORBIDDEN_MESSAGE: &str = "You do not have permission to perform this action.";
const SERVER_MESSAGE: &str = "Server error. Please try again later.";
const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred.";

/// What [`ErrorHandler::handle`] did with a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorOutcome {
    pub kind: ErrorKind,
    pub message: String,
    /// Set when the error was recorded against a section.
    pub section_id: Option<SectionId>,
    /// Set when a toast was shown instead.
    pub notification_id: Option<u64>,
    /// Login route to navigate to, for 401s.
    pub redirect: Option<String>,
}

/// Turns request failures into store updates.
///
/// With a section id the error is recorded for that section's boundary to
/// render inline (with retry); without one it becomes an error toast.
#[derive(Clone)]
pub struct ErrorHandler {
    store: AppStore,
    login_route: String,
}

impl ErrorHandler {
    pub fn new(store: AppStore) -> Self {
        Self {
            store,
            login_route: DEFAULT_LOGIN_ROUTE.to_string(),
        }
    }

    pub fn with_login_route(mut self, route: impl Into<String>) -> Self {
        self.login_route = route.into();
        self
    }

    pub fn classify(failure: &RequestFailure) -> ErrorKind {
        match failure {
            RequestFailure::Network(_) => ErrorKind::Network,
            RequestFailure::Status { status, .. } if is_server_kind(*status) => ErrorKind::Server,
            RequestFailure::Status { .. } | RequestFailure::Decode(_) => ErrorKind::Unexpected,
        }
    }

    pub fn message_for(failure: &RequestFailure) -> &'static str {
        match failure {
            RequestFailure::Network(_) => NETWORK_MESSAGE,
            RequestFailure::Status { status: 401, .. } => UNAUTHORIZED_MESSAGE,
            RequestFailure::Status { status: 403, .. } => FORBIDDEN_MESSAGE,
            RequestFailure::Status { status, .. } if is_server_kind(*status) => SERVER_MESSAGE,
            _ => UNEXPECTED_MESSAGE,
        }
    }

    pub fn handle(
        &self,
        failure: &RequestFailure,
        section_id: Option<&str>,
        current_url: &str,
    ) -> ErrorOutcome {
        let kind = Self::classify(failure);
        let message = Self::message_for(failure).to_string();
        tracing::warn!(?kind, status = ?failure.status(), error = %failure, "request failed");

        let mut outcome = ErrorOutcome {
            kind,
            message: message.clone(),
            section_id: None,
            notification_id: None,
            redirect: None,
        };

        match section_id {
            Some(section_id) => {
                self.store.dispatch(Action::SetError(SectionError {
                    section_id: section_id.to_string(),
                    message,
                    kind,
                }));
                outcome.section_id = Some(section_id.to_string());
            }
            None => {
                outcome.notification_id = Some(self.store.notify(NotificationKind::Error, message));
            }
        }

        if failure.is_unauthorized() {
            outcome.redirect = Some(self.login_redirect(current_url));
        }

        outcome
    }

    /// `"/login?returnUrl=<current_url, url-encoded>"`.
    pub fn login_redirect(&self, current_url: &str) -> String {
        match serde_urlencoded::to_string([(RETURN_URL_PARAM, current_url)]) {
            Ok(query) => format!("{}?{}", self.login_route, query),
            Err(_) => self.login_route.clone(),
        }
    }

    /// Clear a section's error so its boundary re-renders the content.
    pub fn retry(&self, section_id: &str) {
        self.store.dispatch(Action::ClearError(section_id.to_string()));
    }
}

/// 401, 403 and 5xx come from the server's decision; other statuses do not.
fn is_server_kind(status: u16) -> bool {
    matches!(status, 401 | 403 | 500..=599)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16) -> RequestFailure {
        RequestFailure::Status {
            status: code,
            message: "x".into(),
        }
    }

    #[test]
    fn classification() {
        assert_eq!(
            ErrorHandler::classify(&RequestFailure::Network("refused".into())),
            ErrorKind::Network
        );
        assert_eq!(ErrorHandler::classify(&status(401)), ErrorKind::Server);
        assert_eq!(ErrorHandler::classify(&status(403)), ErrorKind::Server);
        assert_eq!(ErrorHandler::classify(&status(503)), ErrorKind::Server);
        assert_eq!(ErrorHandler::classify(&status(404)), ErrorKind::Unexpected);
        assert_eq!(
            ErrorHandler::classify(&RequestFailure::Decode("eof".into())),
            ErrorKind::Unexpected
        );
    }

    #[test]
    fn section_errors_are_recorded() {
        let store = AppStore::new();
        let handler = ErrorHandler::new(store.clone());

        let outcome = handler.handle(&status(500), Some("roles-table"), "/roles");
        assert_eq!(outcome.section_id.as_deref(), Some("roles-table"));
        assert_eq!(outcome.redirect, None);

        let recorded = store.error_for("roles-table").unwrap();
        assert_eq!(recorded.kind, ErrorKind::Server);
        assert_eq!(recorded.message, SERVER_MESSAGE);
        assert!(store.notifications().is_empty());

        handler.retry("roles-table");
        assert!(store.error_for("roles-table").is_none());
    }

    #[test]
    fn sectionless_errors_become_toasts() {
        let store = AppStore::new();
        let handler = ErrorHandler::new(store.clone());

        let outcome = handler.handle(&RequestFailure::Network("refused".into()), None, "/roles");
        let toasts = store.notifications();
        assert_eq!(toasts.len(), 1);
        assert_eq!(Some(toasts[0].id), outcome.notification_id);
        assert_eq!(toasts[0].kind, NotificationKind::Error);
        assert_eq!(toasts[0].message, NETWORK_MESSAGE);
    }

    #[test]
    fn unauthorized_redirects_with_return_url() {
        let handler = ErrorHandler::new(AppStore::new());
        let outcome = handler.handle(&status(401), None, "/roles?page=2");
        assert_eq!(outcome.message, UNAUTHORIZED_MESSAGE);
        assert_eq!(
            outcome.redirect.as_deref(),
            Some("/login?returnUrl=%2Froles%3Fpage%3D2")
        );
    }

    #[test]
    fn custom_login_route() {
        let handler = ErrorHandler::new(AppStore::new()).with_login_route("/auth/sign-in");
        assert_eq!(handler.login_redirect("/"), "/auth/sign-in?returnUrl=%2F");
    }

    #[test]
    fn forbidden_message() {
        assert_eq!(ErrorHandler::message_for(&status(403)), FORBIDDEN_MESSAGE);
        assert_eq!(ErrorHandler::message_for(&status(418)), UNEXPECTED_MESSAGE);
    }
}
