//! App store flows as a page would drive them.

use hrdesk::app_store::{
    register_breadcrumbs, reduce, Action, AppState, AppStore, Breadcrumb, ErrorHandler, ErrorKind,
    NotificationKind, Theme,
};
use hrdesk::fetch::RequestFailure;

#[tokio::test]
async fn subscribers_see_every_dispatch() {
    let store = AppStore::new();
    let mut rx = store.subscribe();

    store.dispatch(Action::ToggleTheme);
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().theme, Theme::Dark);

    let id = store.notify(NotificationKind::Success, "Role saved");
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().notifications[0].id, id);

    store.dispatch(Action::DismissNotification(id));
    rx.changed().await.unwrap();
    assert!(rx.borrow_and_update().notifications.is_empty());
}

#[test]
fn page_lifecycle_sets_and_clears_breadcrumbs() {
    let store = AppStore::new();

    {
        let crumbs = register_breadcrumbs(
            &store,
            vec![Breadcrumb::link("Dashboard", "/"), Breadcrumb::current("Roles")],
        );
        assert_eq!(store.breadcrumbs().len(), 2);
        assert_eq!(store.breadcrumbs()[1].href, None);

        crumbs.update(vec![
            Breadcrumb::link("Dashboard", "/"),
            Breadcrumb::link("Roles", "/roles"),
            Breadcrumb::current("Admin:Jobs"),
        ]);
        assert_eq!(store.breadcrumbs().len(), 3);
    }

    assert!(store.breadcrumbs().is_empty());
}

#[test]
fn expired_session_redirects_with_return_url() {
    let store = AppStore::new();
    let handler = ErrorHandler::new(store.clone());
    let failure = RequestFailure::Status {
        status: 401,
        message: "Unauthorized".into(),
    };

    let outcome = handler.handle(&failure, None, "/roles?page=2&sortBy=name");
    assert_eq!(outcome.kind, ErrorKind::Server);
    assert_eq!(
        outcome.redirect.as_deref(),
        Some("/login?returnUrl=%2Froles%3Fpage%3D2%26sortBy%3Dname")
    );
    assert_eq!(
        store.notifications()[0].message,
        "Your session has expired. Please sign in again."
    );

    let custom = ErrorHandler::new(store).with_login_route("/auth/sign-in");
    assert_eq!(custom.login_redirect("/"), "/auth/sign-in?returnUrl=%2F");
}

#[test]
fn section_errors_are_isolated() {
    let store = AppStore::new();
    let handler = ErrorHandler::new(store.clone());

    handler.handle(&RequestFailure::Network("refused".into()), Some("roles"), "/");
    handler.handle(&RequestFailure::Decode("eof".into()), Some("jobs"), "/");

    assert_eq!(store.error_for("roles").unwrap().kind, ErrorKind::Network);
    assert_eq!(store.error_for("jobs").unwrap().kind, ErrorKind::Unexpected);
    assert!(store.notifications().is_empty());

    handler.retry("roles");
    assert!(store.error_for("roles").is_none());
    assert!(store.error_for("jobs").is_some());
}

#[test]
fn reducer_replays_to_the_store_state() {
    let actions = vec![
        Action::ToggleTheme,
        Action::SetBreadcrumbs(vec![Breadcrumb::current("Roles")]),
        Action::ToggleTheme,
        Action::ClearBreadcrumbs,
    ];

    let store = AppStore::new();
    let mut replayed = AppState::default();
    for action in actions {
        replayed = reduce(replayed, action.clone());
        store.dispatch(action);
    }
    assert_eq!(store.snapshot(), replayed);
    assert_eq!(replayed.theme, Theme::Light);
}
