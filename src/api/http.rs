//! axum wiring for the roles endpoints.

use std::future::Future;
use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::collection::QuerySource;
use crate::query::QueryResult;
use crate::record::Role;

use super::error::ApiError;
use super::params::parse_query_pairs;
use super::roles_api::RolesApi;

/// Build an axum `Router` serving the roles API.
pub fn router<S: QuerySource<Role> + 'static>(api: Arc<RolesApi<S>>) -> Router {
    Router::new()
        .route(
            "/api/roles",
            get(roles_handler::<S>).fallback(method_not_allowed),
        )
        .route(
            "/api/auth/info",
            get(auth_info_handler::<S>).fallback(method_not_allowed),
        )
        .route(
            "/api/health",
            get(health_handler::<S>).fallback(method_not_allowed),
        )
        .with_state(api)
}

/// Serve the API over HTTP at the given address (e.g. `"0.0.0.0:3000"`).
pub async fn serve<S: QuerySource<Role> + 'static>(
    api: Arc<RolesApi<S>>,
    addr: &str,
) -> Result<(), std::io::Error> {
    serve_with_shutdown(api, addr, std::future::pending()).await
}

/// Like [`serve`], stopping gracefully once `shutdown` resolves.
pub async fn serve_with_shutdown<S, F>(
    api: Arc<RolesApi<S>>,
    addr: &str,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    S: QuerySource<Role> + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(api);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

/// `GET /api/roles` - one page of roles as `{ items, meta }`.
async fn roles_handler<S: QuerySource<Role> + 'static>(
    State(api): State<Arc<RolesApi<S>>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<QueryResult<Role>>, ApiError> {
    let Query(pairs) = query.map_err(|e| ApiError::Extract(e.body_text()))?;
    let params = parse_query_pairs(pairs);
    // A panicking source must still answer 500, so the query runs on its own task.
    let result = tokio::spawn(async move { api.roles(&params).await }).await??;
    Ok(Json(result))
}

/// `GET /api/auth/info` - scopes granted to the caller.
async fn auth_info_handler<S: QuerySource<Role> + 'static>(
    State(api): State<Arc<RolesApi<S>>>,
) -> impl IntoResponse {
    Json(api.auth_info())
}

/// `GET /api/health` - liveness plus the size of the served collection.
async fn health_handler<S: QuerySource<Role> + 'static>(
    State(api): State<Arc<RolesApi<S>>>,
) -> impl IntoResponse {
    Json(api.health())
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
