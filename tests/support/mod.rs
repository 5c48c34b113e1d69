//! Shared test fixtures: an axum server on an ephemeral port.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use hrdesk::api::{self, RolesApi};
use hrdesk::mock::{generate_with, SequentialIds};
use hrdesk::{Collection, CollectionError, QueryParams, QueryResult, QuerySource, Role};

pub const TEST_SCOPES: [&str; 2] = ["roles:read", "jobs:read"];

/// Mock roles with ids `role-1`, `role-2`, ...
pub fn roles(count: usize) -> Collection<Role> {
    Collection::new(generate_with(count, &mut SequentialIds::new("role")))
}

pub fn roles_api(count: usize) -> RolesApi<Collection<Role>> {
    RolesApi::new(roles(count))
        .with_latency(Duration::ZERO)
        .with_scopes(TEST_SCOPES)
}

/// Bind to port 0 and return the base URL.
pub async fn start_server<S: QuerySource<Role> + 'static>(api: RolesApi<S>) -> String {
    let app = api::router(Arc::new(api));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// A source whose backing store is always down.
pub struct BrokenSource;

impl QuerySource<Role> for BrokenSource {
    fn len(&self) -> usize {
        0
    }

    fn query(&self, _params: &QueryParams) -> Result<QueryResult<Role>, CollectionError> {
        Err(CollectionError::Unavailable("connection reset by peer".into()))
    }
}

/// A source that panics mid-query.
pub struct PanickingSource;

impl QuerySource<Role> for PanickingSource {
    fn len(&self) -> usize {
        1
    }

    fn query(&self, _params: &QueryParams) -> Result<QueryResult<Role>, CollectionError> {
        panic!("index out of bounds in role storage");
    }
}
