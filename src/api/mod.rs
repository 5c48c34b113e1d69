//! api - HTTP endpoint adapter for the mock roles backend.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /api/roles` - one page of roles. Query string: `page`, `limit`,
//!   `sortBy`, `sortOrder`, and any number of `filter[<field>]=<value>`.
//! - `GET /api/auth/info` - `{ "status": "SUCCESS", "data": { "scopes": [...] } }`.
//! - `GET /api/health` - `{ "ok": true, "collection": "roles", "records": n }`.
//!
//! Other methods on these paths answer 405.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use hrdesk::{api, mock, Collection};
//!
//! let roles = Collection::new(mock::generate(mock::MOCK_ROLE_COUNT));
//! let api = Arc::new(api::RolesApi::new(roles));
//!
//! // Compose with other axum routes
//! let app = api::router(api.clone());
//!
//! // Or serve directly
//! api::serve(api, "0.0.0.0:3000").await?;
//! ```

mod error;
mod http;
mod params;
mod roles_api;

pub use error::ApiError;
pub use http::{router, serve, serve_with_shutdown};
pub use params::parse_query_pairs;
pub use roles_api::{AuthInfo, AuthInfoData, Health, RolesApi, DEFAULT_LATENCY};
