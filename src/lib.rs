//! hrdesk - a mock HR roles backend and the headless state a roles dashboard
//! runs on.
//!
//! - [`record`]: typed field tables for queryable rows, derived with `#[derive(Record)]`
//! - [`mock`]: mock role generation
//! - [`collection`] / [`query`]: query a read-only collection
//! - `api`: the axum HTTP surface (`http` feature)
//! - [`table`]: data table state and rendering without a UI toolkit
//! - [`app_store`]: global dashboard state and error handling
//! - [`fetch`]: HTTP client (`client` feature) and polling

// The Record derive emits `::hrdesk::` paths.
extern crate self as hrdesk;

#[cfg(feature = "http")]
pub mod api;
pub mod app_store;
pub mod collection;
pub mod config;
pub mod fetch;
pub mod logging;
pub mod mock;
pub mod query;
pub mod record;
pub mod table;
pub mod wire;

pub use collection::{Collection, CollectionError, QuerySource};
pub use config::{ConfigError, ServerConfig};
pub use query::{query, PageMeta, QueryParams, QueryResult, SortOrder};
pub use record::{FieldDescriptor, FieldKind, FieldValue, Record, Role};
