//! Collections - immutable, shareable record snapshots.
//!
//! A collection is built once (e.g. from the mock generator at startup) and
//! never changes afterwards. Clones share the same snapshot, so concurrent
//! readers need no locking.
//!
//! The HTTP layer talks to data through [`QuerySource`], which
//! [`Collection`] implements.

mod in_memory;
mod source;

use thiserror::Error;

pub use in_memory::Collection;
pub use source::QuerySource;

/// Error type for query sources.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// The backing data could not be reached.
    #[error("collection unavailable: {0}")]
    Unavailable(String),
    #[error("collection error: {0}")]
    Other(String),
}
