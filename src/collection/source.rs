use std::sync::Arc;

use crate::query::{QueryParams, QueryResult};
use crate::record::Record;

use super::CollectionError;

/// Anything that can answer a page query for records of type `M`.
pub trait QuerySource<M: Record>: Send + Sync {
    /// Collection name, used in logs and health output.
    fn collection(&self) -> &str {
        M::COLLECTION
    }

    /// Number of records before any filtering.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn query(&self, params: &QueryParams) -> Result<QueryResult<M>, CollectionError>;
}

impl<M: Record, S: QuerySource<M> + ?Sized> QuerySource<M> for Arc<S> {
    fn collection(&self) -> &str {
        (**self).collection()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn query(&self, params: &QueryParams) -> Result<QueryResult<M>, CollectionError> {
        (**self).query(params)
    }
}
