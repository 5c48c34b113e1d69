use std::sync::Arc;

use crate::query::{self, QueryParams, QueryResult};
use crate::record::Record;

use super::{CollectionError, QuerySource};

/// An immutable snapshot of records backed by an `Arc<[M]>`.
///
/// Clone-friendly: clones share the snapshot.
#[derive(Debug)]
pub struct Collection<M> {
    records: Arc<[M]>,
}

impl<M> Clone for Collection<M> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<M: Record> Collection<M> {
    pub fn new(records: Vec<M>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get a record by ID.
    pub fn get(&self, id: &str) -> Option<&M> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &M> {
        self.records.iter()
    }

    /// Records matching a predicate, in collection order.
    pub fn find(&self, predicate: impl Fn(&M) -> bool) -> Vec<&M> {
        self.records.iter().filter(|r| predicate(r)).collect()
    }

    pub fn as_slice(&self) -> &[M] {
        &self.records
    }

    pub fn query(&self, params: &QueryParams) -> QueryResult<M> {
        query::query(&self.records, params)
    }
}

impl<M: Record> From<Vec<M>> for Collection<M> {
    fn from(records: Vec<M>) -> Self {
        Self::new(records)
    }
}

impl<M: Record> FromIterator<M> for Collection<M> {
    fn from_iter<I: IntoIterator<Item = M>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<M: Record> QuerySource<M> for Collection<M> {
    fn len(&self) -> usize {
        self.records.len()
    }

    fn query(&self, params: &QueryParams) -> Result<QueryResult<M>, CollectionError> {
        Ok(Collection::query(self, params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{generate_with, SequentialIds};
    use crate::record::Role;

    fn collection(n: usize) -> Collection<Role> {
        Collection::new(generate_with(n, &mut SequentialIds::new("role")))
    }

    #[test]
    fn get_by_id() {
        let roles = collection(20);
        assert_eq!(roles.get("role-11").unwrap().name, "Admin:Jobs");
        assert!(roles.get("missing").is_none());
    }

    #[test]
    fn find_with_predicate() {
        let roles = collection(200);
        let auditors = roles.find(|r| r.name.starts_with("Auditor:"));
        assert_eq!(auditors.len(), 20);
    }

    #[test]
    fn clone_shares_snapshot() {
        let roles = collection(5);
        let clone = roles.clone();
        assert!(std::ptr::eq(roles.as_slice(), clone.as_slice()));
    }

    #[test]
    fn source_query_never_fails() {
        let roles = collection(12);
        let source: &dyn QuerySource<Role> = &roles;
        let result = source.query(&QueryParams::new().page(2)).unwrap();
        assert_eq!(result.items.len(), 2);
        assert_eq!(source.collection(), "roles");
        assert_eq!(source.len(), 12);
    }

    #[test]
    fn arc_wrapped_source_delegates() {
        let roles = Arc::new(collection(3));
        assert_eq!(QuerySource::<Role>::len(&roles), 3);
        assert!(!QuerySource::<Role>::is_empty(&roles));
    }
}
