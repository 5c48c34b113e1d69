use std::time::Duration;

use crate::collection::{CollectionError, QuerySource};
use crate::query::{QueryParams, QueryResult};
use crate::record::Role;

pub use crate::wire::{AuthInfo, AuthInfoData, Health};

/// Simulated network latency before every roles response.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(300);

/// Everything the roles endpoints need: the data, the simulated latency,
/// and the scopes reported by `/api/auth/info`.
pub struct RolesApi<S> {
    source: S,
    latency: Duration,
    scopes: Vec<String>,
}

impl<S: QuerySource<Role>> RolesApi<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            latency: DEFAULT_LATENCY,
            scopes: Vec::new(),
        }
    }

    /// Builder pattern - returns `self` for chaining.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_scopes<I, T>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.scopes = scopes.into_iter().map(Into::into).collect();
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Wait out the simulated latency, then query.
    pub async fn roles(&self, params: &QueryParams) -> Result<QueryResult<Role>, CollectionError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let result = self.source.query(params)?;
        tracing::debug!(
            collection = self.source.collection(),
            page = params.page,
            limit = params.limit,
            sort_by = ?params.sort_by,
            filters = params.filter.len(),
            total_items = result.meta.total_items,
            item_count = result.meta.item_count,
            "roles query"
        );
        Ok(result)
    }

    pub fn auth_info(&self) -> AuthInfo {
        AuthInfo::success(self.scopes.clone())
    }

    pub fn health(&self) -> Health {
        Health {
            ok: true,
            collection: self.source.collection().to_string(),
            records: self.source.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::Collection;
    use crate::mock::{generate_with, SequentialIds};

    fn api() -> RolesApi<Collection<Role>> {
        RolesApi::new(Collection::new(generate_with(25, &mut SequentialIds::new("role"))))
            .with_latency(Duration::ZERO)
            .with_scopes(["roles:read", "jobs:read"])
    }

    #[tokio::test]
    async fn roles_queries_the_source() {
        let result = api().roles(&QueryParams::new().page(3)).await.unwrap();
        assert_eq!(result.items.len(), 5);
        assert_eq!(result.meta.total_pages, 3);
    }

    #[tokio::test]
    async fn latency_is_applied() {
        let api = api().with_latency(Duration::from_millis(40));
        let started = std::time::Instant::now();
        api.roles(&QueryParams::new()).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(40));
    }

    #[test]
    fn auth_info_and_health() {
        let api = api();
        assert_eq!(api.auth_info().data.scopes, vec!["roles:read", "jobs:read"]);
        assert_eq!(api.health().records, 25);
        assert_eq!(api.health().collection, "roles");
        assert_eq!(RolesApi::new(Collection::<Role>::new(vec![])).latency(), DEFAULT_LATENCY);
    }
}
