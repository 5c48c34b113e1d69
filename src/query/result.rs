use serde::{Deserialize, Serialize};

/// Page metadata returned next to the items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Matches after filtering, before pagination.
    pub total_items: usize,
    /// Items on this page.
    pub item_count: usize,
    pub items_per_page: u32,
    pub total_pages: usize,
    pub current_page: u32,
}

/// One page of query results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult<M> {
    pub items: Vec<M>,
    pub meta: PageMeta,
}

impl<M> QueryResult<M> {
    pub fn has_next_page(&self) -> bool {
        (self.meta.current_page as usize) < self.meta.total_pages
    }

    pub fn has_previous_page(&self) -> bool {
        self.meta.current_page > 1
    }

    pub fn map<N>(self, f: impl FnMut(M) -> N) -> QueryResult<N> {
        QueryResult {
            items: self.items.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}
