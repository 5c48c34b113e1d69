//! Query engine - filter, sort and page an in-memory record slice.
//!
//! The steps always run in the same order:
//!
//! 1. **Filter**: every non-empty `filter[key]` must match (AND).
//! 2. **Sort**: stable single-key sort on `sort_by`, reversed for `desc`.
//! 3. **Paginate**: the 1-indexed `page` of `limit` items.
//!
//! ```ignore
//! use hrdesk::{query, QueryParams, SortOrder};
//!
//! let params = QueryParams::new()
//!     .page(2)
//!     .limit(20)
//!     .sort_by("name", SortOrder::Desc)
//!     .filter("name", "admin");
//! let result = query(&roles, &params);
//! assert!(result.meta.item_count <= 20);
//! ```

mod compare;
mod engine;
mod params;
mod result;

pub use compare::locale_compare;
pub use engine::query;
pub use params::{
    QueryParams, SortOrder, DEFAULT_LIMIT, DEFAULT_PAGE, FILTER_PREFIX, FILTER_SUFFIX,
};
pub use result::{PageMeta, QueryResult};
