//! table - headless, server-driven data table.
//!
//! The table never owns its state. Callers keep a [`TableState`], hand it to
//! a [`DataTable`] for rendering, and apply the [`TableMessage`]s the table
//! produces for user intents:
//!
//! ```ignore
//! let mut state = TableState::default();
//! let table = DataTable::new(&page.items, &columns, &state).page_count(page.meta.total_pages);
//! if let Some(msg) = table.toggle_sort("name") {
//!     state.apply(msg);
//! }
//! let next = client.roles(&state.to_query_params()).await?;
//! ```
//!
//! Rows are rendered exactly as supplied. Ordering and paging happen in the
//! backend.

mod columns;
mod state;
mod view;

pub use columns::{role_columns, ColumnDef, SELECT_COLUMN_ID};
pub use state::{
    ColumnFilter, ColumnSort, PaginationState, TableMessage, TableState, DEFAULT_PAGE_SIZE,
};
pub use view::{Cell, DataTable, HeaderCell, RowView, SortIndicator, TableView};
