use crate::record::Record;

use super::columns::{ColumnDef, SELECT_COLUMN_ID};
use super::state::{ColumnFilter, ColumnSort, PaginationState, TableMessage, TableState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    None,
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub id: String,
    pub label: String,
    pub sortable: bool,
    pub sort: SortIndicator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Checkbox(bool),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: String,
    pub selected: bool,
    /// Aligned with `TableView::headers`.
    pub cells: Vec<Cell>,
}

/// Render output of a [`DataTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<RowView>,
    pub page_index: u32,
    pub page_count: usize,
    pub all_selected: bool,
    pub some_selected: bool,
}

/// A controlled table over one page of rows.
///
/// Borrowing everything keeps it a pure view: intent methods compute the
/// next state slice and return it instead of mutating anything.
pub struct DataTable<'a, M> {
    rows: &'a [M],
    columns: &'a [ColumnDef<M>],
    state: &'a TableState,
    page_count: usize,
    enable_row_selection: bool,
}

impl<'a, M: Record> DataTable<'a, M> {
    pub fn new(rows: &'a [M], columns: &'a [ColumnDef<M>], state: &'a TableState) -> Self {
        Self {
            rows,
            columns,
            state,
            page_count: 1,
            enable_row_selection: false,
        }
    }

    /// Total pages as reported by the backend.
    pub fn page_count(mut self, page_count: usize) -> Self {
        self.page_count = page_count;
        self
    }

    pub fn enable_row_selection(mut self, enable: bool) -> Self {
        self.enable_row_selection = enable;
        self
    }

    fn column(&self, id: &str) -> Option<&ColumnDef<M>> {
        self.columns.iter().find(|c| c.id == id)
    }

    // ---------------------------------------------------------------------
    // Sorting
    // ---------------------------------------------------------------------

    /// Cycle a column through ascending, descending, unsorted.
    ///
    /// `None` for unknown or non-sortable columns.
    pub fn toggle_sort(&self, column_id: &str) -> Option<TableMessage> {
        let column = self.column(column_id).filter(|c| c.enable_sorting)?;
        let next = match self.state.sort_for(column.id) {
            None => vec![ColumnSort {
                id: column.id.to_string(),
                desc: false,
            }],
            Some(sort) if !sort.desc => vec![ColumnSort {
                id: column.id.to_string(),
                desc: true,
            }],
            Some(_) => Vec::new(),
        };
        Some(TableMessage::Sorting(next))
    }

    // ---------------------------------------------------------------------
    // Pagination
    // ---------------------------------------------------------------------

    pub fn can_previous_page(&self) -> bool {
        self.state.pagination.page_index > 0
    }

    pub fn can_next_page(&self) -> bool {
        (self.state.pagination.page_index as usize + 1) < self.page_count
    }

    pub fn set_page(&self, page_index: u32) -> TableMessage {
        let last = self.page_count.saturating_sub(1).min(u32::MAX as usize) as u32;
        TableMessage::Pagination(PaginationState {
            page_index: page_index.min(last),
            page_size: self.state.pagination.page_size,
        })
    }

    pub fn next_page(&self) -> Option<TableMessage> {
        self.can_next_page()
            .then(|| self.set_page(self.state.pagination.page_index + 1))
    }

    pub fn previous_page(&self) -> Option<TableMessage> {
        self.can_previous_page()
            .then(|| self.set_page(self.state.pagination.page_index - 1))
    }

    /// Changing the page size returns to the first page.
    pub fn set_page_size(&self, page_size: u32) -> TableMessage {
        TableMessage::Pagination(PaginationState {
            page_index: 0,
            page_size: page_size.max(1),
        })
    }

    // ---------------------------------------------------------------------
    // Filters and visibility
    // ---------------------------------------------------------------------

    /// Set one column's filter. An empty value removes it.
    pub fn set_filter(&self, column_id: &str, value: &str) -> TableMessage {
        let mut filters: Vec<ColumnFilter> = self
            .state
            .column_filters
            .iter()
            .filter(|f| f.id != column_id)
            .cloned()
            .collect();
        if !value.is_empty() {
            filters.push(ColumnFilter {
                id: column_id.to_string(),
                value: value.to_string(),
            });
        }
        TableMessage::ColumnFilters(filters)
    }

    /// `None` for unknown columns and columns that cannot be hidden.
    pub fn toggle_column(&self, column_id: &str) -> Option<TableMessage> {
        let column = self.column(column_id).filter(|c| c.enable_hiding)?;
        let mut visibility = self.state.column_visibility.clone();
        visibility.insert(
            column.id.to_string(),
            !self.state.is_column_visible(column.id),
        );
        Some(TableMessage::ColumnVisibility(visibility))
    }

    // ---------------------------------------------------------------------
    // Row selection
    // ---------------------------------------------------------------------

    pub fn toggle_row(&self, row_id: &str) -> TableMessage {
        let mut selection = self.state.row_selection.clone();
        if self.state.is_row_selected(row_id) {
            selection.remove(row_id);
        } else {
            selection.insert(row_id.to_string(), true);
        }
        TableMessage::RowSelection(selection)
    }

    /// Select every row on the page, or clear them if all are selected.
    /// Selections on other pages are kept.
    pub fn toggle_all_rows(&self) -> TableMessage {
        let mut selection = self.state.row_selection.clone();
        let select = !self.is_all_selected();
        for row in self.rows {
            if select {
                selection.insert(row.id().to_string(), true);
            } else {
                selection.remove(row.id());
            }
        }
        TableMessage::RowSelection(selection)
    }

    pub fn is_all_selected(&self) -> bool {
        !self.rows.is_empty() && self.rows.iter().all(|r| self.state.is_row_selected(r.id()))
    }

    pub fn is_some_selected(&self) -> bool {
        !self.is_all_selected() && self.rows.iter().any(|r| self.state.is_row_selected(r.id()))
    }

    // ---------------------------------------------------------------------
    // Rendering
    // ---------------------------------------------------------------------

    /// Rows in the order given; hidden columns are skipped.
    pub fn render(&self) -> TableView {
        let visible: Vec<&ColumnDef<M>> = self
            .columns
            .iter()
            .filter(|c| self.state.is_column_visible(c.id))
            .collect();

        let mut headers = Vec::with_capacity(visible.len() + 1);
        if self.enable_row_selection {
            headers.push(HeaderCell {
                id: SELECT_COLUMN_ID.to_string(),
                label: String::new(),
                sortable: false,
                sort: SortIndicator::None,
            });
        }
        headers.extend(visible.iter().map(|c| HeaderCell {
            id: c.id.to_string(),
            label: c.header.clone(),
            sortable: c.enable_sorting,
            sort: match self.state.sort_for(c.id) {
                None => SortIndicator::None,
                Some(sort) if sort.desc => SortIndicator::Desc,
                Some(_) => SortIndicator::Asc,
            },
        }));

        let rows = self
            .rows
            .iter()
            .map(|row| {
                let selected = self.state.is_row_selected(row.id());
                let mut cells = Vec::with_capacity(headers.len());
                if self.enable_row_selection {
                    cells.push(Cell::Checkbox(selected));
                }
                cells.extend(visible.iter().map(|c| Cell::Text(c.cell(row))));
                RowView {
                    id: row.id().to_string(),
                    selected,
                    cells,
                }
            })
            .collect();

        TableView {
            headers,
            rows,
            page_index: self.state.pagination.page_index,
            page_count: self.page_count,
            all_selected: self.is_all_selected(),
            some_selected: self.is_some_selected(),
        }
    }
}
