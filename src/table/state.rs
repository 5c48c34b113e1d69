use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::query::{QueryParams, SortOrder};

pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSort {
    pub id: String,
    pub desc: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    /// Zero-based.
    pub page_index: u32,
    pub page_size: u32,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnFilter {
    pub id: String,
    pub value: String,
}

/// A state patch emitted by the table. Each variant replaces one slice of
/// [`TableState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableMessage {
    Sorting(Vec<ColumnSort>),
    Pagination(PaginationState),
    ColumnFilters(Vec<ColumnFilter>),
    ColumnVisibility(BTreeMap<String, bool>),
    RowSelection(BTreeMap<String, bool>),
}

/// Everything a data table renders from, owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableState {
    pub sorting: Vec<ColumnSort>,
    pub pagination: PaginationState,
    pub column_filters: Vec<ColumnFilter>,
    /// Absent means visible.
    pub column_visibility: BTreeMap<String, bool>,
    /// Keyed by row id. Absent means unselected.
    pub row_selection: BTreeMap<String, bool>,
}

impl TableState {
    pub fn apply(&mut self, message: TableMessage) {
        match message {
            TableMessage::Sorting(sorting) => self.on_sorting_change(sorting),
            TableMessage::Pagination(pagination) => self.on_pagination_change(pagination),
            TableMessage::ColumnFilters(filters) => self.on_column_filters_change(filters),
            TableMessage::ColumnVisibility(visibility) => {
                self.on_column_visibility_change(visibility)
            }
            TableMessage::RowSelection(selection) => self.on_row_selection_change(selection),
        }
    }

    /// A new ordering invalidates the current page.
    pub fn on_sorting_change(&mut self, sorting: Vec<ColumnSort>) {
        if self.sorting != sorting {
            self.pagination.page_index = 0;
        }
        self.sorting = sorting;
    }

    pub fn on_pagination_change(&mut self, pagination: PaginationState) {
        self.pagination = PaginationState {
            page_index: pagination.page_index,
            page_size: pagination.page_size.max(1),
        };
    }

    /// A new filter set invalidates the current page.
    pub fn on_column_filters_change(&mut self, filters: Vec<ColumnFilter>) {
        let filters: Vec<_> = filters.into_iter().filter(|f| !f.value.is_empty()).collect();
        if self.column_filters != filters {
            self.pagination.page_index = 0;
        }
        self.column_filters = filters;
    }

    pub fn on_column_visibility_change(&mut self, visibility: BTreeMap<String, bool>) {
        self.column_visibility = visibility;
    }

    pub fn on_row_selection_change(&mut self, selection: BTreeMap<String, bool>) {
        self.row_selection = selection.into_iter().filter(|(_, selected)| *selected).collect();
    }

    pub fn is_column_visible(&self, id: &str) -> bool {
        self.column_visibility.get(id).copied().unwrap_or(true)
    }

    pub fn is_row_selected(&self, id: &str) -> bool {
        self.row_selection.get(id).copied().unwrap_or(false)
    }

    pub fn selected_row_ids(&self) -> impl Iterator<Item = &str> {
        self.row_selection
            .iter()
            .filter(|(_, selected)| **selected)
            .map(|(id, _)| id.as_str())
    }

    pub fn sort_for(&self, id: &str) -> Option<&ColumnSort> {
        self.sorting.iter().find(|s| s.id == id)
    }

    pub fn filter_for(&self, id: &str) -> Option<&str> {
        self.column_filters
            .iter()
            .find(|f| f.id == id)
            .map(|f| f.value.as_str())
    }

    /// The remote query that fetches the page this state describes.
    pub fn to_query_params(&self) -> QueryParams {
        let mut params = QueryParams::new()
            .page(self.pagination.page_index.saturating_add(1))
            .limit(self.pagination.page_size);

        if let Some(sort) = self.sorting.first() {
            let order = if sort.desc {
                SortOrder::Desc
            } else {
                SortOrder::Asc
            };
            params = params.sort_by(sort.id.clone(), order);
        }

        for filter in &self.column_filters {
            params = params.filter(filter.id.clone(), filter.value.clone());
        }

        params
    }
}
