use std::cmp::Ordering;

use crate::record::{FieldValue, Record};

use super::compare::locale_compare;
use super::params::{QueryParams, SortOrder};
use super::result::{PageMeta, QueryResult};

/// Run `params` over `records`. Never fails and never mutates the input.
pub fn query<M: Record>(records: &[M], params: &QueryParams) -> QueryResult<M> {
    let mut matched: Vec<&M> = records
        .iter()
        .filter(|record| matches_filters(*record, params))
        .collect();

    if let Some(key) = params.sort_by.as_deref() {
        matched.sort_by(|a, b| {
            let ordering = compare_field(a.field(key), b.field(key));
            match params.sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
    }

    let limit = params.limit.max(1);
    let page = params.page.max(1);
    let total_items = matched.len();

    let items: Vec<M> = matched
        .into_iter()
        .skip(params.offset())
        .take(limit as usize)
        .cloned()
        .collect();

    QueryResult {
        meta: PageMeta {
            total_items,
            item_count: items.len(),
            items_per_page: limit,
            total_pages: total_items.div_ceil(limit as usize),
            current_page: page,
        },
        items,
    }
}

fn matches_filters<M: Record>(record: &M, params: &QueryParams) -> bool {
    params
        .active_filters()
        .all(|(key, needle)| match record.field(key) {
            Some(value) => value.matches(needle),
            None => false,
        })
}

/// Text against text uses locale ordering; every other pairing is a tie.
fn compare_field(a: Option<FieldValue<'_>>, b: Option<FieldValue<'_>>) -> Ordering {
    match (a, b) {
        (Some(FieldValue::Text(a)), Some(FieldValue::Text(b))) => locale_compare(a, b),
        _ => Ordering::Equal,
    }
}
