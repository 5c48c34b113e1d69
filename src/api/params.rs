//! Query-string decoding for `GET /api/roles`.
//!
//! Nothing here fails: unusable values fall back to the defaults.

use crate::query::{
    QueryParams, SortOrder, DEFAULT_LIMIT, DEFAULT_PAGE, FILTER_PREFIX, FILTER_SUFFIX,
};

/// Build `QueryParams` from decoded query-string pairs.
///
/// - `page`, `limit`: positive decimal integers, else 1 and 10.
/// - `sortBy`: any non-empty string.
/// - `sortOrder`: `asc` or `desc`, else `asc`.
/// - `filter[<field>]`: one filter per field; empty values are ignored.
///
/// Unrecognized keys are ignored. When a key repeats, the last value wins.
pub fn parse_query_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> QueryParams
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut params = QueryParams::new();

    for (key, value) in pairs {
        let (key, value) = (key.as_ref(), value.as_ref());
        match key {
            "page" => params.page = positive_or(key, value, DEFAULT_PAGE),
            "limit" => params.limit = positive_or(key, value, DEFAULT_LIMIT),
            "sortBy" => {
                params.sort_by = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                }
            }
            "sortOrder" => {
                params.sort_order = value.parse().unwrap_or_else(|_| {
                    tracing::warn!(value, "unrecognized sortOrder, using asc");
                    SortOrder::Asc
                })
            }
            _ => {
                if let Some(field) = filter_field(key) {
                    if value.is_empty() {
                        params.filter.remove(field);
                    } else {
                        params.filter.insert(field.to_string(), value.to_string());
                    }
                }
            }
        }
    }

    params
}

/// `"filter[name]"` → `Some("name")`.
fn filter_field(key: &str) -> Option<&str> {
    key.strip_prefix(FILTER_PREFIX)?
        .strip_suffix(FILTER_SUFFIX)
        .filter(|field| !field.is_empty())
}

fn positive_or(key: &str, value: &str, default: u32) -> u32 {
    match value.trim().parse::<u32>() {
        Ok(n) if n >= 1 => n,
        _ => {
            tracing::warn!(key, value, default, "unusable pagination value, using default");
            default
        }
    }
}
