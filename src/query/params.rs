use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

/// Filters travel in the query string as `filter[<field>]=<needle>`.
pub const FILTER_PREFIX: &str = "filter[";
pub const FILTER_SUFFIX: &str = "]";

/// Sort direction. Only meaningful together with a sort key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("unknown sort order: {}", other)),
        }
    }
}

/// Parameters for a single page query.
///
/// `page` and `limit` are never below 1; the setters clamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
    pub page: u32,
    pub limit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_order: SortOrder,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub filter: BTreeMap<String, String>,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            sort_by: None,
            sort_order: SortOrder::Asc,
            filter: BTreeMap::new(),
        }
    }
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit.max(1);
        self
    }

    pub fn sort_by(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort_by = Some(field.into());
        self.sort_order = order;
        self
    }

    /// Add a filter. Empty needles are dropped.
    pub fn filter(mut self, field: impl Into<String>, needle: impl Into<String>) -> Self {
        let needle = needle.into();
        if !needle.is_empty() {
            self.filter.insert(field.into(), needle);
        }
        self
    }

    /// Filters with a non-empty needle.
    pub fn active_filters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.filter
            .iter()
            .filter(|(_, needle)| !needle.is_empty())
            .map(|(key, needle)| (key.as_str(), needle.as_str()))
    }

    /// Query-string pairs in the `GET /api/roles` shape.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];
        if let Some(sort_by) = &self.sort_by {
            pairs.push(("sortBy".to_string(), sort_by.clone()));
            pairs.push(("sortOrder".to_string(), self.sort_order.to_string()));
        }
        for (field, needle) in self.active_filters() {
            pairs.push((
                format!("{}{}{}", FILTER_PREFIX, field, FILTER_SUFFIX),
                needle.to_string(),
            ));
        }
        pairs
    }

    /// Index of the first item on the requested page.
    pub fn offset(&self) -> usize {
        (self.page.max(1) as usize - 1).saturating_mul(self.limit.max(1) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let params = QueryParams::new();
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 10);
        assert_eq!(params.sort_by, None);
        assert_eq!(params.sort_order, SortOrder::Asc);
        assert!(params.filter.is_empty());
    }

    #[test]
    fn setters_clamp_to_one() {
        let params = QueryParams::new().page(0).limit(0);
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 1);
    }

    #[test]
    fn empty_filters_are_dropped() {
        let params = QueryParams::new().filter("name", "").filter("description", "jobs");
        assert_eq!(params.filter.len(), 1);
        assert_eq!(params.active_filters().collect::<Vec<_>>(), vec![("description", "jobs")]);
    }

    #[test]
    fn offset_is_zero_based() {
        assert_eq!(QueryParams::new().page(1).limit(10).offset(), 0);
        assert_eq!(QueryParams::new().page(3).limit(10).offset(), 20);
    }

    #[test]
    fn sort_order_parses_case_insensitively() {
        assert_eq!("DESC".parse::<SortOrder>(), Ok(SortOrder::Desc));
        assert_eq!("asc".parse::<SortOrder>(), Ok(SortOrder::Asc));
        assert!("sideways".parse::<SortOrder>().is_err());
    }

    #[test]
    fn query_pairs_use_bracketed_filters() {
        let params = QueryParams::new()
            .page(2)
            .sort_by("name", SortOrder::Desc)
            .filter("name", "admin");
        let pairs = params.to_query_pairs();
        let pairs: Vec<(&str, &str)> = pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(
            pairs,
            vec![
                ("page", "2"),
                ("limit", "10"),
                ("sortBy", "name"),
                ("sortOrder", "desc"),
                ("filter[name]", "admin"),
            ]
        );
    }

    #[test]
    fn query_pairs_omit_sort_order_without_key() {
        let pairs = QueryParams::new().to_query_pairs();
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn serializes_camel_case() {
        let params = QueryParams::new().sort_by("name", SortOrder::Desc);
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "page": 1, "limit": 10, "sortBy": "name", "sortOrder": "desc" })
        );
    }
}
