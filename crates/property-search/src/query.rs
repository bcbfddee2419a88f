//! Query Builder
//!
//! Turns raw filter form values into a typed search request. Empty and
//! unparseable inputs are omitted, never sent as blanks or NaN, so "no
//! filter" stays distinguishable from "filter matching nothing".

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::paged::DEFAULT_PAGE_SIZE;

/// Filter form values exactly as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CriteriaInput {
    pub type_id: String,
    pub address: String,
    pub price_min: String,
    pub price_max: String,
}

/// Normalized filter predicates; `None` means "not filtered"
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_max: Option<f64>,
}

impl SearchCriteria {
    pub fn is_empty(&self) -> bool {
        *self == SearchCriteria::default()
    }
}

/// Build normalized criteria from form input. Never fails.
pub fn build_query(input: &CriteriaInput) -> SearchCriteria {
    SearchCriteria {
        property_type_id: parse_id(&input.type_id),
        address: non_empty(&input.address),
        price_min: parse_number(&input.price_min),
        price_max: parse_number(&input.price_max),
    }
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn parse_id(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

/// Server-side sort request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortSpec {
    pub sort_member: String,
    pub sort_direction: SortDirection,
}

impl SortSpec {
    pub fn new(sort_member: impl Into<String>, sort_direction: SortDirection) -> Self {
        Self {
            sort_member: sort_member.into(),
            sort_direction,
        }
    }
}

/// Complete request for `GET /api/properties`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedQuery {
    #[serde(flatten)]
    pub criteria: SearchCriteria,
    pub page: u32,
    pub page_size: u32,
    #[serde(flatten)]
    pub sort: Option<SortSpec>,
}

impl NormalizedQuery {
    /// Page is clamped to >= 1; a zero page size falls back to the default
    pub fn new(criteria: SearchCriteria, page: u32, page_size: u32, sort: Option<SortSpec>) -> Self {
        Self {
            criteria,
            page: page.max(1),
            page_size: if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size },
            sort,
        }
    }

    /// Render as URL query pairs, sorted by parameter name
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map
                .into_iter()
                .filter_map(|(key, value)| scalar_to_string(&value).map(|v| (key, v)))
                .collect(),
            _ => Vec::new(),
        };
        // Map order depends on serde_json's `preserve_order` feature
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        pairs
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => match (n.as_u64(), n.as_i64(), n.as_f64()) {
            (Some(u), _, _) => Some(u.to_string()),
            (_, Some(i), _) => Some(i.to_string()),
            (_, _, Some(f)) if f.fract() == 0.0 && f.abs() < 1e15 => Some(format!("{}", f as i64)),
            (_, _, Some(f)) => Some(f.to_string()),
            _ => None,
        },
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(type_id: &str, address: &str, price_min: &str, price_max: &str) -> CriteriaInput {
        CriteriaInput {
            type_id: type_id.to_string(),
            address: address.to_string(),
            price_min: price_min.to_string(),
            price_max: price_max.to_string(),
        }
    }

    #[test]
    fn test_empty_fields_are_omitted() {
        let criteria = build_query(&input("", "", "", "100"));
        assert_eq!(serde_json::to_value(&criteria).unwrap(), json!({ "priceMax": 100.0 }));
    }

    #[test]
    fn test_numeric_coercion() {
        let criteria = build_query(&input(" 3 ", "Main", "1000.5", "abc"));
        assert_eq!(criteria.property_type_id, Some(3));
        assert_eq!(criteria.address.as_deref(), Some("Main"));
        assert_eq!(criteria.price_min, Some(1000.5));
        assert_eq!(criteria.price_max, None);
    }

    #[test]
    fn test_nan_and_garbage_never_sent() {
        let criteria = build_query(&input("x", "   ", "NaN", "inf"));
        assert!(criteria.is_empty());
        assert_eq!(serde_json::to_value(&criteria).unwrap(), json!({}));
    }

    #[test]
    fn test_query_serializes_flat() {
        let query = NormalizedQuery::new(
            build_query(&input("2", "", "", "")),
            1,
            10,
            Some(SortSpec::new("price", SortDirection::Descending)),
        );
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({
                "propertyTypeId": 2,
                "page": 1,
                "pageSize": 10,
                "sortMember": "price",
                "sortDirection": "descending"
            })
        );
    }

    #[test]
    fn test_query_pairs() {
        let query = NormalizedQuery::new(build_query(&input("", "Oak St", "", "100")), 0, 0, None);
        let pairs = query.to_query_pairs();
        assert!(pairs.contains(&("address".to_string(), "Oak St".to_string())));
        assert!(pairs.contains(&("priceMax".to_string(), "100".to_string())));
        assert!(pairs.contains(&("page".to_string(), "1".to_string())));
        assert!(pairs.contains(&("pageSize".to_string(), DEFAULT_PAGE_SIZE.to_string())));
        assert!(!pairs.iter().any(|(k, _)| k == "sortMember"));
    }

    #[test]
    fn test_query_pairs_sorted_by_name() {
        let query = NormalizedQuery::new(
            build_query(&input("2", "", "5", "")),
            3,
            25,
            Some(SortSpec::new("price", SortDirection::Ascending)),
        );
        let keys: Vec<String> = query.to_query_pairs().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec!["page", "pageSize", "priceMin", "propertyTypeId", "sortDirection", "sortMember"]
        );
    }

    #[test]
    fn test_direction_flip() {
        assert_eq!(SortDirection::Ascending.flipped(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.flipped(), SortDirection::Ascending);
        assert_eq!(SortDirection::Descending.as_str(), "descending");
    }
}
