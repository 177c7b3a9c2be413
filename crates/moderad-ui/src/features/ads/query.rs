//! Query codec for the listing queue.
//!
//! Two surfaces share the same encoding rules: the backend list request and
//! the browser URL that mirrors the moderator's filters. Unset fields are
//! omitted; on decode an absent parameter keeps the current value rather than
//! resetting it.

use crate::features::ads::state::{FiltersState, SortBy, SortOrder};
use moderad_api_models::AdStatus;
use std::fmt::Write;

/// Page size requested from the list endpoint.
pub const PAGE_SIZE: u32 = 10;

/// Build the list-endpoint path with pagination and filter parameters.
#[must_use]
pub fn build_list_query(page: u32, filters: &FiltersState) -> String {
    let mut pairs: Vec<(&str, String)> = vec![
        ("page", page.to_string()),
        ("limit", PAGE_SIZE.to_string()),
    ];
    for status in &filters.statuses {
        pairs.push(("status", status.as_str().to_string()));
    }
    if let Some(id) = filters.category_id {
        pairs.push(("categoryId", id.to_string()));
    }
    if !filters.min_price.trim().is_empty() {
        pairs.push(("minPrice", filters.min_price.trim().to_string()));
    }
    if !filters.max_price.trim().is_empty() {
        pairs.push(("maxPrice", filters.max_price.trim().to_string()));
    }
    if !filters.search.trim().is_empty() {
        pairs.push(("search", filters.search.trim().to_string()));
    }
    pairs.push(("sortBy", filters.sort_by.as_str().to_string()));
    pairs.push(("sortOrder", filters.sort_order.as_str().to_string()));
    format!("/api/v1/ads?{}", encode_pairs(&pairs))
}

/// Encode filters and page into the browser URL query (no leading `?`).
///
/// Defaults are omitted so a pristine view keeps a clean address: `page` only
/// appears past the first page, empty strings and `None` disappear, while the
/// sort pair is always written because the backend default is implicit.
#[must_use]
pub fn encode_url_query(filters: &FiltersState, page: u32) -> String {
    let mut pairs: Vec<(&str, String)> = Vec::new();
    if page > 1 {
        pairs.push(("page", page.to_string()));
    }
    for status in &filters.statuses {
        pairs.push(("status", status.as_str().to_string()));
    }
    if let Some(id) = filters.category_id {
        pairs.push(("categoryId", id.to_string()));
    }
    if !filters.min_price.is_empty() {
        pairs.push(("minPrice", filters.min_price.clone()));
    }
    if !filters.max_price.is_empty() {
        pairs.push(("maxPrice", filters.max_price.clone()));
    }
    if !filters.search.is_empty() {
        pairs.push(("search", filters.search.clone()));
    }
    pairs.push(("sortBy", filters.sort_by.as_str().to_string()));
    pairs.push(("sortOrder", filters.sort_order.as_str().to_string()));
    encode_pairs(&pairs)
}

/// Decode a browser URL query into filters and page.
///
/// Starts from the current values: parameters that are absent keep them,
/// present parameters overwrite them. Unparsable numbers and unknown enum
/// values are ignored, except `categoryId`, where a present-but-invalid value
/// clears the filter (matching a cleared select control).
#[must_use]
pub fn decode_url_query(
    query: &str,
    current: &FiltersState,
    current_page: u32,
) -> (FiltersState, u32) {
    let pairs = parse_pairs(query);
    let mut next = current.clone();
    let mut page = current_page;

    if let Some(value) = last_value(&pairs, "page") {
        if let Ok(parsed) = value.parse::<u32>() {
            if parsed > 0 {
                page = parsed;
            }
        }
    }

    let statuses: Vec<AdStatus> = pairs
        .iter()
        .filter(|(key, _)| key == "status")
        .filter_map(|(_, value)| AdStatus::from_param(value))
        .collect();
    if !statuses.is_empty() {
        next.statuses = statuses;
    }

    if let Some(value) = last_value(&pairs, "categoryId") {
        next.category_id = value.parse::<u64>().ok();
    }
    if let Some(value) = last_value(&pairs, "minPrice") {
        next.min_price = value;
    }
    if let Some(value) = last_value(&pairs, "maxPrice") {
        next.max_price = value;
    }
    if let Some(value) = last_value(&pairs, "search") {
        next.search = value;
    }
    if let Some(sort_by) = last_value(&pairs, "sortBy").and_then(|v| SortBy::from_param(&v)) {
        next.sort_by = sort_by;
    }
    if let Some(order) = last_value(&pairs, "sortOrder").and_then(|v| SortOrder::from_param(&v)) {
        next.sort_order = order;
    }

    (next, page)
}

fn encode_pairs(pairs: &[(&str, String)]) -> String {
    let mut out = String::new();
    for (key, value) in pairs {
        if !out.is_empty() {
            out.push('&');
        }
        let _ = write!(out, "{key}={}", urlencoding::encode(value));
    }
    out
}

fn parse_pairs(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| {
            let (key, value) = chunk.split_once('=').unwrap_or((chunk, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).map_or(spaced.clone(), |decoded| decoded.into_owned())
}

fn last_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .rev()
        .find(|(k, _)| k == key)
        .map(|(_, value)| value.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_omits_unset_filters() {
        let filters = FiltersState::default();
        assert_eq!(
            build_list_query(1, &filters),
            "/api/v1/ads?page=1&limit=10&sortBy=createdAt&sortOrder=desc"
        );
    }

    #[test]
    fn list_query_repeats_status_per_value() {
        let filters = FiltersState {
            statuses: vec![AdStatus::Pending, AdStatus::Rejected],
            ..FiltersState::default()
        };
        let query = build_list_query(2, &filters);
        assert!(query.contains("page=2"));
        assert!(query.contains("status=pending&status=rejected"));
    }

    #[test]
    fn list_query_trims_price_and_search() {
        let filters = FiltersState {
            min_price: " 100 ".to_string(),
            max_price: "   ".to_string(),
            search: " диван ".to_string(),
            ..FiltersState::default()
        };
        let query = build_list_query(1, &filters);
        assert!(query.contains("minPrice=100"));
        assert!(!query.contains("maxPrice"));
        assert!(query.contains(&format!("search={}", urlencoding::encode("диван"))));
    }

    #[test]
    fn url_query_for_defaults_carries_only_the_sort_pair() {
        let encoded = encode_url_query(&FiltersState::default(), 1);
        assert_eq!(encoded, "sortBy=createdAt&sortOrder=desc");
        assert!(!encoded.contains("status"));
        assert!(!encoded.contains("page"));
    }

    #[test]
    fn url_query_includes_page_past_the_first() {
        assert!(encode_url_query(&FiltersState::default(), 1).starts_with("sortBy"));
        assert!(encode_url_query(&FiltersState::default(), 3).starts_with("page=3"));
    }

    #[test]
    fn round_trip_preserves_non_default_fields() {
        let filters = FiltersState {
            statuses: vec![AdStatus::Approved, AdStatus::Pending],
            category_id: Some(12),
            min_price: "500".to_string(),
            max_price: String::new(),
            search: "красный диван".to_string(),
            sort_by: SortBy::Price,
            sort_order: SortOrder::Asc,
        };
        let encoded = encode_url_query(&filters, 4);
        let (decoded, page) = decode_url_query(&encoded, &FiltersState::default(), 1);
        assert_eq!(decoded, filters);
        assert_eq!(page, 4);
    }

    #[test]
    fn absent_parameters_keep_current_values() {
        let current = FiltersState {
            search: "шкаф".to_string(),
            category_id: Some(7),
            ..FiltersState::default()
        };
        let (decoded, page) = decode_url_query("", &current, 6);
        assert_eq!(decoded, current);
        assert_eq!(page, 6);
    }

    #[test]
    fn invalid_page_and_enums_are_ignored() {
        let current = FiltersState::default();
        let (decoded, page) =
            decode_url_query("page=zero&sortBy=title&sortOrder=sideways", &current, 2);
        assert_eq!(page, 2);
        assert_eq!(decoded.sort_by, SortBy::CreatedAt);
        assert_eq!(decoded.sort_order, SortOrder::Desc);
    }

    #[test]
    fn invalid_category_id_clears_the_filter() {
        let current = FiltersState {
            category_id: Some(7),
            ..FiltersState::default()
        };
        let (decoded, _) = decode_url_query("categoryId=abc", &current, 1);
        assert_eq!(decoded.category_id, None);
        let (decoded, _) = decode_url_query("categoryId=9", &current, 1);
        assert_eq!(decoded.category_id, Some(9));
    }

    #[test]
    fn plus_and_percent_decoding_both_work() {
        let (decoded, _) =
            decode_url_query("search=red+sofa", &FiltersState::default(), 1);
        assert_eq!(decoded.search, "red sofa");
        let (decoded, _) =
            decode_url_query("search=%D0%B4%D0%B8%D0%B2%D0%B0%D0%BD", &FiltersState::default(), 1);
        assert_eq!(decoded.search, "диван");
    }
}
