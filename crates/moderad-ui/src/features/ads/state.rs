//! Listing-queue state and its pure transitions.

use crate::features::moderation::state::{SelectionSet, prune_selection};
use moderad_api_models::{AdStatus, AdSummary, AdsResponse};

/// Sort key accepted by the list endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Order by creation date.
    #[default]
    CreatedAt,
    /// Order by asking price.
    Price,
    /// Order by review priority.
    Priority,
}

impl SortBy {
    /// Wire value used in query parameters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreatedAt => "createdAt",
            Self::Price => "price",
            Self::Priority => "priority",
        }
    }

    /// Parse a query-parameter value, rejecting anything outside the contract.
    #[must_use]
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "createdAt" => Some(Self::CreatedAt),
            "price" => Some(Self::Price),
            "priority" => Some(Self::Priority),
            _ => None,
        }
    }
}

/// Sort direction accepted by the list endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending (the dashboard default: newest first).
    #[default]
    Desc,
}

impl SortOrder {
    /// Wire value used in query parameters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Parse a query-parameter value, rejecting anything outside the contract.
    #[must_use]
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// Filter and sort state for the listing queue.
///
/// Every field has a well-defined "unset" value (empty vec/string, `None`)
/// that the codec omits from queries.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FiltersState {
    /// Status filter; empty means "no status filter".
    pub statuses: Vec<AdStatus>,
    /// Category filter; `None` means all categories.
    pub category_id: Option<u64>,
    /// Lower price bound as entered; empty means unset.
    pub min_price: String,
    /// Upper price bound as entered; empty means unset.
    pub max_price: String,
    /// Title search text; empty means unset.
    pub search: String,
    /// Sort key.
    pub sort_by: SortBy,
    /// Sort direction.
    pub sort_order: SortOrder,
}

/// Category facet accumulated from observed listings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryOption {
    /// Category identifier.
    pub id: u64,
    /// First-seen display name for the category.
    pub name: String,
}

/// Listing-queue slice of the app store.
#[derive(Clone, Debug, PartialEq)]
pub struct AdsState {
    /// 1-based current page.
    pub page: u32,
    /// Active filters.
    pub filters: FiltersState,
    /// Currently loaded page of listings.
    pub ads: Vec<AdSummary>,
    /// Cumulative category facets in first-seen order.
    pub categories: Vec<CategoryOption>,
    /// Total pages for the active query.
    pub total_pages: u32,
    /// Total matching listings for the active query.
    pub total_items: u64,
    /// True while a list fetch is in flight.
    pub loading: bool,
    /// Last load failure, shown in the list's alert banner.
    pub error: Option<String>,
    /// Bulk-selection set, scoped to the loaded page.
    pub selected: SelectionSet,
}

impl Default for AdsState {
    fn default() -> Self {
        Self {
            page: 1,
            filters: FiltersState::default(),
            ads: Vec::new(),
            categories: Vec::new(),
            total_pages: 1,
            total_items: 0,
            loading: false,
            error: None,
            selected: SelectionSet::new(),
        }
    }
}

/// Navigate to a page without touching filters.
pub const fn set_page(state: &mut AdsState, page: u32) {
    state.page = page;
}

/// Replace the filters; any filter change resets to the first page.
pub fn change_filters(state: &mut AdsState, next: FiltersState) {
    state.filters = next;
    state.page = 1;
}

/// Restore default filters and the first page.
pub fn reset_filters(state: &mut AdsState) {
    state.filters = FiltersState::default();
    state.page = 1;
}

/// Mark a list fetch as started.
pub const fn begin_load(state: &mut AdsState) {
    state.loading = true;
}

/// Apply a successful list response: replace the page, update totals, merge
/// facets, and prune the selection down to the new page.
pub fn apply_page(state: &mut AdsState, response: AdsResponse) {
    state.total_pages = response.pagination.map_or(1, |p| p.total_pages);
    state.total_items = response
        .pagination
        .map_or(response.ads.len() as u64, |p| p.total_items);
    state.categories = merge_categories(&state.categories, &response.ads);
    state.ads = response.ads;
    let visible = visible_ids(state);
    prune_selection(&mut state.selected, &visible);
    state.loading = false;
    state.error = None;
}

/// Record a load failure; the previously loaded page stays untouched.
pub fn fail_load(state: &mut AdsState, message: String) {
    state.loading = false;
    state.error = Some(message);
}

/// Merge newly seen `{categoryId, category}` pairs into the facet list.
/// First write wins: an already-known id keeps its original name and position.
#[must_use]
pub fn merge_categories(existing: &[CategoryOption], ads: &[AdSummary]) -> Vec<CategoryOption> {
    let mut merged = existing.to_vec();
    for ad in ads {
        if !merged.iter().any(|option| option.id == ad.category_id) {
            merged.push(CategoryOption {
                id: ad.category_id,
                name: ad.category.clone(),
            });
        }
    }
    merged
}

/// IDs of the loaded page in list order.
#[must_use]
pub fn visible_ids(state: &AdsState) -> Vec<u64> {
    state.ads.iter().map(|ad| ad.id).collect()
}

/// Page size for the pagination control, reconstructed from the totals.
///
/// The backend does not transmit its page size independently of the totals we
/// trust, so `ceil(totalItems / totalPages)` approximates it; 10 is the
/// requested size and serves as the fallback.
#[must_use]
pub fn derived_page_size(state: &AdsState) -> u64 {
    if state.total_pages > 0 {
        state.total_items.div_ceil(u64::from(state.total_pages))
    } else {
        10
    }
}

/// Page numbers the pagination control should render: first, last, and a
/// window around the current page.
#[must_use]
pub fn pagination_window(current: u32, total_pages: u32) -> Vec<u32> {
    (1..=total_pages)
        .filter(|&page| page == 1 || page == total_pages || page.abs_diff(current) <= 2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use moderad_api_models::{AdPriority, Pagination};

    fn ad(id: u64, category_id: u64, category: &str) -> AdSummary {
        AdSummary {
            id,
            title: format!("ad {id}"),
            price: 100.0,
            category: category.to_string(),
            category_id,
            created_at: "2024-05-01T10:00:00Z".to_string(),
            status: AdStatus::Pending,
            priority: AdPriority::Normal,
            images: vec![],
        }
    }

    fn response(ads: Vec<AdSummary>, pagination: Option<Pagination>) -> AdsResponse {
        AdsResponse { ads, pagination }
    }

    fn page_block(total_pages: u32, total_items: u64) -> Pagination {
        Pagination {
            current_page: 1,
            total_pages,
            total_items,
            items_per_page: 10,
        }
    }

    #[test]
    fn every_filter_change_resets_the_page() {
        let base = FiltersState::default();
        let variants: Vec<FiltersState> = vec![
            FiltersState {
                statuses: vec![AdStatus::Pending],
                ..base.clone()
            },
            FiltersState {
                category_id: Some(3),
                ..base.clone()
            },
            FiltersState {
                min_price: "100".to_string(),
                ..base.clone()
            },
            FiltersState {
                max_price: "900".to_string(),
                ..base.clone()
            },
            FiltersState {
                search: "диван".to_string(),
                ..base.clone()
            },
            FiltersState {
                sort_by: SortBy::Price,
                ..base.clone()
            },
            FiltersState {
                sort_order: SortOrder::Asc,
                ..base
            },
        ];
        for next in variants {
            let mut state = AdsState {
                page: 5,
                ..AdsState::default()
            };
            change_filters(&mut state, next.clone());
            assert_eq!(state.page, 1, "page must reset for {next:?}");
            assert_eq!(state.filters, next);
        }
    }

    #[test]
    fn reset_restores_defaults_and_first_page() {
        let mut state = AdsState {
            page: 4,
            filters: FiltersState {
                search: "шкаф".to_string(),
                ..FiltersState::default()
            },
            ..AdsState::default()
        };
        reset_filters(&mut state);
        assert_eq!(state.page, 1);
        assert_eq!(state.filters, FiltersState::default());
    }

    #[test]
    fn apply_page_prunes_the_selection() {
        let mut state = AdsState::default();
        apply_page(&mut state, response(vec![ad(1, 1, "A"), ad(2, 1, "A")], None));
        state.selected = [1, 2, 3].into_iter().collect();

        apply_page(&mut state, response(vec![ad(2, 1, "A"), ad(4, 1, "A")], None));
        assert_eq!(state.selected, [2].into_iter().collect());
    }

    #[test]
    fn apply_page_takes_totals_from_pagination_with_fallbacks() {
        let mut state = AdsState::default();
        apply_page(
            &mut state,
            response(vec![ad(1, 1, "A")], Some(page_block(7, 65))),
        );
        assert_eq!(state.total_pages, 7);
        assert_eq!(state.total_items, 65);

        apply_page(&mut state, response(vec![ad(1, 1, "A"), ad(2, 1, "A")], None));
        assert_eq!(state.total_pages, 1);
        assert_eq!(state.total_items, 2);
    }

    #[test]
    fn load_failure_keeps_previous_listings() {
        let mut state = AdsState::default();
        apply_page(&mut state, response(vec![ad(1, 1, "A")], None));
        begin_load(&mut state);
        fail_load(&mut state, "Ошибка загрузки (500)".to_string());
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Ошибка загрузки (500)"));
        assert_eq!(state.ads.len(), 1);
    }

    #[test]
    fn category_merge_is_first_write_wins() {
        let seen = merge_categories(&[], &[ad(1, 3, "Мебель"), ad(2, 5, "Техника")]);
        assert_eq!(seen.len(), 2);

        let renamed = merge_categories(&seen, &[ad(3, 3, "Мебель и интерьер"), ad(4, 9, "Авто")]);
        assert_eq!(renamed.len(), 3);
        assert_eq!(renamed[0].name, "Мебель");
        assert_eq!(renamed[2].name, "Авто");
    }

    #[test]
    fn page_size_is_derived_from_totals() {
        let mut state = AdsState {
            total_pages: 7,
            total_items: 65,
            ..AdsState::default()
        };
        assert_eq!(derived_page_size(&state), 10);

        state.total_pages = 3;
        state.total_items = 25;
        assert_eq!(derived_page_size(&state), 9);

        state.total_pages = 0;
        assert_eq!(derived_page_size(&state), 10);
    }

    #[test]
    fn pagination_window_keeps_edges_and_neighbourhood() {
        assert_eq!(pagination_window(1, 1), vec![1]);
        assert_eq!(pagination_window(1, 4), vec![1, 2, 3, 4]);
        assert_eq!(pagination_window(5, 9), vec![1, 3, 4, 5, 6, 7, 9]);
        assert_eq!(pagination_window(1, 9), vec![1, 2, 3, 9]);
    }

    #[test]
    fn sort_params_round_trip() {
        for sort in [SortBy::CreatedAt, SortBy::Price, SortBy::Priority] {
            assert_eq!(SortBy::from_param(sort.as_str()), Some(sort));
        }
        assert!(SortBy::from_param("title").is_none());
        for order in [SortOrder::Asc, SortOrder::Desc] {
            assert_eq!(SortOrder::from_param(order.as_str()), Some(order));
        }
        assert!(SortOrder::from_param("random").is_none());
    }
}
