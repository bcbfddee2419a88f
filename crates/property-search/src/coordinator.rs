//! Paged Fetch Coordinator
//!
//! Tracks the last-applied criteria, paging and sort, plus the page on
//! display. Every request gets a token from a monotonically increasing
//! counter; only the response carrying the latest token is applied, so an
//! older request resolving late can never overwrite a newer page.

use crate::api::{PropertyClient, Transport};
use crate::error::ApiResult;
use crate::models::Property;
use crate::paged::{PagedResult, DEFAULT_PAGE_SIZE};
use crate::query::{NormalizedQuery, SearchCriteria, SortSpec};

/// A request that has been issued but not yet completed
#[derive(Debug, Clone, PartialEq)]
pub struct PendingFetch {
    pub token: u64,
    pub query: NormalizedQuery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response replaced the displayed page
    Applied,
    /// The request failed; an empty page is now displayed
    Failed,
    /// A newer request was issued meanwhile; the response was dropped
    Stale,
}

#[derive(Debug, Clone)]
pub struct SearchCoordinator {
    criteria: SearchCriteria,
    page: u32,
    page_size: u32,
    sort: Option<SortSpec>,
    result: PagedResult<Property>,
    loading: bool,
    latest_token: u64,
    /// Bumped whenever `result` is replaced
    generation: u64,
    last_error: Option<String>,
}

impl Default for SearchCoordinator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl SearchCoordinator {
    pub fn new(page_size: u32) -> Self {
        let page_size = if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size };
        Self {
            criteria: SearchCriteria::default(),
            page: 1,
            page_size,
            sort: None,
            result: PagedResult::empty(1, page_size),
            loading: false,
            latest_token: 0,
            generation: 0,
            last_error: None,
        }
    }

    /// New criteria; always restarts at page 1
    pub fn search(&mut self, criteria: SearchCriteria) -> PendingFetch {
        self.criteria = criteria;
        self.page = 1;
        self.issue()
    }

    /// Move to another page (or page size) with the last criteria
    pub fn change_page(&mut self, page: u32, page_size: u32) -> PendingFetch {
        self.page = page.max(1);
        if page_size > 0 {
            self.page_size = page_size;
        }
        self.issue()
    }

    /// Re-sort with the last criteria, keeping the current page
    pub fn change_sort(&mut self, sort: Option<SortSpec>) -> PendingFetch {
        self.sort = sort;
        self.issue()
    }

    /// Re-run the current request unchanged
    pub fn refresh(&mut self) -> PendingFetch {
        self.issue()
    }

    fn issue(&mut self) -> PendingFetch {
        self.latest_token += 1;
        self.loading = true;
        let query = NormalizedQuery::new(self.criteria.clone(), self.page, self.page_size, self.sort.clone());
        log::debug!("Issuing property search #{}: {:?}", self.latest_token, query);
        PendingFetch {
            token: self.latest_token,
            query,
        }
    }

    /// Apply the response for `token` if it is still the latest request
    pub fn complete(&mut self, token: u64, response: ApiResult<PagedResult<Property>>) -> FetchOutcome {
        if token != self.latest_token {
            log::debug!("Discarding stale search response #{} (latest #{})", token, self.latest_token);
            return FetchOutcome::Stale;
        }

        self.loading = false;
        self.generation += 1;
        match response {
            Ok(page) => {
                self.result = page.normalized();
                self.last_error = None;
                FetchOutcome::Applied
            }
            Err(e) => {
                log::warn!("Property search #{} failed: {}", token, e);
                self.result = PagedResult::empty(self.page, self.page_size);
                self.last_error = Some(e.to_string());
                FetchOutcome::Failed
            }
        }
    }

    /// Issue `pending` through `client` and apply the response
    pub async fn run<T: Transport>(&mut self, client: &PropertyClient<T>, pending: PendingFetch) -> FetchOutcome {
        let response = client.search_properties(&pending.query).await;
        self.complete(pending.token, response)
    }

    pub fn result(&self) -> &PagedResult<Property> {
        &self.result
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Message of the most recent failed search, cleared by the next success
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    /// Ids on the displayed page, in display order
    pub fn row_ids(&self) -> Vec<u32> {
        self.result.results.iter().map(|p| p.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockTransport;
    use crate::error::ApiError;
    use crate::expansion::ExpansionState;
    use crate::models::fixtures::property;
    use crate::query::SortDirection;
    use serde_json::json;

    fn page_of(ids: &[u32], page: u32, total_count: u64) -> PagedResult<Property> {
        PagedResult {
            results: ids.iter().map(|&id| property(id, "addr", 100.0, vec![])).collect(),
            page,
            page_size: 10,
            total_count,
            pages_count: 0,
        }
    }

    #[test]
    fn test_search_resets_to_first_page() {
        let mut coordinator = SearchCoordinator::default();
        let pending = coordinator.change_page(3, 25);
        assert_eq!(pending.query.page, 3);
        assert_eq!(pending.query.page_size, 25);

        let criteria = SearchCriteria {
            address: Some("Oak".to_string()),
            ..Default::default()
        };
        let pending = coordinator.search(criteria.clone());
        assert_eq!(pending.query.page, 1);
        assert_eq!(pending.query.page_size, 25);
        assert_eq!(pending.query.criteria, criteria);
    }

    #[test]
    fn test_page_and_sort_reuse_criteria() {
        let mut coordinator = SearchCoordinator::default();
        let criteria = SearchCriteria {
            property_type_id: Some(4),
            ..Default::default()
        };
        coordinator.search(criteria.clone());

        let pending = coordinator.change_page(2, 10);
        assert_eq!(pending.query.criteria, criteria);

        let sort = SortSpec::new("price", SortDirection::Descending);
        let pending = coordinator.change_sort(Some(sort.clone()));
        assert_eq!(pending.query.criteria, criteria);
        assert_eq!(pending.query.page, 2);
        assert_eq!(pending.query.sort, Some(sort));
    }

    #[test]
    fn test_loading_flag_lifecycle() {
        let mut coordinator = SearchCoordinator::default();
        assert!(!coordinator.is_loading());
        let pending = coordinator.search(SearchCriteria::default());
        assert!(coordinator.is_loading());
        coordinator.complete(pending.token, Ok(page_of(&[1, 2], 1, 2)));
        assert!(!coordinator.is_loading());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut coordinator = SearchCoordinator::default();
        let first = coordinator.search(SearchCriteria::default());
        let second = coordinator.change_page(2, 10);

        // Newer request resolves first
        assert_eq!(coordinator.complete(second.token, Ok(page_of(&[11, 12], 2, 12))), FetchOutcome::Applied);
        // Older one arrives late and must not overwrite it
        assert_eq!(coordinator.complete(first.token, Ok(page_of(&[1, 2], 1, 12))), FetchOutcome::Stale);

        assert_eq!(coordinator.row_ids(), vec![11, 12]);
        assert_eq!(coordinator.result().page, 2);
        assert!(!coordinator.is_loading());
    }

    #[test]
    fn test_stale_response_keeps_loading_until_latest() {
        let mut coordinator = SearchCoordinator::default();
        let first = coordinator.search(SearchCriteria::default());
        let _second = coordinator.change_page(2, 10);
        coordinator.complete(first.token, Ok(page_of(&[1], 1, 1)));
        assert!(coordinator.is_loading());
        assert!(coordinator.result().is_empty());
    }

    #[test]
    fn test_failure_yields_empty_page_at_requested_position() {
        let mut coordinator = SearchCoordinator::default();
        let pending = coordinator.change_page(4, 25);
        let outcome = coordinator.complete(pending.token, Err(ApiError::Transport("offline".to_string())));

        assert_eq!(outcome, FetchOutcome::Failed);
        let result = coordinator.result();
        assert!(result.results.is_empty());
        assert_eq!(result.total_count, 0);
        assert_eq!(result.page, 4);
        assert_eq!(result.page_size, 25);
        assert!(coordinator.last_error().is_some());

        coordinator.dismiss_error();
        assert!(coordinator.last_error().is_none());
    }

    #[test]
    fn test_pages_count_is_consistent() {
        let mut coordinator = SearchCoordinator::default();
        let pending = coordinator.search(SearchCriteria::default());
        coordinator.complete(pending.token, Ok(page_of(&[1, 2, 3], 1, 23)));
        assert_eq!(coordinator.result().pages_count, 3);
    }

    #[test]
    fn test_new_page_collapses_expanded_rows() {
        let mut coordinator = SearchCoordinator::default();
        let pending = coordinator.search(SearchCriteria::default());
        coordinator.complete(pending.token, Ok(page_of(&[4, 5, 6], 1, 20)));

        let mut expansion = ExpansionState::from_ids(coordinator.row_ids());
        let seen = coordinator.generation();
        expansion.toggle(5);
        assert!(expansion.is_open(&5));

        let pending = coordinator.change_page(2, 10);
        coordinator.complete(pending.token, Ok(page_of(&[5, 7], 2, 20)));
        assert_ne!(coordinator.generation(), seen);
        expansion.reset(coordinator.row_ids());
        assert!(!expansion.is_open(&5));
    }

    #[tokio::test]
    async fn test_initial_search_displays_first_page() {
        let transport = MockTransport::with(vec![Ok(json!({
            "results": [
                { "id": 1, "address": "1 Main", "typeName": "House", "typeId": 1, "price": 100.0 },
                { "id": 2, "address": "2 Main", "typeName": "Condo", "typeId": 2, "price": 200.0 }
            ],
            "page": 1,
            "pageSize": 10,
            "totalCount": 2,
            "pagesCount": 1
        }))]);
        let client = PropertyClient::new(transport);
        let mut coordinator = SearchCoordinator::default();

        let pending = coordinator.search(SearchCriteria::default());
        let outcome = coordinator.run(&client, pending).await;

        assert_eq!(outcome, FetchOutcome::Applied);
        assert_eq!(coordinator.row_ids(), vec![1, 2]);
        assert_eq!(client.transport().request_count(), 1);

        // No filters and no sort on the wire
        let requests = client.transport().requests.borrow();
        let keys: Vec<&str> = requests[0].query.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys.len(), 2);
        assert!(keys.contains(&"page"));
        assert!(keys.contains(&"pageSize"));
    }

    #[tokio::test]
    async fn test_run_failure_shows_no_results() {
        let client = PropertyClient::new(MockTransport::with(vec![Err(ApiError::Status {
            status: 503,
            body: String::new(),
        })]));
        let mut coordinator = SearchCoordinator::default();
        let pending = coordinator.search(SearchCriteria::default());
        assert_eq!(coordinator.run(&client, pending).await, FetchOutcome::Failed);
        assert!(coordinator.result().is_empty());
        assert!(!coordinator.is_loading());
    }
}
