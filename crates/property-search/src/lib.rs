//! Property Search Core
//!
//! Everything behind the property UI that is not markup:
//! - models: entities and payloads exchanged with the REST API
//! - paged: the paged result contract
//! - query: search criteria normalization
//! - table: client-side filter/sort over an in-memory slice
//! - expansion: per-row open/closed state for master-detail tables
//! - coordinator: paged fetch bookkeeping with stale-response guarding
//! - validation: the add-property form rules
//! - api: HTTP transport seam and typed client

pub mod api;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod expansion;
pub mod models;
pub mod paged;
pub mod query;
pub mod table;
pub mod validation;

pub use api::{ApiRequest, HttpMethod, HttpTransport, PropertyClient, Transport};
pub use config::ApiConfig;
pub use coordinator::{FetchOutcome, PendingFetch, SearchCoordinator};
pub use error::{ApiError, ApiResult, SubmitError};
pub use expansion::{row_action, ExpansionState, RowAction, RowClick};
pub use models::{DictionaryItem, DictionaryKind, NewProperty, NewSpace, Property, Space};
pub use paged::{pages_for, PagedResult, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
pub use query::{build_query, CriteriaInput, NormalizedQuery, SearchCriteria, SortDirection, SortSpec};
pub use table::{locale_compare, view, FieldValue, PropertyColumn, SortState, SpaceColumn, TableRow};
pub use validation::{FieldKey, PropertyDraft, SpaceDraft, ValidationErrors};
