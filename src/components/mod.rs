//! UI Components
//!
//! Leptos components for the property search page and add form.

mod error_banner;
mod pagination;
mod property_add;
mod property_details;
mod property_filters;
mod property_results;
mod property_search;
mod sort_label;

pub use error_banner::ErrorBanner;
pub use pagination::Pagination;
pub use property_add::PropertyAddModal;
pub use property_details::PropertyDetailsModal;
pub use property_filters::PropertyFilters;
pub use property_results::PropertyResults;
pub use property_search::PropertySearch;
pub use sort_label::SortLabel;
