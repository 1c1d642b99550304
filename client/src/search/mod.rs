pub mod aggregate;
pub mod filter;

use async_trait::async_trait;
use refzone_core::types::{PageRequest, SearchPage};
use refzone_core::SearchResult;

pub use aggregate::{fetch_all_assignment_pages, MAX_FETCH_ALL_PAGES, PAGE_SIZE};

/// One page of the remote assignment search. Offset and limit belong to the
/// aggregator; implementations serve exactly the requested window.
#[async_trait]
pub trait AssignmentSearch: Send + Sync {
    async fn search(&self, request: &PageRequest) -> SearchResult<SearchPage>;
}
