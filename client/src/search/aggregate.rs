use super::AssignmentSearch;
use refzone_core::types::{Assignment, PageRequest, SearchQuery};
use refzone_core::{SearchError, SearchResult};
use tokio_util::sync::CancellationToken;

/// Window size of one search request.
pub const PAGE_SIZE: u64 = 100;
/// Hard page cap per aggregation; a backend that keeps promising more data
/// past this point gets truncated instead of looping.
pub const MAX_FETCH_ALL_PAGES: u32 = 10;

/// Fetches every page of `query` sequentially and returns the concatenated
/// items, in page order. Pages are never requested concurrently.
///
/// Stops without error on an empty page, on a stalled total count (the
/// backend reported the same nonzero total twice in a row while more items
/// were still expected), or after [`MAX_FETCH_ALL_PAGES`] pages; the last
/// case logs a warning because the result is known to be truncated.
///
/// The abort signal is checked right before each request and again right
/// after it resolves; a tripped signal raises [`SearchError::Aborted`] and
/// everything accumulated so far is discarded. A failed page request
/// propagates as-is, with no retry.
pub async fn fetch_all_assignment_pages(
    search: &dyn AssignmentSearch,
    query: &SearchQuery,
    cancel: Option<&CancellationToken>,
) -> SearchResult<Vec<Assignment>> {
    let mut items: Vec<Assignment> = Vec::new();
    let mut previous_total: Option<u64> = None;
    let mut pages_fetched: u32 = 0;

    loop {
        ensure_not_aborted(cancel)?;

        let request = PageRequest::new(query, u64::from(pages_fetched) * PAGE_SIZE, PAGE_SIZE);
        let page = search.search(&request).await?;

        // The signal may have tripped while the request was in flight; the
        // resolved page is discarded in that case.
        ensure_not_aborted(cancel)?;

        pages_fetched += 1;
        let total = page.total_items_count;

        if page.items.is_empty() {
            tracing::debug!(
                target: "refzone::search",
                pages_fetched,
                "empty page, stopping aggregation"
            );
            break;
        }
        items.extend(page.items);

        if total > 0 && items.len() as u64 >= total {
            break;
        }
        // Same nonzero total on two consecutive pages while items are still
        // outstanding: the backend is serving duplicates or its pagination
        // is stuck. Stop with what we have instead of looping on it.
        if previous_total == Some(total) && total > 0 {
            tracing::debug!(
                target: "refzone::search",
                total,
                fetched = items.len(),
                "total count stalled, stopping aggregation"
            );
            break;
        }
        previous_total = Some(total);

        if pages_fetched >= MAX_FETCH_ALL_PAGES {
            tracing::warn!(
                target: "refzone::search",
                pages_fetched,
                fetched = items.len(),
                total,
                "page safety limit reached, returning truncated results"
            );
            break;
        }
    }

    Ok(items)
}

fn ensure_not_aborted(cancel: Option<&CancellationToken>) -> SearchResult<()> {
    match cancel {
        Some(token) if token.is_cancelled() => Err(SearchError::Aborted),
        _ => Ok(()),
    }
}
