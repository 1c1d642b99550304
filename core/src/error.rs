use thiserror::Error;

pub type SearchResult<T> = Result<T, SearchError>;

#[derive(Error, Debug)]
pub enum SearchError {
    /// The caller's abort signal tripped. Callers must treat this as
    /// cancellation, never as a data-fetch failure; no partial data is
    /// returned alongside it.
    #[error("Search aborted")]
    Aborted,
    #[error(transparent)]
    HttpError(#[from] reqwest::Error),
    #[error(transparent)]
    ParseError(#[from] serde_json::Error),
    #[error("Upstream error {status}: {message}")]
    UpstreamError { status: u16, message: String },
}

impl SearchError {
    pub fn is_aborted(&self) -> bool {
        matches!(self, SearchError::Aborted)
    }
}
