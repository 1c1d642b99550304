use crate::search::AssignmentSearch;
use async_trait::async_trait;
use refzone_core::types::{PageRequest, SearchPage};
use refzone_core::{SearchError, SearchResult};

/// Production [`AssignmentSearch`] backed by the Refzone REST API.
pub struct HttpAssignmentSearch {
    client: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl HttpAssignmentSearch {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            bearer_token: None,
        }
    }

    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    fn search_url(&self) -> String {
        format!(
            "{}/assignments/search",
            self.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl AssignmentSearch for HttpAssignmentSearch {
    async fn search(&self, request: &PageRequest) -> SearchResult<SearchPage> {
        let mut builder = self.client.post(self.search_url()).json(request);
        if let Some(token) = &self.bearer_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SearchError::UpstreamError {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<SearchPage>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_tolerates_trailing_slash() {
        let plain = HttpAssignmentSearch::new("https://api.refzone.app/v1");
        let slashed = HttpAssignmentSearch::new("https://api.refzone.app/v1/");
        assert_eq!(plain.search_url(), "https://api.refzone.app/v1/assignments/search");
        assert_eq!(plain.search_url(), slashed.search_url());
    }
}
