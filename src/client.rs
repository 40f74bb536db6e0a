//! Client for a remote posts API.

use crate::post::PostModel;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Non-2xx response; carries the body the server sent back.
    #[error("{0}")]
    Api(String),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Default)]
pub struct PostClient {
    http: reqwest::Client,
}

impl PostClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the post list from `url`. Non-2xx statuses surface the response
    /// body as the error message.
    pub async fn fetch(&self, url: &str) -> Result<Vec<PostModel>, FetchError> {
        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(FetchError::Api(body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}
