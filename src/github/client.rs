// GitHub API HTTP client.
// Assembles default headers and classifies response statuses.

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{FindstarError, Result};

const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_RAW_BASE: &str = "https://raw.githubusercontent.com";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// GitHub client for the starred listing and raw README endpoints.
pub struct GitHubClient {
    pub(super) client: Client,
    pub(super) api_base: String,
    pub(super) raw_base: String,
}

impl GitHubClient {
    /// Create a client, authenticated when a token is given.
    pub fn new(token: Option<&str>) -> Result<Self> {
        Self::with_base_urls(GITHUB_API_BASE, GITHUB_RAW_BASE, token)
    }

    /// Create a client from the GITHUB_TOKEN environment variable when set.
    /// The starred listing is public, so an anonymous client works too.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("GITHUB_TOKEN").ok();
        Self::new(token.as_deref())
    }

    /// Create a client against alternate hosts (tests, GitHub Enterprise).
    pub fn with_base_urls(
        api_base: impl Into<String>,
        raw_base: impl Into<String>,
        token: Option<&str>,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();

        if let Some(token) = token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| FindstarError::Other(e.to_string()))?,
            );
        }
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("findstar"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(FindstarError::Api)?;

        Ok(Self {
            client,
            api_base: api_base.into(),
            raw_base: raw_base.into(),
        })
    }

    /// Make a GET request to the API with query parameters.
    pub(super) async fn get_with_params<T: serde::Serialize + ?Sized>(
        &self,
        endpoint: &str,
        params: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.api_base, endpoint);
        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(FindstarError::Api)?;

        check_response(response).await
    }
}

/// Check response status and convert errors.
async fn check_response(response: Response) -> Result<Response> {
    match response.status() {
        StatusCode::OK => Ok(response),
        StatusCode::UNAUTHORIZED => Err(FindstarError::Unauthorized),
        StatusCode::NOT_FOUND => {
            let url = response.url().to_string();
            Err(FindstarError::NotFound(url))
        }
        StatusCode::FORBIDDEN => {
            // A 403 with an exhausted quota is a rate limit, not a permissions problem
            if header_u64(&response, "x-ratelimit-remaining") == Some(0) {
                let reset_at = header_u64(&response, "x-ratelimit-reset")
                    .and_then(|reset| chrono::DateTime::from_timestamp(reset as i64, 0))
                    .map(|dt| dt.format("%H:%M:%S").to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                Err(FindstarError::RateLimited { reset_at })
            } else {
                Err(FindstarError::Other(format!(
                    "Forbidden: {}",
                    response.text().await.unwrap_or_default()
                )))
            }
        }
        status => Err(FindstarError::Other(format!(
            "HTTP {}: {}",
            status,
            response.text().await.unwrap_or_default()
        ))),
    }
}

fn header_u64(response: &Response, name: &str) -> Option<u64> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}
