use crate::error::{FetchError, Result};
use crate::result::FetchResult;
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, info};
use url::Url;

pub const DEFAULT_API_BASE: &str = "https://api.figma.com/";

const TOKEN_HEADER: &str = "X-Figma-Token";

pub struct Fetcher {
    client: Client,
    api_base: Url,
    token: Option<String>,
}

impl Fetcher {
    pub fn new() -> Self {
        // No request timeout: the file endpoint is a single GET and the
        // process has nothing else to do while it is in flight.
        let client = Client::builder()
            .user_agent("Figtree/0.1 (https://github.com/trapdoorsec/figtree)")
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_base: Url::parse(DEFAULT_API_BASE).expect("default API base is a valid URL"),
            token: None,
        }
    }

    pub fn with_api_base(mut self, base: Url) -> Self {
        self.api_base = base;
        self
    }

    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(token);
        self
    }

    /// Fetch a file's full node tree. One GET, no retry; any transport
    /// failure, error status, or non-JSON body is fatal to the caller.
    pub async fn fetch_file(&self, file_key: &str) -> Result<FetchResult> {
        let endpoint = self
            .api_base
            .join(&format!("v1/files/{}", file_key))
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", file_key, e)))?;

        debug!("Fetching {}", endpoint);

        let mut request = self.client.get(endpoint);
        if let Some(ref token) = self.token {
            request = request.header(TOKEN_HEADER, token.as_str());
        }

        let start = Instant::now();
        let response = request.send().await?;
        let response_time = start.elapsed();

        let status = response.status();
        let content_length = response.content_length();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FetchError::Api {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let data = serde_json::from_str(&body)?;

        info!(
            "Fetched {} ({} bytes in {:?})",
            file_key,
            body.len(),
            response_time
        );

        Ok(FetchResult {
            file_key: file_key.to_string(),
            status_code: status.as_u16(),
            content_length,
            response_time,
            data,
        })
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Error payloads can be arbitrarily large; keep enough to identify the failure.
fn truncate_body(body: &str) -> String {
    const MAX_LEN: usize = 200;
    let trimmed = body.trim();
    if trimmed.len() <= MAX_LEN {
        return trimmed.to_string();
    }
    let mut end = MAX_LEN;
    while !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &trimmed[..end])
}
