//! HTTP client for the waifu.im search endpoint.

use crate::WaifuImSearchResponse;
use lagrange_core::Item;
use lagrange_error::{WaifuError, WaifuErrorKind};
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Production base URL of the waifu.im API.
pub const WAIFU_IM_BASE_URL: &str = "https://api.waifu.im";

const SEARCH_PATH: &str = "/search";

/// waifu.im API client.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct WaifuImClient {
    client: Client,
    base_url: String,
    token: String,
}

impl WaifuImClient {
    /// Creates a client against the production API.
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be built (e.g. TLS backend unavailable).
    pub fn new(token: impl Into<String>) -> Result<Self, WaifuError> {
        Self::with_base_url(token, WAIFU_IM_BASE_URL)
    }

    /// Creates a client against a custom base URL.
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be built.
    pub fn with_base_url(
        token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, WaifuError> {
        let client = Client::builder()
            .user_agent(concat!("lagrange/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                error!(error = ?e, "Failed to build HTTP client");
                WaifuError::new(WaifuErrorKind::Configuration(e.to_string()))
            })?;
        Ok(Self::with_client(client, token, base_url))
    }

    /// Wraps an existing HTTP client so its pool is shared.
    pub fn with_client(
        client: Client,
        token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        debug!(%base_url, "Creating waifu.im client");
        Self {
            client,
            base_url,
            token: token.into(),
        }
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Searches for SFW images and returns the raw response.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-success statuses and malformed bodies.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn search(&self) -> Result<WaifuImSearchResponse, WaifuError> {
        debug!("Sending search request to waifu.im");

        let response = self
            .client
            .get(format!("{}{}", self.base_url, SEARCH_PATH))
            .query(&[("is_nsfw", "false"), ("token", self.token.as_str())])
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to waifu.im");
                WaifuError::new(WaifuErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read waifu.im response body");
            WaifuError::new(WaifuErrorKind::Http(format!("Failed to read body: {}", e)))
        })?;

        if !status.is_success() {
            error!(status = %status, body = %body, "waifu.im returned error");
            return Err(WaifuError::new(WaifuErrorKind::Api {
                status: status.as_u16(),
                message: body,
            }));
        }

        serde_json::from_str(&body).map_err(|e| {
            error!(error = ?e, "Failed to parse waifu.im response");
            WaifuError::new(WaifuErrorKind::Parse(e.to_string()))
        })
    }

    /// Fetches the first matching image as an [`Item`].
    ///
    /// # Errors
    ///
    /// Everything [`search`](Self::search) can fail with, plus
    /// [`WaifuErrorKind::EmptyResult`] when no image came back.
    #[instrument(skip(self))]
    pub async fn fetch_item(&self) -> Result<Item, WaifuError> {
        let response = self.search().await?;
        first_item(response)
    }
}

/// Parses a `/search` body into its first item.
///
/// # Errors
///
/// Returns [`WaifuErrorKind::Parse`] for malformed JSON and
/// [`WaifuErrorKind::EmptyResult`] for an empty `images` array.
///
/// # Examples
///
/// ```
/// use lagrange_waifu::parse_search_response;
///
/// let body = r##"{"images": [{"image_id": 42, "url": "https://x/42.png",
///     "source": "https://src/42", "dominant_color": "#336699"}]}"##;
/// let item = parse_search_response(body).unwrap();
/// assert_eq!(*item.id(), 42);
/// ```
pub fn parse_search_response(body: &str) -> Result<Item, WaifuError> {
    let response: WaifuImSearchResponse = serde_json::from_str(body)
        .map_err(|e| WaifuError::new(WaifuErrorKind::Parse(e.to_string())))?;
    first_item(response)
}

fn first_item(response: WaifuImSearchResponse) -> Result<Item, WaifuError> {
    let image = response
        .into_first()
        .ok_or_else(|| WaifuError::new(WaifuErrorKind::EmptyResult))?;
    debug!(image_id = *image.image_id(), "Received image from waifu.im");
    Ok(image.into())
}
