use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::reference::parse_reference;
use crate::{Error, Result};

/// Default endpoint for Finnish text (`/<reference>?translation=finnish`).
pub const FINNISH_API_BASE: &str = "https://bible-api.com";

/// Default endpoint for Amharic text (`/<book>/<chapter>/<verse>?lang=amh`).
pub const AMHARIC_API_BASE: &str = "https://bible-api-kappa.vercel.app/api";

#[derive(Deserialize)]
struct BibleApiResponse {
    text: Option<String>,
}

/// HTTP client for the third-party verse APIs used when importing verses.
///
/// A missing translation (non-success status, absent or empty text field)
/// is `Ok(None)`. Transport failures are errors.
pub struct TranslationFetcher {
    client: Client,
    finnish_base: Url,
    amharic_base: Url,
}

impl TranslationFetcher {
    /// Fetcher pointed at the public APIs.
    pub fn new() -> Result<Self> {
        Self::with_endpoints(FINNISH_API_BASE, AMHARIC_API_BASE)
    }

    /// Fetcher pointed at custom base URLs (primarily for tests).
    pub fn with_endpoints(finnish_base: &str, amharic_base: &str) -> Result<Self> {
        Ok(Self {
            client: http_client()?,
            finnish_base: parse_base(finnish_base)?,
            amharic_base: parse_base(amharic_base)?,
        })
    }

    /// Finnish text for `reference`.
    pub async fn fetch_finnish(&self, reference: &str) -> Result<Option<String>> {
        // bible-api.com wants plain hyphens in verse ranges.
        let api_reference = reference.replace(['\u{2013}', '\u{2014}'], "-");
        let mut url = self.finnish_base.clone();
        push_segments(&mut url, &[api_reference.trim()])?;
        url.query_pairs_mut().append_pair("translation", "finnish");

        let Some(response) = self.get_ok(url).await? else {
            return Ok(None);
        };
        let body: BibleApiResponse = response.json().await?;
        Ok(non_empty(body.text))
    }

    /// Amharic text for `reference`.
    ///
    /// The API is addressed by book, chapter and verse; references that do
    /// not parse are sent as chapter 1, verse 1 of the raw reference.
    pub async fn fetch_amharic(&self, reference: &str) -> Result<Option<String>> {
        let parsed = parse_reference(reference);
        let (book, chapter, verse) = if parsed.chapter == 0 {
            (reference.to_string(), 1, "1".to_string())
        } else {
            (parsed.book, parsed.chapter, parsed.verse_number)
        };

        let mut url = self.amharic_base.clone();
        push_segments(&mut url, &[&book, &chapter.to_string(), &verse])?;
        url.query_pairs_mut().append_pair("lang", "amh");

        let Some(response) = self.get_ok(url).await? else {
            return Ok(None);
        };
        let body: serde_json::Value = response.json().await?;
        let text = ["text", "verse"]
            .iter()
            .find_map(|key| body.get(*key).and_then(serde_json::Value::as_str))
            .map(str::to_string);
        Ok(non_empty(text))
    }

    async fn get_ok(&self, url: Url) -> Result<Option<reqwest::Response>> {
        debug!("GET {}", url);
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(Some(response));
        }
        if status == StatusCode::NOT_FOUND {
            debug!("No translation at {}", url);
        } else {
            warn!("Translation API returned {} for {}", status, url);
        }
        Ok(None)
    }
}

/// Client shared by the maintenance tools: 30s timeout, `amen/<version>` agent.
pub(super) fn http_client() -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(concat!("amen/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(Error::Network)
}

fn parse_base(base: &str) -> Result<Url> {
    let url =
        Url::parse(base).map_err(|e| Error::Config(format!("Invalid API base URL '{base}': {e}")))?;
    if url.cannot_be_a_base() {
        return Err(Error::Config(format!("API base URL '{base}' cannot be a base")));
    }
    Ok(url)
}

fn push_segments(url: &mut Url, segments: &[&str]) -> Result<()> {
    let mut path = url
        .path_segments_mut()
        .map_err(|()| Error::Config("API base URL cannot be a base".into()))?;
    path.pop_if_empty().extend(segments);
    Ok(())
}

fn non_empty(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}
