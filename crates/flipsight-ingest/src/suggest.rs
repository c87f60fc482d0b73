//! Related-keyword suggestions from the public toolbar feed.

use std::time::Duration;

use quick_xml::events::Event;
use quick_xml::Reader;
use reqwest::Client;

use crate::error::IngestError;
use crate::urls;

/// Client for the suggestion feed. Unlike the other sources this goes out
/// direct (no proxy, no retry budget): suggestions are garnish, and the
/// contract is that a lookup never fails — any problem yields an empty list.
pub struct SuggestionClient {
    client: Client,
    base_url: String,
}

impl SuggestionClient {
    /// # Errors
    ///
    /// Returns [`IngestError::Http`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(timeout_secs: u64, base_url: &str, user_agent: &str) -> Result<Self, IngestError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.to_owned(),
        })
    }

    /// Suggested search phrases for `keyword`, in feed order. Empty on any
    /// transport, status, or parse failure.
    pub async fn related_keywords(&self, keyword: &str) -> Vec<String> {
        let url = urls::suggest_url(&self.base_url, keyword);
        let body = match self.fetch_feed(&url).await {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!(error = %err, "suggestion fetch failed; returning no keywords");
                return Vec::new();
            }
        };
        match parse_suggestion_feed(&body) {
            Ok(keywords) => keywords,
            Err(err) => {
                tracing::warn!(error = %err, "suggestion feed did not parse; returning no keywords");
                Vec::new()
            }
        }
    }

    async fn fetch_feed(&self, url: &str) -> Result<String, IngestError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(IngestError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }
        Ok(response.text().await?)
    }
}

/// Collects every `<suggestion data="...">` attribute value from the
/// toolbar XML, preserving feed order. Elements without a usable `data`
/// attribute contribute nothing.
fn parse_suggestion_feed(xml: &str) -> Result<Vec<String>, IngestError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut keywords = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Empty(e) | Event::Start(e)) if e.name().as_ref() == b"suggestion" => {
                let data = e
                    .try_get_attribute("data")
                    .ok()
                    .flatten()
                    .and_then(|attr| attr.unescape_value().ok())
                    .map(std::borrow::Cow::into_owned);
                if let Some(value) = data {
                    if !value.is_empty() {
                        keywords.push(value);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(IngestError::Xml(e)),
            _ => {}
        }
    }
    Ok(keywords)
}
