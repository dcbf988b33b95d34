//! Best-effort, single-page web fetches. Every failure mode resolves to a
//! tagged [`FetchOutcome::Failed`] value; nothing past this boundary sees an
//! `Err` from the network.

use async_trait::async_trait;
use scraper::{ElementRef, Html, Node};

use crate::constants::limits::{FETCH_TIMEOUT, PAGE_TEXT_MAX_CHARS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    Timeout,
    Network(String),
    Status(u16),
    NoReadableContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Content(String),
    Failed(FetchFailure),
}

/// One attempted fetch, always present after the attempt. How a failure is
/// shown to the model is the assembler's decision, not this layer's.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub url: String,
    pub outcome: FetchOutcome,
}

#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> FetchOutcome;
}

pub struct HttpPageFetcher {
    client: reqwest::Client,
}

impl HttpPageFetcher {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(concat!(
                "casa-server/",
                env!("CARGO_PKG_VERSION"),
                " (campus assistant; page preview)"
            ))
            .build()
            .expect("reqwest client options are valid");
        Self { client }
    }
}

impl Default for HttpPageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> FetchOutcome {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(err) if err.is_timeout() => {
                log::warn!("fetch timed out: {url}");
                return FetchOutcome::Failed(FetchFailure::Timeout);
            }
            Err(err) => {
                log::warn!("fetch failed for {url}: {err}");
                return FetchOutcome::Failed(FetchFailure::Network(err.to_string()));
            }
        };

        let status = response.status();
        if !status.is_success() {
            log::warn!("fetch returned {} for {url}", status.as_u16());
            return FetchOutcome::Failed(FetchFailure::Status(status.as_u16()));
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(err) if err.is_timeout() => return FetchOutcome::Failed(FetchFailure::Timeout),
            Err(err) => return FetchOutcome::Failed(FetchFailure::Network(err.to_string())),
        };

        let text = extract_readable_text(&body);
        if text.is_empty() {
            return FetchOutcome::Failed(FetchFailure::NoReadableContent);
        }
        FetchOutcome::Content(text)
    }
}

/// Elements whose subtrees never contribute readable page content.
const NON_CONTENT_TAGS: &[&str] = &[
    "script", "style", "noscript", "nav", "header", "footer", "iframe", "aside", "form", "svg",
];

/// Markup to bounded plain text: drop non-content subtrees, join the visible
/// text nodes, collapse runs of whitespace, truncate to the character budget.
pub fn extract_readable_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut raw = String::new();
    collect_visible_text(document.root_element(), &mut raw);
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate_chars(&collapsed, PAGE_TEXT_MAX_CHARS)
}

fn collect_visible_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                out.push_str(text);
                out.push(' ');
            }
            Node::Element(el) => {
                if !NON_CONTENT_TAGS.contains(&el.name()) {
                    if let Some(child_element) = ElementRef::wrap(child) {
                        collect_visible_text(child_element, out);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Char-boundary-safe prefix.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
