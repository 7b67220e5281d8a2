//! Lists the children of a remote archive directory.
//!
//! The archive publishes plain HTML index pages, one per directory. Children are the
//! `href` targets of the page's links, kept in page order.

use crate::remote::error::RemoteError;
use crate::remote::fetcher::{fetch_with_retry, Fetcher, FETCH_ATTEMPTS};
use regex::Regex;
use std::future::Future;
use std::sync::OnceLock;

/// Marks observation documents among a directory's children.
pub const DOCUMENT_EXTENSION: &str = ".xml";

/// Returns the names visible below a remote directory URL.
pub trait DirectoryLister: Send + Sync {
    fn list_children(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<Vec<String>, RemoteError>> + Send;
}

/// [`DirectoryLister`] reading HTML index pages through a [`Fetcher`].
pub struct HtmlDirectoryLister<'a, F> {
    fetcher: &'a F,
    attempts: u32,
}

impl<'a, F: Fetcher> HtmlDirectoryLister<'a, F> {
    pub fn new(fetcher: &'a F) -> Self {
        Self {
            fetcher,
            attempts: FETCH_ATTEMPTS,
        }
    }
}

impl<F: Fetcher> DirectoryLister for HtmlDirectoryLister<'_, F> {
    async fn list_children(&self, url: &str) -> Result<Vec<String>, RemoteError> {
        let html = fetch_with_retry(self.fetcher, url, self.attempts).await?;
        Ok(extract_links(&html))
    }
}

fn href_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?i)<a\s[^>]*?href\s*=\s*["']([^"']*)["']"#).expect("href pattern is valid")
    })
}

/// `href` targets of every link in an HTML page, in page order.
pub fn extract_links(html: &str) -> Vec<String> {
    href_pattern()
        .captures_iter(html)
        .filter_map(|captures| captures.get(1))
        .map(|target| target.as_str().to_string())
        .collect()
}

/// Children that are observation documents.
pub fn document_names(children: &[String]) -> Vec<String> {
    children
        .iter()
        .filter(|name| name.contains(DOCUMENT_EXTENSION))
        .cloned()
        .collect()
}

/// Station identifiers among a date directory's children.
///
/// Station directories are linked as four characters plus a trailing separator
/// (e.g. `CYVR/`); the separator is stripped.
pub fn station_names(children: &[String]) -> Vec<String> {
    children
        .iter()
        .filter(|name| name.len() == 5 && name.ends_with('/'))
        .map(|name| name.trim_end_matches('/').to_string())
        .collect()
}
