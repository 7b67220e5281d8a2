use crate::cleaning::cleaning_map::CleaningMap;
use crate::collect::collection::{Collection, SkippedDocument};
use crate::collect::error::DocumentError;
use crate::parsing::snapshot_parser::SnapshotParser;
use crate::remote::fetcher::{fetch_with_retry, Fetcher, FETCH_ATTEMPTS};
use crate::types::title::TitleRegistry;
use futures_util::{stream, StreamExt};
use log::{info, warn};

/// Documents fetched at the same time by default.
pub const DEFAULT_FETCH_CONCURRENCY: usize = 4;

/// Fetches and parses observation documents into a [`Collection`].
///
/// Fetches may overlap (up to the configured concurrency), but documents are always
/// parsed, and the registry updated, one at a time in address order. The title
/// registry therefore ends up with the priority and unit of the *last listed* document
/// containing each field, whatever order the fetches complete in.
pub struct DocumentCollector<'a, F> {
    fetcher: &'a F,
    parser: SnapshotParser<'a>,
    attempts: u32,
    concurrency: usize,
}

impl<'a, F: Fetcher> DocumentCollector<'a, F> {
    pub fn new(fetcher: &'a F, cleaning: &'a CleaningMap, default_order: i64) -> Self {
        Self {
            fetcher,
            parser: SnapshotParser::new(cleaning, default_order),
            attempts: FETCH_ATTEMPTS,
            concurrency: DEFAULT_FETCH_CONCURRENCY,
        }
    }

    /// Limits how many documents are fetched at once. `1` fetches strictly in sequence.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Collects the documents at `base_url` + each address.
    ///
    /// A document that still fails after three attempts, or does not parse, is skipped
    /// and recorded in [`Collection::skipped`]; nothing is returned as an error. The
    /// returned titles are `registry` sorted after every document was processed.
    pub async fn collect(
        &self,
        base_url: &str,
        addresses: &[String],
        registry: &mut TitleRegistry,
    ) -> Collection {
        let mut collection = Collection::default();
        self.collect_into(base_url, addresses, registry, &mut collection)
            .await;
        collection.titles = registry.ordered_titles();
        collection
    }

    /// Appends the documents to `collection` without touching its titles.
    pub(crate) async fn collect_into(
        &self,
        base_url: &str,
        addresses: &[String],
        registry: &mut TitleRegistry,
        collection: &mut Collection,
    ) {
        let mut fetches = std::pin::pin!(stream::iter(addresses)
            .map(|address| async move {
                let url = format!("{}{}", base_url, address);
                let fetched = fetch_with_retry(self.fetcher, &url, self.attempts).await;
                (address, fetched)
            })
            .buffered(self.concurrency));

        let mut parsed = 0;
        while let Some((address, fetched)) = fetches.next().await {
            let document = fetched
                .map_err(DocumentError::from)
                .and_then(|content| {
                    self.parser
                        .parse(&content, registry)
                        .map_err(DocumentError::from)
                });

            match document {
                Ok(document) => {
                    parsed += 1;
                    collection.orphan_markers += document.orphan_markers;
                    collection.snapshots.push(document.snapshot);
                }
                Err(e) => {
                    warn!("Skipping document {}{}: {}", base_url, address, e);
                    collection.skipped.push(SkippedDocument {
                        address: address.clone(),
                        error: e,
                    });
                }
            }
        }

        info!(
            "Collected {} of {} documents from {}",
            parsed,
            addresses.len(),
            base_url
        );
    }
}
