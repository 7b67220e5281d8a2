//! The main entry point: a client that collects a station's SWOB-ML observations for
//! a date from the archive and hands them back as a [`Collection`].

use crate::cleaning::cleaning_map::{CleaningMap, CleaningSource, DEFAULT_ORDER};
use crate::collect::collection::Collection;
use crate::collect::document_collector::{DocumentCollector, DEFAULT_FETCH_CONCURRENCY};
use crate::collect::station_resolver::StationResolver;
use crate::error::SwobError;
use crate::remote::directory::HtmlDirectoryLister;
use crate::remote::fetcher::{Fetcher, HttpFetcher};
use crate::types::title::TitleRegistry;
use crate::utils::{today_utc, with_trailing_slash};
use bon::bon;
use chrono::NaiveDate;
use std::time::Duration;

/// Root of the public SWOB-ML archive.
pub const DEFAULT_URL_ROOT: &str = "http://dd.weather.gc.ca/observations/swob-ml/";

/// Request timeout used by [`SwobClient::new`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Collects SWOB-ML observations from the archive.
///
/// The cleaning map is loaded once, when the client is built. Every collection run
/// starts with a fresh title registry.
///
/// # Examples
///
/// ```rust,no_run
/// # use swob::{SwobClient, SwobError};
/// # async fn run() -> Result<(), SwobError> {
/// let client = SwobClient::new()?;
/// let collection = client.station_data().station("VSL").call().await;
/// collection.write_csv("output.csv");
/// collection.write_spreadsheet("output.xlsx");
/// # Ok(())
/// # }
/// ```
pub struct SwobClient<F = HttpFetcher> {
    fetcher: F,
    cleaning: CleaningMap,
    url_root: String,
    default_order: i64,
    fetch_concurrency: usize,
}

impl SwobClient<HttpFetcher> {
    /// A client for the public archive, reading the cleaning table from `in.txt`.
    ///
    /// # Errors
    ///
    /// Returns [`SwobError::Remote`] if the HTTP client can't be created.
    pub fn new() -> Result<Self, SwobError> {
        let fetcher = HttpFetcher::new(DEFAULT_TIMEOUT)?;
        Ok(Self::configure(fetcher).build())
    }
}

#[bon]
impl<F: Fetcher> SwobClient<F> {
    /// Configures a client around `fetcher`.
    ///
    /// * `.url_root(..)`: archive root, [`DEFAULT_URL_ROOT`] by default.
    /// * `.cleaning(..)`: cleaning table path, or `"OFF"` to disable cleaning.
    ///   Defaults to `in.txt`.
    /// * `.default_order(..)`: priority of fields the cleaning table doesn't mention (500).
    /// * `.fetch_concurrency(..)`: documents fetched at the same time (4).
    ///
    /// ```rust,no_run
    /// # use swob::{HttpFetcher, SwobClient, SwobError};
    /// # use std::time::Duration;
    /// # fn run() -> Result<(), SwobError> {
    /// let client = SwobClient::configure(HttpFetcher::new(Duration::from_secs(10))?)
    ///     .cleaning("OFF")
    ///     .fetch_concurrency(1)
    ///     .build();
    /// assert!(!client.cleaning().is_enabled());
    /// # Ok(())
    /// # }
    /// ```
    #[builder(finish_fn = build)]
    pub fn configure(
        #[builder(start_fn)] fetcher: F,
        #[builder(into)] url_root: Option<String>,
        #[builder(into)] cleaning: Option<CleaningSource>,
        default_order: Option<i64>,
        fetch_concurrency: Option<usize>,
    ) -> Self {
        let default_order = default_order.unwrap_or(DEFAULT_ORDER);
        let url_root = url_root.unwrap_or_else(|| DEFAULT_URL_ROOT.to_string());
        let cleaning = CleaningMap::load(&cleaning.unwrap_or_default(), default_order).map;

        Self {
            fetcher,
            cleaning,
            url_root: with_trailing_slash(&url_root),
            default_order,
            fetch_concurrency: fetch_concurrency.unwrap_or(DEFAULT_FETCH_CONCURRENCY),
        }
    }

    /// Collects every observation `station` published on `date` (today, UTC, if not set).
    ///
    /// Documents that can't be fetched or parsed are skipped and listed in
    /// [`Collection::skipped`]. An unknown station gives an empty collection.
    #[builder]
    pub async fn station_data(&self, station: &str, date: Option<NaiveDate>) -> Collection {
        let date = date.unwrap_or_else(today_utc);
        let lister = HtmlDirectoryLister::new(&self.fetcher);
        let mut registry = TitleRegistry::new();
        self.resolver(&lister)
            .resolve(date, station, &mut registry)
            .await
    }

    /// Collects several stations of one date into a single multi-station collection.
    #[builder]
    pub async fn stations_data(&self, stations: &[&str], date: Option<NaiveDate>) -> Collection {
        let date = date.unwrap_or_else(today_utc);
        let lister = HtmlDirectoryLister::new(&self.fetcher);
        let mut registry = TitleRegistry::new();
        self.resolver(&lister)
            .resolve_many(date, stations, &mut registry)
            .await
    }

    /// Identifiers of the stations that published observations on `date`.
    pub async fn stations(&self, date: NaiveDate) -> Vec<String> {
        let lister = HtmlDirectoryLister::new(&self.fetcher);
        self.resolver(&lister).list_stations(date).await
    }

    pub fn cleaning(&self) -> &CleaningMap {
        &self.cleaning
    }

    pub fn url_root(&self) -> &str {
        &self.url_root
    }

    fn resolver<'a>(
        &'a self,
        lister: &'a HtmlDirectoryLister<'a, F>,
    ) -> StationResolver<'a, F, HtmlDirectoryLister<'a, F>> {
        let collector = DocumentCollector::new(&self.fetcher, &self.cleaning, self.default_order)
            .with_concurrency(self.fetch_concurrency);
        StationResolver::new(collector, lister, &self.url_root)
    }
}
