//! Finds the observation documents of a station/date on the archive and collects them.

use crate::collect::collection::Collection;
use crate::collect::document_collector::DocumentCollector;
use crate::remote::directory::{document_names, station_names, DirectoryLister};
use crate::remote::fetcher::Fetcher;
use crate::types::title::TitleRegistry;
use chrono::NaiveDate;
use log::{info, warn};

/// Prefix completing a three-character station code into a Canadian identifier.
pub const COUNTRY_MARKER: char = 'C';

/// Canonical four-character identifier for a station code.
///
/// ```
/// use swob::canonical_station_id;
///
/// assert_eq!(canonical_station_id("VSL"), "CVSL");
/// assert_eq!(canonical_station_id("CYVR"), "CYVR");
/// ```
pub fn canonical_station_id(station: &str) -> String {
    if station.chars().count() == 3 {
        format!("{}{}", COUNTRY_MARKER, station)
    } else {
        station.to_string()
    }
}

/// Archive directory segment for a date, `YYYYMMDD`.
pub fn date_segment(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Resolves stations and dates to archive directories and drives a [`DocumentCollector`].
pub struct StationResolver<'a, F, L> {
    collector: DocumentCollector<'a, F>,
    lister: &'a L,
    url_root: &'a str,
}

impl<'a, F: Fetcher, L: DirectoryLister> StationResolver<'a, F, L> {
    /// `url_root` is the archive root and must end with `/`.
    pub fn new(collector: DocumentCollector<'a, F>, lister: &'a L, url_root: &'a str) -> Self {
        Self {
            collector,
            lister,
            url_root,
        }
    }

    /// URL of the directory holding a station's documents for `date`.
    pub fn station_url(&self, date: NaiveDate, station: &str) -> String {
        format!(
            "{}{}/{}/",
            self.url_root,
            date_segment(date),
            canonical_station_id(station)
        )
    }

    /// Collects every document published for `station` on `date`.
    ///
    /// `station` may be the three-character code (`"VSL"`) or the full identifier
    /// (`"CVSL"`). An unreachable directory listing yields an empty collection.
    pub async fn resolve(
        &self,
        date: NaiveDate,
        station: &str,
        registry: &mut TitleRegistry,
    ) -> Collection {
        let mut collection = Collection::default();
        self.resolve_into(date, station, registry, &mut collection)
            .await;
        collection.titles = registry.ordered_titles();
        collection
    }

    /// Collects several stations of one date into a single collection.
    ///
    /// All stations share `registry`, and snapshots are appended station by station
    /// in the order given.
    pub async fn resolve_many(
        &self,
        date: NaiveDate,
        stations: &[&str],
        registry: &mut TitleRegistry,
    ) -> Collection {
        let mut collection = Collection {
            multi_station: true,
            ..Collection::default()
        };
        for station in stations {
            self.resolve_into(date, station, registry, &mut collection)
                .await;
        }
        collection.titles = registry.ordered_titles();
        collection
    }

    async fn resolve_into(
        &self,
        date: NaiveDate,
        station: &str,
        registry: &mut TitleRegistry,
        collection: &mut Collection,
    ) {
        let station_url = self.station_url(date, station);
        let children = match self.lister.list_children(&station_url).await {
            Ok(children) => children,
            Err(e) => {
                warn!("Can't list documents at {}: {}", station_url, e);
                return;
            }
        };
        let documents = document_names(&children);
        info!("Found {} documents at {}", documents.len(), station_url);

        self.collector
            .collect_into(&station_url, &documents, registry, collection)
            .await;
    }

    /// Identifiers of every station that published observations on `date`.
    pub async fn list_stations(&self, date: NaiveDate) -> Vec<String> {
        let date_url = format!("{}{}/", self.url_root, date_segment(date));
        match self.lister.list_children(&date_url).await {
            Ok(children) => station_names(&children),
            Err(e) => {
                warn!("Can't list stations at {}: {}", date_url, e);
                Vec::new()
            }
        }
    }
}
