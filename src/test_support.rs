//! In-memory archive and document builders shared by the unit tests.

use crate::remote::error::RemoteError;
use crate::remote::fetcher::Fetcher;
use std::collections::HashMap;
use std::sync::Mutex;

pub(crate) const ROOT: &str = "http://archive.test/swob-ml/";

/// Serves fixed pages by URL. A URL can be made to fail a number of times first.
#[derive(Default)]
pub(crate) struct MemoryArchive {
    pages: HashMap<String, String>,
    failures: Mutex<HashMap<String, u32>>,
    requests: Mutex<HashMap<String, u32>>,
}

impl MemoryArchive {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_page(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.pages.insert(url.into(), body.into());
        self
    }

    pub(crate) fn failing(self, url: impl Into<String>, times: u32) -> Self {
        self.failures.lock().unwrap().insert(url.into(), times);
        self
    }

    pub(crate) fn requests_for(&self, url: &str) -> u32 {
        self.requests.lock().unwrap().get(url).copied().unwrap_or(0)
    }
}

impl Fetcher for MemoryArchive {
    async fn fetch(&self, url: &str) -> Result<String, RemoteError> {
        *self.requests.lock().unwrap().entry(url.to_string()).or_insert(0) += 1;
        {
            let mut failures = self.failures.lock().unwrap();
            if let Some(remaining) = failures.get_mut(url) {
                if *remaining > 0 {
                    *remaining -= 1;
                    return Err(RemoteError::NotFound(url.to_string()));
                }
            }
        }
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| RemoteError::NotFound(url.to_string()))
    }
}

/// A flat `<element>` carrying one observation.
pub(crate) fn element(name: &str, value: &str, uom: &str) -> String {
    format!(r#"<element name="{name}" uom="{uom}" value="{value}"/>"#)
}

/// An `<element>` followed, in document order, by its `qa_summary` qualifier.
pub(crate) fn qualified_element(name: &str, value: &str, uom: &str, qa: &str) -> String {
    format!(
        r#"<element name="{name}" uom="{uom}" value="{value}"><qualifier name="qa_summary" uom="unitless" value="{qa}"/></element>"#
    )
}

/// Wraps elements into a SWOB-ML observation document.
pub(crate) fn swob_document(elements: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<om:ObservationCollection xmlns:om="http://www.opengis.net/om/1.0" xmlns="http://dms.ec.gc.ca/schema/point-observation/2.0">
  <om:member>
    <om:Observation>
      <om:result>
        <elements>{}</elements>
      </om:result>
    </om:Observation>
  </om:member>
</om:ObservationCollection>"#,
        elements.concat()
    )
}

/// The identity elements every station document starts with.
pub(crate) fn identity(station_name: &str, tc_id: &str, date_tm: &str) -> Vec<String> {
    vec![
        element("stn_nam", station_name, "unitless"),
        element("tc_id", tc_id, "unitless"),
        element("date_tm", date_tm, "datetime"),
        element("lat", "49.19", "°"),
        element("long", "-123.18", "°"),
    ]
}

/// An Apache-style directory index linking to `names`.
pub(crate) fn index_page(names: &[&str]) -> String {
    let links: String = names
        .iter()
        .map(|name| format!(r#"<tr><td><a href="{name}">{name}</a></td></tr>"#))
        .collect();
    format!(
        r#"<html><head><title>Index</title></head><body><table><tr><th><a href="?C=N;O=D">Name</a></th></tr><tr><td><a href="../">Parent Directory</a></td></tr>{links}</table></body></html>"#
    )
}
