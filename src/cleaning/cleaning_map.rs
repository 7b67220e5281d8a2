//! Loads the field rename/priority override table ("cleaning map").
//!
//! The table is a local, comma separated file with one `raw_name, Display Name, priority`
//! record per line. Loading never fails: a missing or malformed table only disables
//! cleaning, and the reason is kept on the returned [`CleaningLoad`].

use crate::cleaning::error::CleaningMapError;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Priority given to fields the cleaning map does not mention.
pub const DEFAULT_ORDER: i64 = 500;

/// File the cleaning table is read from unless configured otherwise.
pub const DEFAULT_CLEANING_FILE: &str = "in.txt";

/// Source name that turns cleaning off without reporting a problem.
pub const DISABLED_MARKER: &str = "OFF";

/// Name under which SWOB-ML documents carry their schema identifier.
pub const SCHEMA_MARKER: &str = "msc/observation/atmospheric/surface_weather/ca-1.0-ascii";

// Identity fields always sort ahead of observations.
const SYSTEM_ENTRIES: [(&str, &str, i64); 6] = [
    ("date_tm", "date_tm", -3),
    ("tc_id", "TC ID", -2),
    ("stn_nam", "Station Name", -1),
    ("lat", "lat", -120),
    ("long", "long", -120),
    (SCHEMA_MARKER, "mscschema", -100),
];

/// Where the cleaning table comes from.
///
/// ```
/// use swob::CleaningSource;
///
/// assert_eq!(CleaningSource::from("OFF"), CleaningSource::Disabled);
/// assert_eq!(CleaningSource::from("in.txt"), CleaningSource::File("in.txt".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleaningSource {
    File(PathBuf),
    /// Cleaning is deliberately off. No warning is logged.
    Disabled,
}

impl Default for CleaningSource {
    fn default() -> Self {
        CleaningSource::File(PathBuf::from(DEFAULT_CLEANING_FILE))
    }
}

impl From<&str> for CleaningSource {
    fn from(source: &str) -> Self {
        if source == DISABLED_MARKER {
            CleaningSource::Disabled
        } else {
            CleaningSource::File(PathBuf::from(source))
        }
    }
}

impl From<PathBuf> for CleaningSource {
    fn from(path: PathBuf) -> Self {
        CleaningSource::File(path)
    }
}

/// Display name and priority override for one raw field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleaningEntry {
    pub display_name: String,
    pub priority: i64,
}

/// Raw field name → display name and priority.
///
/// The system identity entries (`date_tm`, `tc_id`, `stn_nam`, `lat`, `long` and the
/// schema marker) are always present and take precedence over user records for the
/// same raw names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleaningMap {
    entries: HashMap<String, CleaningEntry>,
    enabled: bool,
}

/// Result of loading a cleaning table.
#[derive(Debug)]
pub struct CleaningLoad {
    pub map: CleaningMap,
    /// Why cleaning ended up disabled, when it was not requested that way.
    pub error: Option<CleaningMapError>,
}

impl CleaningMap {
    /// A map holding only the system entries, with cleaning disabled.
    pub fn disabled() -> Self {
        Self::build(HashMap::new(), false)
    }

    /// An enabled map with the given `(raw_name, display_name, priority)` overrides.
    ///
    /// ```
    /// use swob::CleaningMap;
    ///
    /// let map = CleaningMap::enabled_with([("air_temp", "Air Temperature", 10)]);
    /// assert!(map.is_enabled());
    /// assert_eq!(map.lookup("air_temp").unwrap().display_name, "Air Temperature");
    /// assert_eq!(map.lookup("stn_nam").unwrap().priority, -1);
    /// ```
    pub fn enabled_with<'a, I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str, i64)>,
    {
        let entries = overrides
            .into_iter()
            .map(|(raw, display_name, priority)| {
                (
                    raw.to_string(),
                    CleaningEntry {
                        display_name: display_name.to_string(),
                        priority,
                    },
                )
            })
            .collect();
        Self::build(entries, true)
    }

    fn build(mut entries: HashMap<String, CleaningEntry>, enabled: bool) -> Self {
        for (raw, display_name, priority) in SYSTEM_ENTRIES {
            entries.insert(
                raw.to_string(),
                CleaningEntry {
                    display_name: display_name.to_string(),
                    priority,
                },
            );
        }
        Self { entries, enabled }
    }

    /// Loads the cleaning table from `source`.
    ///
    /// Never fails. When the file is absent, empty or malformed, cleaning is disabled,
    /// the records decoded before the problem are kept, and the problem is returned in
    /// [`CleaningLoad::error`]. [`CleaningSource::Disabled`] disables cleaning silently.
    /// Records with two fields get `default_order` as their priority; fields past the
    /// third are ignored.
    pub fn load(source: &CleaningSource, default_order: i64) -> CleaningLoad {
        let path = match source {
            CleaningSource::Disabled => {
                debug!("Cleaning disabled by configuration");
                return CleaningLoad {
                    map: Self::disabled(),
                    error: None,
                };
            }
            CleaningSource::File(path) => path,
        };

        let (entries, error) = read_table(path, default_order);
        if let Some(e) = &error {
            warn!("Can't use cleaning table {}: {}", path.display(), e);
        } else {
            info!(
                "Loaded {} cleaning records from {}",
                entries.len(),
                path.display()
            );
        }
        let enabled = error.is_none();
        CleaningLoad {
            map: Self::build(entries, enabled),
            error,
        }
    }

    /// The override for `raw_name`, looked up regardless of [`Self::is_enabled`].
    pub fn lookup(&self, raw_name: &str) -> Option<&CleaningEntry> {
        self.entries.get(raw_name)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CleaningMap {
    fn default() -> Self {
        Self::disabled()
    }
}

fn read_table(
    path: &Path,
    default_order: i64,
) -> (HashMap<String, CleaningEntry>, Option<CleaningMapError>) {
    let mut entries = HashMap::new();
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => return (entries, Some(CleaningMapError::Read(path.to_path_buf(), e))),
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    for (index, record) in reader.records().enumerate() {
        let fallback_line = index as u64 + 1;
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                let line = e.position().map_or(fallback_line, |p| p.line());
                let error = CleaningMapError::Decode {
                    path: path.to_path_buf(),
                    line,
                    source: e,
                };
                return (entries, Some(error));
            }
        };
        let line = record.position().map_or(fallback_line, |p| p.line());

        if record.len() < 2 {
            let error = CleaningMapError::MissingFields {
                path: path.to_path_buf(),
                line,
                found: record.len(),
            };
            return (entries, Some(error));
        }

        let priority = match record.get(2).filter(|value| !value.is_empty()) {
            None => default_order,
            Some(value) => match value.parse::<i64>() {
                Ok(priority) => priority,
                Err(_) => {
                    let error = CleaningMapError::InvalidPriority {
                        path: path.to_path_buf(),
                        line,
                        value: value.to_string(),
                    };
                    return (entries, Some(error));
                }
            },
        };

        entries.insert(
            record[0].to_string(),
            CleaningEntry {
                display_name: record[1].to_string(),
                priority,
            },
        );
    }

    if entries.is_empty() {
        return (entries, Some(CleaningMapError::Empty(path.to_path_buf())));
    }
    (entries, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn table(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn load_file(file: &NamedTempFile) -> CleaningLoad {
        CleaningMap::load(&CleaningSource::File(file.path().to_path_buf()), DEFAULT_ORDER)
    }

    #[test]
    fn test_load_valid_table() {
        let file = table("air_temp, Air Temperature, 10\nrel_hum, Relative Humidity, 20, ignored\n");
        let load = load_file(&file);

        assert!(load.error.is_none());
        assert!(load.map.is_enabled());
        assert_eq!(
            load.map.lookup("air_temp"),
            Some(&CleaningEntry {
                display_name: "Air Temperature".to_string(),
                priority: 10
            })
        );
        assert_eq!(load.map.lookup("rel_hum").unwrap().priority, 20);
        assert_eq!(load.map.len(), 2 + SYSTEM_ENTRIES.len());
    }

    #[test]
    fn test_two_field_record_gets_default_order() {
        let file = table("pcpn_amt_pst1hr, Precipitation 1h\n");
        let load = load_file(&file);

        assert!(load.map.is_enabled());
        assert_eq!(load.map.lookup("pcpn_amt_pst1hr").unwrap().priority, DEFAULT_ORDER);
    }

    #[test]
    fn test_system_entries_always_injected() {
        let file = table("stn_nam, Whatever, 900\n");
        let load = load_file(&file);

        let station = load.map.lookup("stn_nam").unwrap();
        assert_eq!(station.display_name, "Station Name");
        assert_eq!(station.priority, -1);
        assert_eq!(load.map.lookup("tc_id").unwrap().display_name, "TC ID");
        assert_eq!(load.map.lookup("date_tm").unwrap().priority, -3);
        assert_eq!(load.map.lookup("lat").unwrap().priority, -120);
        assert_eq!(load.map.lookup("long").unwrap().priority, -120);
        assert_eq!(load.map.lookup(SCHEMA_MARKER).unwrap().priority, -100);
    }

    #[test]
    fn test_missing_file_disables_cleaning() {
        let dir = tempfile::tempdir().unwrap();
        let source = CleaningSource::File(dir.path().join("absent.txt"));
        let load = CleaningMap::load(&source, DEFAULT_ORDER);

        assert!(!load.map.is_enabled());
        assert!(matches!(load.error, Some(CleaningMapError::Read(..))));
        assert_eq!(load.map.len(), SYSTEM_ENTRIES.len());
    }

    #[test]
    fn test_malformed_priority_keeps_earlier_records() {
        let file = table("air_temp, Air Temperature, 10\nwnd_spd, Wind Speed, fast\nrel_hum, Humidity, 30\n");
        let load = load_file(&file);

        assert!(!load.map.is_enabled());
        match load.error {
            Some(CleaningMapError::InvalidPriority { line, value, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(value, "fast");
            }
            other => panic!("unexpected load error: {:?}", other),
        }
        assert!(load.map.lookup("air_temp").is_some());
        assert!(load.map.lookup("rel_hum").is_none());
    }

    #[test]
    fn test_single_field_record_is_malformed() {
        let file = table("air_temp, Air Temperature, 10\nlonely\n");
        let load = load_file(&file);

        assert!(!load.map.is_enabled());
        assert!(matches!(
            load.error,
            Some(CleaningMapError::MissingFields { found: 1, .. })
        ));
        assert!(load.map.lookup("air_temp").is_some());
    }

    #[test]
    fn test_empty_table_disables_cleaning() {
        let file = table("");
        let load = load_file(&file);

        assert!(!load.map.is_enabled());
        assert!(matches!(load.error, Some(CleaningMapError::Empty(_))));
    }

    #[test]
    fn test_disabled_source_reports_nothing() {
        let load = CleaningMap::load(&CleaningSource::from("OFF"), DEFAULT_ORDER);

        assert!(!load.map.is_enabled());
        assert!(load.error.is_none());
        assert_eq!(load.map.len(), SYSTEM_ENTRIES.len());
    }
}
