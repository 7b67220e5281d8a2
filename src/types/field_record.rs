//! Defines the per-field `FieldRecord` and the `Snapshot` holding one hour of
//! observations for one station.

use crate::types::quality::QualityCode;
use indexmap::IndexMap;

/// One observed field within a single SWOB-ML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRecord {
    /// The observed value, exactly as published (e.g. `"-3.4"`, `"CYVR"`).
    pub value: String,
    /// Unit of measure, reduced to ASCII (e.g. `"C"` for `"°C"`). Empty when absent.
    pub unit: String,
    /// Sort priority of the field. Lower sorts first.
    pub priority: i64,
    /// Quality flag set by a trailing `qa_summary` marker.
    pub quality: QualityCode,
}

impl FieldRecord {
    /// Creates an unqualified record.
    pub fn new(value: impl Into<String>, unit: impl Into<String>, priority: i64) -> Self {
        Self {
            value: value.into(),
            unit: unit.into(),
            priority,
            quality: QualityCode::Unassessed,
        }
    }

    /// Returns the record with its quality replaced.
    pub fn with_quality(mut self, quality: QualityCode) -> Self {
        self.quality = quality;
        self
    }
}

/// All fields parsed from one observation document: one hour at one station.
///
/// Field names are unique within a snapshot. Iteration follows the order in which
/// fields were first seen in the document.
///
/// # Examples
///
/// ```
/// use swob::{FieldRecord, Snapshot};
///
/// let snapshot: Snapshot = [
///     ("air_temp".to_string(), FieldRecord::new("-3.4", "C", 500)),
///     ("stn_pres".to_string(), FieldRecord::new("101.2", "kPa", 500)),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(snapshot.value("air_temp"), Some("-3.4"));
/// assert_eq!(snapshot.value("rel_hum"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    fields: IndexMap<String, FieldRecord>,
}

impl Snapshot {
    pub fn get(&self, name: &str) -> Option<&FieldRecord> {
        self.fields.get(name)
    }

    /// The published value of `name`, if the field is present.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|record| record.value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRecord)> {
        self.fields
            .iter()
            .map(|(name, record)| (name.as_str(), record))
    }

    /// Inserts or overwrites a field. An overwritten field keeps its position.
    pub(crate) fn insert(&mut self, name: String, record: FieldRecord) {
        self.fields.insert(name, record);
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut FieldRecord> {
        self.fields.get_mut(name)
    }
}

impl FromIterator<(String, FieldRecord)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (String, FieldRecord)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
