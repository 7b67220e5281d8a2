//! Turns one SWOB-ML observation document into a [`Snapshot`].
//!
//! Every node carrying a `name` attribute is a field, read together with its `value`
//! and `uom` attributes, in document order. A node named `qa_summary` is not a field:
//! it qualifies the field inserted immediately before it.

use crate::cleaning::cleaning_map::CleaningMap;
use crate::parsing::error::ParseError;
use crate::types::field_record::{FieldRecord, Snapshot};
use crate::types::quality::QualityCode;
use crate::types::title::TitleRegistry;
use crate::utils::ascii_only;
use log::debug;

/// Name of the control marker that qualifies the preceding field.
pub const QA_SUMMARY: &str = "qa_summary";

/// Per-document cursor over the most recently inserted field key.
#[derive(Debug, Default)]
struct ParserState {
    last_inserted_key: Option<String>,
}

/// One parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocument {
    pub snapshot: Snapshot,
    /// `qa_summary` markers with no preceding field in the document. They are ignored.
    pub orphan_markers: usize,
}

/// Parses observation documents against a cleaning map.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotParser<'a> {
    cleaning: &'a CleaningMap,
    default_order: i64,
}

impl<'a> SnapshotParser<'a> {
    pub fn new(cleaning: &'a CleaningMap, default_order: i64) -> Self {
        Self {
            cleaning,
            default_order,
        }
    }

    /// Parses `content` and records every field it contains in `registry`.
    ///
    /// Registry entries are overwritten with the priority and unit seen here, so later
    /// documents win over earlier ones. When cleaning is enabled, a field's priority is
    /// looked up by its raw name and the field is then stored under its display name.
    ///
    /// The document is validated before anything is recorded: a malformed document
    /// returns an error and leaves `registry` untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use swob::{CleaningMap, QualityCode, SnapshotParser, TitleRegistry};
    ///
    /// let document = r#"<elements>
    ///     <element name="air_temp" value="-1.5" uom="°C">
    ///         <qualifier name="qa_summary" value="100" uom="unitless"/>
    ///     </element>
    /// </elements>"#;
    ///
    /// let cleaning = CleaningMap::disabled();
    /// let mut registry = TitleRegistry::new();
    /// let parsed = SnapshotParser::new(&cleaning, 500).parse(document, &mut registry).unwrap();
    ///
    /// let record = parsed.snapshot.get("air_temp").unwrap();
    /// assert_eq!(record.value, "-1.5");
    /// assert_eq!(record.unit, "C");
    /// assert_eq!(record.quality, QualityCode::Code(100));
    /// assert_eq!(registry.get("air_temp").unwrap().priority, 500);
    /// ```
    pub fn parse(
        &self,
        content: &str,
        registry: &mut TitleRegistry,
    ) -> Result<ParsedDocument, ParseError> {
        let document = roxmltree::Document::parse(content)?;

        let mut state = ParserState::default();
        let mut snapshot = Snapshot::default();
        let mut orphan_markers = 0;

        for node in document.descendants().filter(|node| node.is_element()) {
            let Some(raw_name) = node.attribute("name") else {
                continue;
            };
            let value = node.attribute("value").unwrap_or_default();

            if raw_name == QA_SUMMARY {
                let previous = state
                    .last_inserted_key
                    .as_deref()
                    .and_then(|key| snapshot.get_mut(key));
                match previous {
                    Some(record) => record.quality = QualityCode::parse(value),
                    None => {
                        debug!("Ignoring {} marker with no preceding field", QA_SUMMARY);
                        orphan_markers += 1;
                    }
                }
                continue;
            }

            let unit = ascii_only(node.attribute("uom").unwrap_or_default());
            let (key, priority) = self.resolve(raw_name);

            registry.record(&key, priority, &unit);
            snapshot.insert(key.clone(), FieldRecord::new(value, unit, priority));
            state.last_inserted_key = Some(key);
        }

        Ok(ParsedDocument {
            snapshot,
            orphan_markers,
        })
    }

    /// Storage key and priority for a raw field name.
    fn resolve(&self, raw_name: &str) -> (String, i64) {
        if self.cleaning.is_enabled() {
            if let Some(entry) = self.cleaning.lookup(raw_name) {
                return (entry.display_name.clone(), entry.priority);
            }
        }
        (raw_name.to_string(), self.default_order)
    }
}
