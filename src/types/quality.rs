//! Defines the `QualityCode` attached to every observed field and the `QualityBucket`
//! grouping used when styling rendered output.

use std::fmt;

/// Text of the quality code carried by fields that were never qualified.
pub const QA_NONE: &str = "qa_none";

/// Quality flag of a single observed field.
///
/// SWOB-ML documents qualify a field with a `qa_summary` marker whose value is a
/// signed integer code such as `"100"` (acceptable) or `"-1"` (missing). Fields that
/// are not followed by such a marker stay [`QualityCode::Unassessed`].
///
/// # Examples
///
/// ```
/// use swob::{QualityBucket, QualityCode};
///
/// assert_eq!(QualityCode::parse("qa_none"), QualityCode::Unassessed);
/// assert_eq!(QualityCode::parse("-1"), QualityCode::Code(-1));
/// assert_eq!(QualityCode::parse("-1").bucket(), Some(QualityBucket::Missing));
/// assert_eq!(QualityCode::Code(100).to_string(), "100");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum QualityCode {
    /// No `qa_summary` marker followed the field (`qa_none`).
    #[default]
    Unassessed,
    /// A numeric quality code, e.g. `-10`, `-1`, `0`, `10`, `15` or `100`.
    Code(i64),
    /// A marker value that is neither `qa_none` nor an integer. Kept verbatim.
    Unrecognized(String),
}

impl QualityCode {
    /// Interprets the `value` attribute of a `qa_summary` marker.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text == QA_NONE {
            return QualityCode::Unassessed;
        }
        match text.parse::<i64>() {
            Ok(code) => QualityCode::Code(code),
            Err(_) => QualityCode::Unrecognized(text.to_string()),
        }
    }

    /// The styling bucket for this code, or `None` for codes outside the known set.
    pub fn bucket(&self) -> Option<QualityBucket> {
        match self {
            QualityCode::Unassessed => Some(QualityBucket::Unassessed),
            QualityCode::Code(-10) => Some(QualityBucket::Suppressed),
            QualityCode::Code(-1) => Some(QualityBucket::Missing),
            QualityCode::Code(0) => Some(QualityBucket::Error),
            QualityCode::Code(10) => Some(QualityBucket::Doubtful),
            QualityCode::Code(15) => Some(QualityBucket::Suspect),
            QualityCode::Code(100) => Some(QualityBucket::Acceptable),
            QualityCode::Code(_) | QualityCode::Unrecognized(_) => None,
        }
    }
}

impl From<&str> for QualityCode {
    fn from(text: &str) -> Self {
        QualityCode::parse(text)
    }
}

impl fmt::Display for QualityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualityCode::Unassessed => f.write_str(QA_NONE),
            QualityCode::Code(code) => write!(f, "{}", code),
            QualityCode::Unrecognized(text) => f.write_str(text),
        }
    }
}

/// Visual grouping of quality codes. Each bucket gets its own spreadsheet style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QualityBucket {
    /// `qa_none`
    Unassessed,
    /// Code `-10`.
    Suppressed,
    /// Code `-1`.
    Missing,
    /// Code `0`.
    Error,
    /// Code `10`.
    Doubtful,
    /// Code `15`.
    Suspect,
    /// Code `100`.
    Acceptable,
}

impl QualityBucket {
    /// Buckets shown in the spreadsheet legend, in legend order.
    pub const LEGEND: [QualityBucket; 6] = [
        QualityBucket::Suppressed,
        QualityBucket::Missing,
        QualityBucket::Error,
        QualityBucket::Doubtful,
        QualityBucket::Suspect,
        QualityBucket::Acceptable,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QualityBucket::Unassessed => "Not Assessed",
            QualityBucket::Suppressed => "Suppressed",
            QualityBucket::Missing => "Missing",
            QualityBucket::Error => "Error",
            QualityBucket::Doubtful => "Doubtful",
            QualityBucket::Suspect => "Suspect/Warning",
            QualityBucket::Acceptable => "Acceptable/Passed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_codes() {
        assert_eq!(QualityCode::parse("qa_none"), QualityCode::Unassessed);
        assert_eq!(QualityCode::parse(" 15 "), QualityCode::Code(15));
        assert_eq!(QualityCode::parse("-10"), QualityCode::Code(-10));
        assert_eq!(
            QualityCode::parse("n/a"),
            QualityCode::Unrecognized("n/a".to_string())
        );
    }

    #[test]
    fn test_bucket_mapping() {
        let expected = [
            ("-10", QualityBucket::Suppressed),
            ("-1", QualityBucket::Missing),
            ("0", QualityBucket::Error),
            ("10", QualityBucket::Doubtful),
            ("15", QualityBucket::Suspect),
            ("100", QualityBucket::Acceptable),
            ("qa_none", QualityBucket::Unassessed),
        ];
        for (text, bucket) in expected {
            assert_eq!(QualityCode::parse(text).bucket(), Some(bucket), "code {text}");
        }
        assert_eq!(QualityCode::Code(20).bucket(), None);
        assert_eq!(QualityCode::parse("bad").bucket(), None);
    }

    #[test]
    fn test_display_round_trips_marker_text() {
        assert_eq!(QualityCode::Unassessed.to_string(), "qa_none");
        assert_eq!(QualityCode::parse("-1").to_string(), "-1");
        assert_eq!(QualityCode::parse("odd").to_string(), "odd");
    }
}
