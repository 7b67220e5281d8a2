//! Spreadsheet cell formats, one per quality bucket plus the header style.

use crate::types::quality::QualityBucket;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern};

/// Visual style of a spreadsheet cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellStyle {
    /// Bold red titles and labels.
    Header,
    /// Filled cell in the colour of a quality bucket.
    Quality(QualityBucket),
}

/// Formats for every [`CellStyle`], built once per workbook.
pub struct StyleTable {
    header: Format,
    unassessed: Format,
    suppressed: Format,
    missing: Format,
    error: Format,
    doubtful: Format,
    suspect: Format,
    acceptable: Format,
}

fn bordered() -> Format {
    Format::new()
        .set_border_left(FormatBorder::Thin)
        .set_border_right(FormatBorder::Thin)
        .set_border_top(FormatBorder::Thin)
}

fn filled(color: u32) -> Format {
    bordered()
        .set_font_name("Arial")
        .set_pattern(FormatPattern::Solid)
        .set_background_color(Color::RGB(color))
}

impl StyleTable {
    pub fn new() -> Self {
        Self {
            header: bordered()
                .set_bold()
                .set_font_name("Times New Roman")
                .set_font_color(Color::RGB(0xFF0000)),
            unassessed: filled(0xFFFFFF),
            suppressed: filled(0x00CCFF),
            missing: filled(0x969696),
            error: filled(0xFF0000),
            doubtful: filled(0xFFFF00),
            suspect: filled(0x808000),
            acceptable: filled(0x99CC00),
        }
    }

    pub fn format(&self, style: CellStyle) -> &Format {
        match style {
            CellStyle::Header => &self.header,
            CellStyle::Quality(bucket) => match bucket {
                QualityBucket::Unassessed => &self.unassessed,
                QualityBucket::Suppressed => &self.suppressed,
                QualityBucket::Missing => &self.missing,
                QualityBucket::Error => &self.error,
                QualityBucket::Doubtful => &self.doubtful,
                QualityBucket::Suspect => &self.suspect,
                QualityBucket::Acceptable => &self.acceptable,
            },
        }
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::new()
    }
}
