//! Per-file range index over attribution records

use crate::schema::BlaimLine;

/// The set of blaim lines and ranges for one source file. Built on demand
/// from the persisted records at annotation time; never persisted itself.
#[derive(Debug, Default)]
pub struct BlaimRangeSet {
    records: Vec<BlaimLine>,
}

impl BlaimRangeSet {
    pub fn new(records: Vec<BlaimLine>) -> Self {
        Self { records }
    }

    /// Records covering the given 1-based source line.
    ///
    /// Coverage is derived from the line count of the stored suggestion
    /// text rather than from `range.end`, which fuzzy matches leave
    /// unreliable: a record starting at line L whose text spans k lines
    /// covers L..=L+k. Linear scan over the file's records; per-file
    /// record counts are bounded by accepted-suggestion volume, not file
    /// size.
    pub fn for_source_line(&self, line_number: usize) -> Vec<&BlaimLine> {
        self.records
            .iter()
            .filter(|record| {
                let text_lines = record.text.split('\n').count();
                line_number >= record.range.start.line
                    && line_number <= record.range.start.line + text_lines
            })
            .collect()
    }
}
