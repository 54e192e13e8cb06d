//! Unit-cost scoring of a given edit script.

use crate::{
    error::Result,
    op::EditOp,
    walk::{Column, Walk},
};

/// Per-kind column tally of an edit script applied to a read and a reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditCounts {
    /// Match columns with equal characters.
    pub matches: usize,
    /// Match columns with different characters.
    pub mismatches: usize,
    /// Insert columns.
    pub insertions: usize,
    /// Delete columns.
    pub deletions: usize,
}

impl EditCounts {
    /// Unit-cost edit distance: mismatches, insertions and deletions.
    pub fn distance(&self) -> usize {
        self.mismatches + self.insertions + self.deletions
    }

    fn add(&mut self, column: Column) {
        match column {
            Column::Match(a, b) if a == b => self.matches += 1,
            Column::Match(..) => self.mismatches += 1,
            Column::Insert(_) => self.insertions += 1,
            Column::Delete(_) => self.deletions += 1,
        }
    }
}

/// Get the distance between `read` and the reference span starting at
/// `reference[offset..]` described by `edits`.
///
/// This scores the given script. It does not search for a cheaper one.
///
/// * @param `read`: Read we have mapped against `reference`.
/// * @param `reference`: Longer sequence we have mapped against.
/// * @param `offset`: Position of the approximate match in `reference`.
/// * @param `edits`: Edits to apply.
///
/// ### Example
/// ```
/// use rs_alnedit::{dst::edit_dist, op::parse_edits};
///
/// let edits = parse_edits("MDMMIMMMMIIM").unwrap();
/// assert_eq!(edit_dist("accaaagta", "cgacaaatgtcca", 2, &edits).unwrap(), 5);
/// ```
pub fn edit_dist(
    read: &str,
    reference: &str,
    offset: usize,
    edits: &[EditOp],
) -> Result<usize> {
    Walk::new(read, reference, offset, edits)?
        .map(|column| column.map(Column::cost))
        .sum()
}

/// Tally the column kinds `edits` produce over `read` and `reference[offset..]`.
pub fn edit_counts(
    read: &str,
    reference: &str,
    offset: usize,
    edits: &[EditOp],
) -> Result<EditCounts> {
    let mut counts = EditCounts::default();
    for column in Walk::new(read, reference, offset, edits)? {
        counts.add(column?);
    }
    Ok(counts)
}
