//! Edit scripts from two-row alignments.

use log::debug;

use crate::{
    error::{EditError, Result},
    op::EditOp,
    GAP,
};

/// Ungapped sequences and edit script recovered from a two-row alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedEdits {
    /// First row without gaps.
    pub read: String,
    /// Second row without gaps.
    pub reference: String,
    /// One op per alignment column.
    pub edits: Vec<EditOp>,
}

/// Extract the edit operations from a pairwise alignment.
///
/// A gap in `row_p` is an [`EditOp::Insert`], a gap in `row_q` is an
/// [`EditOp::Delete`], anything else is an [`EditOp::Match`].
///
/// # Arguments
/// * `row_p`: First row of the alignment (the read).
/// * `row_q`: Second row of the alignment (the reference).
///
/// # Errors
/// * [`EditError::LengthMismatch`] if the rows differ in length.
/// * [`EditError::GapColumn`] if a column is a gap in both rows.
///
/// # Examples
/// ```
/// use rs_alnedit::{extract::get_edits, op::edits_to_string};
///
/// let extracted = get_edits("ACCACAGT-CATA", "A-CAGAGTACAAA").unwrap();
/// assert_eq!(extracted.read, "ACCACAGTCATA");
/// assert_eq!(extracted.reference, "ACAGAGTACAAA");
/// assert_eq!(edits_to_string(&extracted.edits), "MDMMMMMMIMMMM");
/// ```
pub fn get_edits(row_p: &str, row_q: &str) -> Result<ExtractedEdits> {
    let (left, right) = (row_p.chars().count(), row_q.chars().count());
    if left != right {
        return Err(EditError::LengthMismatch { left, right });
    }

    let mut extracted = ExtractedEdits {
        read: String::with_capacity(left),
        reference: String::with_capacity(right),
        edits: Vec::with_capacity(left),
    };
    for (column, (p, q)) in row_p.chars().zip(row_q.chars()).enumerate() {
        let op = match (p == GAP, q == GAP) {
            (true, true) => return Err(EditError::GapColumn { column }),
            (true, false) => EditOp::Insert,
            (false, true) => EditOp::Delete,
            (false, false) => EditOp::Match,
        };
        if op.consumes_read() {
            extracted.read.push(p);
        }
        if op.consumes_reference() {
            extracted.reference.push(q);
        }
        extracted.edits.push(op);
    }
    debug!("Extracted {} edits from alignment.", extracted.edits.len());

    Ok(extracted)
}
