//! Rebuilding two-row alignments from edit scripts.

use log::debug;

use crate::{
    error::{EditError, Result},
    extract::{get_edits, ExtractedEdits},
    mode::AlignMode,
    op::EditOp,
    walk::{Column, Walk},
    GAP,
};

/// Pairwise alignment as two equal-length rows with `-` for gaps.
///
/// Rows always have the same number of characters and no column is a gap in
/// both rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alignment {
    read_row: String,
    reference_row: String,
}

impl Alignment {
    /// Pair two alignment rows.
    ///
    /// # Errors
    /// * [`EditError::LengthMismatch`] if the rows differ in length.
    /// * [`EditError::GapColumn`] if a column is a gap in both rows.
    ///
    /// ### Example
    /// ```
    /// use rs_alnedit::Alignment;
    ///
    /// let aln = Alignment::new("AC-T", "A-GT").unwrap();
    /// assert_eq!(aln.len(), 4);
    /// assert!(Alignment::new("ACT", "AC").is_err());
    /// ```
    pub fn new(read_row: impl Into<String>, reference_row: impl Into<String>) -> Result<Self> {
        let (read_row, reference_row) = (read_row.into(), reference_row.into());
        let (left, right) = (read_row.chars().count(), reference_row.chars().count());
        if left != right {
            return Err(EditError::LengthMismatch { left, right });
        }
        let both_gaps = read_row
            .chars()
            .zip(reference_row.chars())
            .position(|(p, q)| p == GAP && q == GAP);
        if let Some(column) = both_gaps {
            return Err(EditError::GapColumn { column });
        }
        Ok(Alignment {
            read_row,
            reference_row,
        })
    }

    /// Read row.
    pub fn read_row(&self) -> &str {
        &self.read_row
    }

    /// Reference row.
    pub fn reference_row(&self) -> &str {
        &self.reference_row
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.read_row.chars().count()
    }

    /// Whether the alignment has no columns.
    pub fn is_empty(&self) -> bool {
        self.read_row.is_empty()
    }

    /// Iterate over `(read, reference)` character pairs per column.
    pub fn columns(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.read_row.chars().zip(self.reference_row.chars())
    }

    /// Recover the ungapped sequences and edit script of this alignment.
    pub fn edits(&self) -> Result<ExtractedEdits> {
        get_edits(&self.read_row, &self.reference_row)
    }

    fn push(&mut self, column: Column) {
        let (p, q) = match column {
            Column::Match(p, q) => (p, q),
            Column::Delete(p) => (p, GAP),
            Column::Insert(q) => (GAP, q),
        };
        self.read_row.push(p);
        self.reference_row.push(q);
    }
}

impl From<Alignment> for (String, String) {
    fn from(aln: Alignment) -> Self {
        (aln.read_row, aln.reference_row)
    }
}

/// Align a read to a reference from a sequence of edits.
///
/// * @param `read`: Read we have mapped against `reference`.
/// * @param `reference`: Longer sequence we have mapped against.
/// * @param `offset`: Position in `reference` where the alignment starts.
/// * @param `edits`: Edits to apply.
///
/// # Errors
/// * [`EditError::Boundary`](crate::EditError::Boundary) if `edits` consume more
///   characters than either sequence holds.
/// * [`EditError::OffsetOutOfRange`](crate::EditError::OffsetOutOfRange) if
///   `offset` is past the end of `reference`.
///
/// ### Example
/// ```
/// use rs_alnedit::{align::local_align, op::parse_edits};
///
/// let edits = parse_edits("MDMMMMMMIMMMM").unwrap();
/// let aln = local_align("ACCACAGTCATA", "GTACAGAGTACAAA", 2, &edits).unwrap();
/// assert_eq!(aln.read_row(), "ACCACAGT-CATA");
/// assert_eq!(aln.reference_row(), "A-CAGAGTACAAA");
/// ```
pub fn local_align(
    read: &str,
    reference: &str,
    offset: usize,
    edits: &[EditOp],
) -> Result<Alignment> {
    let mut aln = Alignment {
        read_row: String::with_capacity(edits.len()),
        reference_row: String::with_capacity(edits.len()),
    };
    for column in Walk::new(read, reference, offset, edits)? {
        aln.push(column?);
    }
    debug!("Reconstructed alignment of {} columns at offset {offset}.", edits.len());

    Ok(aln)
}

/// Align two sequences end to end. Same as [`local_align`] with offset 0.
///
/// ### Example
/// ```
/// use rs_alnedit::{align::align, op::parse_edits};
///
/// let edits = parse_edits("MDMMMMMMIMMMM").unwrap();
/// let aln = align("ACCACAGTCATA", "ACAGAGTACAAA", &edits).unwrap();
/// assert_eq!(aln.read_row(), "ACCACAGT-CATA");
/// ```
pub fn align(read: &str, reference: &str, edits: &[EditOp]) -> Result<Alignment> {
    local_align(read, reference, 0, edits)
}

/// Align with the reference span chosen by an [`AlignMode`].
pub fn local_align_with_mode(
    read: &str,
    reference: &str,
    mode: AlignMode,
    edits: &[EditOp],
) -> Result<Alignment> {
    local_align(read, reference, mode.offset(), edits)
}
