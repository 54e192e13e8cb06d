//! Edit operations and their one-character textual form.

use std::fmt;

use crate::error::{EditError, Result, UnknownOp};

/// One column of a pairwise alignment between a read and a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditOp {
    /// Both rows carry a character. The characters may differ.
    Match,
    /// Character present in the reference only.
    ///
    /// ### Example:
    /// * Read:      `A-CG`
    /// * Reference: `ATCG`
    Insert,
    /// Character present in the read only.
    ///
    /// ### Example:
    /// * Read:      `ATCG`
    /// * Reference: `A-CG`
    Delete,
}

impl EditOp {
    /// Default textual symbol: `M`, `I` or `D`.
    pub const fn symbol(self) -> char {
        match self {
            EditOp::Match => 'M',
            EditOp::Insert => 'I',
            EditOp::Delete => 'D',
        }
    }

    /// Whether this op advances the read cursor.
    pub const fn consumes_read(self) -> bool {
        matches!(self, EditOp::Match | EditOp::Delete)
    }

    /// Whether this op advances the reference cursor.
    pub const fn consumes_reference(self) -> bool {
        matches!(self, EditOp::Match | EditOp::Insert)
    }
}

impl TryFrom<char> for EditOp {
    type Error = UnknownOp;

    fn try_from(symbol: char) -> std::result::Result<Self, UnknownOp> {
        match symbol {
            'M' => Ok(EditOp::Match),
            'I' => Ok(EditOp::Insert),
            'D' => Ok(EditOp::Delete),
            _ => Err(UnknownOp(symbol)),
        }
    }
}

impl fmt::Display for EditOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Parse an edit script written one symbol per column, e.g. `"MDMMI"`.
///
/// # Errors
/// * [`EditError::InvalidOp`] with the position of the first unknown symbol.
///
/// # Examples
/// ```
/// use rs_alnedit::op::{parse_edits, EditOp};
///
/// let edits = parse_edits("MDI").unwrap();
/// assert_eq!(edits, [EditOp::Match, EditOp::Delete, EditOp::Insert]);
/// assert!(parse_edits("MXI").is_err());
/// ```
pub fn parse_edits(edits: &str) -> Result<Vec<EditOp>> {
    edits
        .chars()
        .enumerate()
        .map(|(position, symbol)| {
            EditOp::try_from(symbol)
                .map_err(|UnknownOp(symbol)| EditError::InvalidOp { symbol, position })
        })
        .collect()
}

/// Write an edit script as one symbol per column.
pub fn edits_to_string(edits: &[EditOp]) -> String {
    edits.iter().map(|op| op.symbol()).collect()
}
