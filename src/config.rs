//! Codec configuration.

use crate::{
    error::{EditError, Result},
    op::EditOp,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Characters used to write each [`EditOp`] in edit scripts and CIGAR strings.
pub struct OpSymbols {
    matched: char,
    insert: char,
    delete: char,
}

impl Default for OpSymbols {
    fn default() -> Self {
        OpSymbols {
            matched: EditOp::Match.symbol(),
            insert: EditOp::Insert.symbol(),
            delete: EditOp::Delete.symbol(),
        }
    }
}

impl OpSymbols {
    /// Initialize a new `OpSymbols`.
    ///
    /// # Arguments
    /// * `matched`: Symbol for [`EditOp::Match`].
    /// * `insert`: Symbol for [`EditOp::Insert`].
    /// * `delete`: Symbol for [`EditOp::Delete`].
    ///
    /// # Errors
    /// * [`EditError::InvalidSymbol`] if a symbol is a digit, the gap marker or
    ///   used for more than one op.
    ///
    /// # Examples
    /// ```
    /// use rs_alnedit::config::OpSymbols;
    ///
    /// assert!(OpSymbols::new('=', 'I', 'D').is_ok());
    /// assert!(OpSymbols::new('M', 'M', 'D').is_err());
    /// assert!(OpSymbols::new('1', 'I', 'D').is_err());
    /// ```
    pub fn new(matched: char, insert: char, delete: char) -> Result<Self> {
        let symbols = [matched, insert, delete];
        for (i, &symbol) in symbols.iter().enumerate() {
            let reason = if symbol.is_ascii_digit() {
                "digits are CIGAR counts"
            } else if symbol == crate::GAP {
                "reserved gap marker"
            } else if symbols[..i].contains(&symbol) {
                "already names another operation"
            } else {
                continue;
            };
            return Err(EditError::InvalidSymbol { symbol, reason });
        }
        Ok(OpSymbols {
            matched,
            insert,
            delete,
        })
    }

    /// Symbol written for `op`.
    pub fn symbol(&self, op: EditOp) -> char {
        match op {
            EditOp::Match => self.matched,
            EditOp::Insert => self.insert,
            EditOp::Delete => self.delete,
        }
    }

    /// Op written as `symbol`, if any.
    pub fn op(&self, symbol: char) -> Option<EditOp> {
        [EditOp::Match, EditOp::Insert, EditOp::Delete]
            .into_iter()
            .find(|&op| self.symbol(op) == symbol)
    }

    /// Parse an edit script written with these symbols.
    pub fn parse_edits(&self, edits: &str) -> Result<Vec<EditOp>> {
        edits
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                self.op(symbol)
                    .ok_or(EditError::InvalidOp { symbol, position })
            })
            .collect()
    }

    /// Write an edit script with these symbols.
    pub fn format_edits(&self, edits: &[EditOp]) -> String {
        edits.iter().map(|&op| self.symbol(op)).collect()
    }
}

#[derive(Debug, Clone, Default)]
/// CIGAR codec configuration.
pub struct CigarConfig {
    /// Operation alphabet, [`OpSymbols`]. Defaults to `M`, `I`, `D`.
    pub symbols: OpSymbols,
    /// Accept runs of length zero (`0M`) and drop them instead of failing.
    ///
    /// Leading zeros (`01M`) are always accepted.
    pub allow_zero_counts: bool,
}
