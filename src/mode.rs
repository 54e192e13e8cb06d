//! Alignment span selection.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Which span of the reference an edit script is aligned against.
pub enum AlignMode {
    #[default]
    /// Global method.
    /// * The script starts at the first reference character.
    /// * Useful when both sequences are aligned end to end.
    Global,
    /// Local method.
    /// * The script starts at `offset` in the reference.
    /// * Useful when a read was mapped to a position inside a longer reference.
    ///
    /// ### Example
    /// `ACT` against `CGACTGAC` with offset 2 and edits `MMM`.
    /// * Reference span is `ACT`.
    /// * Characters before and after the span are not part of the alignment.
    Local {
        /// Zero-based start position in the reference.
        offset: usize,
    },
}

impl AlignMode {
    /// Mode for a given start position. Offset 0 is [`AlignMode::Global`].
    pub fn from_offset(offset: usize) -> Self {
        if offset == 0 {
            AlignMode::Global
        } else {
            AlignMode::Local { offset }
        }
    }

    /// Start position in the reference.
    pub fn offset(self) -> usize {
        match self {
            AlignMode::Global => 0,
            AlignMode::Local { offset } => offset,
        }
    }
}
