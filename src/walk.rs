//! Dual-cursor traversal of a read and a reference under an edit script.
//!
//! The read cursor advances on [`EditOp::Match`] and [`EditOp::Delete`], the
//! reference cursor on [`EditOp::Match`] and [`EditOp::Insert`]. Reconstruction
//! and scoring are both folds over the [`Column`]s this yields.

use std::{iter::Skip, slice, str::Chars};

use crate::{
    error::{EditError, Result},
    op::EditOp,
};

/// Characters paired up by one edit op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// Read character and reference character.
    Match(char, char),
    /// Read character against a gap.
    Delete(char),
    /// Gap against a reference character.
    Insert(char),
}

impl Column {
    /// Unit cost of this column. Mismatches, insertions and deletions cost 1.
    pub fn cost(self) -> usize {
        match self {
            Column::Match(a, b) => usize::from(a != b),
            Column::Delete(_) | Column::Insert(_) => 1,
        }
    }
}

/// A cursor over one sequence that reports where it ran out.
#[derive(Debug, Clone)]
struct Cursor<'a> {
    name: &'static str,
    chars: Skip<Chars<'a>>,
    pos: usize,
    len: usize,
}

impl<'a> Cursor<'a> {
    fn new(name: &'static str, seq: &'a str, start: usize, len: usize) -> Self {
        Cursor {
            name,
            chars: seq.chars().skip(start),
            pos: start,
            len,
        }
    }

    fn advance(&mut self) -> Result<char> {
        let c = self.chars.next().ok_or(EditError::Boundary {
            sequence: self.name,
            position: self.pos,
            len: self.len,
        })?;
        self.pos += 1;
        Ok(c)
    }
}

/// Iterator over the [`Column`]s an edit script produces.
///
/// Yields an error and then stops once either sequence is exhausted.
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    read: Cursor<'a>,
    reference: Cursor<'a>,
    edits: slice::Iter<'a, EditOp>,
    failed: bool,
}

impl<'a> Walk<'a> {
    /// Start a walk with the reference cursor at `offset`.
    ///
    /// # Errors
    /// * [`EditError::OffsetOutOfRange`] if `offset` is past the end of `reference`.
    ///
    /// # Examples
    /// ```
    /// use rs_alnedit::{op::parse_edits, walk::{Column, Walk}};
    ///
    /// let edits = parse_edits("MI").unwrap();
    /// let columns: Vec<Column> = Walk::new("a", "xag", 1, &edits)
    ///     .unwrap()
    ///     .collect::<Result<_, _>>()
    ///     .unwrap();
    /// assert_eq!(columns, [Column::Match('a', 'a'), Column::Insert('g')]);
    /// ```
    pub fn new(
        read: &'a str,
        reference: &'a str,
        offset: usize,
        edits: &'a [EditOp],
    ) -> Result<Self> {
        let ref_len = reference.chars().count();
        if offset > ref_len {
            return Err(EditError::OffsetOutOfRange {
                offset,
                len: ref_len,
            });
        }
        Ok(Walk {
            read: Cursor::new("read", read, 0, read.chars().count()),
            reference: Cursor::new("reference", reference, offset, ref_len),
            edits: edits.iter(),
            failed: false,
        })
    }

    fn step(&mut self, op: EditOp) -> Result<Column> {
        Ok(match op {
            EditOp::Match => Column::Match(self.read.advance()?, self.reference.advance()?),
            EditOp::Delete => Column::Delete(self.read.advance()?),
            EditOp::Insert => Column::Insert(self.reference.advance()?),
        })
    }
}

impl Iterator for Walk<'_> {
    type Item = Result<Column>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let op = *self.edits.next()?;
        let column = self.step(op);
        self.failed = column.is_err();
        Some(column)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            (0, self.edits.size_hint().1)
        }
    }
}
