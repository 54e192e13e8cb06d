//! Run-length CIGAR encoding of edit scripts.
//!
//! Grammar is `(count op)*` with no separators. Leading zeros in a count are
//! accepted. Zero counts are rejected unless
//! [`CigarConfig::allow_zero_counts`] is set. Counts above [`MAX_RUN_LEN`]
//! are rejected; longer runs of one op are written as several tokens.
//! * See http://samtools.github.io/hts-specs/SAMv1.pdf

use std::{fmt, iter, str::FromStr};

use log::debug;

use crate::{
    config::{CigarConfig, OpSymbols},
    error::{EditError, Result},
    op::EditOp,
};

/// Longest run a single CIGAR token may describe, the BAM limit of 28 bits.
pub const MAX_RUN_LEN: usize = (1 << 28) - 1;

/// Edit script stored as maximal `(length, op)` runs.
///
/// Every run is between 1 and [`MAX_RUN_LEN`] long. Two neighbours share an op
/// only when the first is full.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cigar {
    runs: Vec<(usize, EditOp)>,
}

impl Cigar {
    /// Run-length encode an edit script.
    pub fn from_edits(edits: &[EditOp]) -> Self {
        let mut cigar = Cigar::default();
        for &op in edits {
            cigar.push(1, op);
        }
        cigar
    }

    /// Build from arbitrary runs, merging neighbours with the same op and
    /// dropping empty runs.
    ///
    /// # Errors
    /// * [`EditError::RunTooLong`] if a run is longer than [`MAX_RUN_LEN`].
    pub fn from_runs(runs: impl IntoIterator<Item = (usize, EditOp)>) -> Result<Self> {
        let mut cigar = Cigar::default();
        for (index, (len, op)) in runs.into_iter().enumerate() {
            if len > MAX_RUN_LEN {
                return Err(EditError::RunTooLong {
                    index,
                    len,
                    max: MAX_RUN_LEN,
                });
            }
            cigar.push(len, op);
        }
        Ok(cigar)
    }

    // `len` must not exceed MAX_RUN_LEN.
    fn push(&mut self, len: usize, op: EditOp) {
        if len == 0 {
            return;
        }
        if let Some((last_len, last_op)) = self.runs.last_mut() {
            if *last_op == op && *last_len < MAX_RUN_LEN {
                let moved = len.min(MAX_RUN_LEN - *last_len);
                *last_len += moved;
                if moved < len {
                    self.runs.push((len - moved, op));
                }
                return;
            }
        }
        self.runs.push((len, op));
    }

    /// The `(length, op)` runs.
    pub fn runs(&self) -> &[(usize, EditOp)] {
        &self.runs
    }

    /// Expand back into one op per column.
    pub fn to_edits(&self) -> Vec<EditOp> {
        self.runs
            .iter()
            .flat_map(|&(len, op)| iter::repeat(op).take(len))
            .collect()
    }

    /// Number of alignment columns, or `None` if it does not fit in `usize`.
    pub fn len(&self) -> Option<usize> {
        self.consumed(|_| true)
    }

    /// Whether there are no runs.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Read characters consumed (M + D), or `None` on overflow.
    pub fn read_len(&self) -> Option<usize> {
        self.consumed(EditOp::consumes_read)
    }

    /// Reference characters consumed (M + I), or `None` on overflow.
    pub fn reference_len(&self) -> Option<usize> {
        self.consumed(EditOp::consumes_reference)
    }

    fn consumed(&self, consumes: fn(EditOp) -> bool) -> Option<usize> {
        self.runs
            .iter()
            .filter(|(_, op)| consumes(*op))
            .try_fold(0usize, |total, &(len, _)| total.checked_add(len))
    }

    /// Write the runs with a custom op alphabet.
    pub fn format_with(&self, symbols: &OpSymbols) -> String {
        self.runs
            .iter()
            .map(|&(len, op)| format!("{len}{}", symbols.symbol(op)))
            .collect()
    }

    /// Parse with a custom configuration. Non-maximal runs are merged.
    pub fn parse_with(config: &CigarConfig, cigar: &str) -> Result<Self> {
        Self::from_runs(parse_runs(config, cigar)?)
    }
}

impl fmt::Display for Cigar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (len, op) in &self.runs {
            write!(f, "{len}{op}")?;
        }
        Ok(())
    }
}

impl FromStr for Cigar {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_with(&CigarConfig::default(), s)
    }
}

/// Split a CIGAR string into its `(count, op)` tokens, in order.
fn parse_runs(config: &CigarConfig, cigar: &str) -> Result<Vec<(usize, EditOp)>> {
    let mut runs = Vec::new();
    // Count being read and the position of its first digit.
    let mut count: Option<(usize, usize)> = None;

    for (position, c) in cigar.chars().enumerate() {
        if let Some(digit) = c.to_digit(10) {
            let (start, n) = count.unwrap_or((position, 0));
            // Stays in range: n <= MAX_RUN_LEN before each step.
            let n = n * 10 + digit as usize;
            if n > MAX_RUN_LEN {
                return Err(EditError::Format {
                    position: start,
                    reason: format!("count exceeds {MAX_RUN_LEN}"),
                });
            }
            count = Some((start, n));
            continue;
        }

        let (start, n) = count.take().ok_or_else(|| EditError::Format {
            position,
            reason: format!("operation '{c}' has no count"),
        })?;
        let op = config.symbols.op(c).ok_or_else(|| EditError::Format {
            position,
            reason: format!("unknown operation '{c}'"),
        })?;
        if n == 0 && !config.allow_zero_counts {
            return Err(EditError::Format {
                position: start,
                reason: format!("zero-length '{c}' run"),
            });
        }
        runs.push((n, op));
    }

    if let Some((start, _)) = count {
        return Err(EditError::Format {
            position: start,
            reason: "count at end of input has no operation".to_string(),
        });
    }
    debug!("Parsed {} CIGAR tokens.", runs.len());

    Ok(runs)
}

/// Expand the compressed CIGAR encoding into the full list of edits.
///
/// # Errors
/// * [`EditError::Format`] for a missing count, a trailing count, an unknown
///   operation, a zero count or a count above [`MAX_RUN_LEN`].
///
/// # Examples
/// ```
/// use rs_alnedit::{cigar::cigar_to_edits, op::edits_to_string};
///
/// let edits = cigar_to_edits("1M1D6M1I4M").unwrap();
/// assert_eq!(edits_to_string(&edits), "MDMMMMMMIMMMM");
/// assert!(cigar_to_edits("").unwrap().is_empty());
/// assert!(cigar_to_edits("3M2").is_err());
/// ```
pub fn cigar_to_edits(cigar: &str) -> Result<Vec<EditOp>> {
    cigar_to_edits_with(&CigarConfig::default(), cigar)
}

/// [`cigar_to_edits`] with a custom [`CigarConfig`].
pub fn cigar_to_edits_with(config: &CigarConfig, cigar: &str) -> Result<Vec<EditOp>> {
    Ok(parse_runs(config, cigar)?
        .into_iter()
        .flat_map(|(len, op)| iter::repeat(op).take(len))
        .collect())
}

/// Encode a sequence of edits as a CIGAR.
///
/// # Examples
/// ```
/// use rs_alnedit::{cigar::edits_to_cigar, op::parse_edits};
///
/// let edits = parse_edits("MDMMMMMMIMMMM").unwrap();
/// assert_eq!(edits_to_cigar(&edits), "1M1D6M1I4M");
/// assert_eq!(edits_to_cigar(&[]), "");
/// ```
pub fn edits_to_cigar(edits: &[EditOp]) -> String {
    Cigar::from_edits(edits).to_string()
}

/// [`edits_to_cigar`] with a custom [`CigarConfig`].
pub fn edits_to_cigar_with(config: &CigarConfig, edits: &[EditOp]) -> String {
    Cigar::from_edits(edits).format_with(&config.symbols)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::op::{edits_to_string, parse_edits};

    fn expand(cigar: &str) -> String {
        edits_to_string(&cigar_to_edits(cigar).unwrap())
    }

    fn compress(edits: &str) -> String {
        edits_to_cigar(&parse_edits(edits).unwrap())
    }

    #[test]
    fn test_cigar_to_edits() {
        assert_eq!(expand("1M1D1I1M1I1D"), "MDIMID");
        assert_eq!(expand("2M2D2I2M2I2D"), "MMDDIIMMIIDD");
        assert_eq!(expand("1M2D3I2M1I2D"), "MDDIIIMMIDD");
        assert_eq!(expand("1M1D6M1I4M"), "MDMMMMMMIMMMM");
        assert_eq!(expand(""), "");
    }

    #[test]
    fn test_edits_to_cigar() {
        assert_eq!(compress("MDIMID"), "1M1D1I1M1I1D");
        assert_eq!(compress("MMDDIIMMIIDD"), "2M2D2I2M2I2D");
        assert_eq!(compress("MDDIIIMMIDD"), "1M2D3I2M1I2D");
        assert_eq!(compress("MDMMMMMMIMMMM"), "1M1D6M1I4M");
        assert_eq!(compress(""), "");
    }

    #[test]
    fn test_cigar_leading_zeros() {
        assert_eq!(expand("01M002I"), "MII");
        assert_eq!(expand("10M"), "M".repeat(10));
    }

    #[test]
    fn test_cigar_zero_count() {
        assert_eq!(
            cigar_to_edits("2M0I").unwrap_err(),
            EditError::Format {
                position: 2,
                reason: "zero-length 'I' run".to_string()
            }
        );
        let config = CigarConfig {
            allow_zero_counts: true,
            ..Default::default()
        };
        let edits = cigar_to_edits_with(&config, "2M0I1D").unwrap();
        assert_eq!(edits_to_string(&edits), "MMD");
    }

    #[test]
    fn test_cigar_malformed() {
        assert!(matches!(
            cigar_to_edits("M").unwrap_err(),
            EditError::Format { position: 0, .. }
        ));
        assert!(matches!(
            cigar_to_edits("3M2").unwrap_err(),
            EditError::Format { position: 2, .. }
        ));
        assert!(matches!(
            cigar_to_edits("3M2X").unwrap_err(),
            EditError::Format { position: 3, .. }
        ));
        assert!(matches!(
            cigar_to_edits("3M 2I").unwrap_err(),
            EditError::Format { position: 2, .. }
        ));
        assert!(matches!(
            cigar_to_edits("3MM").unwrap_err(),
            EditError::Format { position: 2, .. }
        ));
        assert!(matches!(
            cigar_to_edits("99999999999999999999999M").unwrap_err(),
            EditError::Format { position: 0, .. }
        ));
    }

    #[test]
    fn test_cigar_huge_counts() {
        assert_eq!(
            cigar_to_edits("18446744073709551615M").unwrap_err(),
            EditError::Format {
                position: 0,
                reason: format!("count exceeds {MAX_RUN_LEN}")
            }
        );
        assert!(matches!(
            cigar_to_edits("2M99999999999I").unwrap_err(),
            EditError::Format { position: 2, .. }
        ));
        assert!(matches!(
            "18446744073709551615M1M".parse::<Cigar>().unwrap_err(),
            EditError::Format { position: 0, .. }
        ));
        assert!("18446744073709551615M1I".parse::<Cigar>().is_err());

        let max = format!("{MAX_RUN_LEN}M");
        let cigar: Cigar = max.parse().unwrap();
        assert_eq!(cigar.len(), Some(MAX_RUN_LEN));
        assert!(format!("{}M", MAX_RUN_LEN + 1).parse::<Cigar>().is_err());
    }

    #[test]
    fn test_cigar_full_runs_split() {
        let cigar: Cigar = format!("{MAX_RUN_LEN}M{MAX_RUN_LEN}M2M").parse().unwrap();
        assert_eq!(
            cigar.runs(),
            &[
                (MAX_RUN_LEN, EditOp::Match),
                (MAX_RUN_LEN, EditOp::Match),
                (2, EditOp::Match)
            ]
        );
        assert_eq!(cigar.len(), Some(2 * MAX_RUN_LEN + 2));
        assert_eq!(cigar.reference_len(), Some(2 * MAX_RUN_LEN + 2));
        assert_eq!(cigar.read_len(), Some(2 * MAX_RUN_LEN + 2));

        let cigar: Cigar = format!("{}M5M", MAX_RUN_LEN - 2).parse().unwrap();
        assert_eq!(
            cigar.runs(),
            &[(MAX_RUN_LEN, EditOp::Match), (3, EditOp::Match)]
        );
    }

    #[test]
    fn test_cigar_from_runs_too_long() {
        assert_eq!(
            Cigar::from_runs([(1, EditOp::Match), (usize::MAX, EditOp::Match)]).unwrap_err(),
            EditError::RunTooLong {
                index: 1,
                len: usize::MAX,
                max: MAX_RUN_LEN
            }
        );
    }

    #[test]
    fn test_cigar_custom_symbols() {
        let config = CigarConfig {
            symbols: OpSymbols::new('=', 'I', 'D').unwrap(),
            ..Default::default()
        };
        let edits = cigar_to_edits_with(&config, "3=1D").unwrap();
        assert_eq!(edits_to_string(&edits), "MMMD");
        assert_eq!(edits_to_cigar_with(&config, &edits), "3=1D");
        assert!(cigar_to_edits_with(&config, "3M").is_err());
    }

    #[test]
    fn test_cigar_struct() {
        let cigar: Cigar = "1M1D6M1I4M".parse().unwrap();
        assert_eq!(cigar.runs().len(), 5);
        assert_eq!(cigar.len(), Some(13));
        assert_eq!(cigar.read_len(), Some(12));
        assert_eq!(cigar.reference_len(), Some(12));
        assert_eq!(cigar.to_string(), "1M1D6M1I4M");
        assert_eq!(edits_to_string(&cigar.to_edits()), "MDMMMMMMIMMMM");
    }

    #[test]
    fn test_cigar_struct_merges_runs() {
        let cigar: Cigar = "1M2M1I".parse().unwrap();
        assert_eq!(cigar.to_string(), "3M1I");
        // Decoding keeps the columns regardless of run form.
        assert_eq!(expand("1M2M1I"), "MMMI");

        let cigar =
            Cigar::from_runs([(0, EditOp::Match), (2, EditOp::Delete), (1, EditOp::Delete)]).unwrap();
        assert_eq!(cigar.runs(), &[(3, EditOp::Delete)]);
        assert!(Cigar::default().is_empty());
    }
}
