#![warn(missing_docs)]

//! Conversions between pairwise alignments, edit scripts and CIGAR strings.
//!
//! ```
//! use rs_alnedit::{align, cigar, extract};
//!
//! let extracted = extract::get_edits("ACCACAGT-CATA", "A-CAGAGTACAAA").unwrap();
//! let cigar = cigar::edits_to_cigar(&extracted.edits);
//! assert_eq!(cigar, "1M1D6M1I4M");
//!
//! let aln = align::align(&extracted.read, &extracted.reference, &extracted.edits).unwrap();
//! assert_eq!(aln.read_row(), "ACCACAGT-CATA");
//! ```

pub mod align;
pub mod cigar;
pub mod config;
pub mod dst;
pub mod error;
pub mod extract;
pub mod mode;
pub mod op;
pub mod walk;

/// Reserved gap marker in alignment rows.
pub const GAP: char = '-';

pub use align::Alignment;
pub use cigar::Cigar;
pub use config::CigarConfig;
pub use error::{EditError, Result, UnknownOp};
pub use op::EditOp;
