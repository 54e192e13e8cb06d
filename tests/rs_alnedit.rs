use proptest::prelude::*;
use rs_alnedit::{
    align::{align, local_align},
    cigar::{cigar_to_edits, edits_to_cigar},
    dst::edit_dist,
    extract::get_edits,
    op::{edits_to_string, parse_edits},
    Alignment, EditError, EditOp,
};

#[test]
fn test_usage() {
    let extracted = get_edits("ACCACAGT-CATA", "A-CAGAGTACAAA").unwrap();
    assert_eq!(extracted.read, "ACCACAGTCATA");
    assert_eq!(extracted.reference, "ACAGAGTACAAA");
    assert_eq!(edits_to_string(&extracted.edits), "MDMMMMMMIMMMM");

    let edits = parse_edits("MDMMMMMMIMMMM").unwrap();
    let aln = local_align("ACCACAGTCATA", "GTACAGAGTACAAA", 2, &edits).unwrap();
    assert_eq!(
        <(String, String)>::from(aln),
        ("ACCACAGT-CATA".to_string(), "A-CAGAGTACAAA".to_string())
    );

    assert_eq!(cigar_to_edits("1M1D6M1I4M").unwrap(), edits);
    assert_eq!(edits_to_cigar(&edits), "1M1D6M1I4M");
    assert!(cigar_to_edits("").unwrap().is_empty());
    assert_eq!(edits_to_cigar(&[]), "");

    let edits = parse_edits("MDMMIMMMMIIM").unwrap();
    assert_eq!(edit_dist("accaaagta", "cgacaaatgtcca", 2, &edits).unwrap(), 5);
    let edits = parse_edits("MMMDDDMM").unwrap();
    assert_eq!(edit_dist("acgttcga", "aaaaa", 0, &edits).unwrap(), 6);
}

#[test]
fn test_cigar_then_align() {
    let edits = cigar_to_edits("1M1D2M1I4M2I1M").unwrap();
    let aln = local_align("accaaagta", "gtacaaatgtcca", 2, &edits).unwrap();
    assert_eq!(aln.read_row(), "acca-aagt--a");
    assert_eq!(aln.reference_row(), "a-caaatgtcca");
}

#[test]
fn test_errors_are_not_swallowed() {
    assert!(matches!(
        get_edits("AC", "A").unwrap_err(),
        EditError::LengthMismatch { .. }
    ));
    assert!(matches!(
        cigar_to_edits("12").unwrap_err(),
        EditError::Format { .. }
    ));
    assert!(matches!(
        parse_edits("MQ").unwrap_err(),
        EditError::InvalidOp { symbol: 'Q', .. }
    ));
    assert!(matches!(
        align("A", "A", &[EditOp::Match, EditOp::Match]).unwrap_err(),
        EditError::Boundary { .. }
    ));
    assert!(matches!(
        edit_dist("A", "ACGT", 5, &[EditOp::Delete]).unwrap_err(),
        EditError::OffsetOutOfRange { offset: 5, len: 4 }
    ));
}

/// Alignment rows with no gap-gap column.
fn arb_alignment() -> impl Strategy<Value = (String, String)> {
    let base = prop::sample::select(vec!['A', 'C', 'G', 'T']);
    let column = (0..3u8, base.clone(), base).prop_map(|(kind, p, q)| match kind {
        0 => (p, q),
        1 => ('-', q),
        _ => (p, '-'),
    });
    proptest::collection::vec(column, 0..40).prop_map(|columns| columns.into_iter().unzip())
}

proptest! {
    #[test]
    fn extract_align_round_trip((row_p, row_q) in arb_alignment()) {
        let extracted = get_edits(&row_p, &row_q).unwrap();
        let aln = align(&extracted.read, &extracted.reference, &extracted.edits).unwrap();
        prop_assert_eq!(&aln, &Alignment::new(row_p.as_str(), row_q.as_str()).unwrap());
        prop_assert_eq!(aln.read_row(), row_p);
        prop_assert_eq!(aln.reference_row(), row_q);
    }

    #[test]
    fn distance_within_script_length((row_p, row_q) in arb_alignment()) {
        let extracted = get_edits(&row_p, &row_q).unwrap();
        let dist = edit_dist(&extracted.read, &extracted.reference, 0, &extracted.edits).unwrap();
        prop_assert!(dist <= extracted.edits.len());
        let gaps = extracted.edits.iter().filter(|&&op| op != EditOp::Match).count();
        prop_assert!(dist >= gaps);
    }

    #[test]
    fn offset_is_slicing((row_p, row_q) in arb_alignment(), prefix in "[ACGT]{0,10}") {
        let extracted = get_edits(&row_p, &row_q).unwrap();
        let reference = format!("{prefix}{}", extracted.reference);
        let offset = prefix.len();
        let shifted = local_align(&extracted.read, &reference, offset, &extracted.edits).unwrap();
        let sliced = local_align(&extracted.read, &reference[offset..], 0, &extracted.edits).unwrap();
        prop_assert_eq!(&shifted, &sliced);
        prop_assert_eq!(
            edit_dist(&extracted.read, &reference, offset, &extracted.edits).unwrap(),
            edit_dist(&extracted.read, &reference[offset..], 0, &extracted.edits).unwrap()
        );
    }

    #[test]
    fn cigar_round_trip_through_alignment((row_p, row_q) in arb_alignment()) {
        let extracted = get_edits(&row_p, &row_q).unwrap();
        let cigar = edits_to_cigar(&extracted.edits);
        prop_assert_eq!(cigar_to_edits(&cigar).unwrap(), extracted.edits);
    }
}
