use noisy_float::types::{R32, r32};

use crate::{aligned_group::AlignedGroup, error::Error};

use super::{ColumnScores, ScoredGroup, cumulative_row_scores};

fn r32s(values: &[f32]) -> Vec<R32> {
    values.iter().copied().map(r32).collect()
}

#[test]
fn test_column_scores() {
    let group = AlignedGroup::from_gapped_rows(&["ACG-T", "A-GTT", "--G-T"]);
    let scores = ColumnScores::compute(&group, 2);
    assert_eq!(scores.as_slice(), r32s(&[2.0, 0.0, 3.0, 0.0, 3.0]));
}

#[test]
fn test_single_row_scores_zero() {
    let group = AlignedGroup::from_gapped_rows(&["ACGT"]);
    let scores = ColumnScores::compute(&group, 2);
    assert_eq!(scores.as_slice(), r32s(&[0.0; 4]));
}

#[test]
fn test_all_gap_column() {
    let group = AlignedGroup::from_gapped_rows(&["A-C", "A-C"]);
    let scores = ColumnScores::compute(&group, 2);
    assert_eq!(scores.as_slice(), r32s(&[2.0, 0.0, 2.0]));
}

#[test]
fn test_decrement_floors_at_zero() {
    let group = AlignedGroup::from_gapped_rows(&["AC", "A-"]);
    let mut scores = ColumnScores::compute(&group, 2);
    scores.decrement(0);
    assert_eq!(scores.get(0), r32(1.0));
    scores.decrement(0);
    scores.decrement(0);
    assert_eq!(scores.get(0), r32(0.0));
    scores.decrement(1);
    assert_eq!(scores.get(1), r32(0.0));
}

#[test]
fn test_cumulative_row_scores() {
    let group = AlignedGroup::from_gapped_rows(&["ACG-T", "A-GTT", "--G-T"]);
    let scores = ColumnScores::compute(&group, 2);

    assert_eq!(
        cumulative_row_scores(&group, &scores, 0).unwrap(),
        r32s(&[2.0, 2.0, 5.0, 8.0])
    );
    assert_eq!(
        cumulative_row_scores(&group, &scores, 1).unwrap(),
        r32s(&[2.0, 5.0, 5.0, 8.0])
    );
    assert_eq!(
        cumulative_row_scores(&group, &scores, 2).unwrap(),
        r32s(&[3.0, 6.0])
    );
}

#[test]
fn test_cumulative_row_scores_are_monotone() {
    let group = AlignedGroup::from_gapped_rows(&[
        "AC-GTTA-CA",
        "ACAGT--GCA",
        "-CAG-TAGC-",
        "A---TTAG--",
    ]);
    let scores = ColumnScores::compute(&group, 2);

    for row in 0..group.row_count() {
        let cumulative = cumulative_row_scores(&group, &scores, row).unwrap();
        assert_eq!(cumulative.len(), group.row_length(row));
        assert!(cumulative.windows(2).all(|window| window[0] <= window[1]));
    }
}

#[test]
fn test_cumulative_scan_detects_corruption() {
    let mut group = ScoredGroup::new(AlignedGroup::from_gapped_rows(&["ACGT", "ACGT"]), 2);
    group.trim_row_suffix(0, 2);

    assert!(matches!(
        group.cumulative_row_scores(0),
        Err(Error::ScanLengthMismatch {
            row: 0,
            expected: 4,
            actual: 2
        })
    ));
}

#[test]
fn test_trim_row_suffix() {
    let mut group = ScoredGroup::new(AlignedGroup::from_gapped_rows(&["AC-GT", "ACCGT"]), 2);
    assert_eq!(group.trim_row_suffix(0, 1), 3);
    assert_eq!(group.group().row_to_string(0), "A----");
    assert_eq!(
        group.scores().as_slice(),
        r32s(&[2.0, 1.0, 0.0, 1.0, 1.0])
    );

    assert_eq!(group.trim_row_suffix(1, 5), 0);
    assert_eq!(group.group().row_to_string(1), "ACCGT");
}
