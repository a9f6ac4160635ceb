use noisy_float::types::{R32, r32};

use crate::{
    aligned_group::AlignedGroup, error::Error, graph::GroupRow, scoring::ScoredGroup,
};

use super::{SharedSequenceLink, TrimOutcome, choose_cut_point, trim_shared_sequence};

fn r32s(values: &[f32]) -> Vec<R32> {
    values.iter().copied().map(r32).collect()
}

fn scored(rows: &[&str]) -> ScoredGroup {
    ScoredGroup::new(AlignedGroup::from_gapped_rows(rows), 2)
}

fn link(first: (usize, usize), second: (usize, usize)) -> SharedSequenceLink {
    SharedSequenceLink {
        first: GroupRow::new(first.0, first.1),
        second: GroupRow::new(second.0, second.1),
    }
}

#[test]
fn test_choose_cut_point() {
    assert_eq!(
        choose_cut_point(&r32s(&[3.0, 6.0, 6.0, 6.0]), &r32s(&[3.0, 6.0, 6.0, 6.0])),
        2
    );
    assert_eq!(
        choose_cut_point(&r32s(&[1.0, 1.0, 1.0]), &r32s(&[0.0, 5.0, 5.0])),
        1
    );
    assert_eq!(
        choose_cut_point(&r32s(&[5.0, 6.0, 9.0]), &r32s(&[0.0, 0.0, 1.0])),
        3
    );
    assert_eq!(choose_cut_point(&[], &[]), 0);
}

#[test]
fn test_choose_cut_point_prefers_earliest_on_ties() {
    assert_eq!(choose_cut_point(&r32s(&[0.0; 5]), &r32s(&[0.0; 5])), 0);
    assert_eq!(
        choose_cut_point(&r32s(&[2.0, 4.0, 6.0, 8.0]), &r32s(&[2.0, 4.0, 6.0, 8.0])),
        0
    );
    // Cut points 1 and 2 both score 4.
    assert_eq!(
        choose_cut_point(&r32s(&[2.0, 2.0, 2.0]), &r32s(&[2.0, 2.0, 2.0])),
        1
    );
}

#[test]
fn test_shared_sequence_partitions_cleanly() {
    // The second end presents the reverse complement GTACGT of the shared sequence ACGTAC.
    let mut groups = vec![
        scored(&["ACGTAC", "ACG---", "ACG---"]),
        scored(&["GTACGT", "GTA---", "GTA---"]),
    ];

    let outcome = trim_shared_sequence(&mut groups, link((0, 0), (1, 0))).unwrap();
    assert_eq!(
        outcome,
        TrimOutcome {
            length: 6,
            cut_point: 3,
            masked_first: 3,
            masked_second: 3,
        }
    );

    assert_eq!(groups[0].group().row_to_string(0), "ACG---");
    assert_eq!(groups[1].group().row_to_string(0), "GTA---");
    assert_eq!(
        groups[0].group().retained_length(0) + groups[1].group().retained_length(0),
        6
    );
    // Unrelated rows are untouched.
    assert_eq!(groups[0].group().row_to_string(1), "ACG---");
    assert_eq!(groups[1].group().row_to_string(2), "GTA---");
}

#[test]
fn test_overlapping_presentation() {
    // Both ends align the shared bases GT, and each end supports a different half.
    let mut groups = vec![
        scored(&["ACGT--", "AC----", "AC----"]),
        scored(&["--GTAA", "--GT--", "--GT--"]),
    ];

    let outcome = trim_shared_sequence(&mut groups, link((0, 0), (1, 0))).unwrap();
    assert_eq!(
        outcome,
        TrimOutcome {
            length: 4,
            cut_point: 2,
            masked_first: 2,
            masked_second: 2,
        }
    );

    assert_eq!(groups[0].group().row_to_string(0), "AC----");
    assert_eq!(groups[1].group().row_to_string(0), "--GT--");
    assert_eq!(
        groups[0].group().retained_length(0) + groups[1].group().retained_length(0),
        4
    );
}

#[test]
fn test_trim_updates_column_scores() {
    let mut groups = vec![
        scored(&["ACGT", "AC--", "AC--"]),
        scored(&["ACGT", "ACGT", "----"]),
    ];

    let outcome = trim_shared_sequence(&mut groups, link((0, 0), (1, 0))).unwrap();
    // First: [3, 6, 6, 6], second: [2, 4, 6, 8].
    assert_eq!(outcome.cut_point, 2);
    assert_eq!(groups[0].group().row_to_string(0), "AC--");
    assert_eq!(groups[1].group().row_to_string(0), "AC--");
    assert_eq!(groups[0].scores().as_slice(), r32s(&[3.0, 3.0, 0.0, 0.0]));
    assert_eq!(groups[1].scores().as_slice(), r32s(&[2.0, 2.0, 1.0, 1.0]));
}

#[test]
fn test_trim_conservation() {
    let first_rows = ["AC-GTTA-CA", "ACAGT--GCA", "-CAG-TAGC-"];
    let second_rows = [
        "TG-TCAAC-G-T",
        "TGCTC-ACTG--",
        "-----AACTGAT",
        "TGCTCAAC----",
    ];

    let mut tested_pairs = 0;
    for first_row in 0..first_rows.len() {
        for second_row in 0..second_rows.len() {
            let mut groups = vec![scored(&first_rows), scored(&second_rows)];
            let length = groups[0].group().row_length(first_row);
            if length != groups[1].group().row_length(second_row) {
                continue;
            }

            let outcome =
                trim_shared_sequence(&mut groups, link((0, first_row), (1, second_row))).unwrap();
            assert_eq!(outcome.masked_first + outcome.masked_second, length);
            assert_eq!(
                groups[0].group().retained_length(first_row)
                    + groups[1].group().retained_length(second_row),
                length
            );
            assert_eq!(groups[0].group().retained_length(first_row), outcome.cut_point);
            tested_pairs += 1;
        }
    }
    assert_eq!(tested_pairs, 3);
}

#[test]
fn test_trim_within_one_group() {
    let mut groups = vec![scored(&["ACGT", "ACGT"])];

    let outcome = trim_shared_sequence(&mut groups, link((0, 0), (0, 1))).unwrap();
    assert_eq!(outcome.cut_point, 0);
    assert_eq!(groups[0].group().row_to_string(0), "----");
    assert_eq!(groups[0].group().row_to_string(1), "ACGT");
    assert_eq!(groups[0].scores().as_slice(), r32s(&[1.0; 4]));
}

#[test]
fn test_empty_shared_sequence() {
    let mut groups = vec![scored(&["--", "AC"]), scored(&["AC", "--"])];

    let outcome = trim_shared_sequence(&mut groups, link((0, 0), (1, 1))).unwrap();
    assert_eq!(outcome.length, 0);
    assert_eq!(outcome.cut_point, 0);
    assert_eq!(outcome.masked_first + outcome.masked_second, 0);
}

#[test]
fn test_length_mismatch_is_fatal() {
    let mut groups = vec![scored(&["ACGT", "ACGT"]), scored(&["ACG", "ACG"])];
    let before = groups.clone();

    let result = trim_shared_sequence(&mut groups, link((0, 0), (1, 1)));
    assert!(matches!(
        result,
        Err(Error::SharedSequenceLengthMismatch {
            end: 0,
            row: 0,
            length: 4,
            continuation_end: 1,
            continuation_row: 1,
            continuation_length: 3,
        })
    ));
    for (group, before) in groups.iter().zip(&before) {
        assert_eq!(group.group(), before.group());
        assert_eq!(group.scores(), before.scores());
    }
}
