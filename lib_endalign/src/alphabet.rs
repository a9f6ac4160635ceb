//! The character set of aligned matrices.
//!
//! Bases are stored as upper case ASCII `A`, `C`, `G`, `T` and `N`, gaps as `-`.
//! Gaps only appear in aligned rows, never in input sequences.

pub const GAP: u8 = b'-';
pub const UNKNOWN: u8 = b'N';

/// Maps an input character into the alignment alphabet.
///
/// `ACGT` are accepted in either case and everything else becomes `N`, including `-`.
pub fn normalise_character(character: u8) -> u8 {
    match character {
        b'A' | b'a' => b'A',
        b'C' | b'c' => b'C',
        b'G' | b'g' => b'G',
        b'T' | b't' => b'T',
        _ => UNKNOWN,
    }
}

pub fn normalise_sequence(sequence: &[u8]) -> Vec<u8> {
    sequence.iter().copied().map(normalise_character).collect()
}

pub fn is_gap(character: u8) -> bool {
    character == GAP
}

#[cfg(test)]
mod tests {
    use super::{normalise_character, normalise_sequence};

    #[test]
    fn test_normalise() {
        assert_eq!(normalise_sequence(b"acgtACGT"), b"ACGTACGT");
        assert_eq!(normalise_sequence(b"AC-GT"), b"ACNGT");
        assert_eq!(normalise_character(b'R'), b'N');
        assert_eq!(normalise_character(b'n'), b'N');
        assert_eq!(normalise_character(b'|'), b'N');
    }
}
