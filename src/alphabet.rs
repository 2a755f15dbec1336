//! Alphabet index arithmetic.
//!
//! Maps the 26 Latin letters onto indices 0..=25 and provides the mod-26
//! helpers the rotor offset arithmetic is built on.

/// Number of letters in the machine alphabet.
pub(crate) const ALPHABET_LEN: u8 = 26;

/// Returns the alphabet index of `letter` (A=0 .. Z=25).
///
/// Lowercase letters are accepted and treated as their uppercase form.
/// Returns `None` for anything that is not an ASCII letter.
pub(crate) fn idx(letter: char) -> Option<u8> {
    if letter.is_ascii_alphabetic() {
        Some(letter.to_ascii_uppercase() as u8 - b'A')
    } else {
        None
    }
}

/// Returns the letter at alphabet index `n`.
///
/// # Panics
/// Debug-asserts that `n < 26`; all callers operate on reduced indices.
pub(crate) fn chr(n: u8) -> char {
    debug_assert!(n < ALPHABET_LEN);
    (b'A' + n) as char
}

/// Adds two alphabet indices modulo 26.
pub(crate) fn add(a: u8, b: u8) -> u8 {
    (a + b) % ALPHABET_LEN
}

/// Subtracts `b` from `a` modulo 26, staying in 0..=25.
pub(crate) fn sub(a: u8, b: u8) -> u8 {
    (a + ALPHABET_LEN - b) % ALPHABET_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idx_maps_both_cases() {
        assert_eq!(idx('A'), Some(0));
        assert_eq!(idx('Z'), Some(25));
        assert_eq!(idx('a'), Some(0));
        assert_eq!(idx('q'), Some(16));
    }

    #[test]
    fn idx_rejects_non_letters() {
        assert_eq!(idx('0'), None);
        assert_eq!(idx(' '), None);
        assert_eq!(idx('Ä'), None);
    }

    #[test]
    fn chr_is_inverse_of_idx() {
        for n in 0..ALPHABET_LEN {
            assert_eq!(idx(chr(n)), Some(n));
        }
    }

    #[test]
    fn add_and_sub_wrap() {
        assert_eq!(add(25, 1), 0);
        assert_eq!(add(13, 13), 0);
        assert_eq!(sub(0, 1), 25);
        assert_eq!(sub(5, 5), 0);
    }

    #[test]
    fn sub_undoes_add() {
        for a in 0..ALPHABET_LEN {
            for b in 0..ALPHABET_LEN {
                assert_eq!(sub(add(a, b), b), a);
            }
        }
    }
}
