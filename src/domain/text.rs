//! Character-wise string reversal

use thiserror::Error;

/// Errors returned by [`reverse`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReverseError {
    #[error("input is not valid UTF-8 (first invalid byte at offset {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },
}

/// Reverse UTF-8 bytes by character
///
/// Bytes that are not valid UTF-8 are rejected rather than reversed byte by
/// byte, which would scramble multi-byte sequences.
pub fn reverse(input: &[u8]) -> Result<String, ReverseError> {
    let text = std::str::from_utf8(input).map_err(|e| ReverseError::InvalidUtf8 {
        valid_up_to: e.valid_up_to(),
    })?;

    Ok(reverse_str(text))
}

/// Reverse text that is already known to be valid
pub fn reverse_str(text: &str) -> String {
    text.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SEED_CORPUS: [&str; 3] = ["Hello, world", " ", "!12345"];

    #[test]
    fn test_reverse_known_values() {
        let cases = [
            ("Hello, world", "dlrow ,olleH"),
            (" ", " "),
            ("!12345", "54321!"),
        ];

        for (input, want) in cases {
            assert_eq!(reverse(input.as_bytes()).unwrap(), want);
            assert_eq!(reverse_str(input), want);
        }
    }

    #[test]
    fn test_reverse_multibyte_characters() {
        assert_eq!(reverse_str("añb"), "bña");
        assert_eq!(reverse("日本語".as_bytes()).unwrap(), "語本日");
    }

    #[test]
    fn test_reverse_empty() {
        assert_eq!(reverse(b"").unwrap(), "");
    }

    #[test]
    fn test_reverse_rejects_invalid_utf8() {
        let err = reverse(b"ab\xffcd").unwrap_err();
        assert_eq!(err, ReverseError::InvalidUtf8 { valid_up_to: 2 });
    }

    #[test]
    fn test_reverse_rejects_truncated_sequence() {
        // first two bytes of a three-byte character
        let result = reverse(&[0xe6, 0x97]);
        assert!(matches!(result, Err(ReverseError::InvalidUtf8 { valid_up_to: 0 })));
    }

    #[test]
    fn test_seed_corpus_properties() {
        for seed in SEED_CORPUS {
            check_reverse_properties(seed.as_bytes()).unwrap();
        }
    }

    /// Reversal must be an involution and keep valid text valid.
    /// Inputs the reversal rejects are skipped.
    fn check_reverse_properties(orig: &[u8]) -> Result<(), TestCaseError> {
        let Ok(rev) = reverse(orig) else {
            return Ok(());
        };
        let Ok(double_rev) = reverse(rev.as_bytes()) else {
            return Ok(());
        };

        prop_assert_eq!(orig, double_rev.as_bytes());

        if std::str::from_utf8(orig).is_ok() {
            prop_assert!(std::str::from_utf8(rev.as_bytes()).is_ok());
        }

        Ok(())
    }

    proptest! {
        #[test]
        fn reverse_arbitrary_bytes(orig in proptest::collection::vec(any::<u8>(), 0..64)) {
            check_reverse_properties(&orig)?;
        }

        #[test]
        fn reverse_arbitrary_text(orig in any::<String>()) {
            check_reverse_properties(orig.as_bytes())?;
            prop_assert_eq!(reverse_str(&reverse_str(&orig)), orig);
        }
    }
}
