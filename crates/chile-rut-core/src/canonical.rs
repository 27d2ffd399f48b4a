//! Canonicalization of raw RUT strings.
//!
//! The canonical form keeps only digits and the check letter `K`:
//! - A run of `0` at the very start of the input is dropped
//! - Every character outside `[0-9kK]` is dropped
//! - `k` is upper-cased
//!
//! Zeros are only stripped when they open the raw input. A zero that
//! follows a separator at the start (`"-007"`) survives, so the canonical
//! form of such input can still begin with `0`.

/// Strip formatting from a raw RUT string.
///
/// ```
/// use chile_rut_core::normalize;
///
/// assert_eq!(normalize("13552901-k"), "13552901K");
/// assert_eq!(normalize("11.111.111-0"), "111111110");
/// assert_eq!(normalize("qwerty"), "");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.trim_start_matches('0')
        .chars()
        .filter(|&c| c.is_ascii_digit() || matches!(c, 'k' | 'K'))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Split a canonical string into its body and trailing check character.
///
/// Returns `("", "")` for an empty string. The canonical alphabet is ASCII,
/// so byte slicing is safe.
pub(crate) fn split_check(canonical: &str) -> (&str, &str) {
    match canonical.len() {
        0 => ("", ""),
        n => canonical.split_at(n - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_strips_separators() {
        assert_eq!(normalize("11.111.111-1"), "111111111");
        assert_eq!(normalize("11111111-1"), "111111111");
        assert_eq!(normalize("11111.111-1"), "111111111");
        assert_eq!(normalize("11.111.1111"), "111111111");
        assert_eq!(normalize("7850117-0"), "78501170");
    }

    #[test]
    fn test_normalize_uppercases_k() {
        assert_eq!(normalize("13552901-K"), "13552901K");
        assert_eq!(normalize("13552901-k"), "13552901K");
    }

    #[test]
    fn test_normalize_garbage() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("qwerty"), "");
        assert_eq!(normalize("ñ-ü 1"), "1");
    }

    #[test]
    fn test_normalize_leading_zeros() {
        assert_eq!(normalize("0"), "");
        assert_eq!(normalize("00000"), "");
        assert_eq!(normalize("0-0"), "0");
        assert_eq!(normalize("007.123-4"), "71234");
        // Only zeros at the very start of the raw input are removed.
        assert_eq!(normalize("-007"), "007");
    }

    #[test]
    fn test_split_check() {
        assert_eq!(split_check(""), ("", ""));
        assert_eq!(split_check("K"), ("", "K"));
        assert_eq!(split_check("123456785"), ("12345678", "5"));
    }

    proptest! {
        #[test]
        fn test_normalize_idempotent(raw in "[1-9kK][0-9kK.\\- ]{0,16}") {
            let once = normalize(&raw);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn test_normalize_alphabet(raw in "\\PC{0,32}") {
            let canonical = normalize(&raw);
            prop_assert!(canonical.chars().all(|c| c.is_ascii_digit() || c == 'K'));
        }
    }
}
