//! Rendering RUTs for display.
//!
//! The formatter does not validate. It renders whatever the normalizer
//! leaves behind, including an empty body or an empty string.

use crate::canonical::{normalize, split_check};
use crate::types::Style;

/// Format a raw RUT string in the given style.
///
/// The last canonical character is the check character. In dotted style the
/// body is grouped in threes from the right, so the leftmost group holds
/// 1-3 digits.
///
/// ```
/// use chile_rut_core::{format, Style};
///
/// assert_eq!(format("12345", Style::Dotted), "1.234-5");
/// assert_eq!(format("12345", Style::Plain), "1234-5");
/// assert_eq!(format("0", Style::Dotted), "-");
/// ```
pub fn format(raw: &str, style: Style) -> String {
    let canonical = normalize(raw);
    let (body, check) = split_check(&canonical);

    let mut out = String::with_capacity(canonical.len() + canonical.len() / 3 + 1);
    match style {
        Style::Dotted => push_grouped(&mut out, body),
        Style::Plain => out.push_str(body),
    }
    out.push('-');
    out.push_str(check);
    out
}

/// Append `body` with a dot before every 3-digit group counted from the right.
fn push_grouped(out: &mut String, body: &str) {
    let len = body.len();
    for (i, c) in body.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_format_dotted() {
        assert_eq!(format("0", Style::Dotted), "-");
        assert_eq!(format("00", Style::Dotted), "-");
        assert_eq!(format("00000", Style::Dotted), "-");
        assert_eq!(format("1", Style::Dotted), "-1");
        assert_eq!(format("12345", Style::Dotted), "1.234-5");
        assert_eq!(format("111111-1", Style::Dotted), "111.111-1");
        assert_eq!(format("1111111-1", Style::Dotted), "1.111.111-1");
        assert_eq!(format("11111111-1", Style::Dotted), "11.111.111-1");
        assert_eq!(format("1111111111-1", Style::Dotted), "1.111.111.111-1");
    }

    #[test]
    fn test_format_plain() {
        assert_eq!(format("0", Style::Plain), "-");
        assert_eq!(format("00", Style::Plain), "-");
        assert_eq!(format("00000", Style::Plain), "-");
        assert_eq!(format("1", Style::Plain), "-1");
        assert_eq!(format("12345", Style::Plain), "1234-5");
        assert_eq!(format("111111-1", Style::Plain), "111111-1");
        assert_eq!(format("1111111-1", Style::Plain), "1111111-1");
        assert_eq!(format("11111111-1", Style::Plain), "11111111-1");
        assert_eq!(format("1111111111-1", Style::Plain), "1111111111-1");
    }

    #[test]
    fn test_format_reformats_dotted_input() {
        assert_eq!(format("13.552.901-k", Style::Plain), "13552901-K");
        assert_eq!(format("13552901k", Style::Dotted), "13.552.901-K");
    }

    #[test]
    fn test_format_does_not_validate() {
        assert_eq!(format("12.345.678-9", Style::Dotted), "12.345.678-9");
        assert_eq!(format("", Style::Dotted), "-");
        assert_eq!(format("K", Style::Plain), "-K");
    }

    proptest! {
        #[test]
        fn test_styles_normalize_alike(raw in "[1-9][0-9]{0,14}[0-9K]") {
            let dotted = format(&raw, Style::Dotted);
            let plain = format(&raw, Style::Plain);
            prop_assert_eq!(normalize(&dotted), normalize(&plain));
            prop_assert_eq!(normalize(&dotted), raw);
        }

        #[test]
        fn test_dotted_groups(raw in "[1-9][0-9]{0,14}[0-9K]") {
            let dotted = format(&raw, Style::Dotted);
            let (body, _) = dotted.split_once('-').unwrap();
            let groups: Vec<&str> = body.split('.').collect();
            prop_assert!((1..=3).contains(&groups[0].len()));
            for group in &groups[1..] {
                prop_assert_eq!(group.len(), 3);
            }
        }
    }
}
