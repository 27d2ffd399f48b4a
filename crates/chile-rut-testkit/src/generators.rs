//! Proptest generators for property-based testing.

use proptest::prelude::*;

use chile_rut_core::{check_digit, format, CheckDigit, Style};

/// Check characters in cyclic order, used to pick a wrong one.
const CHECK_ALPHABET: &[u8; 11] = b"0123456789K";

/// Generate a numeric body with 1-9 digits.
pub fn body() -> impl Strategy<Value = u64> {
    1u64..=999_999_999u64
}

/// Generate a display style.
pub fn style() -> impl Strategy<Value = Style> {
    prop_oneof![Just(Style::Dotted), Just(Style::Plain)]
}

/// How a raw RUT string is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `12.345.678-5`
    Dotted,
    /// `12345678-5`
    Dashed,
    /// `123456785`
    Bare,
}

/// Generate a raw layout.
pub fn layout() -> impl Strategy<Value = Layout> {
    prop_oneof![Just(Layout::Dotted), Just(Layout::Dashed), Just(Layout::Bare)]
}

/// Generate a canonical RUT (`digits` + check character) with a correct check digit.
pub fn canonical_rut() -> impl Strategy<Value = String> {
    body().prop_map(|b| format!("{}{}", b, check_digit(b)))
}

/// Generate arbitrary text that may or may not resemble a RUT.
pub fn raw_input() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9kK.\\- ]{0,16}",
        "\\PC{0,24}",
    ]
}

/// Parameters for writing a RUT.
#[derive(Debug, Clone)]
pub struct RutParams {
    pub body: u64,
    pub layout: Layout,
    pub lowercase: bool,
    /// Offset into [`CHECK_ALPHABET`] applied to the correct check digit.
    /// Zero keeps the correct digit.
    pub check_offset: usize,
}

impl RutParams {
    /// Whether the written RUT carries its correct check digit.
    pub fn is_correct(&self) -> bool {
        self.check_offset % CHECK_ALPHABET.len() == 0
    }

    /// The check character that will be written.
    pub fn written_check(&self) -> char {
        let correct = check_digit(self.body).as_char();
        let index = CHECK_ALPHABET
            .iter()
            .position(|&c| c as char == correct)
            .unwrap_or(0);
        CHECK_ALPHABET[(index + self.check_offset) % CHECK_ALPHABET.len()] as char
    }
}

impl Arbitrary for RutParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            body(),
            layout(),
            any::<bool>(),
            prop_oneof![3 => Just(0usize), 1 => 1usize..11],
        )
            .prop_map(|(body, layout, lowercase, check_offset)| RutParams {
                body,
                layout,
                lowercase,
                check_offset,
            })
            .boxed()
    }
}

/// Write a raw RUT string from parameters.
pub fn rut_from_params(params: &RutParams) -> String {
    let canonical = format!("{}{}", params.body, params.written_check());

    let raw = match params.layout {
        Layout::Dotted => format(&canonical, Style::Dotted),
        Layout::Dashed => format(&canonical, Style::Plain),
        Layout::Bare => canonical,
    };

    if params.lowercase {
        raw.to_lowercase()
    } else {
        raw
    }
}

/// Generate a raw RUT with a correct check digit in any layout.
pub fn valid_rut() -> impl Strategy<Value = String> {
    any::<RutParams>()
        .prop_filter("correct check digit", RutParams::is_correct)
        .prop_map(|p| rut_from_params(&p))
}

/// Generate a raw RUT with a wrong check digit in any layout.
pub fn invalid_rut() -> impl Strategy<Value = String> {
    (body(), layout(), 1usize..11).prop_map(|(body, layout, check_offset)| {
        rut_from_params(&RutParams {
            body,
            layout,
            lowercase: false,
            check_offset,
        })
    })
}

/// Parse a single check character, for assertions in property tests.
pub fn parse_check(c: char) -> Option<CheckDigit> {
    CheckDigit::from_char(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chile_rut_core::{compare, is_valid, normalize, Rut};

    proptest! {
        #[test]
        fn test_params_validity_matches(params: RutParams) {
            let raw = rut_from_params(&params);
            prop_assert_eq!(is_valid(&raw), params.is_correct());
        }

        #[test]
        fn test_valid_ruts_parse(raw in valid_rut()) {
            let rut: Rut = raw.parse().unwrap();
            prop_assert_eq!(rut.canonical(), normalize(&raw));
        }

        #[test]
        fn test_invalid_ruts_rejected(raw in invalid_rut()) {
            prop_assert!(!is_valid(&raw));
            prop_assert!(compare(&raw, &raw).is_err());
        }

        #[test]
        fn test_canonical_is_its_own_normal_form(canonical in canonical_rut()) {
            prop_assert_eq!(normalize(&canonical), canonical.clone());
            prop_assert!(is_valid(&canonical));
        }

        #[test]
        fn test_layouts_compare_equal(b in body(), left in layout(), right in layout()) {
            let a = rut_from_params(&RutParams { body: b, layout: left, lowercase: false, check_offset: 0 });
            let c = rut_from_params(&RutParams { body: b, layout: right, lowercase: true, check_offset: 0 });
            prop_assert_eq!(compare(&a, &c), Ok(true));
        }

        #[test]
        fn test_raw_input_never_panics(raw in raw_input(), style in style()) {
            let _ = is_valid(&raw);
            let _ = format(&raw, style);
            let canonical = normalize(&raw);
            prop_assert!(canonical.chars().all(|c| parse_check(c).is_some()));
        }
    }
}
