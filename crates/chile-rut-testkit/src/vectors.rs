//! Golden test vectors for deterministic verification.
//!
//! These vectors pin the observable behavior of every operation so that
//! other implementations can be checked against this one.

use chile_rut_core::{check_digit, format, generate, is_valid, normalize, Style};
use serde::{Deserialize, Serialize};

/// Expected check digit for a numeric body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckDigitVector {
    pub body: u64,
    pub expected: char,
}

/// Expected canonical form of a raw string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeVector {
    pub input: String,
    pub expected: String,
}

/// Expected validity of a raw string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationVector {
    pub input: String,
    pub valid: bool,
}

/// Expected renderings of a raw string in both styles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatVector {
    pub input: String,
    pub dotted: String,
    pub plain: String,
}

/// Expected output length of the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateVector {
    pub length: usize,
    pub style: Style,
    pub expected_len: usize,
}

/// Every golden vector, grouped by operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldenVectors {
    pub check_digit: Vec<CheckDigitVector>,
    pub normalize: Vec<NormalizeVector>,
    pub validate: Vec<ValidationVector>,
    pub format: Vec<FormatVector>,
    pub generate: Vec<GenerateVector>,
}

/// Get all golden test vectors.
pub fn all_vectors() -> GoldenVectors {
    GoldenVectors {
        check_digit: check_digit_vectors(),
        normalize: normalize_vectors(),
        validate: validation_vectors(),
        format: format_vectors(),
        generate: generate_vectors(),
    }
}

pub fn check_digit_vectors() -> Vec<CheckDigitVector> {
    [
        (0, '0'),
        (1, '9'),
        (2, '7'),
        (3, '5'),
        (4, '3'),
        (5, '1'),
        (6, 'K'),
        (7, '8'),
        (8, '6'),
        (9, '4'),
        (123, '6'),
        (1000, '6'),
        (7_850_117, '0'),
        (13_552_901, 'K'),
        (12_345_678, '5'),
    ]
    .into_iter()
    .map(|(body, expected)| CheckDigitVector { body, expected })
    .collect()
}

pub fn normalize_vectors() -> Vec<NormalizeVector> {
    [
        ("11.111.111-1", "111111111"),
        ("11111111-1", "111111111"),
        ("11111.111-1", "111111111"),
        ("11.111.1111", "111111111"),
        ("13552901-K", "13552901K"),
        ("13552901-k", "13552901K"),
        ("7850117-0", "78501170"),
        ("", ""),
        ("qwerty", ""),
        ("11.111.111-0", "111111110"),
        ("11111111-0", "111111110"),
        ("11111.111-0", "111111110"),
        ("11.111.1110", "111111110"),
    ]
    .into_iter()
    .map(|(input, expected)| NormalizeVector {
        input: input.into(),
        expected: expected.into(),
    })
    .collect()
}

pub fn validation_vectors() -> Vec<ValidationVector> {
    let valid = [
        "1-9",
        "11.111.111-1",
        "111111111",
        "11111111-1",
        "11111.111-1",
        "11.111.1111",
        "13552901-K",
        "13552901-k",
        "7850117-0",
    ];
    let invalid = [
        "1-0",
        "11.111.111-0",
        "111111113",
        "11111111-K",
        "11111.111-K",
        "11.111.1113",
        "13552901-M",
        "0-0",
        "0-K",
        "0-3",
    ];

    valid
        .into_iter()
        .map(|input| (input, true))
        .chain(invalid.into_iter().map(|input| (input, false)))
        .map(|(input, valid)| ValidationVector {
            input: input.into(),
            valid,
        })
        .collect()
}

pub fn format_vectors() -> Vec<FormatVector> {
    [
        ("0", "-", "-"),
        ("00", "-", "-"),
        ("00000", "-", "-"),
        ("1", "-1", "-1"),
        ("12345", "1.234-5", "1234-5"),
        ("111111-1", "111.111-1", "111111-1"),
        ("1111111-1", "1.111.111-1", "1111111-1"),
        ("11111111-1", "11.111.111-1", "11111111-1"),
        ("1111111111-1", "1.111.111.111-1", "1111111111-1"),
    ]
    .into_iter()
    .map(|(input, dotted, plain)| FormatVector {
        input: input.into(),
        dotted: dotted.into(),
        plain: plain.into(),
    })
    .collect()
}

pub fn generate_vectors() -> Vec<GenerateVector> {
    [
        (0, Style::Dotted, 0),
        (8, Style::Dotted, 12),
        (9, Style::Dotted, 13),
        (10, Style::Dotted, 15),
        (0, Style::Plain, 0),
        (8, Style::Plain, 10),
        (9, Style::Plain, 11),
        (10, Style::Plain, 12),
    ]
    .into_iter()
    .map(|(length, style, expected_len)| GenerateVector {
        length,
        style,
        expected_len,
    })
    .collect()
}

/// Verify all golden vectors against this implementation.
///
/// Returns `(name, matches, actual)` for every vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    let vectors = all_vectors();
    let mut results = Vec::new();

    for v in &vectors.check_digit {
        let actual = check_digit(v.body).as_char();
        results.push((
            format!("check_digit({})", v.body),
            actual == v.expected,
            actual.to_string(),
        ));
    }

    for v in &vectors.normalize {
        let actual = normalize(&v.input);
        results.push((
            format!("normalize({:?})", v.input),
            actual == v.expected,
            actual,
        ));
    }

    for v in &vectors.validate {
        let actual = is_valid(&v.input);
        results.push((
            format!("is_valid({:?})", v.input),
            actual == v.valid,
            actual.to_string(),
        ));
    }

    for v in &vectors.format {
        let dotted = format(&v.input, Style::Dotted);
        let plain = format(&v.input, Style::Plain);
        results.push((
            format!("format({:?})", v.input),
            dotted == v.dotted && plain == v.plain,
            format!("{dotted} / {plain}"),
        ));
    }

    for v in &vectors.generate {
        let actual = generate(v.length, v.style);
        results.push((
            format!("generate({}, {:?})", v.length, v.style),
            actual.len() == v.expected_len,
            actual,
        ));
    }

    results
}

/// Serialize every vector as pretty-printed JSON.
pub fn vectors_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&all_vectors())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_vectors_pass() {
        for (name, matches, actual) in verify_all_vectors() {
            assert!(matches, "{name} produced {actual}");
        }
    }

    #[test]
    fn test_vector_counts() {
        let vectors = all_vectors();
        assert_eq!(vectors.check_digit.len(), 15);
        assert_eq!(vectors.validate.iter().filter(|v| v.valid).count(), 9);
        assert_eq!(vectors.validate.iter().filter(|v| !v.valid).count(), 10);
    }

    #[test]
    fn test_vectors_json_roundtrip() {
        let json = vectors_json().unwrap();
        let parsed: GoldenVectors = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, all_vectors());
    }
}
