use decnum::number::PrintOptions;
use decnum::{Cancel, Number, Status};

fn n(s: &str) -> Number {
    let cancel = Cancel::new();
    Number::parse(s, 10, &cancel).unwrap()
}

#[test]
fn parse_decimal_integer_and_fraction() {
    let cancel = Cancel::new();
    let v = Number::parse("123.45", 10, &cancel).unwrap();
    assert_eq!(v.to_string(), "123.45");
}

#[test]
fn parse_strips_leading_zeros() {
    let cancel = Cancel::new();
    let v = Number::parse("007.50", 10, &cancel).unwrap();
    assert_eq!(v.to_string(), "7.50");
}

#[test]
fn parse_empty_string_is_zero() {
    let cancel = Cancel::new();
    assert!(Number::parse("", 10, &cancel).unwrap().is_zero());
}

#[test]
fn parse_all_zero_with_fraction_keeps_scale() {
    let cancel = Cancel::new();
    let v = Number::parse("00.000", 10, &cancel).unwrap();
    assert!(v.is_zero());
    assert_eq!(v.scale(), 3);
}

#[test]
fn parse_rejects_bad_character() {
    let cancel = Cancel::new();
    let err = Number::parse("12x3", 10, &cancel).unwrap_err();
    assert_eq!(err, Status::MathBadString);
}

#[test]
fn parse_rejects_two_dots() {
    let cancel = Cancel::new();
    let err = Number::parse("1.2.3", 10, &cancel).unwrap_err();
    assert_eq!(err, Status::MathBadString);
}

#[test]
fn parse_hex_then_print_decimal_matches_example() {
    let cancel = Cancel::new();
    let v = Number::parse("FF", 16, &cancel).unwrap();
    let out = v.print(10, PrintOptions::default(), &cancel).unwrap();
    assert_eq!(out, "255");
}

#[test]
fn parse_base_rejects_digit_above_base() {
    let cancel = Cancel::new();
    let err = Number::parse("2", 2, &cancel).unwrap_err();
    assert_eq!(err, Status::MathBadString);
}

#[test]
fn parse_binary_fraction() {
    let cancel = Cancel::new();
    let v = Number::parse("101.1", 2, &cancel).unwrap();
    // 101(2) = 5, .1(2) = 0.5
    assert_eq!(v.to_string(), "5.5");
}

#[test]
fn print_base_round_trip_hex() {
    let cancel = Cancel::new();
    let v = n("4096");
    let printed = v.print(16, PrintOptions::default(), &cancel).unwrap();
    let reparsed = Number::parse(printed.trim(), 16, &cancel).unwrap();
    assert_eq!(reparsed, v);
}

#[test]
fn print_leading_fraction_has_no_leading_zero() {
    let cancel = Cancel::new();
    let v = n("0.5");
    assert_eq!(v.to_string(), ".5");
}

#[test]
fn print_wraps_long_lines() {
    let cancel = Cancel::new();
    let v = n(&"1".repeat(80));
    let out = v
        .print(
            10,
            PrintOptions {
                newline: false,
                line_len: 20,
            },
            &cancel,
        )
        .unwrap();
    assert!(out.contains('\\'));
    let rejoined: String = out.chars().filter(|&c| c != '\\' && c != '\n').collect();
    assert_eq!(rejoined, "1".repeat(80));
}

#[test]
fn stream_emits_raw_digit_bytes() {
    let cancel = Cancel::new();
    let v = n("129");
    let bytes = v.stream(10, &cancel).unwrap();
    assert_eq!(bytes, vec![1u8, 2, 9]);
}

#[test]
fn stream_of_zero_is_single_zero_byte() {
    let cancel = Cancel::new();
    let bytes = Number::zero().stream(10, &cancel).unwrap();
    assert_eq!(bytes, vec![0u8]);
}
