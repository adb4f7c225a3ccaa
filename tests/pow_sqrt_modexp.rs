use decnum::{Cancel, Number, Status};

// Negative literals are spelled by parsing the magnitude and negating,
// since `Number::parse`'s grammar carries no sign.
fn n(s: &str) -> Number {
    let cancel = Cancel::new();
    if let Some(mag) = s.strip_prefix('-') {
        let v = Number::parse(mag, 10, &cancel).unwrap();
        return Number::zero().sub(&v, 0, &cancel).unwrap();
    }
    Number::parse(s, 10, &cancel).unwrap()
}

#[test]
fn pow_matches_example() {
    let cancel = Cancel::new();
    let result = n("2").pow(&n("10"), 0, &cancel).unwrap();
    assert_eq!(result.to_string(), "1024");
}

#[test]
fn pow_zero_exponent_is_one() {
    let cancel = Cancel::new();
    assert_eq!(n("123.456").pow(&Number::zero(), 0, &cancel).unwrap(), Number::one());
}

#[test]
fn pow_zero_base_positive_exponent_is_zero() {
    let cancel = Cancel::new();
    assert!(Number::zero().pow(&n("5"), 3, &cancel).unwrap().is_zero());
}

#[test]
fn pow_negative_exponent_is_reciprocal() {
    let cancel = Cancel::new();
    let direct = n("2").pow(&n("-3"), 10, &cancel).unwrap();
    let reciprocal = Number::one().div(&n("2").pow(&n("3"), 0, &cancel).unwrap(), 10, &cancel).unwrap();
    assert_eq!(direct, reciprocal);
}

#[test]
fn pow_rejects_fractional_exponent() {
    let cancel = Cancel::new();
    let err = n("2").pow(&n("1.5"), 0, &cancel).unwrap_err();
    assert_eq!(err, Status::MathNonInteger);
}

#[test]
fn sqrt_matches_example() {
    let cancel = Cancel::new();
    assert_eq!(n("2").sqrt(10, &cancel).unwrap().to_string(), "1.4142135623");
}

#[test]
fn sqrt_of_zero_and_one() {
    let cancel = Cancel::new();
    assert!(Number::zero().sqrt(5, &cancel).unwrap().is_zero());
    assert_eq!(n("1").sqrt(5, &cancel).unwrap().to_string(), "1.00000");
}

#[test]
fn sqrt_negative_errors() {
    let cancel = Cancel::new();
    let err = n("-4").sqrt(5, &cancel).unwrap_err();
    assert_eq!(err, Status::MathNegative);
}

#[test]
fn sqrt_of_perfect_square_exact() {
    let cancel = Cancel::new();
    assert_eq!(n("144").sqrt(0, &cancel).unwrap().to_string(), "12");
}

#[test]
fn sqrt_recovers_square() {
    let cancel = Cancel::new();
    let a = n("17.3");
    let squared = a.mul(&a, a.scale() * 2, &cancel).unwrap();
    // the root's scale is at least the input's own scale, regardless of
    // the requested precision, so this recovers "17.30" not "17.3"
    let root = squared.sqrt(1, &cancel).unwrap();
    assert_eq!(root.to_string(), "17.30");
}

#[test]
fn modexp_matches_example() {
    let cancel = Cancel::new();
    let result = n("2").modexp(&n("10"), &n("1000"), &cancel).unwrap();
    assert_eq!(result.to_string(), "24");
}

#[test]
fn modexp_with_modulus_one_is_zero() {
    let cancel = Cancel::new();
    let result = n("12345").modexp(&n("7"), &n("1"), &cancel).unwrap();
    assert!(result.is_zero());
}

#[test]
fn modexp_rejects_zero_modulus() {
    let cancel = Cancel::new();
    let err = n("2").modexp(&n("3"), &Number::zero(), &cancel).unwrap_err();
    assert_eq!(err, Status::MathDivideByZero);
}

#[test]
fn modexp_rejects_negative_exponent() {
    let cancel = Cancel::new();
    let err = n("2").modexp(&n("-1"), &n("5"), &cancel).unwrap_err();
    assert_eq!(err, Status::MathNegative);
}
