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
fn div_matches_repeating_decimal_example() {
    let cancel = Cancel::new();
    let a = n("1");
    let b = n("3");
    assert_eq!(
        a.div(&b, 20, &cancel).unwrap().to_string(),
        ".33333333333333333333"
    );
}

#[test]
fn div_by_zero_errors() {
    let cancel = Cancel::new();
    let err = n("5").div(&Number::zero(), 0, &cancel).unwrap_err();
    assert_eq!(err, Status::MathDivideByZero);
}

#[test]
fn divmod_matches_example() {
    let cancel = Cancel::new();
    let (q, r) = n("7").divmod(&n("3"), 0, &cancel).unwrap();
    assert_eq!(q.to_string(), "2");
    assert_eq!(r.to_string(), "1");
}

#[test]
fn div_by_one_is_identity_with_requested_scale() {
    let cancel = Cancel::new();
    let a = n("42.5");
    assert_eq!(a.div(&Number::one(), 5, &cancel).unwrap().to_string(), "42.50000");
}

#[test]
fn divmod_reconstructs_dividend() {
    let cancel = Cancel::new();
    let a = n("123.456");
    let b = n("7.89");
    let (q, r) = a.divmod(&b, 6, &cancel).unwrap();
    let exact_scale = q.scale() + b.scale();
    let reconstructed = q.mul(&b, exact_scale, &cancel).unwrap().add(&r, 0, &cancel).unwrap();
    assert_eq!(reconstructed, a);
}

#[test]
fn divmod_remainder_magnitude_smaller_than_divisor() {
    let cancel = Cancel::new();
    let a = n("100");
    let b = n("7");
    let (_, r) = a.divmod(&b, 0, &cancel).unwrap();
    assert_eq!(r.compare(&b, &cancel).unwrap(), std::cmp::Ordering::Less);
}

#[test]
fn div_sign_rules() {
    let cancel = Cancel::new();
    assert_eq!(n("-10").div(&n("4"), 2, &cancel).unwrap().to_string(), "-2.50");
    assert_eq!(n("-10").div(&n("-4"), 2, &cancel).unwrap().to_string(), "2.50");
}

#[test]
fn rem_takes_dividend_sign() {
    let cancel = Cancel::new();
    let r = n("-7").rem(&n("3"), 0, &cancel).unwrap();
    assert!(r.is_negative() || r.is_zero());
}

#[test]
fn div_zero_dividend_is_zero_at_scale() {
    let cancel = Cancel::new();
    let result = Number::zero().div(&n("5"), 4, &cancel).unwrap();
    assert!(result.is_zero());
    assert_eq!(result.scale(), 4);
}
