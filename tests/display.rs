use decint::BigInt;

fn big(s: &str) -> BigInt {
    BigInt::parse(s).unwrap()
}

#[test]
fn test_to_string() {
    assert_eq!(BigInt::zero().to_string(), "0");
    assert_eq!(BigInt::from(42).to_string(), "42");
    assert_eq!(BigInt::from(-42).to_string(), "-42");
    assert_eq!((BigInt::from(5) - BigInt::from(5)).to_string(), "0");
}

#[test]
fn test_format_flags() {
    let n = BigInt::from(-42);
    assert_eq!(format!("{:>6}", n), "   -42");
    assert_eq!(format!("{:<6}|", n), "-42   |");
    assert_eq!(format!("{:06}", n), "-00042");
    assert_eq!(format!("{:+}", BigInt::from(42)), "+42");
    assert_eq!(format!("{:*^7}", BigInt::from(42)), "**42***");

    let invalid = BigInt::from(1) / BigInt::zero();
    assert_eq!(format!("{:>8}", invalid), "  #DIV/0");
}

#[test]
fn test_magnitude() {
    assert_eq!(BigInt::from(-1207).magnitude(), "1207");
    assert_eq!(BigInt::zero().magnitude(), "0");
    assert_eq!((BigInt::from(-1) % BigInt::from(3)).magnitude(), "#DOMAIN");
}

#[test]
fn test_to_scientific() {
    let n = big("-1234567890123");
    assert_eq!(n.to_scientific(4), "-1234e+9");
    assert_eq!(n.to_scientific(1), "-1e+12");
    assert_eq!(n.to_scientific(13), "-1234567890123");
    assert_eq!(n.to_scientific(20), "-1234567890123");
    assert_eq!(n.to_scientific(0), "-1234567890123");

    // Digits are cut, not rounded.
    assert_eq!(big("99999").to_scientific(2), "99e+3");
    assert_eq!(BigInt::zero().to_scientific(1), "0");

    let invalid = BigInt::from(1) / BigInt::zero();
    assert_eq!(invalid.to_scientific(2), "#DIV/0");
}

#[test]
fn test_truncated() {
    assert_eq!(BigInt::from(987654321).truncated(3), "987...");
    assert_eq!(BigInt::from(-987654321).truncated(3), "-987...");
    assert_eq!(BigInt::from(987).truncated(3), "987");
    assert_eq!(BigInt::from(987).truncated(0), "987");
}
