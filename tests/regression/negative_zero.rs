use decint::BigInt;

#[test]
fn test() {
    // Every path to zero must drop the sign.
    let paths = [
        BigInt::parse("-0").unwrap(),
        BigInt::from(-5) + BigInt::from(5),
        BigInt::from(-5) * BigInt::zero(),
        BigInt::from(-1) / BigInt::from(3),
        -BigInt::zero(),
        BigInt::from(-2) ^ -2,
    ];
    for zero in &paths {
        assert_eq!(zero.to_string(), "0");
        assert_eq!(*zero, BigInt::zero());
        assert!(!zero.is_negative());
    }
}
