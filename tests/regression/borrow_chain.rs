use decint::BigInt;

#[test]
fn test() {
    // A borrow that has to skip several zero runs in one subtraction.
    let x = BigInt::parse("100010001000").unwrap();
    let y = BigInt::parse("1001001").unwrap();
    assert_eq!(&x - &y, "100008999999");
    assert_eq!(&y - &x, "-100008999999");
    assert_eq!(&x - &y + &y, x);
}
