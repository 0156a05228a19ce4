#![no_main]

use decint::BigInt;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|pair: (i64, i64)| {
    let (a, b) = (pair.0 as i128, pair.1 as i128);
    let (x, y) = (BigInt::from(a), BigInt::from(b));

    assert_eq!(&x + &y, a + b);
    assert_eq!(&x - &y, a - b);
    assert_eq!(&x * &y, a * b);
    assert_eq!(x.cmp(&y), a.cmp(&b));

    if b != 0 {
        let (q, r) = x.div_rem_trunc(&y).unwrap();
        assert_eq!(q, a / b);
        assert_eq!(r, a % b);
    }
    if a >= 0 && b > 0 {
        assert_eq!(&x % &y, a % b);
    }
});
