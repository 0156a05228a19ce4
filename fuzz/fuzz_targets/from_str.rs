#![no_main]

use decint::BigInt;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(n) = BigInt::parse(s) {
            let printed = n.to_string();
            assert_eq!(BigInt::parse(&printed).unwrap(), n);
            assert_eq!(n, printed.as_str());
        }
    }
});
