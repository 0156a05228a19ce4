use decint::BigInt;
use serde_derive::Deserialize;

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum Amount {
    Exact(BigInt),
    Label(Vec<String>),
}

#[test]
fn test() {
    // Buffered content still reaches the string and integer visitors.
    let amount: Amount = serde_json::from_str("\"-340282366920938463463374607431768211456\"").unwrap();
    match amount {
        Amount::Exact(n) => assert_eq!(n, "-340282366920938463463374607431768211456"),
        Amount::Label(_) => panic!("expected a number"),
    }

    let amount: Amount = serde_json::from_str("42").unwrap();
    assert!(matches!(amount, Amount::Exact(n) if n == 42));

    let amount: Amount = serde_json::from_str("[\"n/a\"]").unwrap();
    match amount {
        Amount::Label(v) => assert_eq!(v, ["n/a"]),
        Amount::Exact(n) => panic!("expected a label, got {}", n),
    }
}
