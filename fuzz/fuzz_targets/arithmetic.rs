#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use num_bigint::BigInt;

use biginteger::BigInteger;

#[derive(Debug, Arbitrary)]
struct Operands {
    lhs: String,
    rhs: String,
    // small enough for the repeated-addition multiplication
    factor: i16,
}

fuzz_target!(|operands: Operands| {
    let parsed = BigInteger::parse(&operands.lhs);
    let oracle = operands.lhs.parse::<BigInt>();
    let body = operands.lhs.strip_prefix(['+', '-']).unwrap_or(&operands.lhs);
    let valid = !body.is_empty() && body.bytes().all(|b| b.is_ascii_digit());
    assert_eq!(parsed.is_ok(), valid, "{:?}", operands.lhs);

    let (Ok(a), Ok(b)) = (parsed, BigInteger::parse(&operands.rhs)) else {
        return;
    };
    if let Ok(expected) = oracle {
        assert_eq!(a.to_string(), expected.to_string());
    }
    let x = BigInt::from(&a);
    let y = BigInt::from(&b);

    assert_eq!(BigInt::from(&(&a + &b)), &x + &y);
    assert_eq!(BigInt::from(&(&a - &b)), &x - &y);
    assert_eq!(a.cmp(&b), x.cmp(&y));

    let factor = BigInteger::from(operands.factor);
    assert_eq!(BigInt::from(&(&a * &factor)), &x * operands.factor);
});
