use rstest::rstest;

use crate::radix::{dec_to_hex, hex_to_dec, number_to_base};

#[rstest]
#[case(b"0".as_slice(), b"0".as_slice())]
#[case(b"255".as_slice(), b"FF".as_slice())]
#[case(b"4096".as_slice(), b"1000".as_slice())]
#[case(b"000255".as_slice(), b"FF".as_slice())]
fn decimal_to_hexadecimal(#[case] number: &[u8], #[case] expected: &[u8]) {
    assert_eq!(dec_to_hex(number), expected);
}

#[rstest]
#[case(b"FF".as_slice(), b"255".as_slice())]
#[case(b"ff".as_slice(), b"255".as_slice())]
#[case(b"0xFF".as_slice(), b"255".as_slice())]
#[case(b"0".as_slice(), b"0".as_slice())]
fn hexadecimal_to_decimal(#[case] number: &[u8], #[case] expected: &[u8]) {
    assert_eq!(hex_to_dec(number), expected);
}

#[test]
fn arbitrary_base_pairs() {
    assert_eq!(number_to_base(b"FF", 16, 2), b"11111111");
    assert_eq!(number_to_base(b"11111111", 2, 16), b"FF");
    assert_eq!(number_to_base(b"777", 8, 10), b"511");
    assert_eq!(number_to_base(b"z", 36, 10), b"35");
    assert_eq!(number_to_base(b"100", 10, 10), b"100");
    assert_eq!(number_to_base(b"0x1A", 16, 10), b"26");
}

#[test]
fn width_is_unbounded() {
    // 2^128 in decimal, well past any machine integer.
    let big = b"340282366920938463463374607431768211456";
    let hex = dec_to_hex(big);
    assert_eq!(hex, b"100000000000000000000000000000000");
    assert_eq!(hex_to_dec(&hex), big);
}
