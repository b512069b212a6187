use uint128::primitives::Uint128;

#[test]
fn format_small_value_all_bases() {
    let v = Uint128::new(0x0, 0x456);

    assert_eq!(format!("{}", v), "1110");
    assert_eq!(format!("{:b}", v), "10001010110");
    assert_eq!(format!("{:o}", v), "2126");
    assert_eq!(format!("{:x}", v), "456");
    assert_eq!(format!("{:X}", v), "456");
}

#[test]
fn format_value_spanning_both_words() {
    let v = Uint128::new(0x1, 0x456);

    assert_eq!(format!("{}", v), "18446744073709552726");
    assert_eq!(
        format!("{:b}", v),
        "10000000000000000000000000000000000000000000000000000010001010110"
    );
    assert_eq!(format!("{:o}", v), "2000000000000000002126");
    assert_eq!(format!("{:x}", v), "10000000000000456");
    assert_eq!(format!("{:X}", Uint128::new(0xAB, 0xCDEF)), "AB000000000000CDEF");
}

#[test]
fn format_octal_digit_straddles_word_seam() {
    // 2⁶⁴ = 2 · 8²¹: the top octal digit takes one bit from the high word.
    assert_eq!(format!("{:o}", Uint128::new(1, 0)), "2000000000000000000000");
    assert_eq!(
        format!("{:o}", Uint128::MAX),
        "3777777777777777777777777777777777777777777"
    );
}

#[test]
fn format_zero_is_single_digit_in_every_base() {
    let z = Uint128::ZERO;

    assert_eq!(format!("{}", z), "0");
    assert_eq!(format!("{:b}", z), "0");
    assert_eq!(format!("{:o}", z), "0");
    assert_eq!(format!("{:x}", z), "0");
    assert_eq!(format!("{:X}", z), "0");
}

#[test]
fn format_max_value() {
    let m = Uint128::MAX;

    assert_eq!(format!("{}", m), "340282366920938463463374607431768211455");
    assert_eq!(format!("{:x}", m), "ffffffffffffffffffffffffffffffff");
    assert_eq!(format!("{:b}", m), "1".repeat(128));
}

#[test]
fn format_decimal_keeps_inner_zeros() {
    // 10²⁷: every 10⁹ chunk below the top one is all zeros.
    let v = Uint128::from(1_000_000_000_000_000_000_000_000_000u128);

    assert_eq!(format!("{}", v), "1000000000000000000000000000");
    assert_eq!(v.to_string(), "1000000000000000000000000000");
}

#[test]
fn format_honors_formatter_flags() {
    let v = Uint128::new(0, 0x456);

    assert_eq!(format!("{:#x}", v), "0x456");
    assert_eq!(format!("{:#X}", v), "0x456");
    assert_eq!(format!("{:#b}", Uint128::new(0, 5)), "0b101");
    assert_eq!(format!("{:#o}", Uint128::new(0, 8)), "0o10");
    assert_eq!(format!("{:08}", Uint128::new(0, 42)), "00000042");
    assert_eq!(format!("{:#010x}", v), "0x00000456");
    assert_eq!(format!("{:>6}", Uint128::new(0, 42)), "    42");
    assert_eq!(format!("{:<6}|", Uint128::new(0, 42)), "42    |");
    assert_eq!(format!("{:+}", Uint128::new(0, 42)), "+42");
}

#[test]
fn format_debug_shows_words() {
    assert_eq!(format!("{:?}", Uint128::new(1, 2)), "Uint128 { h: 1, l: 2 }");
    assert_eq!(format!("{:x?}", Uint128::new(0x1, 0x456)), "Uint128 { h: 1, l: 456 }");
}
