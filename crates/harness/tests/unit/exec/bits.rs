//! Zbb byte-operation and bit-counting tests.

use zbcheck_core::exec::bits;

/// Seed vector from the clz fixture table: the MSB is already set, so
/// there are no leading zeros to count.
#[test]
fn clz_fixture_seed_msb_set() {
    assert_eq!(bits::clz(0xca773b35), 0);
}

/// Zero input has no set bit; both counts saturate at the full width.
#[test]
fn counting_zero_input() {
    assert_eq!(bits::clz(0), 32);
    assert_eq!(bits::ctz(0), 32);
    assert_eq!(bits::cpop(0), 0);
}

#[test]
fn counting_all_ones() {
    assert_eq!(bits::clz(0xffff_ffff), 0);
    assert_eq!(bits::ctz(0xffff_ffff), 0);
    assert_eq!(bits::cpop(0xffff_ffff), 32);
}

#[test]
fn clz_single_bit_walk() {
    for i in 0..32u32 {
        assert_eq!(bits::clz(1u32 << i), 31 - i, "clz(1 << {i})");
        assert_eq!(bits::ctz(1u32 << i), i, "ctz(1 << {i})");
        assert_eq!(bits::cpop(1u32 << i), 1, "cpop(1 << {i})");
    }
}

#[test]
fn rev8_reverses_byte_order() {
    assert_eq!(bits::rev8(0x1234_5678), 0x7856_3412);
    assert_eq!(bits::rev8(0x0000_00ff), 0xff00_0000);
}

/// Byte reversal is its own inverse.
#[test]
fn rev8_involution() {
    for v in [0u32, 1, 0x1234_5678, 0xdead_beef, 0xffff_ffff] {
        assert_eq!(bits::rev8(bits::rev8(v)), v);
    }
}

#[test]
fn orc_b_saturates_nonzero_bytes() {
    assert_eq!(bits::orc_b(0x0100_2003), 0xff00_ffff);
    assert_eq!(bits::orc_b(0), 0);
    assert_eq!(bits::orc_b(0xffff_ffff), 0xffff_ffff);
    assert_eq!(bits::orc_b(0x0000_0080), 0x0000_00ff);
}

/// orc.b is idempotent.
#[test]
fn orc_b_idempotent() {
    for v in [0u32, 0x0100_2003, 0xdead_beef] {
        assert_eq!(bits::orc_b(bits::orc_b(v)), bits::orc_b(v));
    }
}
