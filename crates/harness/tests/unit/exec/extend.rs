//! Zbb sign/zero extension tests.

use zbcheck_core::exec::extend;

/// Seed vector from the sext.b fixture table: low byte 0xa2 has its
/// sign bit set, so the upper 24 bits fill with ones.
#[test]
fn sext_b_fixture_seed() {
    assert_eq!(extend::sext_b(0x394ed6a2), 0xffffffa2);
}

#[test]
fn sext_b_positive_byte_clears_upper_bits() {
    assert_eq!(extend::sext_b(0xffff_ff7f), 0x0000_007f);
}

#[test]
fn sext_b_boundaries() {
    assert_eq!(extend::sext_b(0x80), 0xffff_ff80);
    assert_eq!(extend::sext_b(0x7f), 0x7f);
    assert_eq!(extend::sext_b(0), 0);
}

#[test]
fn sext_h_negative_halfword_fills_with_ones() {
    assert_eq!(extend::sext_h(0x0000_8000), 0xffff_8000);
    assert_eq!(extend::sext_h(0x1234_ffff), 0xffff_ffff);
}

#[test]
fn sext_h_positive_halfword_clears_upper_bits() {
    assert_eq!(extend::sext_h(0xabcd_7fff), 0x0000_7fff);
}

#[test]
fn zext_h_always_clears_upper_bits() {
    assert_eq!(extend::zext_h(0xffff_ffff), 0x0000_ffff);
    assert_eq!(extend::zext_h(0x1234_8000), 0x0000_8000);
    assert_eq!(extend::zext_h(0x0000_1234), 0x0000_1234);
}

/// zext.h agrees with sext.h whenever bit 15 is clear.
#[test]
fn extensions_agree_on_positive_halfwords() {
    for v in [0u32, 0x7fff, 0x1234, 0xdead_0001] {
        assert_eq!(extend::zext_h(v), extend::sext_h(v));
    }
}
