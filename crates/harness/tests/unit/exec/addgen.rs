//! Zba shift-and-add tests.
//!
//! Covers wrapping behavior at 32 bits, the zero identities, and a seed
//! vector from the shipped fixtures.

use zbcheck_core::exec::addgen;

/// Seed vector from the sh1add fixture table.
#[test]
fn sh1add_fixture_seed() {
    assert_eq!(addgen::sh1add(0x8bfb2fcf, 0x47b4370d), 0x5faa96ab);
}

#[test]
fn sh1add_doubles_then_adds() {
    assert_eq!(addgen::sh1add(7, 3), 17);
}

#[test]
fn sh2add_quadruples_then_adds() {
    assert_eq!(addgen::sh2add(7, 3), 31);
}

#[test]
fn sh3add_octuples_then_adds() {
    assert_eq!(addgen::sh3add(7, 3), 59);
}

/// Both the shift and the addition wrap at 32 bits.
#[test]
fn shift_and_add_wrap() {
    assert_eq!(addgen::sh1add(0x8000_0000, 0), 0);
    assert_eq!(addgen::sh3add(0xffff_ffff, 8), 0);
    assert_eq!(addgen::sh1add(0xffff_ffff, 0xffff_ffff), 0xffff_fffd);
}

#[test]
fn zero_base_reduces_to_shift() {
    for a in [0u32, 1, 0x1234_5678, 0xdead_beef] {
        assert_eq!(addgen::sh1add(a, 0), a.wrapping_shl(1));
        assert_eq!(addgen::sh2add(a, 0), a.wrapping_shl(2));
        assert_eq!(addgen::sh3add(a, 0), a.wrapping_shl(3));
    }
}

#[test]
fn zero_index_reduces_to_addend() {
    assert_eq!(addgen::sh1add(0, 0x4242_4242), 0x4242_4242);
    assert_eq!(addgen::sh2add(0, 0x4242_4242), 0x4242_4242);
    assert_eq!(addgen::sh3add(0, 0x4242_4242), 0x4242_4242);
}
