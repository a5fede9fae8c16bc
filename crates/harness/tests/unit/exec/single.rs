//! Zbs single-bit manipulation tests.
//!
//! Register and immediate forms share these semantics; the fixture seed
//! for `bext` arrives with a full-width register index that the hardware
//! masks to its low 5 bits.

use proptest::prelude::*;
use zbcheck_core::exec::single;

/// Seed vector from the bext fixture table: index 0x3c32cd2 masks to
/// bit 18, which is set in 0x9f0f5398.
#[test]
fn bext_fixture_seed_masks_register_index() {
    assert_eq!(single::bext(0x9f0f5398, 0x03c32cd2), 0x1);
}

#[test]
fn bext_result_is_zero_or_one() {
    assert_eq!(single::bext(0xffff_ffff, 7), 1);
    assert_eq!(single::bext(0, 7), 0);
    assert_eq!(single::bext(0x8000_0000, 31), 1);
}

#[test]
fn bset_walks_every_bit() {
    for i in 0..32u32 {
        assert_eq!(single::bset(0, i), 1u32 << i, "bset(0, {i})");
    }
}

#[test]
fn bclr_walks_every_bit() {
    for i in 0..32u32 {
        assert_eq!(single::bclr(0xffff_ffff, i), !(1u32 << i), "bclr(!0, {i})");
    }
}

#[test]
fn index_masked_to_5_bits() {
    assert_eq!(single::bset(0, 32), 1);
    assert_eq!(single::bset(0, 33), 2);
    assert_eq!(single::binv(0, 0xffff_ffff), 0x8000_0000);
}

#[test]
fn bset_is_idempotent_bclr_undoes_it() {
    let v = 0x1234_5678u32;
    assert_eq!(single::bset(single::bset(v, 3), 3), single::bset(v, 3));
    assert_eq!(single::bclr(single::bset(v, 3), 3), single::bclr(v, 3));
}

proptest! {
    /// binv applied twice restores the original value.
    #[test]
    fn binv_involution(value: u32, index: u32) {
        prop_assert_eq!(single::binv(single::binv(value, index), index), value);
    }

    /// bext reads back exactly what bset wrote and bclr erased.
    #[test]
    fn bext_observes_bset_and_bclr(value: u32, index: u32) {
        prop_assert_eq!(single::bext(single::bset(value, index), index), 1);
        prop_assert_eq!(single::bext(single::bclr(value, index), index), 0);
    }
}
