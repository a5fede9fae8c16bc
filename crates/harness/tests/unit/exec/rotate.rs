//! Zbb rotation tests.
//!
//! `rori` shares its semantics with `ror`; only the encoding differs,
//! so the immediate seed vector is checked through the same function.

use proptest::prelude::*;
use zbcheck_core::exec::rotate;

/// Seed vector from the rori fixture table (rotate right by 31).
#[test]
fn rori_fixture_seed() {
    assert_eq!(rotate::ror(0xabe7041e, 31), 0x57ce083d);
}

#[test]
fn rotate_by_zero_is_identity() {
    assert_eq!(rotate::ror(0xdead_beef, 0), 0xdead_beef);
    assert_eq!(rotate::rol(0xdead_beef, 0), 0xdead_beef);
}

#[test]
fn ror_wraps_low_bits_to_top() {
    assert_eq!(rotate::ror(0x0000_0001, 1), 0x8000_0000);
    assert_eq!(rotate::ror(0x0000_000f, 4), 0xf000_0000);
}

#[test]
fn rol_wraps_high_bits_to_bottom() {
    assert_eq!(rotate::rol(0x8000_0000, 1), 0x0000_0001);
    assert_eq!(rotate::rol(0xf000_0000, 4), 0x0000_000f);
}

/// Only the low 5 bits of the amount are used.
#[test]
fn amount_masked_to_5_bits() {
    assert_eq!(rotate::ror(0x1234_5678, 32), 0x1234_5678);
    assert_eq!(rotate::ror(0x1234_5678, 33), rotate::ror(0x1234_5678, 1));
    assert_eq!(rotate::rol(0x1234_5678, 0xffff_ffe1), rotate::rol(0x1234_5678, 1));
}

/// Rotating right by n equals rotating left by 32 - n.
#[test]
fn ror_rol_complementary_amounts() {
    for n in 1..32 {
        assert_eq!(
            rotate::ror(0x9abc_def0, n),
            rotate::rol(0x9abc_def0, 32 - n),
            "amount {n}"
        );
    }
}

proptest! {
    /// rol undoes ror for any value and amount.
    #[test]
    fn ror_then_rol_roundtrips(value: u32, amount: u32) {
        prop_assert_eq!(rotate::rol(rotate::ror(value, amount), amount), value);
    }

    /// Rotation never creates or destroys set bits.
    #[test]
    fn rotation_preserves_popcount(value: u32, amount: u32) {
        prop_assert_eq!(rotate::ror(value, amount).count_ones(), value.count_ones());
    }
}
