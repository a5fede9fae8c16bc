//! Zbb min/max tests.
//!
//! The signed/unsigned distinction is the whole point of this family:
//! `min`/`max` compare as two's-complement, `minu`/`maxu` as unsigned.

use zbcheck_core::exec::compare;

/// Seed vector from the max fixture table: 0x9c1e5660 is negative as
/// i32, so the signed maximum is the other operand.
#[test]
fn max_fixture_seed_signed_comparison() {
    assert_eq!(compare::max(0x9c1e5660, 0x424f7815), 0x424f7815);
}

/// Same operands, opposite winner when compared unsigned.
#[test]
fn maxu_diverges_from_max_on_sign_bit() {
    assert_eq!(compare::maxu(0x9c1e5660, 0x424f7815), 0x9c1e5660);
}

#[test]
fn min_treats_msb_as_sign() {
    // 0x8000_0000 is i32::MIN: smallest signed, largest-half unsigned.
    assert_eq!(compare::min(0x8000_0000, 1), 0x8000_0000);
    assert_eq!(compare::minu(0x8000_0000, 1), 1);
}

#[test]
fn max_of_negatives() {
    // -1 > -2
    assert_eq!(compare::max(0xffff_ffff, 0xffff_fffe), 0xffff_ffff);
    assert_eq!(compare::min(0xffff_ffff, 0xffff_fffe), 0xffff_fffe);
}

#[test]
fn equal_operands_return_the_operand() {
    for v in [0u32, 1, 0x8000_0000, 0xffff_ffff] {
        assert_eq!(compare::max(v, v), v);
        assert_eq!(compare::maxu(v, v), v);
        assert_eq!(compare::min(v, v), v);
        assert_eq!(compare::minu(v, v), v);
    }
}

/// min and max of the same pair partition the pair.
#[test]
fn min_max_partition_pair() {
    let pairs = [
        (0x0000_0001u32, 0xffff_ffffu32),
        (0x7fff_ffff, 0x8000_0000),
        (0x1234_5678, 0x8765_4321),
    ];
    for (a, b) in pairs {
        let signed = [compare::min(a, b), compare::max(a, b)];
        let unsigned = [compare::minu(a, b), compare::maxu(a, b)];
        for set in [signed, unsigned] {
            assert!(set.contains(&a) && set.contains(&b), "{a:#x} vs {b:#x}");
        }
    }
}
