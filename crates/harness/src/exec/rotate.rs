//! Zbb 32-bit rotations.
//!
//! Only the low 5 bits of the rotate amount are used, whether it arrives
//! in a register (`ror`/`rol`) or as a build-time immediate (`rori`).
//! Bits rotated out one end reappear at the other; no bit is lost.

/// Bit mask for the rotate amount (5 bits: 0-31).
const SHAMT_MASK: u32 = 0x1f;

/// `ror`/`rori`: rotate `rs1` right by the low 5 bits of `amount`.
pub const fn ror(rs1: u32, amount: u32) -> u32 {
    rs1.rotate_right(amount & SHAMT_MASK)
}

/// `rol`: rotate `rs1` left by the low 5 bits of `amount`.
pub const fn rol(rs1: u32, amount: u32) -> u32 {
    rs1.rotate_left(amount & SHAMT_MASK)
}
