//! Zbs single-bit manipulation.
//!
//! The bit index is the low 5 bits of the second operand, whether it
//! arrives in a register or as a build-time immediate. Register and
//! immediate forms share these semantics; only the encoding differs.

/// Bit mask for the bit index (5 bits: 0-31).
const INDEX_MASK: u32 = 0x1f;

/// `bset`/`bseti`: set the indexed bit of `rs1`.
pub const fn bset(rs1: u32, index: u32) -> u32 {
    rs1 | (1 << (index & INDEX_MASK))
}

/// `bclr`/`bclri`: clear the indexed bit of `rs1`.
pub const fn bclr(rs1: u32, index: u32) -> u32 {
    rs1 & !(1 << (index & INDEX_MASK))
}

/// `binv`/`binvi`: invert the indexed bit of `rs1`.
pub const fn binv(rs1: u32, index: u32) -> u32 {
    rs1 ^ (1 << (index & INDEX_MASK))
}

/// `bext`/`bexti`: extract the indexed bit of `rs1` (result is 0 or 1).
pub const fn bext(rs1: u32, index: u32) -> u32 {
    (rs1 >> (index & INDEX_MASK)) & 1
}
