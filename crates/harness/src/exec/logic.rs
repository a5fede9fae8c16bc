//! Zbb negated logic operations.
//!
//! Each operation combines `rs1` with the one's complement of `rs2`
//! (or of the combined result, for `xnor`).

/// `xnor`: `!(rs1 ^ rs2)`.
pub const fn xnor(rs1: u32, rs2: u32) -> u32 {
    !(rs1 ^ rs2)
}

/// `andn`: `rs1 & !rs2`.
pub const fn andn(rs1: u32, rs2: u32) -> u32 {
    rs1 & !rs2
}

/// `orn`: `rs1 | !rs2`.
pub const fn orn(rs1: u32, rs2: u32) -> u32 {
    rs1 | !rs2
}
