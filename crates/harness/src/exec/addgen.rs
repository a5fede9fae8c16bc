//! Zba shift-and-add address generation.
//!
//! `shNadd` shifts `rs1` left by N and adds `rs2`. Both the shift and the
//! addition wrap at 32 bits; there is no overflow condition.

/// `sh1add`: `(rs1 << 1) + rs2`, wrapping.
pub const fn sh1add(rs1: u32, rs2: u32) -> u32 {
    (rs1 << 1).wrapping_add(rs2)
}

/// `sh2add`: `(rs1 << 2) + rs2`, wrapping.
pub const fn sh2add(rs1: u32, rs2: u32) -> u32 {
    (rs1 << 2).wrapping_add(rs2)
}

/// `sh3add`: `(rs1 << 3) + rs2`, wrapping.
pub const fn sh3add(rs1: u32, rs2: u32) -> u32 {
    (rs1 << 3).wrapping_add(rs2)
}
