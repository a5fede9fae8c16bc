//! Zbb sign and zero extension.
//!
//! Widens the low byte or halfword of `rs1` to 32 bits, either replicating
//! the field's sign bit (`sext.*`) or filling with zeros (`zext.h`).

/// `sext.b`: sign-extend the low byte of `rs1` to 32 bits.
pub const fn sext_b(rs1: u32) -> u32 {
    rs1 as i8 as i32 as u32
}

/// `sext.h`: sign-extend the low halfword of `rs1` to 32 bits.
pub const fn sext_h(rs1: u32) -> u32 {
    rs1 as i16 as i32 as u32
}

/// `zext.h`: zero-extend the low halfword of `rs1` to 32 bits.
pub const fn zext_h(rs1: u32) -> u32 {
    rs1 & 0xffff
}
