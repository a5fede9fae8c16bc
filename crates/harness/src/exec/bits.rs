//! Zbb byte-granular operations and bit counting.
//!
//! `clz`/`ctz` return 32 when `rs1` is zero (no set bit to find), per the
//! Zbb specification.

/// `rev8`: reverse the byte order of `rs1`.
pub const fn rev8(rs1: u32) -> u32 {
    rs1.swap_bytes()
}

/// `orc.b`: OR-combine within each byte.
///
/// Each output byte is `0xff` if the corresponding input byte is nonzero,
/// `0x00` otherwise.
pub const fn orc_b(rs1: u32) -> u32 {
    let mut out = 0u32;
    let mut lane = 0;
    while lane < 4 {
        if rs1 & (0xff << (8 * lane)) != 0 {
            out |= 0xff << (8 * lane);
        }
        lane += 1;
    }
    out
}

/// `clz`: count leading zero bits of `rs1`.
pub const fn clz(rs1: u32) -> u32 {
    rs1.leading_zeros()
}

/// `ctz`: count trailing zero bits of `rs1`.
pub const fn ctz(rs1: u32) -> u32 {
    rs1.trailing_zeros()
}

/// `cpop`: count set bits of `rs1`.
pub const fn cpop(rs1: u32) -> u32 {
    rs1.count_ones()
}
