//! Zbb integer minimum/maximum.
//!
//! `min`/`max` compare operands as two's-complement signed values;
//! `minu`/`maxu` compare them as unsigned. The result is always one of
//! the two operands, bit-for-bit.

/// `max`: signed maximum of `rs1` and `rs2`.
pub const fn max(rs1: u32, rs2: u32) -> u32 {
    if (rs1 as i32) >= (rs2 as i32) { rs1 } else { rs2 }
}

/// `maxu`: unsigned maximum of `rs1` and `rs2`.
pub const fn maxu(rs1: u32, rs2: u32) -> u32 {
    if rs1 >= rs2 { rs1 } else { rs2 }
}

/// `min`: signed minimum of `rs1` and `rs2`.
pub const fn min(rs1: u32, rs2: u32) -> u32 {
    if (rs1 as i32) <= (rs2 as i32) { rs1 } else { rs2 }
}

/// `minu`: unsigned minimum of `rs1` and `rs2`.
pub const fn minu(rs1: u32, rs2: u32) -> u32 {
    if rs1 <= rs2 { rs1 } else { rs2 }
}
