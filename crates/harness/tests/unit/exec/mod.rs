//! Software instruction-semantics tests.
//!
//! Each module exercises one family of the software model with
//! deterministic edge cases plus seed vectors drawn from the shipped
//! fixture tables. Reference: RISC-V Bit-Manipulation ISA (Zba, Zbb,
//! Zbs), version 1.0.

/// sh1add, sh2add, sh3add.
pub mod addgen;

/// rev8, orc.b, clz, cpop, ctz.
pub mod bits;

/// max, maxu, min, minu.
pub mod compare;

/// sext.b, sext.h, zext.h.
pub mod extend;


/// ror, rol and the shared rori semantics.
pub mod rotate;

/// bset, bclr, binv, bext.
pub mod single;
