//! Instruction execution backends.
//!
//! This module turns a mnemonic plus operands into a 32-bit result. It provides:
//! 1. **Capability interface:** The [`Executor`] trait, one call per instruction.
//! 2. **Software backend:** [`Emulator`], a bit-exact model of the Zba/Zbb/Zbs
//!    semantics used by the harness's own tests and as a host-side oracle.
//! 3. **Native backend:** [`native::Native`], which emits the real machine
//!    instruction through inline assembly (RISC-V targets only).
//!
//! Semantics are organized into submodules by instruction family:
//! - [`addgen`]:  sh1add, sh2add, sh3add
//! - [`compare`]: max, maxu, min, minu
//! - [`extend`]:  sext.b, sext.h, zext.h
//! - [`bits`]:    rev8, orc.b, clz, cpop, ctz
//! - [`rotate`]:  ror, rori, rol
//! - [`logic`]:   xnor, andn, orn
//! - [`single`]:  bset, bext, binv, bclr and their immediate forms

/// Shift-and-add address generation (Zba).
pub mod addgen;

/// Byte-granular operations and bit counting (Zbb).
pub mod bits;

/// Signed and unsigned minimum/maximum (Zbb).
pub mod compare;

/// Sign and zero extension (Zbb).
pub mod extend;

/// Negated logic operations (Zbb).
pub mod logic;

/// Inline-assembly backend emitting real bit-manipulation instructions.
#[cfg(target_arch = "riscv32")]
pub mod native;

/// 32-bit rotations (Zbb).
pub mod rotate;

/// Single-bit set/clear/invert/extract (Zbs).
pub mod single;

use crate::isa::Mnemonic;

/// Executes exactly one instruction with the given operands.
///
/// The executor captures the raw 32-bit output and performs no
/// interpretation of its own; the semantics belong to the backend
/// (hardware or software model).
///
/// For unary instructions `src2` is ignored. For immediate-form
/// instructions `src2` carries the bit-index/shift constant; a native
/// backend must encode it into the instruction word rather than pass it
/// in a register.
pub trait Executor {
    /// Runs `op` on `rs1` (and `src2` where the encoding takes one) and
    /// returns the destination register value.
    fn execute(&self, op: Mnemonic, rs1: u32, src2: u32) -> u32;
}

/// Software model of the Zba/Zbb/Zbs instruction semantics.
///
/// Bit-exact per the RISC-V Bit-Manipulation ISA specification (RV32).
/// This backend never touches hardware; it exists so the harness logic
/// can be tested anywhere and so fixture tables can be cross-checked
/// against an independent implementation of the semantics.
#[derive(Clone, Copy, Debug, Default)]
pub struct Emulator;

impl Executor for Emulator {
    fn execute(&self, op: Mnemonic, rs1: u32, src2: u32) -> u32 {
        match op {
            Mnemonic::Sh1add => addgen::sh1add(rs1, src2),
            Mnemonic::Sh2add => addgen::sh2add(rs1, src2),
            Mnemonic::Sh3add => addgen::sh3add(rs1, src2),
            Mnemonic::Max => compare::max(rs1, src2),
            Mnemonic::Maxu => compare::maxu(rs1, src2),
            Mnemonic::Min => compare::min(rs1, src2),
            Mnemonic::Minu => compare::minu(rs1, src2),
            Mnemonic::SextB => extend::sext_b(rs1),
            Mnemonic::SextH => extend::sext_h(rs1),
            Mnemonic::ZextH => extend::zext_h(rs1),
            Mnemonic::Rev8 => bits::rev8(rs1),
            Mnemonic::OrcB => bits::orc_b(rs1),
            Mnemonic::Clz => bits::clz(rs1),
            Mnemonic::Cpop => bits::cpop(rs1),
            Mnemonic::Ctz => bits::ctz(rs1),
            Mnemonic::Ror | Mnemonic::Rori => rotate::ror(rs1, src2),
            Mnemonic::Rol => rotate::rol(rs1, src2),
            Mnemonic::Xnor => logic::xnor(rs1, src2),
            Mnemonic::Andn => logic::andn(rs1, src2),
            Mnemonic::Orn => logic::orn(rs1, src2),
            Mnemonic::Bset | Mnemonic::Bseti => single::bset(rs1, src2),
            Mnemonic::Bext | Mnemonic::Bexti => single::bext(rs1, src2),
            Mnemonic::Binv | Mnemonic::Binvi => single::binv(rs1, src2),
            Mnemonic::Bclr | Mnemonic::Bclri => single::bclr(rs1, src2),
        }
    }
}
