//! Instruction set model for the Zba/Zbb/Zbs extensions.
//!
//! This module identifies the instructions under validation. It provides:
//! 1. **Mnemonics:** One variant per instruction, with its assembler spelling.
//! 2. **Operand patterns:** Register-register, register-immediate, or unary.
//! 3. **Extension grouping:** Which standard extension each instruction belongs to.
//!
//! Instruction semantics live in [`crate::exec`]; this module only describes
//! shape and identity.

use std::fmt;

/// Standard RISC-V bit-manipulation extensions covered by the harness.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Extension {
    /// Address generation (shift-and-add).
    Zba,
    /// Basic bit manipulation (min/max, extension, counting, rotates,
    /// byte operations, negated logic).
    Zbb,
    /// Single-bit set/clear/invert/extract.
    Zbs,
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zba => write!(f, "Zba"),
            Self::Zbb => write!(f, "Zbb"),
            Self::Zbs => write!(f, "Zbs"),
        }
    }
}

/// Operand shape of an instruction.
///
/// Immediate forms carry their second operand as a constant encoded into
/// the instruction word at build time (0-31 for shift/bit-index forms).
/// This is a hardware encoding constraint: the immediate can never be a
/// runtime value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperandPattern {
    /// Two register source operands (`rd, rs1, rs2`).
    RegReg,
    /// One register source plus a build-time immediate (`rd, rs1, imm`).
    RegImm,
    /// A single register source operand (`rd, rs1`).
    Unary,
}

/// One instruction under validation.
///
/// The variant set is exactly the 29 instructions exercised by the fixture
/// tables. Accessors are `const` so fixture tables can be built in statics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    /// Shift left by 1 and add.
    Sh1add,
    /// Shift left by 2 and add.
    Sh2add,
    /// Shift left by 3 and add.
    Sh3add,
    /// Signed maximum.
    Max,
    /// Unsigned maximum.
    Maxu,
    /// Signed minimum.
    Min,
    /// Unsigned minimum.
    Minu,
    /// Sign-extend low byte.
    SextB,
    /// Sign-extend low halfword.
    SextH,
    /// Zero-extend low halfword.
    ZextH,
    /// Byte-reverse.
    Rev8,
    /// OR-combine within each byte.
    OrcB,
    /// Count leading zeros.
    Clz,
    /// Population count.
    Cpop,
    /// Count trailing zeros.
    Ctz,
    /// Rotate right, register amount.
    Ror,
    /// Rotate right, immediate amount.
    Rori,
    /// Rotate left, register amount.
    Rol,
    /// Exclusive NOR.
    Xnor,
    /// AND with complemented second operand.
    Andn,
    /// OR with complemented second operand.
    Orn,
    /// Set bit, register index.
    Bset,
    /// Set bit, immediate index.
    Bseti,
    /// Extract bit, register index.
    Bext,
    /// Extract bit, immediate index.
    Bexti,
    /// Invert bit, register index.
    Binv,
    /// Invert bit, immediate index.
    Binvi,
    /// Clear bit, register index.
    Bclr,
    /// Clear bit, immediate index.
    Bclri,
}

impl Mnemonic {
    /// The assembler spelling of the instruction (e.g. `sh1add`, `sext.b`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sh1add => "sh1add",
            Self::Sh2add => "sh2add",
            Self::Sh3add => "sh3add",
            Self::Max => "max",
            Self::Maxu => "maxu",
            Self::Min => "min",
            Self::Minu => "minu",
            Self::SextB => "sext.b",
            Self::SextH => "sext.h",
            Self::ZextH => "zext.h",
            Self::Rev8 => "rev8",
            Self::OrcB => "orc.b",
            Self::Clz => "clz",
            Self::Cpop => "cpop",
            Self::Ctz => "ctz",
            Self::Ror => "ror",
            Self::Rori => "rori",
            Self::Rol => "rol",
            Self::Xnor => "xnor",
            Self::Andn => "andn",
            Self::Orn => "orn",
            Self::Bset => "bset",
            Self::Bseti => "bseti",
            Self::Bext => "bext",
            Self::Bexti => "bexti",
            Self::Binv => "binv",
            Self::Binvi => "binvi",
            Self::Bclr => "bclr",
            Self::Bclri => "bclri",
        }
    }

    /// Operand shape required by the instruction encoding.
    pub const fn operands(self) -> OperandPattern {
        match self {
            Self::Sh1add
            | Self::Sh2add
            | Self::Sh3add
            | Self::Max
            | Self::Maxu
            | Self::Min
            | Self::Minu
            | Self::Ror
            | Self::Rol
            | Self::Xnor
            | Self::Andn
            | Self::Orn
            | Self::Bset
            | Self::Bext
            | Self::Binv
            | Self::Bclr => OperandPattern::RegReg,
            Self::Rori | Self::Bseti | Self::Bexti | Self::Binvi | Self::Bclri => {
                OperandPattern::RegImm
            }
            Self::SextB
            | Self::SextH
            | Self::ZextH
            | Self::Rev8
            | Self::OrcB
            | Self::Clz
            | Self::Cpop
            | Self::Ctz => OperandPattern::Unary,
        }
    }

    /// The standard extension the instruction belongs to.
    pub const fn extension(self) -> Extension {
        match self {
            Self::Sh1add | Self::Sh2add | Self::Sh3add => Extension::Zba,
            Self::Max
            | Self::Maxu
            | Self::Min
            | Self::Minu
            | Self::SextB
            | Self::SextH
            | Self::ZextH
            | Self::Rev8
            | Self::OrcB
            | Self::Clz
            | Self::Cpop
            | Self::Ctz
            | Self::Ror
            | Self::Rori
            | Self::Rol
            | Self::Xnor
            | Self::Andn
            | Self::Orn => Extension::Zbb,
            Self::Bset
            | Self::Bseti
            | Self::Bext
            | Self::Bexti
            | Self::Binv
            | Self::Binvi
            | Self::Bclr
            | Self::Bclri => Extension::Zbs,
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
