//! Fixture tables: the operand/expected-result ground truth.
//!
//! This module holds the declarative check data the runner iterates. It provides:
//! 1. **Vectors:** [`TestVector`], one concrete operands-plus-expected check.
//! 2. **Tables:** One static table of 16 vectors per instruction, produced by
//!    an external offline generator and treated as read-only input.
//! 3. **Groups:** [`Group`], the fixed-order instruction groups the sequencer
//!    runs (Zba, Zbb min/max, Zbb miscellaneous, Zbs).
//!
//! The tables are trusted ground truth at run time; the harness's own test
//! suite cross-checks every vector against the software executor.

/// Zba shift-and-add fixtures.
pub mod zba;
/// Zbb min/max fixtures.
pub mod zbb_minmax;
/// Zbb miscellaneous fixtures (extension, byte ops, counting, rotates,
/// negated logic).
pub mod zbb_misc;
/// Zbs single-bit fixtures.
pub mod zbs;

use std::fmt;

use crate::isa::Mnemonic;

/// Second source operand of a vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Src2 {
    /// Runtime register value.
    Reg(u32),
    /// Shift/bit-index constant encoded into the instruction at build time.
    Imm(u8),
    /// Absent; the instruction is unary.
    None,
}

/// One concrete check: operands plus the precomputed expected result.
///
/// Constructed once as static data, read exactly once per run, never
/// mutated. `expected` equals the bit-exact output of the instruction's
/// defined semantics for the operands; that equality is established by
/// the offline generator, not recomputed here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestVector {
    /// Instruction under test.
    pub op: Mnemonic,
    /// Primary operand (`rs1`).
    pub rs1: u32,
    /// Second source operand, if the encoding takes one.
    pub src2: Src2,
    /// Ground-truth result.
    pub expected: u32,
}

impl TestVector {
    /// A register-register vector.
    pub const fn reg(op: Mnemonic, rs1: u32, rs2: u32, expected: u32) -> Self {
        Self {
            op,
            rs1,
            src2: Src2::Reg(rs2),
            expected,
        }
    }

    /// A register-immediate vector (immediate in 0-31).
    pub const fn imm(op: Mnemonic, rs1: u32, imm: u8, expected: u32) -> Self {
        Self {
            op,
            rs1,
            src2: Src2::Imm(imm),
            expected,
        }
    }

    /// A unary vector.
    pub const fn unary(op: Mnemonic, rs1: u32, expected: u32) -> Self {
        Self {
            op,
            rs1,
            src2: Src2::None,
            expected,
        }
    }

    /// The second operand as the value handed to an executor.
    ///
    /// Register values pass through, immediates widen to `u32`, and unary
    /// instructions get zero (which their semantics ignore).
    pub const fn src2_value(&self) -> u32 {
        match self.src2 {
            Src2::Reg(rs2) => rs2,
            Src2::Imm(imm) => imm as u32,
            Src2::None => 0,
        }
    }
}

/// Named instruction group, one banner per group.
///
/// Execution order is fixed: Zba, then Zbb min/max, then Zbb
/// miscellaneous, then Zbs. Zbb is split in two to match the fixture
/// generator's grouping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Group {
    /// sh1add, sh2add, sh3add.
    Zba,
    /// max, maxu, min, minu.
    ZbbMinMax,
    /// Extension, byte operations, counting, rotates, negated logic.
    ZbbMisc,
    /// bset, bext, binv, bclr and their immediate forms.
    Zbs,
}

/// Zba tables in check order.
static ZBA_TABLES: [&[TestVector]; 3] = [&zba::SH1ADD, &zba::SH2ADD, &zba::SH3ADD];

/// Zbb min/max tables in check order.
static ZBB_MINMAX_TABLES: [&[TestVector]; 4] = [
    &zbb_minmax::MAX,
    &zbb_minmax::MAXU,
    &zbb_minmax::MIN,
    &zbb_minmax::MINU,
];

/// Zbb miscellaneous tables in check order.
static ZBB_MISC_TABLES: [&[TestVector]; 14] = [
    &zbb_misc::SEXT_B,
    &zbb_misc::SEXT_H,
    &zbb_misc::ZEXT_H,
    &zbb_misc::REV8,
    &zbb_misc::ORC_B,
    &zbb_misc::CLZ,
    &zbb_misc::CPOP,
    &zbb_misc::CTZ,
    &zbb_misc::ROR,
    &zbb_misc::RORI,
    &zbb_misc::ROL,
    &zbb_misc::XNOR,
    &zbb_misc::ANDN,
    &zbb_misc::ORN,
];

/// Zbs tables in check order.
static ZBS_TABLES: [&[TestVector]; 8] = [
    &zbs::BSET,
    &zbs::BSETI,
    &zbs::BEXT,
    &zbs::BEXTI,
    &zbs::BINV,
    &zbs::BINVI,
    &zbs::BCLR,
    &zbs::BCLRI,
];

impl Group {
    /// All groups, in the order the sequencer runs them.
    pub const ALL: [Self; 4] = [Self::Zba, Self::ZbbMinMax, Self::ZbbMisc, Self::Zbs];

    /// Short name used by the CLI and configuration files.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zba => "zba",
            Self::ZbbMinMax => "zbb-minmax",
            Self::ZbbMisc => "zbb-misc",
            Self::Zbs => "zbs",
        }
    }

    /// Title printed in the group's success banner.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Zba => "Zba extension",
            Self::ZbbMinMax => "Minmax instructions",
            Self::ZbbMisc => "Miscellaneous instructions",
            Self::Zbs => "Zbs extension",
        }
    }

    /// Resolves a short name to a group.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.name() == name)
    }

    /// The group's fixture tables, one slice per instruction, in check order.
    pub const fn tables(self) -> &'static [&'static [TestVector]] {
        match self {
            Self::Zba => &ZBA_TABLES,
            Self::ZbbMinMax => &ZBB_MINMAX_TABLES,
            Self::ZbbMisc => &ZBB_MISC_TABLES,
            Self::Zbs => &ZBS_TABLES,
        }
    }

    /// Total number of vectors in the group.
    pub fn len(self) -> usize {
        self.tables().iter().map(|t| t.len()).sum()
    }

    /// True if the group holds no vectors (never the case for shipped tables).
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
