//! Native executor emitting real Zba/Zbb/Zbs instructions.
//!
//! Each call places the operands in registers, executes exactly one
//! bit-manipulation instruction through inline assembly, and captures the
//! destination register. No interpretation happens on this side; the
//! semantics under test are the hardware's.
//!
//! Running on a core that does not implement the relevant extension raises
//! an illegal-instruction trap. That is a deployment precondition of the
//! harness, deliberately not caught here.

use core::arch::asm;

use super::Executor;
use crate::isa::Mnemonic;

/// Executes checks on the host core's own bit-manipulation hardware.
#[derive(Clone, Copy, Debug, Default)]
pub struct Native;

/// Emits one register-register instruction (`mn rd, rs1, rs2`).
macro_rules! insn_rr {
    ($mn:literal, $rs1:expr, $rs2:expr) => {{
        let rd: u32;
        // SAFETY: a single register-to-register instruction with no memory
        // access or other side effects; the core implements the extension
        // (deployment precondition).
        unsafe {
            asm!(
                concat!($mn, " {rd}, {rs1}, {rs2}"),
                rd = out(reg) rd,
                rs1 = in(reg) $rs1,
                rs2 = in(reg) $rs2,
                options(pure, nomem, nostack),
            );
        }
        rd
    }};
}

/// Emits one unary instruction (`mn rd, rs1`).
macro_rules! insn_un {
    ($mn:literal, $rs1:expr) => {{
        let rd: u32;
        // SAFETY: as for `insn_rr`.
        unsafe {
            asm!(
                concat!($mn, " {rd}, {rs1}"),
                rd = out(reg) rd,
                rs1 = in(reg) $rs1,
                options(pure, nomem, nostack),
            );
        }
        rd
    }};
}

/// Defines an immediate-form wrapper whose shift/bit-index constant is
/// encoded into the instruction word via a `const` operand.
macro_rules! insn_imm_fn {
    ($name:ident, $mn:literal) => {
        #[inline]
        fn $name<const IMM: u32>(rs1: u32) -> u32 {
            let rd: u32;
            // SAFETY: as for `insn_rr`; `IMM` is a build-time constant in
            // 0-31, valid for every shift/bit-index encoding.
            unsafe {
                asm!(
                    concat!($mn, " {rd}, {rs1}, {imm}"),
                    rd = out(reg) rd,
                    rs1 = in(reg) rs1,
                    imm = const IMM,
                    options(pure, nomem, nostack),
                );
            }
            rd
        }
    };
}

insn_imm_fn!(rori, "rori");
insn_imm_fn!(bseti, "bseti");
insn_imm_fn!(bexti, "bexti");
insn_imm_fn!(binvi, "binvi");
insn_imm_fn!(bclri, "bclri");

/// Maps a runtime 0-31 index onto the matching build-time constant.
///
/// The immediate cannot be a runtime register value without violating the
/// instruction encoding, so every constant gets its own instantiation.
macro_rules! dispatch_imm {
    ($f:ident, $rs1:expr, $imm:expr) => {
        match $imm & 0x1f {
            0 => $f::<0>($rs1),
            1 => $f::<1>($rs1),
            2 => $f::<2>($rs1),
            3 => $f::<3>($rs1),
            4 => $f::<4>($rs1),
            5 => $f::<5>($rs1),
            6 => $f::<6>($rs1),
            7 => $f::<7>($rs1),
            8 => $f::<8>($rs1),
            9 => $f::<9>($rs1),
            10 => $f::<10>($rs1),
            11 => $f::<11>($rs1),
            12 => $f::<12>($rs1),
            13 => $f::<13>($rs1),
            14 => $f::<14>($rs1),
            15 => $f::<15>($rs1),
            16 => $f::<16>($rs1),
            17 => $f::<17>($rs1),
            18 => $f::<18>($rs1),
            19 => $f::<19>($rs1),
            20 => $f::<20>($rs1),
            21 => $f::<21>($rs1),
            22 => $f::<22>($rs1),
            23 => $f::<23>($rs1),
            24 => $f::<24>($rs1),
            25 => $f::<25>($rs1),
            26 => $f::<26>($rs1),
            27 => $f::<27>($rs1),
            28 => $f::<28>($rs1),
            29 => $f::<29>($rs1),
            30 => $f::<30>($rs1),
            _ => $f::<31>($rs1),
        }
    };
}

impl Executor for Native {
    fn execute(&self, op: Mnemonic, rs1: u32, src2: u32) -> u32 {
        match op {
            Mnemonic::Sh1add => insn_rr!("sh1add", rs1, src2),
            Mnemonic::Sh2add => insn_rr!("sh2add", rs1, src2),
            Mnemonic::Sh3add => insn_rr!("sh3add", rs1, src2),
            Mnemonic::Max => insn_rr!("max", rs1, src2),
            Mnemonic::Maxu => insn_rr!("maxu", rs1, src2),
            Mnemonic::Min => insn_rr!("min", rs1, src2),
            Mnemonic::Minu => insn_rr!("minu", rs1, src2),
            Mnemonic::SextB => insn_un!("sext.b", rs1),
            Mnemonic::SextH => insn_un!("sext.h", rs1),
            Mnemonic::ZextH => insn_un!("zext.h", rs1),
            Mnemonic::Rev8 => insn_un!("rev8", rs1),
            Mnemonic::OrcB => insn_un!("orc.b", rs1),
            Mnemonic::Clz => insn_un!("clz", rs1),
            Mnemonic::Cpop => insn_un!("cpop", rs1),
            Mnemonic::Ctz => insn_un!("ctz", rs1),
            Mnemonic::Ror => insn_rr!("ror", rs1, src2),
            Mnemonic::Rori => dispatch_imm!(rori, rs1, src2),
            Mnemonic::Rol => insn_rr!("rol", rs1, src2),
            Mnemonic::Xnor => insn_rr!("xnor", rs1, src2),
            Mnemonic::Andn => insn_rr!("andn", rs1, src2),
            Mnemonic::Orn => insn_rr!("orn", rs1, src2),
            Mnemonic::Bset => insn_rr!("bset", rs1, src2),
            Mnemonic::Bseti => dispatch_imm!(bseti, rs1, src2),
            Mnemonic::Bext => insn_rr!("bext", rs1, src2),
            Mnemonic::Bexti => dispatch_imm!(bexti, rs1, src2),
            Mnemonic::Binv => insn_rr!("binv", rs1, src2),
            Mnemonic::Binvi => dispatch_imm!(binvi, rs1, src2),
            Mnemonic::Bclr => insn_rr!("bclr", rs1, src2),
            Mnemonic::Bclri => dispatch_imm!(bclri, rs1, src2),
        }
    }
}
