//! Console reporting.
//!
//! Line-oriented, human-readable output: one `<mnemonic> TEST #n...`
//! line per check finished by `PASSED` or a multi-line failure block,
//! and a dashed banner per fully passing group. Output goes through any
//! [`Write`] so tests can capture it byte-for-byte.
//!
//! This is a reporting side channel only; pass/fail decisions are made
//! by the runner, never inferred from text.

use std::io::{self, Write};

use crate::fixtures::{Group, Src2, TestVector};

/// Writes check and group outcomes to a console stream.
#[derive(Debug)]
pub struct Report<W> {
    out: W,
}

impl<W: Write> Report<W> {
    /// Wraps a console stream.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying stream.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Prints the run header.
    ///
    /// # Errors
    ///
    /// Propagates any write failure.
    pub fn run_header(&mut self) -> io::Result<()> {
        writeln!(self.out, "RISC-V Zba/Zbb/Zbs validation")
    }

    /// Announces a check before it executes.
    ///
    /// `seq` is the 1-based position of the vector within its
    /// instruction's table.
    ///
    /// # Errors
    ///
    /// Propagates any write failure.
    pub fn check_begin(&mut self, vector: &TestVector, seq: usize) -> io::Result<()> {
        write!(self.out, "{op} TEST #{seq}... ", op = vector.op)
    }

    /// Finishes a passing check's line.
    ///
    /// # Errors
    ///
    /// Propagates any write failure.
    pub fn check_passed(&mut self) -> io::Result<()> {
        writeln!(self.out, "PASSED")
    }

    /// Emits the failure block for a mismatched check.
    ///
    /// Repeats the instruction with its operands, then expected and
    /// actual in hexadecimal, then the fixed critical-error notice.
    ///
    /// # Errors
    ///
    /// Propagates any write failure.
    pub fn check_failed(&mut self, vector: &TestVector, actual: u32) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "The test has FAILED with the following instruction:")?;
        let op = vector.op;
        let rs1 = vector.rs1;
        match vector.src2 {
            Src2::Reg(rs2) => writeln!(self.out, "{op} rd, {rs1:#x}, {rs2:#x}")?,
            Src2::Imm(imm) => writeln!(self.out, "{op} rd, {rs1:#x}, {imm:#x}")?,
            Src2::None => writeln!(self.out, "{op} rd, {rs1:#x}")?,
        }
        writeln!(
            self.out,
            "expected = {expected:#x}, actual = {actual:#x}",
            expected = vector.expected,
        )?;
        writeln!(self.out, "This is a critical error, exiting")
    }

    /// Prints a group's success banner.
    ///
    /// Only called when every check in the group passed.
    ///
    /// # Errors
    ///
    /// Propagates any write failure.
    pub fn group_banner(&mut self, group: Group) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out)?;
        writeln!(self.out, "--------------")?;
        writeln!(self.out, "{title} successfully PASSED", title = group.title())?;
        writeln!(self.out, "--------------")?;
        writeln!(self.out)
    }
}
