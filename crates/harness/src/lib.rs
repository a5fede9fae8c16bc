//! RISC-V bit-manipulation extension validation harness.
//!
//! This crate validates a core's Zba/Zbb/Zbs implementation with the following:
//! 1. **ISA model:** Mnemonics, operand patterns, and extension grouping.
//! 2. **Executors:** A native inline-assembly backend (RISC-V targets) and a
//!    bit-exact software model used for self-tests and host-side runs.
//! 3. **Fixtures:** Auto-generated operand/expected-result tables, 16 vectors
//!    per instruction, treated as read-only ground truth.
//! 4. **Runner:** Per-check execution and comparison, group sequencing,
//!    failure policy, and console reporting.
//! 5. **Configuration:** Failure policy, strict exit status, group selection.

/// Harness configuration (failure policy, exit status, group selection).
pub mod config;
/// Error types for the harness machinery.
pub mod error;
/// Instruction execution backends (native and software).
pub mod exec;
/// Read-only fixture tables plus vector and group definitions.
pub mod fixtures;
/// Instruction set model (mnemonics, operand patterns, extensions).
pub mod isa;
/// Console reporting for checks and group banners.
pub mod report;
/// Check runner and group sequencer.
pub mod runner;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Error type for configuration and reporting failures.
pub use crate::error::HarnessError;
/// Software instruction-semantics backend.
pub use crate::exec::{Emulator, Executor};
/// Fixed-order instruction groups.
pub use crate::fixtures::Group;
/// Main driver; construct with `Runner::new`.
pub use crate::runner::{RunSummary, Runner};
