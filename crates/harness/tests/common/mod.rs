//! Shared test infrastructure for the harness suite.
//!
//! The helpers here run the real runner against an in-memory console so
//! tests can assert on both the structured summary and the exact console
//! bytes. `FaultInjector` simulates a defective core by corrupting the
//! result of one chosen vector.

use zbcheck_core::config::FailurePolicy;
use zbcheck_core::exec::{Emulator, Executor};
use zbcheck_core::fixtures::Group;
use zbcheck_core::isa::Mnemonic;
use zbcheck_core::runner::{RunSummary, Runner};

/// Runs `groups` through the given executor, capturing the console.
///
/// Panics on report I/O failure, which cannot happen for an in-memory
/// writer.
pub fn run_capture<E: Executor>(
    executor: E,
    policy: FailurePolicy,
    groups: &[Group],
) -> (RunSummary, String) {
    let mut runner = Runner::new(executor, Vec::new(), policy);
    let summary = match runner.run(groups) {
        Ok(summary) => summary,
        Err(e) => panic!("in-memory report write failed: {e}"),
    };
    let bytes = runner.into_writer();
    match String::from_utf8(bytes) {
        Ok(text) => (summary, text),
        Err(e) => panic!("report emitted invalid utf-8: {e}"),
    }
}

/// Runs all four groups through the software model, capturing the console.
pub fn run_all_capture(policy: FailurePolicy) -> (RunSummary, String) {
    run_capture(Emulator, policy, &Group::ALL)
}

/// An executor that corrupts the result of exactly one vector.
///
/// The target is identified by mnemonic and `rs1` value, which is unique
/// within every shipped fixture table. All other checks pass through to
/// the wrapped executor untouched.
#[derive(Clone, Copy, Debug)]
pub struct FaultInjector<E> {
    inner: E,
    target_op: Mnemonic,
    target_rs1: u32,
}

impl<E> FaultInjector<E> {
    /// Wraps `inner`, corrupting the result for (`op`, `rs1`).
    pub const fn new(inner: E, op: Mnemonic, rs1: u32) -> Self {
        Self {
            inner,
            target_op: op,
            target_rs1: rs1,
        }
    }
}

impl<E: Executor> Executor for FaultInjector<E> {
    fn execute(&self, op: Mnemonic, rs1: u32, src2: u32) -> u32 {
        let result = self.inner.execute(op, rs1, src2);
        if op == self.target_op && rs1 == self.target_rs1 {
            // Complement guarantees a mismatch whatever the true result.
            !result
        } else {
            result
        }
    }
}
