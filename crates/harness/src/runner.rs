//! Check runner and group sequencer.
//!
//! This module drives the validation flow. It provides:
//! 1. **Check execution:** Run one vector through an executor and compare
//!    the captured result against the expected value (exact 32-bit equality).
//! 2. **Group sequencing:** Iterate a group's tables in fixture order,
//!    honoring the failure policy, and print the banner when all pass.
//! 3. **Summaries:** Explicit per-group and per-run outcomes, so callers
//!    can derive an exit status instead of scraping console text.
//!
//! Control flow is strictly sequential and single-threaded. A failed group
//! never prevents later groups from running.

use std::io::Write;

use tracing::{debug, info, warn};

use crate::config::FailurePolicy;
use crate::error::HarnessError;
use crate::exec::Executor;
use crate::fixtures::{Group, TestVector};
use crate::report::Report;

/// Outcome of one check; created per vector and consumed immediately.
#[derive(Clone, Copy, Debug)]
pub struct CheckResult<'a> {
    /// The vector that produced this result.
    pub vector: &'a TestVector,
    /// The result captured from the executor.
    pub actual: u32,
}

impl CheckResult<'_> {
    /// True iff the captured result matches the expected value exactly.
    pub const fn passed(&self) -> bool {
        self.actual == self.vector.expected
    }
}

/// Aggregate outcome for one instruction group.
#[derive(Clone, Copy, Debug)]
pub struct GroupOutcome {
    /// The group this outcome describes.
    pub group: Group,
    /// Checks that passed.
    pub passed: usize,
    /// Checks that ran and mismatched.
    pub failed: usize,
    /// Checks skipped after an aborting failure.
    pub skipped: usize,
}

impl GroupOutcome {
    /// True iff every check in the group ran and passed.
    pub const fn is_pass(&self) -> bool {
        self.failed == 0 && self.skipped == 0
    }
}

/// Aggregate outcome of a full run, in group execution order.
#[derive(Clone, Debug, Default)]
pub struct RunSummary {
    /// Per-group outcomes.
    pub groups: Vec<GroupOutcome>,
}

impl RunSummary {
    /// True iff every group passed completely.
    pub fn all_passed(&self) -> bool {
        self.groups.iter().all(GroupOutcome::is_pass)
    }

    /// Total number of failed checks across groups.
    pub fn checks_failed(&self) -> usize {
        self.groups.iter().map(|g| g.failed).sum()
    }
}

/// Drives vectors through an executor and reports the outcomes.
///
/// The executor supplies the instruction results under judgment; the
/// runner owns comparison, reporting, and the failure policy. No state
/// outlives a single check beyond the aggregated counters.
#[derive(Debug)]
pub struct Runner<E, W> {
    executor: E,
    report: Report<W>,
    policy: FailurePolicy,
}

impl<E: Executor, W: Write> Runner<E, W> {
    /// Builds a runner writing its report to `out`.
    pub const fn new(executor: E, out: W, policy: FailurePolicy) -> Self {
        Self {
            executor,
            report: Report::new(out),
            policy,
        }
    }

    /// Runs one vector: announce, execute, compare, report.
    ///
    /// `seq` is the 1-based position of the vector within its
    /// instruction's table, used only for the console line.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Io`] if the report cannot be written. A
    /// mismatch is not an error; it is carried in the returned result.
    pub fn check<'a>(
        &mut self,
        vector: &'a TestVector,
        seq: usize,
    ) -> Result<CheckResult<'a>, HarnessError> {
        self.report.check_begin(vector, seq)?;
        let actual = self
            .executor
            .execute(vector.op, vector.rs1, vector.src2_value());
        let result = CheckResult { vector, actual };
        if result.passed() {
            debug!(op = %vector.op, rs1 = vector.rs1, actual, "check passed");
            self.report.check_passed()?;
        } else {
            warn!(
                op = %vector.op,
                rs1 = vector.rs1,
                expected = vector.expected,
                actual,
                "check failed"
            );
            self.report.check_failed(vector, actual)?;
        }
        Ok(result)
    }

    /// Runs one group's tables in fixture order.
    ///
    /// Under [`FailurePolicy::FailFast`] the first mismatch aborts the
    /// group's remaining checks; under [`FailurePolicy::KeepGoing`] every
    /// check runs. The success banner prints only for a clean group.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Io`] if the report cannot be written.
    pub fn run_group(&mut self, group: Group) -> Result<GroupOutcome, HarnessError> {
        let total = group.len();
        let mut outcome = GroupOutcome {
            group,
            passed: 0,
            failed: 0,
            skipped: 0,
        };
        let mut done = 0usize;
        for table in group.tables() {
            for (i, vector) in table.iter().enumerate() {
                let result = self.check(vector, i + 1)?;
                done += 1;
                if result.passed() {
                    outcome.passed += 1;
                } else {
                    outcome.failed += 1;
                    if self.policy == FailurePolicy::FailFast {
                        outcome.skipped = total - done;
                        warn!(
                            group = group.name(),
                            skipped = outcome.skipped,
                            "aborting remaining checks in group"
                        );
                        return Ok(outcome);
                    }
                }
            }
        }
        if outcome.is_pass() {
            info!(group = group.name(), passed = outcome.passed, "group passed");
            self.report.group_banner(group)?;
        } else {
            warn!(
                group = group.name(),
                failed = outcome.failed,
                "group failed; banner suppressed"
            );
        }
        Ok(outcome)
    }

    /// Runs the given groups in the order provided.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Io`] if the report cannot be written.
    pub fn run(&mut self, groups: &[Group]) -> Result<RunSummary, HarnessError> {
        self.report.run_header()?;
        let mut summary = RunSummary::default();
        for &group in groups {
            summary.groups.push(self.run_group(group)?);
        }
        Ok(summary)
    }

    /// Runs every group in the fixed order (Zba, Zbb min/max, Zbb
    /// miscellaneous, Zbs).
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Io`] if the report cannot be written.
    pub fn run_all(&mut self) -> Result<RunSummary, HarnessError> {
        self.run(&Group::ALL)
    }

    /// Consumes the runner and returns the report stream.
    pub fn into_writer(self) -> W {
        self.report.into_inner()
    }
}
