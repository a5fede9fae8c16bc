//! Single-check behavior and failure policies.

use zbcheck_core::config::FailurePolicy;
use zbcheck_core::exec::Emulator;
use zbcheck_core::fixtures::{Group, zba};
use zbcheck_core::isa::Mnemonic;
use zbcheck_core::runner::Runner;

use crate::common::{FaultInjector, run_capture};

#[test]
fn passing_check_reports_pass() {
    let mut runner = Runner::new(Emulator, Vec::new(), FailurePolicy::FailFast);
    let result = match runner.check(&zba::SH1ADD[0], 1) {
        Ok(result) => result,
        Err(e) => panic!("check failed to run: {e}"),
    };
    assert!(result.passed());
    assert_eq!(result.actual, zba::SH1ADD[0].expected);
}

#[test]
fn failing_check_reports_fail_with_actual_value() {
    let target = &zba::SH1ADD[0];
    let injector = FaultInjector::new(Emulator, Mnemonic::Sh1add, target.rs1);
    let mut runner = Runner::new(injector, Vec::new(), FailurePolicy::FailFast);
    let result = match runner.check(target, 1) {
        Ok(result) => result,
        Err(e) => panic!("check failed to run: {e}"),
    };
    assert!(!result.passed());
    assert_eq!(result.actual, !target.expected);
}

/// A clean group runs every check and reports no skips.
#[test]
fn clean_group_runs_to_completion() {
    let (summary, _) = run_capture(Emulator, FailurePolicy::FailFast, &[Group::Zba]);
    let outcome = summary.groups[0];
    assert!(outcome.is_pass());
    assert_eq!(outcome.passed, 48);
    assert_eq!(outcome.failed, 0);
    assert_eq!(outcome.skipped, 0);
}

/// Fail-fast: the first mismatch aborts the rest of the group. The
/// injected failure hits the first sh2add vector, so all 16 sh1add
/// checks pass and the remaining 31 checks never run.
#[test]
fn fail_fast_aborts_remaining_group_checks() {
    let injector = FaultInjector::new(Emulator, Mnemonic::Sh2add, 0x6a701eba);
    let (summary, text) = run_capture(injector, FailurePolicy::FailFast, &[Group::Zba]);
    let outcome = summary.groups[0];
    assert!(!outcome.is_pass());
    assert_eq!(outcome.passed, 16);
    assert_eq!(outcome.failed, 1);
    assert_eq!(outcome.skipped, 31);
    // The vector after the failure never prints.
    assert!(!text.contains("sh2add TEST #2"), "group was not aborted");
    assert!(!text.contains("sh3add"), "later table still ran");
}

/// Keep-going: every check runs and all failures are collected.
#[test]
fn keep_going_collects_all_failures() {
    let injector = FaultInjector::new(Emulator, Mnemonic::Sh2add, 0x6a701eba);
    let (summary, text) = run_capture(injector, FailurePolicy::KeepGoing, &[Group::Zba]);
    let outcome = summary.groups[0];
    assert!(!outcome.is_pass());
    assert_eq!(outcome.passed, 47);
    assert_eq!(outcome.failed, 1);
    assert_eq!(outcome.skipped, 0);
    assert!(text.contains("sh2add TEST #2"), "later checks were skipped");
    assert!(text.contains("sh3add TEST #16"), "last table did not finish");
}

/// Keep-going still suppresses the banner of a dirty group.
#[test]
fn keep_going_still_suppresses_banner() {
    let injector = FaultInjector::new(Emulator, Mnemonic::Sh2add, 0x6a701eba);
    let (_, text) = run_capture(injector, FailurePolicy::KeepGoing, &[Group::Zba]);
    assert!(!text.contains("Zba extension successfully PASSED"));
}

/// The run summary exposes failure counts for status derivation.
#[test]
fn summary_counts_failed_checks() {
    let injector = FaultInjector::new(Emulator, Mnemonic::Sh2add, 0x6a701eba);
    let (summary, _) = run_capture(injector, FailurePolicy::FailFast, &Group::ALL);
    assert!(!summary.all_passed());
    assert_eq!(summary.checks_failed(), 1);

    let (clean, _) = run_capture(Emulator, FailurePolicy::FailFast, &Group::ALL);
    assert!(clean.all_passed());
    assert_eq!(clean.checks_failed(), 0);
}
