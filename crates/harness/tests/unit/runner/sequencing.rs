//! Group ordering, banner suppression, and run idempotence.

use pretty_assertions::assert_eq;
use zbcheck_core::config::FailurePolicy;
use zbcheck_core::exec::Emulator;
use zbcheck_core::fixtures::Group;
use zbcheck_core::isa::Mnemonic;

use crate::common::{FaultInjector, run_all_capture, run_capture};

/// Returns the byte offset of `needle` in `text`, panicking if absent.
fn offset_of(text: &str, needle: &str) -> usize {
    text.find(needle)
        .unwrap_or_else(|| panic!("missing {needle:?} in output"))
}

/// Groups run in the fixed order: Zba, Zbb min/max, Zbb misc, Zbs.
#[test]
fn groups_run_in_fixed_order() {
    let (summary, text) = run_all_capture(FailurePolicy::FailFast);
    let order: Vec<Group> = summary.groups.iter().map(|g| g.group).collect();
    assert_eq!(order, Group::ALL.to_vec());

    let zba = offset_of(&text, "Zba extension successfully PASSED");
    let minmax = offset_of(&text, "Minmax instructions successfully PASSED");
    let misc = offset_of(&text, "Miscellaneous instructions successfully PASSED");
    let zbs = offset_of(&text, "Zbs extension successfully PASSED");
    assert!(zba < minmax && minmax < misc && misc < zbs);
}

/// Within Zbb, min/max checks precede the miscellaneous checks.
#[test]
fn minmax_checks_precede_misc_checks() {
    let (_, text) = run_all_capture(FailurePolicy::FailFast);
    let first_minmax = offset_of(&text, "max TEST #1... ");
    let first_misc = offset_of(&text, "sext.b TEST #1... ");
    assert!(first_minmax < first_misc);
}

/// Re-running with unchanged semantics yields identical console bytes.
#[test]
fn runs_are_idempotent() {
    let (_, first) = run_all_capture(FailurePolicy::FailFast);
    let (_, second) = run_all_capture(FailurePolicy::FailFast);
    assert_eq!(first, second);
}

/// An injected mismatch suppresses exactly the owning group's banner;
/// unrelated groups still print theirs.
#[test]
fn mismatch_suppresses_only_owning_groups_banner() {
    // Corrupt the first ctz vector, which lives in Zbb misc.
    let injector = FaultInjector::new(Emulator, Mnemonic::Ctz, 0xbd745d8e);
    let (summary, text) = run_capture(injector, FailurePolicy::FailFast, &Group::ALL);

    assert!(text.contains("Zba extension successfully PASSED"));
    assert!(text.contains("Minmax instructions successfully PASSED"));
    assert!(!text.contains("Miscellaneous instructions successfully PASSED"));
    assert!(text.contains("Zbs extension successfully PASSED"));

    // Every group still ran; only the misc group is dirty.
    assert_eq!(summary.groups.len(), 4);
    for outcome in &summary.groups {
        if outcome.group == Group::ZbbMisc {
            assert!(!outcome.is_pass());
        } else {
            assert!(outcome.is_pass(), "{} should pass", outcome.group);
        }
    }
}

/// A failure in an early group never prevents later groups from running.
#[test]
fn early_failure_does_not_stop_later_groups() {
    let injector = FaultInjector::new(Emulator, Mnemonic::Sh1add, 0x8bfb2fcf);
    let (summary, text) = run_capture(injector, FailurePolicy::FailFast, &Group::ALL);
    assert!(!summary.groups[0].is_pass());
    assert!(summary.groups[1..].iter().all(|g| g.is_pass()));
    assert!(text.contains("Zbs extension successfully PASSED"));
}

/// Restricting the run to selected groups skips the others entirely.
#[test]
fn selected_groups_only() {
    let (summary, text) = run_capture(
        Emulator,
        FailurePolicy::FailFast,
        &[Group::Zba, Group::Zbs],
    );
    assert_eq!(summary.groups.len(), 2);
    assert!(text.contains("Zba extension successfully PASSED"));
    assert!(text.contains("Zbs extension successfully PASSED"));
    assert!(!text.contains("max TEST"));
    assert!(!text.contains("Minmax instructions"));
}
