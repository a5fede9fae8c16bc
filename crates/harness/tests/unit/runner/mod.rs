//! Check runner and sequencer tests.
//!
//! Everything runs against the software model, with `FaultInjector`
//! standing in for defective hardware where a failure path is under test.

/// Single-check behavior and the failure policies.
pub mod checks;


/// Group ordering, banner suppression, and run idempotence.
pub mod sequencing;
