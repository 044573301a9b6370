//! The failure budget — the counter that decides which checkpoint fails.
//!
//! A [`Budget`] holds a signed countdown and an armed flag. While armed,
//! each [`consume`](Budget::consume) decrements the countdown; the first
//! call that takes it below zero reports failure, and so does every call
//! after it until the budget is re-armed. Disarmed, `consume` is a
//! pass-through and checkpoints evaluate their real conditions only.
//!
//! The budget is an explicit context object, not process state: the sweep
//! driver constructs one per call and hands the function under test a
//! shared reference. Interior mutability via [`Cell`] keeps the type
//! `!Sync`, so a budget cannot be shared across threads. Exactly one run
//! loop, and one code path consuming checkpoints, may use a given budget
//! at a time.

use crate::trace::CheckpointEvent;
use std::cell::{Cell, RefCell};

/// Countdown of checkpoint passes remaining before injection kicks in.
///
/// # Example
///
/// ```
/// use faultsweep::budget::Budget;
///
/// let budget = Budget::new();
/// assert!(budget.consume()); // disarmed: always passes
///
/// budget.arm(2);
/// assert!(budget.consume());
/// assert!(budget.consume());
/// assert!(!budget.consume()); // third checkpoint is forced to fail
/// assert!(!budget.consume()); // and it stays failing until re-armed
/// ```
#[derive(Debug, Default)]
pub struct Budget {
    remaining: Cell<i64>,
    armed: Cell<bool>,
    /// Checkpoints evaluated in the current attempt.
    ordinal: Cell<u64>,
    trace: RefCell<Vec<CheckpointEvent>>,
}

impl Budget {
    /// Create a disarmed budget. Checkpoints pass through to their real
    /// conditions until [`arm`](Budget::arm) is called.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the budget: allow `n` checkpoint passes, then force failures.
    ///
    /// Overwrites any prior state and starts a fresh attempt: the ordinal
    /// counter and trace buffer are reset.
    pub fn arm(&self, n: u32) {
        self.remaining.set(i64::from(n));
        self.armed.set(true);
        self.ordinal.set(0);
        self.trace.borrow_mut().clear();
    }

    /// Disarm the budget. Idempotent. The trace buffer is kept so the last
    /// attempt can still be inspected.
    pub fn disarm(&self) {
        self.armed.set(false);
        self.remaining.set(0);
    }

    /// Consume one unit of budget; returns whether the checkpoint may pass.
    ///
    /// Disarmed budgets always return `true`. Armed budgets return `true`
    /// for the first `n` calls after [`arm(n)`](Budget::arm) and `false`
    /// from then on (the countdown saturates rather than wrapping).
    ///
    /// Called exactly once per checkpoint reached, in control-flow order.
    /// Public so a fake collaborator can gate an operation manually — a
    /// mocked external dependency checks `consume()` before deciding to
    /// simulate failure or delegate to the real implementation.
    pub fn consume(&self) -> bool {
        if !self.armed.get() {
            return true;
        }
        let left = self.remaining.get() - 1;
        self.remaining.set(left.max(-1));
        left >= 0
    }

    /// Remaining passes if armed, `None` if disarmed. Diagnostics only.
    pub fn peek(&self) -> Option<i64> {
        if self.armed.get() {
            Some(self.remaining.get())
        } else {
            None
        }
    }

    /// Snapshot of the current attempt's checkpoint trace, in control-flow
    /// order.
    pub fn trace(&self) -> Vec<CheckpointEvent> {
        self.trace.borrow().clone()
    }

    /// Hand out the next checkpoint ordinal for this attempt.
    pub(crate) fn next_ordinal(&self) -> u64 {
        let ordinal = self.ordinal.get();
        self.ordinal.set(ordinal + 1);
        ordinal
    }

    pub(crate) fn record(&self, event: CheckpointEvent) {
        self.trace.borrow_mut().push(event);
    }
}
