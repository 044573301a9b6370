//! The checkpoint construct — condition check plus fault injection.
//!
//! A checkpoint wraps one fallible step of the code under test. Evaluating
//! it consumes one unit of [`Budget`]; if the budget is exhausted, the
//! checkpoint fails *without evaluating the real condition* (the real
//! operation is skipped, just as a mocked dependency would refuse to run).
//! Otherwise the real condition decides.
//!
//! Checkpoint failures propagate with `?`. Early return gives first-error-
//! wins ordering for free — once a checkpoint fails, later checkpoints in
//! the same function are never reached, which is exactly what lets the
//! sweep exercise partial-execution paths. Resources acquired before the
//! failing checkpoint are released by their `Drop` impls.
//!
//! Prefer the [`checkpoint!`](crate::checkpoint!) macro, which stringifies
//! the condition and captures the call site for the trace. The `check` /
//! `check_with` functions are the non-macro form for callers that want an
//! explicit label.

use crate::budget::Budget;
use crate::trace::{CheckpointEvent, CheckpointOutcome};
use log::{debug, trace};
use thiserror::Error;

/// A failed checkpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckpointError {
    /// The budget forced this checkpoint to fail; the real condition was
    /// not evaluated.
    #[error("injected failure: {label}")]
    Injected { label: String },

    /// The real condition was false.
    #[error("checkpoint failed: {label}")]
    Failed { label: String },
}

impl CheckpointError {
    /// The failing checkpoint's label.
    pub fn label(&self) -> &str {
        match self {
            CheckpointError::Injected { label } | CheckpointError::Failed { label } => label,
        }
    }

    /// Whether this failure was injected rather than real.
    pub fn is_injected(&self) -> bool {
        matches!(self, CheckpointError::Injected { .. })
    }
}

/// Evaluate a checkpoint on an already-computed condition.
///
/// Use this when the fallible operation has already run and only its result
/// is being checked. If the operation itself should be skipped under
/// injection, use [`check_with`] or the [`checkpoint!`](crate::checkpoint!)
/// macro instead.
pub fn check(budget: &Budget, cond: bool, label: &str) -> Result<(), CheckpointError> {
    check_located(budget, label, None, || cond)
}

/// Evaluate a checkpoint lazily: `cond` runs only if no failure is injected.
pub fn check_with<F>(budget: &Budget, label: &str, cond: F) -> Result<(), CheckpointError>
where
    F: FnOnce() -> bool,
{
    check_located(budget, label, None, cond)
}

/// Macro back-end; consumes the budget exactly once and records the event.
#[doc(hidden)]
pub fn check_located<F>(
    budget: &Budget,
    label: &str,
    location: Option<&'static str>,
    cond: F,
) -> Result<(), CheckpointError>
where
    F: FnOnce() -> bool,
{
    trace!("call:{label}");
    let ordinal = budget.next_ordinal();

    let outcome = if !budget.consume() {
        debug!("inject:{label}");
        CheckpointOutcome::Injected
    } else if cond() {
        trace!("pass:{label}");
        CheckpointOutcome::Pass
    } else {
        debug!("fail:{label}");
        CheckpointOutcome::Failed
    };

    budget.record(CheckpointEvent {
        ordinal,
        label: label.to_string(),
        location: location.map(str::to_string),
        outcome,
    });

    match outcome {
        CheckpointOutcome::Pass => Ok(()),
        CheckpointOutcome::Failed => Err(CheckpointError::Failed {
            label: label.to_string(),
        }),
        CheckpointOutcome::Injected => Err(CheckpointError::Injected {
            label: label.to_string(),
        }),
    }
}

/// Checkpoint a fallible step of the code under test.
///
/// Consumes one unit of budget, then evaluates the condition — unless a
/// failure is injected, in which case the condition expression is not
/// evaluated at all. Expands to a `Result<(), CheckpointError>`; use with
/// `?` so the first failure returns early.
///
/// The two-argument form labels the trace with the stringified expression;
/// the three-argument form takes an explicit label.
///
/// # Example
///
/// ```
/// use faultsweep::prelude::*;
///
/// fn open_and_configure(budget: &Budget) -> Result<(), CheckpointError> {
///     let fd = 3;
///     checkpoint!(budget, fd >= 0)?;
///     checkpoint!(budget, fd != 0, "configure")?;
///     Ok(())
/// }
///
/// assert!(open_and_configure(&Budget::new()).is_ok());
/// ```
#[macro_export]
macro_rules! checkpoint {
    ($budget:expr, $cond:expr $(,)?) => {
        $crate::checkpoint::check_located(
            $budget,
            stringify!($cond),
            Some(concat!(file!(), ":", line!())),
            || $cond,
        )
    };
    ($budget:expr, $cond:expr, $label:expr $(,)?) => {
        $crate::checkpoint::check_located(
            $budget,
            $label,
            Some(concat!(file!(), ":", line!())),
            || $cond,
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn disarmed_checkpoint_evaluates_real_condition() {
        let budget = Budget::new();
        assert!(check(&budget, true, "ok").is_ok());
        let err = check(&budget, false, "broken").unwrap_err();
        assert_eq!(err, CheckpointError::Failed { label: "broken".to_string() });
        assert!(!err.is_injected());
    }

    #[test]
    fn injection_overrides_true_condition() {
        let budget = Budget::new();
        budget.arm(0);
        let err = check(&budget, true, "would pass").unwrap_err();
        assert!(err.is_injected());
        assert_eq!(err.label(), "would pass");
    }

    #[test]
    fn injection_skips_condition_evaluation() {
        let budget = Budget::new();
        budget.arm(0);
        let evaluated = Cell::new(false);
        let err = check_with(&budget, "op", || {
            evaluated.set(true);
            true
        })
        .unwrap_err();
        assert!(err.is_injected());
        assert!(!evaluated.get(), "real operation must not run under injection");
    }

    #[test]
    fn condition_runs_when_budget_allows() {
        let budget = Budget::new();
        budget.arm(1);
        let evaluated = Cell::new(false);
        assert!(check_with(&budget, "op", || {
            evaluated.set(true);
            true
        })
        .is_ok());
        assert!(evaluated.get());
    }

    #[test]
    fn macro_stringifies_condition() {
        let budget = Budget::new();
        let x = 41;
        assert!(checkpoint!(&budget, x + 1 == 42).is_ok());
        let trace = budget.trace();
        assert_eq!(trace.len(), 1);
        assert_eq!(trace[0].label, "x + 1 == 42");
        assert!(trace[0].location.as_deref().unwrap().contains("checkpoint.rs"));
    }

    #[test]
    fn macro_explicit_label() {
        let budget = Budget::new();
        let err = checkpoint!(&budget, false, "bind socket").unwrap_err();
        assert_eq!(err.label(), "bind socket");
    }

    #[test]
    fn trace_follows_control_flow_order() {
        let budget = Budget::new();
        budget.arm(1);
        let _ = check(&budget, true, "first");
        let _ = check(&budget, true, "second"); // injected
        let trace = budget.trace();
        assert_eq!(trace.len(), 2);
        assert_eq!(trace[0].ordinal, 0);
        assert_eq!(trace[0].outcome, CheckpointOutcome::Pass);
        assert_eq!(trace[1].ordinal, 1);
        assert_eq!(trace[1].outcome, CheckpointOutcome::Injected);
        assert_eq!(trace[1].label, "second");
    }

    #[test]
    fn first_error_wins_via_early_return() {
        fn two_steps(budget: &Budget) -> Result<(), CheckpointError> {
            check(budget, false, "first failure")?;
            check(budget, false, "never reached")?;
            Ok(())
        }

        let budget = Budget::new();
        let err = two_steps(&budget).unwrap_err();
        assert_eq!(err.label(), "first failure");
        // The second checkpoint was never evaluated.
        assert_eq!(budget.trace().len(), 1);
    }
}
