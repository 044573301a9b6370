//! The sweep driver — re-runs a test function across budget values.
//!
//! Arming the budget with `i` lets the first `i` checkpoints pass on their
//! real value and forces the next one to fail. Stepping `i` from a low
//! bound upward therefore sweeps the forced failure linearly through every
//! checkpoint the function can reach, including checkpoints nested inside
//! its callees (anything consuming the same budget participates). The
//! sweep terminates once `i` exceeds the checkpoint count on the success
//! path: every checkpoint then passes on its real value and the function
//! succeeds legitimately.
//!
//! Per driver call: `START -> ATTEMPT(i) -> SUCCESS | ATTEMPT(i+1) -> …
//! -> EXHAUSTED`. There are no other states. A function that can never
//! succeed exhausts the bound, so pick `max` generously.
//!
//! Each driver call owns its own [`Budget`]; nested or parallel sweeps are
//! fine as long as each function under test consumes the budget it was
//! handed and no other.
//!
//! A test program should treat [`SweepError::Exhausted`] as a hard failure
//! (assert on the sweep result, or propagate it to a non-zero exit);
//! success before the bound is the normal passing condition.

use crate::budget::Budget;
use crate::trace::CheckpointEvent;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A sweep that ended without any attempt succeeding.
#[derive(Debug, Error)]
pub enum SweepError<E>
where
    E: std::error::Error + 'static,
{
    /// Every budget in the range produced a failing attempt. Either the
    /// function under test is genuinely broken, or the bound was too low
    /// to reach its success path.
    #[error("sweep exhausted after {attempts} attempts without success")]
    Exhausted {
        /// Number of attempts made.
        attempts: u32,
        /// The last attempt's failure.
        #[source]
        last: E,
    },

    /// `min > max`: the sweep made no attempts at all.
    #[error("empty sweep range: min {min} > max {max}")]
    EmptyRange { min: u32, max: u32 },
}

/// Outcome of a successful sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepReport {
    /// Budget value of the first successful attempt — equal to the number
    /// of checkpoints on the function's success path.
    pub budget: u32,
    /// Total attempts, failing ones included.
    pub attempts: u32,
    /// Checkpoint trace of the successful attempt, in control-flow order.
    pub checkpoints: Vec<CheckpointEvent>,
}

/// Invoke `test` once with injection disabled.
///
/// The function gets a fresh disarmed budget: every checkpoint evaluates
/// its real condition. The outcome is returned unchanged. This is the
/// plain-run entry point, deliberately separate from the sweep.
pub fn run_once<F, E>(mut test: F) -> Result<(), E>
where
    F: FnMut(&Budget) -> Result<(), E>,
{
    let budget = Budget::new();
    test(&budget)
}

/// Sweep budgets `min..=max` until the first successful attempt.
///
/// Arms the budget with each value in turn and invokes `test`, stopping at
/// the first success — so `test` runs at most `max - min + 1` times. The
/// budget is disarmed when the loop ends, success or not. On exhaustion
/// the last attempt's failure is returned inside
/// [`SweepError::Exhausted`].
pub fn run_range<F, E>(min: u32, max: u32, mut test: F) -> Result<SweepReport, SweepError<E>>
where
    F: FnMut(&Budget) -> Result<(), E>,
    E: std::error::Error + 'static,
{
    if min > max {
        return Err(SweepError::EmptyRange { min, max });
    }

    let budget = Budget::new();
    let mut attempts = 0u32;
    let mut last = None;

    for i in min..=max {
        budget.arm(i);
        attempts += 1;
        debug!("attempt {attempts}: budget {i}");
        match test(&budget) {
            Ok(()) => {
                budget.disarm();
                info!("sweep succeeded at budget {i} after {attempts} attempts");
                return Ok(SweepReport {
                    budget: i,
                    attempts,
                    checkpoints: budget.trace(),
                });
            }
            Err(err) => {
                debug!("attempt {attempts} failed: {err}");
                last = Some(err);
            }
        }
    }

    budget.disarm();
    warn!("sweep exhausted: no success in budgets {min}..={max}");
    match last {
        Some(last) => Err(SweepError::Exhausted { attempts, last }),
        // min..=max is non-empty here, so at least one attempt ran.
        None => Err(SweepError::EmptyRange { min, max }),
    }
}

/// Sweep budgets `0..=max`. Shorthand for [`run_range`]`(0, max, test)`.
pub fn run_max<F, E>(max: u32, test: F) -> Result<SweepReport, SweepError<E>>
where
    F: FnMut(&Budget) -> Result<(), E>,
    E: std::error::Error + 'static,
{
    run_range(0, max, test)
}
