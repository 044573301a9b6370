//! Deterministic fault-injection sweeps for exhaustively testing error paths.
//!
//! Given a function that performs a sequence of fallible operations, this
//! crate verifies that *every* failure point inside it is individually
//! reachable and handled (no leaked resources, no panics) — without
//! hand-writing a mock per failure combination.
//!
//! # How it works
//!
//! Each fallible operation in the code under test is marked with a
//! **checkpoint**. A **budget** decides how many checkpoints may pass before
//! the next one is forced to fail. The **sweep driver** re-runs the test
//! function with budgets 0, 1, 2, … — so attempt 0 fails at the first
//! checkpoint, attempt 1 at the second, and so on — until an attempt
//! succeeds because every checkpoint passed on its real value.
//!
//! ```text
//! Driver                 Function under test        Budget
//! ──────                 ───────────────────        ──────
//! arm(i)          ──→                          ──→  remaining = i
//! invoke          ──→    checkpoint!(b, cond)  ──→  consume(): pass/fail
//!                        checkpoint!(b, cond)  ──→  consume(): pass/fail
//!                 ←──    Ok(()) | Err(e)
//! next i or stop
//! ```
//!
//! # Module structure
//!
//! - [`budget`] — the per-sweep failure budget counter
//! - [`checkpoint`] — the checkpoint construct and [`checkpoint!`] macro
//! - [`driver`] — [`run_once`](driver::run_once), [`run_max`](driver::run_max),
//!   [`run_range`](driver::run_range)
//! - [`trace`] — checkpoint trace records for observability
//! - [`report`] — human-readable sweep reports
//!
//! # Example
//!
//! A function with three checkpoints on its success path fails under budgets
//! 0, 1 and 2 (forced failure at checkpoints 1, 2, 3 respectively) and
//! succeeds at budget 3 — four attempts in total:
//!
//! ```
//! use faultsweep::prelude::*;
//!
//! fn bring_up(budget: &Budget) -> Result<(), CheckpointError> {
//!     let fd = 3; // pretend the real open succeeded
//!     checkpoint!(budget, fd >= 0, "open")?;
//!     checkpoint!(budget, true, "configure")?;
//!     checkpoint!(budget, true, "bind")?;
//!     Ok(())
//! }
//!
//! let report = faultsweep::driver::run_max(10, bring_up).unwrap();
//! assert_eq!(report.budget, 3);
//! assert_eq!(report.attempts, 4);
//! ```
//!
//! # Error propagation convention
//!
//! The function under test must propagate the *first* checkpoint failure and
//! release its resources on every path. In Rust this is the ordinary `?` +
//! RAII idiom: `?` returns the first error before any later checkpoint runs,
//! and `Drop` impls release whatever was acquired so far. A function that
//! catches a checkpoint error and carries on defeats the sweep.
//!
//! # Threading
//!
//! [`Budget`](budget::Budget) is `!Sync` by construction. Each driver call
//! owns its budget, so parallel test suites are fine — but exactly one run
//! loop, and one code path consuming checkpoints, may use a given budget at
//! a time.

pub mod budget;
pub mod checkpoint;
pub mod driver;
pub mod report;
pub mod trace;

pub mod prelude;

pub use budget::Budget;
pub use checkpoint::{check, check_with, CheckpointError};
pub use driver::{run_max, run_once, run_range, SweepError, SweepReport};
pub use trace::{CheckpointEvent, CheckpointOutcome};
