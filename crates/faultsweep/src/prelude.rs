//! Prelude — convenient re-exports for test programs.
//!
//! ```rust,ignore
//! use faultsweep::prelude::*;
//!
//! fn under_test(budget: &Budget) -> Result<(), CheckpointError> {
//!     checkpoint!(budget, true, "open")?;
//!     Ok(())
//! }
//!
//! let report = run_max(10, under_test).unwrap();
//! println!("{}", format_report(&report));
//! ```

pub use crate::budget::Budget;
pub use crate::checkpoint::{check, check_with, CheckpointError};
pub use crate::driver::{run_max, run_once, run_range, SweepError, SweepReport};
pub use crate::report::format_report;
pub use crate::trace::{CheckpointEvent, CheckpointOutcome};

// The checkpoint macro lives at the crate root; pull it in by name so a
// glob import of the prelude is enough to use it.
pub use crate::checkpoint;
