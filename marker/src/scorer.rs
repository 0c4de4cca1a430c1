//! # Scorer Module
//!
//! This module turns per-test outcomes into the aggregate figures of a [`ScoringRecord`]:
//! the run status and the total marks earned.
//!
//! [`ScoringRecord`]: crate::types::ScoringRecord

use crate::types::RunStatus;

/// Derives the overall status of a run from its passed and failed counts.
///
/// - `PASSED` when nothing failed (this includes a run with no counted tests at all).
/// - `PARTIAL` when some tests passed and some failed.
/// - `FAILED` when tests failed and none passed.
///
/// # Example
///
/// ```
/// use marker::scorer::derive_status;
/// use marker::types::RunStatus;
///
/// assert_eq!(derive_status(3, 0), RunStatus::Passed);
/// assert_eq!(derive_status(2, 1), RunStatus::Partial);
/// assert_eq!(derive_status(0, 4), RunStatus::Failed);
/// ```
pub fn derive_status(passed: usize, failed: usize) -> RunStatus {
    if failed == 0 {
        RunStatus::Passed
    } else if passed > 0 {
        RunStatus::Partial
    } else {
        RunStatus::Failed
    }
}

/// Sums the marks of passed tests.
pub fn total_marks<I>(passed_marks: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    passed_marks.into_iter().sum()
}
