//! Input validation for process tables.
//!
//! Checks a loaded table before simulation. Detects:
//! - Empty tables
//! - Duplicate process IDs
//! - Non-positive bursts
//! - Negative arrival times
//! - Tables whose clock would run past `i64::MAX`
//!
//! Duplicate IDs are reported but not fatal: schedulers address processes
//! by table position, so duplicates only make reports ambiguous.

use std::collections::HashSet;
use std::fmt;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The table has no processes.
    EmptyTable,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process has a burst of zero or less.
    NonPositiveBurst,
    /// A process arrives before t=0.
    NegativeArrival,
    /// Latest arrival plus total burst does not fit in an `i64` tick.
    HorizonOverflow,
}

impl ValidationErrorKind {
    /// Whether this error must stop the run.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ValidationErrorKind::DuplicateId)
    }
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Whether this error must stop the run.
    pub fn is_fatal(&self) -> bool {
        self.kind.is_fatal()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a process table.
///
/// Checks:
/// 1. The table is not empty
/// 2. No duplicate process IDs
/// 3. Every burst is positive
/// 4. No arrival time is negative
/// 5. The latest arrival plus the total burst fits in an `i64`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyTable,
            "Process table is empty",
        ));
    }

    let mut seen = HashSet::new();
    for (row, process) in processes.iter().enumerate() {
        if !seen.insert(process.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID {} (row {})", process.id, row + 1),
            ));
        }

        if process.burst_duration <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process {} has non-positive burst {}",
                    process.id, process.burst_duration
                ),
            ));
        }

        if process.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process {} has negative arrival time {}",
                    process.id, process.arrival_time
                ),
            ));
        }
    }

    if horizon_bound(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::HorizonOverflow,
            "Tick horizon overflows: latest arrival plus total burst exceeds i64::MAX",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Last tick any policy can reach, or `None` on overflow.
fn horizon_bound(processes: &[Process]) -> Option<i64> {
    let latest = processes.iter().map(|p| p.arrival_time.max(0)).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(latest, |acc, p| acc.checked_add(p.burst_duration.max(0)))
}
