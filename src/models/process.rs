//! Process (job) model.
//!
//! A process is a unit of CPU work described by when it arrives, how many
//! ticks of service it needs, and an optional priority.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// Process identifier as read from the input table.
pub type ProcessId = i64;

/// A process to be scheduled.
///
/// Loaded once from the input table. Schedulers never mutate a caller's
/// process table; algorithms that consume burst work on their own copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Process identifier (not required to be unique).
    pub id: ProcessId,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU ticks the process requires.
    pub burst_duration: i64,
    /// Scheduling priority (lower = more important, 0 = unset).
    pub priority: i64,
}

impl Process {
    /// Creates a process with default priority.
    pub fn new(id: ProcessId, arrival_time: i64, burst_duration: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_duration,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived by tick `now`.
    #[inline]
    pub fn has_arrived(&self, now: i64) -> bool {
        self.arrival_time <= now
    }
}

/// Sum of all positive bursts in a table (ticks of real work).
///
/// Saturates at `i64::MAX`; tables that get there are rejected by
/// validation before they are scheduled.
pub fn total_burst(processes: &[Process]) -> i64 {
    processes
        .iter()
        .map(|p| p.burst_duration.max(0))
        .fold(0, i64::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new(7, 2, 5).with_priority(3);
        assert_eq!(p.id, 7);
        assert_eq!(p.arrival_time, 2);
        assert_eq!(p.burst_duration, 5);
        assert_eq!(p.priority, 3);
    }

    #[test]
    fn test_default_priority() {
        assert_eq!(Process::new(1, 0, 1).priority, 0);
    }

    #[test]
    fn test_has_arrived() {
        let p = Process::new(1, 4, 2);
        assert!(!p.has_arrived(3));
        assert!(p.has_arrived(4));
        assert!(p.has_arrived(10));
    }

    #[test]
    fn test_total_burst_ignores_non_positive() {
        let table = vec![
            Process::new(1, 0, 5),
            Process::new(2, 0, 0),
            Process::new(3, 0, -2),
            Process::new(4, 1, 3),
        ];
        assert_eq!(total_burst(&table), 8);
        assert_eq!(total_burst(&[]), 0);
    }

    #[test]
    fn test_total_burst_saturates() {
        let table = vec![Process::new(1, 0, i64::MAX), Process::new(2, 0, i64::MAX)];
        assert_eq!(total_burst(&table), i64::MAX);
    }
}
