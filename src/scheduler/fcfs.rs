//! First-come, first-served scheduler.
//!
//! # Algorithm
//!
//! Processes run once each, in table order, back to back:
//!
//! 1. If the process arrived after t=0, its wait is `service_so_far - arrival`.
//!    A process arriving at t=0 keeps the previous process's wait.
//! 2. It starts at `wait + arrival` and completes `burst` ticks later.
//! 3. `service_so_far` grows by `burst`; the slice ends there.
//!
//! Table order is trusted as arrival order; no idle gaps are inserted.
//!
//! # Complexity
//! O(n).

use log::{debug, trace};

use super::CpuScheduler;
use crate::models::{Process, Schedule, ScheduleRow, TimeSlice};

/// Non-preemptive first-come, first-served scheduler.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::{CpuScheduler, FcfsScheduler};
///
/// let table = vec![Process::new(1, 0, 5), Process::new(2, 2, 3)];
/// let schedule = FcfsScheduler.schedule(&table);
/// assert_eq!(schedule.rows[1].waiting_time, 3);
/// assert_eq!(schedule.last_completion, 8);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FcfsScheduler;

impl CpuScheduler for FcfsScheduler {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn title(&self) -> &'static str {
        "First-come, first-serve"
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        let mut schedule = Schedule::new();
        let mut service_time: i64 = 0;
        let mut waiting_time: i64 = 0;

        for process in processes {
            // Arrival at t=0 carries the previous wait over unchanged.
            if process.arrival_time > 0 {
                waiting_time = service_time - process.arrival_time;
            }

            let start = waiting_time.saturating_add(process.arrival_time);
            let completion = start.saturating_add(process.burst_duration);
            service_time = service_time.saturating_add(process.burst_duration);

            trace!(
                "FCFS: pid={} start={} stop={} wait={}",
                process.id,
                start,
                service_time,
                waiting_time
            );

            schedule
                .rows
                .push(ScheduleRow::finished(process, process.burst_duration, completion));
            schedule.add_slice(TimeSlice::new(process.id, start, service_time));
            schedule.last_completion = completion;
        }

        debug!(
            "FCFS: {} processes, last completion {}",
            processes.len(),
            schedule.last_completion
        );
        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fcfs_reference_table() {
        let table = vec![
            Process::new(1, 0, 5),
            Process::new(2, 2, 3),
            Process::new(3, 4, 2),
        ];
        let schedule = FcfsScheduler.schedule(&table);

        let waits: Vec<i64> = schedule.rows.iter().map(|r| r.waiting_time).collect();
        let completions: Vec<i64> = schedule.rows.iter().map(|r| r.completion_time).collect();
        assert_eq!(waits, vec![0, 3, 4]);
        assert_eq!(completions, vec![5, 8, 10]);
        assert_eq!(
            schedule.timeline,
            vec![
                TimeSlice::new(1, 0, 5),
                TimeSlice::new(2, 5, 8),
                TimeSlice::new(3, 8, 10),
            ]
        );
        assert_eq!(schedule.last_completion, 10);
    }

    #[test]
    fn test_fcfs_zero_arrival_carries_wait() {
        // Process 3 arrives at t=0 after a wait of 4 was computed for
        // process 2; it inherits that wait instead of recomputing.
        let table = vec![
            Process::new(1, 0, 6),
            Process::new(2, 2, 2),
            Process::new(3, 0, 1),
        ];
        let schedule = FcfsScheduler.schedule(&table);
        let row = schedule.row_for_process(3).unwrap();
        assert_eq!(row.waiting_time, 4);
        assert_eq!(row.completion_time, 5);
        // Last completion follows table order, not the maximum
        assert_eq!(schedule.last_completion, 5);
        assert_eq!(schedule.timeline[2], TimeSlice::new(3, 4, 9));
    }

    #[test]
    fn test_fcfs_row_invariants() {
        let table = vec![
            Process::new(1, 0, 3).with_priority(2),
            Process::new(2, 1, 4),
            Process::new(3, 9, 2),
        ];
        let schedule = FcfsScheduler.schedule(&table);
        for row in &schedule.rows {
            assert_eq!(row.turnaround_time, row.waiting_time + row.burst);
            assert_eq!(
                row.completion_time,
                row.arrival_time + row.waiting_time + row.burst
            );
        }
        assert_eq!(schedule.rows[0].priority, 2);
    }

    #[test]
    fn test_fcfs_empty() {
        let schedule = FcfsScheduler.schedule(&[]);
        assert!(schedule.timeline.is_empty());
        assert!(schedule.rows.is_empty());
        assert_eq!(schedule.last_completion, 0);
    }
}
