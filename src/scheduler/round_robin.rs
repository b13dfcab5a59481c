//! Round-robin scheduler (table-scan form).
//!
//! # Algorithm
//!
//! Each pass visits the table in order. A process with remaining burst
//! gets `min(remaining, quantum)` ticks starting at the current service
//! time; the slice is appended as-is (no coalescing). Passes repeat until
//! every remaining burst is zero, bounded by
//! [`SimulationConfig::max_round_robin_passes`].
//!
//! Arrival times only enter the metrics: processes are visited in table
//! order regardless of when they arrive, and the clock never idles.
//!
//! The caller's table is not modified; remaining bursts live in a private copy.

use log::{debug, trace, warn};

use super::{CpuScheduler, SimulationConfig};
use crate::models::{Process, Schedule, ScheduleRow, TimeSlice};

/// Fixed-quantum round-robin scheduler.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::{CpuScheduler, RoundRobinScheduler};
///
/// let schedule = RoundRobinScheduler::new(3).schedule(&[Process::new(1, 0, 7)]);
/// let stops: Vec<i64> = schedule.timeline.iter().map(|s| s.stop).collect();
/// assert_eq!(stops, vec![3, 6, 7]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RoundRobinScheduler {
    quantum: i64,
    max_passes: usize,
}

impl RoundRobinScheduler {
    /// Creates a scheduler with the given quantum and the default pass cap.
    pub fn new(quantum: i64) -> Self {
        Self::from_config(&SimulationConfig::new().with_quantum(quantum))
    }

    /// Creates a scheduler from a simulation config.
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            quantum: config.quantum.max(1),
            max_passes: config.max_round_robin_passes,
        }
    }

    /// Time quantum in ticks.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl Default for RoundRobinScheduler {
    fn default() -> Self {
        Self::from_config(&SimulationConfig::default())
    }
}

impl CpuScheduler for RoundRobinScheduler {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn title(&self) -> &'static str {
        "Round-robin"
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_duration).collect();
        let mut rows: Vec<Option<ScheduleRow>> = vec![None; processes.len()];
        let mut schedule = Schedule::new();
        let mut service_time: i64 = 0;
        let mut passes = 0;

        while passes < self.max_passes && remaining.iter().any(|&r| r > 0) {
            for (index, process) in processes.iter().enumerate() {
                let work = remaining[index].min(self.quantum);
                if work <= 0 {
                    continue;
                }

                let start = service_time;
                service_time = service_time.saturating_add(work);
                remaining[index] -= work;

                trace!(
                    "RR pass {}: pid={} [{}, {}) left={}",
                    passes,
                    process.id,
                    start,
                    service_time,
                    remaining[index]
                );

                // Rows report the original burst; later visits overwrite.
                rows[index] = Some(ScheduleRow::finished(
                    process,
                    process.burst_duration,
                    service_time,
                ));
                schedule.add_slice(TimeSlice::new(process.id, start, service_time));
                schedule.last_completion = service_time;
            }
            passes += 1;
        }

        let unfinished = remaining.iter().filter(|&&r| r > 0).count();
        if unfinished > 0 {
            warn!(
                "RR: stopped after {} passes with {} unfinished processes",
                passes, unfinished
            );
        }
        debug!(
            "RR (q={}): {} passes, {} slices",
            self.quantum,
            passes,
            schedule.timeline.len()
        );

        // Only finished processes are reported.
        schedule.rows = rows
            .into_iter()
            .zip(&remaining)
            .filter_map(|(row, &left)| if left > 0 { None } else { row })
            .collect();
        schedule
    }
}
