//! Schedule (simulation result) model.
//!
//! A schedule is the Gantt timeline produced by one scheduling policy plus
//! one result row per finished process.
//!
//! # Invariants
//! Every row satisfies `turnaround = completion - arrival` and
//! `waiting = turnaround - burst`, so `completion = arrival + waiting + burst`.

use serde::{Deserialize, Serialize};

use super::{Process, ProcessId};

/// A maximal interval `[start, stop)` during which one process held the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlice {
    /// Process that ran.
    pub pid: ProcessId,
    /// First tick of the slice.
    pub start: i64,
    /// Tick at which the slice ended (exclusive).
    pub stop: i64,
}

impl TimeSlice {
    /// Creates a new slice.
    pub fn new(pid: ProcessId, start: i64, stop: i64) -> Self {
        Self { pid, start, stop }
    }

    /// Slice length in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.stop - self.start
    }
}

/// Per-process result, produced once the process's remaining work hits zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Process identifier.
    pub process_id: ProcessId,
    /// Priority as loaded.
    pub priority: i64,
    /// Burst before any work was done.
    pub burst: i64,
    /// Arrival tick.
    pub arrival_time: i64,
    /// Ticks spent waiting (turnaround minus burst).
    pub waiting_time: i64,
    /// Ticks from arrival to completion.
    pub turnaround_time: i64,
    /// Tick at which the process finished.
    pub completion_time: i64,
}

impl ScheduleRow {
    /// Builds the row for a process finishing at `completion`.
    ///
    /// `burst` is the original burst; waiting and turnaround are derived
    /// from it so the row invariants hold by construction.
    pub fn finished(process: &Process, burst: i64, completion: i64) -> Self {
        let turnaround = completion - process.arrival_time;
        Self {
            process_id: process.id,
            priority: process.priority,
            burst,
            arrival_time: process.arrival_time,
            waiting_time: turnaround - burst,
            turnaround_time: turnaround,
            completion_time: completion,
        }
    }
}

/// Result of running one policy over a process table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Gantt timeline in execution order.
    pub timeline: Vec<TimeSlice>,
    /// Finished processes, in table order.
    pub rows: Vec<ScheduleRow>,
    /// Completion tick of the most recent finishing event observed.
    pub last_completion: i64,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice to the timeline.
    pub fn add_slice(&mut self, slice: TimeSlice) {
        self.timeline.push(slice);
    }

    /// Latest stop tick across the timeline.
    pub fn makespan(&self) -> i64 {
        self.timeline.iter().map(|s| s.stop).max().unwrap_or(0)
    }

    /// Total ticks the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.timeline.iter().map(TimeSlice::duration).sum()
    }

    /// CPU utilization: busy_time / makespan.
    ///
    /// Returns `None` for an empty timeline.
    pub fn utilization(&self) -> Option<f64> {
        let horizon = self.makespan();
        if horizon <= 0 {
            return None;
        }
        Some(self.busy_time() as f64 / horizon as f64)
    }

    /// Finds the result row for a process.
    pub fn row_for_process(&self, pid: ProcessId) -> Option<&ScheduleRow> {
        self.rows.iter().find(|r| r.process_id == pid)
    }

    /// Returns all slices in which a process ran.
    pub fn slices_for_process(&self, pid: ProcessId) -> Vec<&TimeSlice> {
        self.timeline.iter().filter(|s| s.pid == pid).collect()
    }

    /// Number of finished processes.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
