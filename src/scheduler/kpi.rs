//! Schedule quality metrics (KPIs).
//!
//! Computes the aggregate figures reported under each schedule table.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | sum(waiting) / process count |
//! | Avg Turnaround | sum(turnaround) / process count |
//! | Throughput | process count / last observed completion |
//! | CPU Utilization | busy ticks / makespan |
//!
//! Throughput uses the completion of the most recent finishing event, which
//! is not necessarily the largest completion time.

use serde::{Deserialize, Serialize};

use crate::models::Schedule;

/// Aggregate performance indicators for one schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Mean waiting time (ticks).
    pub avg_waiting_time: f64,
    /// Mean turnaround time (ticks).
    pub avg_turnaround_time: f64,
    /// Processes completed per tick.
    pub throughput: f64,
    /// Fraction of the timeline the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule.
    ///
    /// # Arguments
    /// * `schedule` - The simulated schedule.
    /// * `process_count` - Size of the input table (the averaging divisor).
    pub fn calculate(schedule: &Schedule, process_count: usize) -> Self {
        if process_count == 0 {
            return Self {
                avg_waiting_time: 0.0,
                avg_turnaround_time: 0.0,
                throughput: 0.0,
                cpu_utilization: schedule.utilization().unwrap_or(0.0),
            };
        }

        let count = process_count as f64;
        let total_wait: i64 = schedule.rows.iter().map(|r| r.waiting_time).sum();
        let total_turnaround: i64 = schedule.rows.iter().map(|r| r.turnaround_time).sum();

        let throughput = if schedule.last_completion > 0 {
            count / schedule.last_completion as f64
        } else {
            0.0
        };

        Self {
            avg_waiting_time: total_wait as f64 / count,
            avg_turnaround_time: total_turnaround as f64 / count,
            throughput,
            cpu_utilization: schedule.utilization().unwrap_or(0.0),
        }
    }
}
