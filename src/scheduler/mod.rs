//! CPU-scheduling policies and KPI evaluation.
//!
//! # Policies
//!
//! | Policy | Scheduler | Behaviour |
//! |--------|-----------|-----------|
//! | FCFS | `FcfsScheduler` | Table order, non-preemptive |
//! | SJF | `SjfScheduler` | Shortest remaining burst, re-picked every tick |
//! | SJF-Priority | `PrioritySjfScheduler` | Lower priority value, then shorter remaining burst |
//! | Round-Robin | `RoundRobinScheduler` | Fixed quantum, table-scan passes |
//!
//! Every scheduler borrows the process table immutably and keeps its
//! working state private, so policies can run in any order (or in
//! parallel) over the same loaded table.
//!
//! # KPI
//!
//! `ScheduleKpi` computes average waiting time, average turnaround time,
//! throughput and CPU utilization.

mod config;
mod fcfs;
mod kpi;
mod round_robin;
pub mod selection;
mod sjf;
mod tick;

pub use config::{SimulationConfig, DEFAULT_MAX_ROUND_ROBIN_PASSES, DEFAULT_QUANTUM};
pub use fcfs::FcfsScheduler;
pub use kpi::ScheduleKpi;
pub use round_robin::RoundRobinScheduler;
pub use sjf::{PrioritySjfScheduler, SjfScheduler};

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

use crate::models::{Process, Schedule};

/// A CPU-scheduling policy.
///
/// Implementations must not retain or mutate the process table; all
/// per-run state lives inside `schedule`.
pub trait CpuScheduler: Send + Sync + Debug {
    /// Short policy name (e.g., "FCFS").
    fn name(&self) -> &'static str;

    /// Report title.
    fn title(&self) -> &'static str {
        self.name()
    }

    /// Simulates the policy over a process table.
    fn schedule(&self, processes: &[Process]) -> Schedule;
}

/// The policies run by a batch report, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    /// First-come, first-served.
    Fcfs,
    /// Shortest-job-first.
    Sjf,
    /// Priority shortest-job-first.
    SjfPriority,
    /// Round-robin.
    RoundRobin,
}

impl Policy {
    /// All policies in report order.
    pub const ALL: [Policy; 4] = [
        Policy::Fcfs,
        Policy::Sjf,
        Policy::SjfPriority,
        Policy::RoundRobin,
    ];

    /// Builds the scheduler for this policy.
    pub fn scheduler(&self, config: &SimulationConfig) -> Box<dyn CpuScheduler> {
        match self {
            Policy::Fcfs => Box::new(FcfsScheduler),
            Policy::Sjf => Box::new(SjfScheduler),
            Policy::SjfPriority => Box::new(PrioritySjfScheduler),
            Policy::RoundRobin => Box::new(RoundRobinScheduler::from_config(config)),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Policy::Fcfs => "FCFS",
            Policy::Sjf => "SJF",
            Policy::SjfPriority => "SJF-Priority",
            Policy::RoundRobin => "Round-Robin",
        };
        f.write_str(name)
    }
}

/// Result of running one policy: the schedule and its KPIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyOutcome {
    /// Policy that produced the schedule.
    pub policy: Policy,
    /// Report title.
    pub title: String,
    /// Timeline and per-process rows.
    pub schedule: Schedule,
    /// Aggregate metrics.
    pub kpi: ScheduleKpi,
}

/// Runs a single policy over a process table.
pub fn run_policy(policy: Policy, processes: &[Process], config: &SimulationConfig) -> PolicyOutcome {
    let scheduler = policy.scheduler(config);
    let schedule = scheduler.schedule(processes);
    let kpi = ScheduleKpi::calculate(&schedule, processes.len());
    debug!(
        "{}: avg wait {:.2}, avg turnaround {:.2}, throughput {:.2}",
        policy, kpi.avg_waiting_time, kpi.avg_turnaround_time, kpi.throughput
    );

    PolicyOutcome {
        policy,
        title: scheduler.title().to_string(),
        schedule,
        kpi,
    }
}

/// Runs every policy in report order over the same table.
pub fn run_all(processes: &[Process], config: &SimulationConfig) -> Vec<PolicyOutcome> {
    Policy::ALL
        .iter()
        .map(|&policy| run_policy(policy, processes, config))
        .collect()
}
