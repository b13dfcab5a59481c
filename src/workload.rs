//! Seeded random process tables.
//!
//! Generates reproducible workloads for demos and property tests. Tables
//! come out sorted by arrival, which is what FCFS assumes of its input.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Shape of a generated workload. All ranges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Number of processes.
    pub count: usize,
    /// Latest possible arrival tick.
    pub max_arrival: i64,
    /// Shortest burst.
    pub min_burst: i64,
    /// Longest burst.
    pub max_burst: i64,
    /// Largest priority value (priorities start at 0).
    pub max_priority: i64,
}

impl WorkloadConfig {
    /// Creates a config for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 20,
            min_burst: 1,
            max_burst: 10,
            max_priority: 5,
        }
    }

    /// Sets the latest arrival tick.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst range.
    pub fn with_burst_range(mut self, min_burst: i64, max_burst: i64) -> Self {
        self.min_burst = min_burst;
        self.max_burst = max_burst;
        self
    }

    /// Sets the largest priority value.
    pub fn with_max_priority(mut self, max_priority: i64) -> Self {
        self.max_priority = max_priority;
        self
    }
}

/// Generates a process table.
///
/// IDs run from 1 to `count` in arrival order. Degenerate ranges are
/// clamped so every burst is at least 1 and no arrival is negative.
pub fn generate(config: &WorkloadConfig, seed: u64) -> Vec<Process> {
    let mut rng = StdRng::seed_from_u64(seed);

    let max_arrival = config.max_arrival.max(0);
    let min_burst = config.min_burst.max(1);
    let max_burst = config.max_burst.max(min_burst);
    let max_priority = config.max_priority.max(0);

    let mut draws: Vec<(i64, i64, i64)> = (0..config.count)
        .map(|_| {
            (
                rng.random_range(0..=max_arrival),
                rng.random_range(min_burst..=max_burst),
                rng.random_range(0..=max_priority),
            )
        })
        .collect();
    draws.sort_by_key(|&(arrival, _, _)| arrival);

    draws
        .into_iter()
        .zip(1..)
        .map(|((arrival, burst, priority), id)| {
            Process::new(id, arrival, burst).with_priority(priority)
        })
        .collect()
}
