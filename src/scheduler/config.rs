//! Simulation parameters.

use serde::{Deserialize, Serialize};

/// Default round-robin time quantum (ticks).
pub const DEFAULT_QUANTUM: i64 = 3;

/// Default upper bound on round-robin passes over the table.
pub const DEFAULT_MAX_ROUND_ROBIN_PASSES: usize = 1000;

/// Tunable parameters shared by all policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Round-robin time quantum (ticks). Must be positive.
    pub quantum: i64,
    /// Maximum number of round-robin passes before the run is cut short.
    pub max_round_robin_passes: usize,
}

impl SimulationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            max_round_robin_passes: DEFAULT_MAX_ROUND_ROBIN_PASSES,
        }
    }

    /// Sets the round-robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the round-robin pass cap.
    pub fn with_max_round_robin_passes(mut self, passes: usize) -> Self {
        self.max_round_robin_passes = passes;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}
