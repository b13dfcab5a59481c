//! Batch CPU-scheduling simulator.
//!
//! Given a fixed table of processes (arrival, burst, priority), computes
//! the schedule each classic policy would produce: a Gantt timeline plus
//! per-process waiting, turnaround and completion times and aggregate
//! averages and throughput.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `TimeSlice`, `ScheduleRow`, `Schedule`
//! - **`scheduler`**: FCFS, SJF, priority SJF and round-robin, KPIs, batch runner
//! - **`input`**: Comma-separated process table loader
//! - **`validation`**: Process table integrity checks
//! - **`report`**: Text (banner, Gantt, table) and JSON rendering
//! - **`workload`**: Seeded random process tables
//!
//! # Example
//!
//! ```
//! use cpu_schedule::models::Process;
//! use cpu_schedule::scheduler::{run_all, SimulationConfig};
//!
//! let table = vec![Process::new(1, 0, 5), Process::new(2, 2, 3)];
//! let outcomes = run_all(&table, &SimulationConfig::default());
//! assert_eq!(outcomes.len(), 4);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod input;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;
