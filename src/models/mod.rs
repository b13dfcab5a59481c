//! CPU-scheduling domain models.
//!
//! Provides the data types shared by every policy: the input process
//! table and the simulation result.
//!
//! | Type | Meaning |
//! |------|---------|
//! | Process | A job with arrival, burst and priority |
//! | TimeSlice | One contiguous run of a process on the CPU |
//! | ScheduleRow | Metrics for one finished process |
//! | Schedule | Timeline + rows produced by one policy |

mod process;
mod schedule;

pub use process::{total_burst, Process, ProcessId};
pub use schedule::{Schedule, ScheduleRow, TimeSlice};
