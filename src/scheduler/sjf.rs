//! Shortest-job-first schedulers.
//!
//! Both variants run on the tick engine and differ only in the rule used
//! to pick a process each tick:
//!
//! | Scheduler | Rule |
//! |-----------|------|
//! | `SjfScheduler` | smallest remaining burst, last tie wins |
//! | `PrioritySjfScheduler` | lower priority value, else a remaining burst that undercuts the current pick |

use log::debug;

use super::selection::{PriorityThenRemaining, SelectionRule, ShortestRemaining};
use super::{tick, CpuScheduler};
use crate::models::{Process, Schedule};

/// Shortest-job-first, re-evaluated every tick.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::{CpuScheduler, SjfScheduler};
///
/// let table = vec![Process::new(1, 0, 6), Process::new(2, 1, 2)];
/// let schedule = SjfScheduler.schedule(&table);
/// // Process 2 arrives shorter and displaces process 1
/// assert_eq!(schedule.timeline.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SjfScheduler;

impl CpuScheduler for SjfScheduler {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn title(&self) -> &'static str {
        "Shortest-job-first"
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        run(self.name(), processes, &ShortestRemaining)
    }
}

/// Priority-first shortest-job-first, re-evaluated every tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrioritySjfScheduler;

impl CpuScheduler for PrioritySjfScheduler {
    fn name(&self) -> &'static str {
        "SJF-PRIORITY"
    }

    fn title(&self) -> &'static str {
        "Priority"
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        run(self.name(), processes, &PriorityThenRemaining)
    }
}

fn run<R: SelectionRule>(name: &str, processes: &[Process], rule: &R) -> Schedule {
    let schedule = tick::simulate(processes, rule);
    debug!(
        "{} ({}): {} slices, makespan {}",
        name,
        rule.description(),
        schedule.timeline.len(),
        schedule.makespan()
    );
    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeSlice;

    #[test]
    fn test_sjf_shorter_arrival_preempts() {
        let table = vec![Process::new(1, 0, 6), Process::new(2, 1, 2)];
        let schedule = SjfScheduler.schedule(&table);
        assert_eq!(
            schedule.timeline,
            vec![
                TimeSlice::new(1, 0, 1),
                TimeSlice::new(2, 1, 3),
                TimeSlice::new(1, 3, 8),
            ]
        );
        let p1 = schedule.row_for_process(1).unwrap();
        assert_eq!(p1.completion_time, 8);
        assert_eq!(p1.waiting_time, 2);
        let p2 = schedule.row_for_process(2).unwrap();
        assert_eq!(p2.completion_time, 3);
        assert_eq!(p2.waiting_time, 0);
        assert_eq!(schedule.last_completion, 8);
    }

    #[test]
    fn test_sjf_running_job_kept_against_longer_arrival() {
        let table = vec![Process::new(1, 0, 3), Process::new(2, 1, 5)];
        let schedule = SjfScheduler.schedule(&table);
        assert_eq!(
            schedule.timeline,
            vec![TimeSlice::new(1, 0, 3), TimeSlice::new(2, 3, 8)]
        );
    }

    #[test]
    fn test_sjf_rows_in_table_order() {
        let table = vec![
            Process::new(1, 0, 8),
            Process::new(2, 0, 4),
            Process::new(3, 0, 1),
        ];
        let schedule = SjfScheduler.schedule(&table);
        let ids: Vec<i64> = schedule.rows.iter().map(|r| r.process_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        // Completion order was 3, 2, 1
        assert_eq!(schedule.row_for_process(3).unwrap().completion_time, 1);
        assert_eq!(schedule.row_for_process(2).unwrap().completion_time, 5);
        assert_eq!(schedule.row_for_process(1).unwrap().completion_time, 13);
    }

    #[test]
    fn test_sjf_late_first_arrival() {
        let table = vec![Process::new(1, 2, 3), Process::new(2, 4, 1)];
        let schedule = SjfScheduler.schedule(&table);
        // Two idle ticks up front; horizon 4 + 2
        assert_eq!(schedule.makespan(), 6);
        assert_eq!(schedule.timeline.first().unwrap().start, 2);
        assert_eq!(schedule.busy_time(), 4);
    }

    #[test]
    fn test_priority_lower_value_runs_first() {
        let table = vec![
            Process::new(1, 0, 2).with_priority(3),
            Process::new(2, 0, 5).with_priority(1),
        ];
        let schedule = PrioritySjfScheduler.schedule(&table);
        assert_eq!(
            schedule.timeline,
            vec![TimeSlice::new(2, 0, 5), TimeSlice::new(1, 5, 7)]
        );
    }

    #[test]
    fn test_priority_tie_uses_shorter_burst() {
        let table = vec![
            Process::new(1, 0, 5).with_priority(2),
            Process::new(2, 0, 2).with_priority(2),
        ];
        let schedule = PrioritySjfScheduler.schedule(&table);
        assert_eq!(schedule.timeline[0], TimeSlice::new(2, 0, 2));
        assert_eq!(schedule.row_for_process(1).unwrap().waiting_time, 2);
    }

    #[test]
    fn test_priority_default_zero_behaves_like_srt() {
        let table = vec![Process::new(1, 0, 6), Process::new(2, 1, 2)];
        let plain = SjfScheduler.schedule(&table);
        let prio = PrioritySjfScheduler.schedule(&table);
        assert_eq!(plain.timeline, prio.timeline);
        assert_eq!(plain.rows, prio.rows);
    }

    #[test]
    fn test_priority_idle_handling() {
        let table = vec![Process::new(1, 3, 2).with_priority(1)];
        let schedule = PrioritySjfScheduler.schedule(&table);
        assert_eq!(schedule.timeline, vec![TimeSlice::new(1, 3, 5)]);
    }

    #[test]
    fn test_priority_partly_run_job_yields_to_shorter_arrival() {
        // At t=5 process 1 still leads on priority, but it is defended by
        // its full burst of 10, which the 7-tick arrival undercuts.
        let table = vec![
            Process::new(1, 0, 10).with_priority(1),
            Process::new(2, 5, 7).with_priority(2),
        ];
        let schedule = PrioritySjfScheduler.schedule(&table);
        assert_eq!(
            schedule.timeline,
            vec![
                TimeSlice::new(1, 0, 5),
                TimeSlice::new(2, 5, 12),
                TimeSlice::new(1, 12, 17),
            ]
        );
        assert_eq!(schedule.row_for_process(2).unwrap().completion_time, 12);
        assert_eq!(schedule.row_for_process(2).unwrap().waiting_time, 0);
        assert_eq!(schedule.row_for_process(1).unwrap().completion_time, 17);
        assert_eq!(schedule.row_for_process(1).unwrap().waiting_time, 7);
    }

    #[test]
    fn test_names() {
        assert_eq!(SjfScheduler.title(), "Shortest-job-first");
        assert_eq!(PrioritySjfScheduler.title(), "Priority");
    }
}
