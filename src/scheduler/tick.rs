//! Tick-driven simulation engine shared by the SJF variants.
//!
//! # Algorithm
//!
//! 1. The horizon starts at the total burst of the table.
//! 2. At each tick a [`SelectionRule`] picks an eligible process.
//! 3. The chosen process loses one tick of remaining burst. When nothing is
//!    eligible the clock jumps to the next arrival and the horizon grows by
//!    the idle span, exactly as if each idle tick had been stepped.
//! 4. A process finishing at the end of tick `t` completes at `t + 1`.
//! 5. Consecutive ticks of the same process coalesce into one slice; idle
//!    ticks produce no slice.
//!
//! # Complexity
//!
//! O(B * n) for total burst B and n processes; idle spans cost O(n) each.
//!
//! Selection is re-evaluated every tick, so a newly arrived shorter job
//! displaces the running one (shortest-remaining-time behaviour).

use log::trace;

use super::selection::{SelectionRule, TickContext};
use crate::models::{total_burst, Process, Schedule, ScheduleRow, TimeSlice};

/// Open slice: table index of the running process and its start tick.
#[derive(Debug, Clone, Copy)]
struct Running {
    index: usize,
    start: i64,
}

/// Runs the tick loop with the given selection rule.
pub(crate) fn simulate<R>(processes: &[Process], rule: &R) -> Schedule
where
    R: SelectionRule + ?Sized,
{
    let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_duration.max(0)).collect();
    let mut rows: Vec<Option<ScheduleRow>> = vec![None; processes.len()];
    let mut schedule = Schedule::new();

    let mut horizon = total_burst(processes);
    let mut running: Option<Running> = None;
    let mut tick: i64 = 0;

    while tick < horizon {
        let selected = rule.select(processes, &TickContext::new(tick, &remaining));

        if running.map(|r| r.index) != selected {
            if let Some(r) = running.take() {
                close_slice(&mut schedule, processes, r, tick);
            }
            running = selected.map(|index| Running { index, start: tick });
        }

        let Some(index) = selected else {
            let resume = next_arrival(processes, &remaining, tick).unwrap_or(tick + 1);
            trace!("{}: idle over [{}, {})", rule.name(), tick, resume);
            horizon = horizon.saturating_add(resume - tick);
            tick = resume;
            continue;
        };

        tick += 1;
        remaining[index] -= 1;
        if remaining[index] == 0 {
            let process = &processes[index];
            rows[index] = Some(ScheduleRow::finished(process, process.burst_duration, tick));
            schedule.last_completion = tick;
            trace!("{}: pid={} completed at {}", rule.name(), process.id, tick);
        }
    }

    if let Some(r) = running {
        close_slice(&mut schedule, processes, r, tick);
    }

    schedule.rows = rows.into_iter().flatten().collect();
    schedule
}

/// Earliest arrival after `now` among processes with work left.
fn next_arrival(processes: &[Process], remaining: &[i64], now: i64) -> Option<i64> {
    processes
        .iter()
        .zip(remaining)
        .filter(|(p, left)| **left > 0 && p.arrival_time > now)
        .map(|(p, _)| p.arrival_time)
        .min()
}

fn close_slice(schedule: &mut Schedule, processes: &[Process], running: Running, stop: i64) {
    let pid = processes[running.index].id;
    trace!("slice pid={} [{}, {})", pid, running.start, stop);
    schedule.add_slice(TimeSlice::new(pid, running.start, stop));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::selection::ShortestRemaining;

    #[test]
    fn test_single_process_one_slice() {
        let schedule = simulate(&[Process::new(1, 0, 4)], &ShortestRemaining);
        assert_eq!(schedule.timeline, vec![TimeSlice::new(1, 0, 4)]);
        assert_eq!(schedule.rows[0].completion_time, 4);
        assert_eq!(schedule.rows[0].waiting_time, 0);
    }

    #[test]
    fn test_idle_ticks_extend_horizon() {
        // Nothing eligible until t=3: three idle ticks, no idle slice
        let schedule = simulate(&[Process::new(1, 3, 2)], &ShortestRemaining);
        assert_eq!(schedule.timeline, vec![TimeSlice::new(1, 3, 5)]);
        assert_eq!(schedule.makespan(), 2 + 3);
        assert_eq!(schedule.rows[0].waiting_time, 0);
        assert_eq!(schedule.last_completion, 5);
    }

    #[test]
    fn test_idle_gap_between_processes() {
        let table = vec![Process::new(1, 0, 2), Process::new(2, 5, 1)];
        let schedule = simulate(&table, &ShortestRemaining);
        assert_eq!(
            schedule.timeline,
            vec![TimeSlice::new(1, 0, 2), TimeSlice::new(2, 5, 6)]
        );
        assert_eq!(schedule.busy_time(), 3);
    }

    #[test]
    fn test_switch_on_final_tick() {
        // Equal bursts: the later tie runs first, the other finishes on the
        // last tick and still gets its own slice.
        let table = vec![Process::new(1, 0, 1), Process::new(2, 0, 1)];
        let schedule = simulate(&table, &ShortestRemaining);
        assert_eq!(
            schedule.timeline,
            vec![TimeSlice::new(2, 0, 1), TimeSlice::new(1, 1, 2)]
        );
    }

    #[test]
    fn test_non_positive_burst_never_runs() {
        let table = vec![Process::new(1, 0, 0), Process::new(2, 0, 2)];
        let schedule = simulate(&table, &ShortestRemaining);
        assert_eq!(schedule.timeline, vec![TimeSlice::new(2, 0, 2)]);
        assert_eq!(schedule.row_count(), 1);
    }

    #[test]
    fn test_idle_span_skipped_to_next_arrival() {
        let start = 1_000_000_000_000;
        let schedule = simulate(&[Process::new(1, start, 2)], &ShortestRemaining);
        assert_eq!(schedule.timeline, vec![TimeSlice::new(1, start, start + 2)]);
        assert_eq!(schedule.rows[0].completion_time, start + 2);
        assert_eq!(schedule.makespan(), start + 2);
    }

    #[test]
    fn test_idle_jump_lands_on_arrival_mid_run() {
        // Idle from 2 to 7, then both late arrivals compete
        let table = vec![
            Process::new(1, 0, 2),
            Process::new(2, 7, 3),
            Process::new(3, 9, 1),
        ];
        let schedule = simulate(&table, &ShortestRemaining);
        assert_eq!(
            schedule.timeline,
            vec![
                TimeSlice::new(1, 0, 2),
                TimeSlice::new(2, 7, 9),
                TimeSlice::new(3, 9, 10),
                TimeSlice::new(2, 10, 11),
            ]
        );
        assert_eq!(schedule.last_completion, 11);
    }

    #[test]
    fn test_empty_table() {
        let schedule = simulate(&[], &ShortestRemaining);
        assert!(schedule.timeline.is_empty());
        assert_eq!(schedule.last_completion, 0);
    }
}
