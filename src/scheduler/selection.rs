//! Per-tick selection rules for the tick-driven schedulers.
//!
//! At every tick the engine asks a rule which eligible process runs next.
//! A process is eligible when it has arrived and still has remaining work.
//! Rules scan the table in order and keep a running best candidate.

use std::fmt::Debug;

use crate::models::Process;

/// Runtime state handed to a selection rule at one tick.
#[derive(Debug, Clone, Copy)]
pub struct TickContext<'a> {
    /// Current tick.
    pub now: i64,
    /// Remaining burst per process (same indexing as the table).
    pub remaining: &'a [i64],
}

impl<'a> TickContext<'a> {
    /// Creates a context at the given tick.
    pub fn new(now: i64, remaining: &'a [i64]) -> Self {
        Self { now, remaining }
    }

    /// Whether process `index` has arrived and still needs CPU.
    #[inline]
    pub fn is_eligible(&self, index: usize, process: &Process) -> bool {
        self.remaining[index] > 0 && process.has_arrived(self.now)
    }
}

/// Chooses the process that runs for the current tick.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SRT").
    fn name(&self) -> &'static str;

    /// Returns the table index of the selected process, or `None` when
    /// no process is eligible (idle tick).
    fn select(&self, processes: &[Process], context: &TickContext<'_>) -> Option<usize>;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Shortest remaining burst first.
///
/// Ties go to the candidate encountered last in table order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn select(&self, processes: &[Process], context: &TickContext<'_>) -> Option<usize> {
        let mut best: Option<(usize, i64)> = None;

        for (index, process) in processes.iter().enumerate() {
            if !context.is_eligible(index, process) {
                continue;
            }
            let remaining = context.remaining[index];
            if best.map_or(true, |(_, best_remaining)| remaining <= best_remaining) {
                best = Some((index, remaining));
            }
        }

        best.map(|(index, _)| index)
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time"
    }
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    index: usize,
    priority: i64,
    /// Burst a later candidate must undercut to take over.
    to_beat: i64,
}

/// Lower priority value first, with burst as a second chance.
///
/// A candidate replaces the running best when its priority is strictly
/// lower; the new best must then be undercut against its *full* burst.
/// Failing that, a candidate still replaces the best when its remaining
/// burst is strictly smaller than the value to beat, whatever its priority,
/// and its remaining burst becomes the new value to beat. The second branch
/// can therefore override priority order, including against a partly run
/// higher-priority process.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityThenRemaining;

impl SelectionRule for PriorityThenRemaining {
    fn name(&self) -> &'static str {
        "PRIO-SRT"
    }

    fn select(&self, processes: &[Process], context: &TickContext<'_>) -> Option<usize> {
        let mut best: Option<Candidate> = None;

        for (index, process) in processes.iter().enumerate() {
            if !context.is_eligible(index, process) {
                continue;
            }
            let remaining = context.remaining[index];
            let to_beat = match best {
                None => Some(process.burst_duration),
                Some(b) if process.priority < b.priority => Some(process.burst_duration),
                Some(b) if remaining < b.to_beat => Some(remaining),
                Some(_) => None,
            };
            if let Some(to_beat) = to_beat {
                best = Some(Candidate {
                    index,
                    priority: process.priority,
                    to_beat,
                });
            }
        }

        best.map(|c| c.index)
    }

    fn description(&self) -> &'static str {
        "Priority, then Shortest Remaining Time"
    }
}
