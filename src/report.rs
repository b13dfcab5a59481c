//! Text and JSON rendering of policy outcomes.
//!
//! Text layout per policy:
//!
//! ```text
//! ----------------------------------------------
//!             First-come, first-serve
//! ----------------------------------------------
//! Gantt schedule
//! |   1    |   2    |
//! 0	5	8
//!
//! Schedule table
//! +----+----------+ ...
//! ```

use std::io::{self, Write};

use crate::models::{ScheduleRow, TimeSlice};
use crate::scheduler::{PolicyOutcome, ScheduleKpi};

/// Width of one Gantt cell.
const GANTT_CELL: usize = 8;

const HEADERS: [&str; 7] = [
    "ID",
    "PRIORITY",
    "BURST",
    "ARRIVAL",
    "WAIT",
    "TURNAROUND",
    "EXIT",
];

type Cells = [String; 7];

/// Writes the title banner.
pub fn write_title<W: Write>(w: &mut W, title: &str) -> io::Result<()> {
    let rule = "-".repeat(title.len() * 2);
    writeln!(w, "{rule}")?;
    writeln!(w, "{} {}", " ".repeat(title.len() / 2), title)?;
    writeln!(w, "{rule}")
}

/// Writes the Gantt chart: centered PIDs, then slice boundaries.
pub fn write_gantt<W: Write>(w: &mut W, timeline: &[TimeSlice]) -> io::Result<()> {
    writeln!(w, "Gantt schedule")?;
    write!(w, "|")?;
    for slice in timeline {
        let pid = slice.pid.to_string();
        let padding = " ".repeat(GANTT_CELL.saturating_sub(pid.len()) / 2);
        write!(w, "{padding}{pid}{padding}|")?;
    }
    writeln!(w)?;

    for (i, slice) in timeline.iter().enumerate() {
        write!(w, "{}\t", slice.start)?;
        if i + 1 == timeline.len() {
            write!(w, "{}", slice.stop)?;
        }
    }
    write!(w, "\n\n")
}

/// Writes the per-process table with the KPI footer.
pub fn write_schedule_table<W: Write>(
    w: &mut W,
    rows: &[ScheduleRow],
    kpi: &ScheduleKpi,
) -> io::Result<()> {
    writeln!(w, "Schedule table")?;

    let header: Cells = HEADERS.map(str::to_string);
    let body: Vec<Cells> = rows.iter().map(row_cells).collect();
    let footer = footer_cells(kpi);

    let mut widths = header.clone().map(|h| h.len());
    for cells in body.iter().chain(footer.iter()) {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.len());
        }
    }

    let border = border_line(&widths);
    writeln!(w, "{border}")?;
    write_cells(w, &header, &widths, Align::Center)?;
    writeln!(w, "{border}")?;
    for cells in &body {
        write_cells(w, cells, &widths, Align::Right)?;
    }
    writeln!(w, "{border}")?;
    for cells in &footer {
        write_cells(w, cells, &widths, Align::Center)?;
    }
    writeln!(w, "{border}")
}

/// Writes one full policy report: banner, Gantt chart and table.
pub fn write_outcome<W: Write>(w: &mut W, outcome: &PolicyOutcome) -> io::Result<()> {
    write_title(w, &outcome.title)?;
    write_gantt(w, &outcome.schedule.timeline)?;
    write_schedule_table(w, &outcome.schedule.rows, &outcome.kpi)
}

/// Writes every outcome as text, in order.
pub fn write_text_report<W: Write>(w: &mut W, outcomes: &[PolicyOutcome]) -> io::Result<()> {
    for outcome in outcomes {
        write_outcome(w, outcome)?;
    }
    Ok(())
}

/// Writes every outcome as pretty-printed JSON.
pub fn write_json_report<W: Write>(w: &mut W, outcomes: &[PolicyOutcome]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, outcomes)?;
    writeln!(w)
}

#[derive(Clone, Copy)]
enum Align {
    Right,
    Center,
}

fn row_cells(row: &ScheduleRow) -> Cells {
    [
        row.process_id,
        row.priority,
        row.burst,
        row.arrival_time,
        row.waiting_time,
        row.turnaround_time,
        row.completion_time,
    ]
    .map(|v| v.to_string())
}

fn footer_cells(kpi: &ScheduleKpi) -> [Cells; 2] {
    let blank = || String::new();
    [
        [
            blank(),
            blank(),
            blank(),
            blank(),
            "Average".to_string(),
            "Average".to_string(),
            "Throughput".to_string(),
        ],
        [
            blank(),
            blank(),
            blank(),
            blank(),
            format!("{:.2}", kpi.avg_waiting_time),
            format!("{:.2}", kpi.avg_turnaround_time),
            format!("{:.2}/t", kpi.throughput),
        ],
    ]
}

fn border_line(widths: &[usize; 7]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

fn write_cells<W: Write>(
    w: &mut W,
    cells: &Cells,
    widths: &[usize; 7],
    align: Align,
) -> io::Result<()> {
    write!(w, "|")?;
    for (cell, &width) in cells.iter().zip(widths) {
        match align {
            Align::Right => write!(w, " {cell:>width$} |")?,
            Align::Center => write!(w, " {cell:^width$} |")?,
        }
    }
    writeln!(w)
}
