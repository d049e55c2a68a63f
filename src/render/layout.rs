use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use crate::config::ChartConfig;
use crate::error::GanttResult;
use crate::schedule::GanttSchedule;

/// Vertical offset of the first session band below row 0.
pub const BAND_ORIGIN: f64 = -0.6;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub task: String,
    pub session: String,
    pub row: usize,
    pub left: i64,
    pub width: i64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarLabel {
    pub text: String,
    pub x: i64,
    pub row: usize,
}

/// Shaded horizontal strip behind one session's rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionBand {
    pub session: String,
    pub y_start: f64,
    pub y_end: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub position: i64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub session: String,
    pub color: String,
}

/// Backend-neutral drawing primitives for a schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub title: String,
    pub dpi: u32,
    pub bars: Vec<Bar>,
    pub labels: Vec<BarLabel>,
    pub bands: Vec<SessionBand>,
    pub ticks: Vec<Tick>,
    pub x_limit: (i64, i64),
    pub legend: Vec<LegendEntry>,
}

impl ChartLayout {
    pub fn from_schedule(schedule: &GanttSchedule, config: &ChartConfig) -> GanttResult<Self> {
        let tasks = schedule.tasks()?;

        let bars: Vec<Bar> = tasks
            .iter()
            .enumerate()
            .map(|(row, t)| Bar {
                task: t.task.clone(),
                session: t.session.clone(),
                row,
                left: t.start_num,
                width: t.days_start_to_end,
                color: t.color.clone(),
            })
            .collect();

        let labels = tasks
            .iter()
            .enumerate()
            .map(|(row, t)| BarLabel {
                text: t.task.clone(),
                x: t.start_num + t.days_start_to_end.div_euclid(2),
                row,
            })
            .collect();

        // Every other session is shaded, starting with the second.
        let mut bands = Vec::new();
        let mut y = BAND_ORIGIN;
        for (idx, session) in schedule.sessions().iter().enumerate() {
            let count = tasks.iter().filter(|t| &t.session == session).count() as f64;
            if idx % 2 == 1 {
                bands.push(SessionBand {
                    session: session.clone(),
                    y_start: y,
                    y_end: y + count,
                });
            }
            y += count;
        }

        let ticks = match (schedule.project_start()?, schedule.project_end()?) {
            (Some(start), Some(end)) => month_ticks(start, end, config.tick_step()),
            _ => Vec::new(),
        };

        let x_max = tasks.iter().map(|t| t.end_num).max().unwrap_or(0);

        let colors = schedule.color_map();
        let legend = schedule
            .sessions()
            .iter()
            .map(|session| LegendEntry {
                session: session.clone(),
                color: colors[session].clone(),
            })
            .collect();

        Ok(Self {
            title: config.title.clone(),
            dpi: config.dpi(),
            bars,
            labels,
            bands,
            ticks,
            x_limit: (0, x_max),
            legend,
        })
    }
}

/// One tick per first-of-month in `[start, end]`, positioned in days from
/// `start`, keeping every `step`-th.
pub fn month_ticks(start: NaiveDate, end: NaiveDate, step: usize) -> Vec<Tick> {
    let mut ticks = Vec::new();
    let first = match start.with_day(1) {
        Some(day) if day == start => Some(day),
        Some(day) => day.checked_add_months(Months::new(1)),
        None => None,
    };
    let mut next = first;
    while let Some(day) = next {
        if day > end {
            break;
        }
        ticks.push(Tick {
            position: (day - start).num_days(),
            label: day.format("%m/%y").to_string(),
        });
        next = day.checked_add_months(Months::new(1));
    }
    ticks.into_iter().step_by(step.max(1)).collect()
}
