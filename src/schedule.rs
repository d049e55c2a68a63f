use chrono::NaiveDate;
use polars::prelude::PlSmallStr;
use polars::prelude::*;
use std::collections::HashMap;
use tracing::info;

use crate::calculations::{day_offsets, project_start, resolve_rows};
use crate::error::GanttResult;
use crate::palette::{Palette, distinct_sessions};
use crate::task::{ResolvedTask, ScheduledTask, TaskRow, date_from_i32, date_to_i32};

/// The resolved, plot-ready task table.
///
/// Columns: `Session, Task, Start, End, start_num, end_num,
/// days_start_to_end, color`, one row per input row in input order.
#[derive(Debug, Clone)]
pub struct GanttSchedule {
    df: DataFrame,
    sessions: Vec<String>,
    palette: Palette,
}

impl GanttSchedule {
    pub fn build(rows: &[TaskRow]) -> GanttResult<Self> {
        Self::build_with_palette(rows, Palette::default())
    }

    pub fn build_with_palette(rows: &[TaskRow], palette: Palette) -> GanttResult<Self> {
        let (resolved, labels) = resolve_rows(rows)?;
        let schedule = Self::from_resolved(&resolved, palette)?;
        info!(
            rows = schedule.len(),
            sessions = schedule.sessions.len(),
            labels = labels.len(),
            "schedule built"
        );
        Ok(schedule)
    }

    /// Derive offsets and colors for rows that are already resolved.
    pub fn from_resolved(resolved: &[ResolvedTask], palette: Palette) -> GanttResult<Self> {
        let sessions = distinct_sessions(resolved.iter().map(|t| t.session.as_str()));
        let Some(proj_start) = project_start(resolved) else {
            return Ok(Self {
                df: DataFrame::empty_with_schema(&Self::default_schema()),
                sessions,
                palette,
            });
        };
        let colors = palette.assign(&sessions);

        let height = resolved.len();
        let mut session_vals: Vec<&str> = Vec::with_capacity(height);
        let mut task_vals: Vec<&str> = Vec::with_capacity(height);
        let mut start_vals: Vec<i32> = Vec::with_capacity(height);
        let mut end_vals: Vec<i32> = Vec::with_capacity(height);
        let mut start_nums: Vec<i64> = Vec::with_capacity(height);
        let mut end_nums: Vec<i64> = Vec::with_capacity(height);
        let mut spans: Vec<i64> = Vec::with_capacity(height);
        let mut color_vals: Vec<&str> = Vec::with_capacity(height);

        for task in resolved {
            let offsets = day_offsets(task, proj_start);
            session_vals.push(task.session.as_str());
            task_vals.push(task.task.as_str());
            start_vals.push(date_to_i32(task.start));
            end_vals.push(date_to_i32(task.end));
            start_nums.push(offsets.start_num);
            end_nums.push(offsets.end_num);
            spans.push(offsets.days_start_to_end);
            color_vals.push(colors[&task.session].as_str());
        }

        let columns: Vec<Column> = vec![
            Series::new(PlSmallStr::from_static("Session"), session_vals).into_column(),
            Series::new(PlSmallStr::from_static("Task"), task_vals).into_column(),
            Series::new(PlSmallStr::from_static("Start"), start_vals)
                .cast(&DataType::Date)?
                .into_column(),
            Series::new(PlSmallStr::from_static("End"), end_vals)
                .cast(&DataType::Date)?
                .into_column(),
            Series::new(PlSmallStr::from_static("start_num"), start_nums).into_column(),
            Series::new(PlSmallStr::from_static("end_num"), end_nums).into_column(),
            Series::new(PlSmallStr::from_static("days_start_to_end"), spans).into_column(),
            Series::new(PlSmallStr::from_static("color"), color_vals).into_column(),
        ];

        Ok(Self {
            df: DataFrame::new(columns)?,
            sessions,
            palette,
        })
    }

    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    pub fn len(&self) -> usize {
        self.df.height()
    }

    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    /// Distinct sessions in order of first appearance.
    pub fn sessions(&self) -> &[String] {
        &self.sessions
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Recompute the session -> color mapping; identical to the `color` column.
    pub fn color_map(&self) -> HashMap<String, String> {
        self.palette.assign(&self.sessions)
    }

    pub fn tasks(&self) -> PolarsResult<Vec<ScheduledTask>> {
        (0..self.df.height())
            .map(|idx| ScheduledTask::from_dataframe_row(&self.df, idx))
            .collect()
    }

    /// Earliest `Start`, the zero point of `start_num`.
    pub fn project_start(&self) -> PolarsResult<Option<NaiveDate>> {
        let starts = self.df.column("Start")?.date()?;
        Ok((0..self.df.height())
            .filter_map(|idx| starts.get(idx))
            .min()
            .map(date_from_i32))
    }

    pub fn project_end(&self) -> PolarsResult<Option<NaiveDate>> {
        let ends = self.df.column("End")?.date()?;
        Ok((0..self.df.height())
            .filter_map(|idx| ends.get(idx))
            .max()
            .map(date_from_i32))
    }

    fn default_schema() -> Schema {
        Schema::from_iter(vec![
            Field::new("Session".into(), DataType::String),
            Field::new("Task".into(), DataType::String),
            Field::new("Start".into(), DataType::Date),
            Field::new("End".into(), DataType::Date),
            Field::new("start_num".into(), DataType::Int64),
            Field::new("end_num".into(), DataType::Int64),
            Field::new("days_start_to_end".into(), DataType::Int64),
            Field::new("color".into(), DataType::String),
        ])
    }
}
