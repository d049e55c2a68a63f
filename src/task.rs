use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};
use csv::StringRecord;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{GanttError, GanttResult};

/// One data line of the input file, fields kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    pub session: String,
    pub task: String,
    pub start: String,
    pub duration: String,
    pub label: String,
}

impl TaskRow {
    pub fn new(
        session: impl Into<String>,
        task: impl Into<String>,
        start: impl Into<String>,
        duration: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            session: session.into(),
            task: task.into(),
            start: start.into(),
            duration: duration.into(),
            label: label.into(),
        }
    }

    /// Fields are positional; anything past the fifth is ignored.
    pub fn from_record(record: &StringRecord, line: usize) -> GanttResult<Self> {
        if record.len() < 5 {
            return Err(GanttError::MalformedRow {
                line,
                fields: record.len(),
            });
        }
        Ok(Self::new(
            &record[0],
            &record[1],
            &record[2],
            &record[3],
            &record[4],
        ))
    }
}

/// How a row's start date is specified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartSpec {
    On(NaiveDate),
    After(String),
}

impl StartSpec {
    pub fn parse(value: &str, line: usize) -> GanttResult<Self> {
        let mut tokens = value.split_whitespace();
        if tokens.next() == Some("after") {
            return match tokens.next() {
                Some(label) => Ok(StartSpec::After(label.to_string())),
                None => Err(GanttError::MalformedStart {
                    line,
                    value: value.to_string(),
                }),
            };
        }
        parse_date(value)
            .map(StartSpec::On)
            .ok_or_else(|| GanttError::DateParse {
                line,
                value: value.to_string(),
            })
    }
}

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%d.%m.%Y",
    "%d %b %Y",
    "%d %B %Y",
    "%b %d %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%B %d, %Y",
    "%Y%m%d",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

/// Try several common date layouts. Timestamps are truncated to their date.
///
/// Slash-separated dates without a leading year are read month-first.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let s = value.trim();
    if s.is_empty() {
        return None;
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.date_naive())
}

/// A row after its dates have been resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTask {
    pub session: String,
    pub task: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// A fully derived row of the schedule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub session: String,
    pub task: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub start_num: i64,
    pub end_num: i64,
    pub days_start_to_end: i64,
    pub color: String,
}

impl ScheduledTask {
    pub fn from_dataframe_row(df: &DataFrame, row_idx: usize) -> PolarsResult<Self> {
        let session = df
            .column("Session")?
            .str()?
            .get(row_idx)
            .unwrap_or("")
            .to_string();
        let task = df
            .column("Task")?
            .str()?
            .get(row_idx)
            .unwrap_or("")
            .to_string();
        let start = df
            .column("Start")?
            .date()?
            .get(row_idx)
            .map(date_from_i32)
            .ok_or_else(|| PolarsError::ComputeError("schedule row missing Start".into()))?;
        let end = df
            .column("End")?
            .date()?
            .get(row_idx)
            .map(date_from_i32)
            .ok_or_else(|| PolarsError::ComputeError("schedule row missing End".into()))?;

        Ok(Self {
            session,
            task,
            start,
            end,
            start_num: df.column("start_num")?.i64()?.get(row_idx).unwrap_or(0),
            end_num: df.column("end_num")?.i64()?.get(row_idx).unwrap_or(0),
            days_start_to_end: df
                .column("days_start_to_end")?
                .i64()?
                .get(row_idx)
                .unwrap_or(0),
            color: df
                .column("color")?
                .str()?
                .get(row_idx)
                .unwrap_or("")
                .to_string(),
        })
    }
}

fn epoch() -> NaiveDate {
    NaiveDate::default()
}

/// Days since 1970-01-01, the physical representation of a polars `Date`.
pub(crate) fn date_to_i32(date: NaiveDate) -> i32 {
    (date - epoch()).num_days() as i32
}

pub(crate) fn date_from_i32(days: i32) -> NaiveDate {
    epoch() + Duration::days(days as i64)
}
