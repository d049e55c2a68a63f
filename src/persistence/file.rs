use chrono::NaiveDate;
use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::error::{GanttError, GanttResult};
use crate::schedule::GanttSchedule;
use crate::task::{ScheduledTask, TaskRow};

/// Read `Session,Task,Start,Duration,Label` rows. The first line is a header
/// and is skipped whatever it contains.
pub fn read_task_rows<R: Read>(reader: R) -> GanttResult<Vec<TaskRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        rows.push(TaskRow::from_record(&record, idx + 1)?);
    }
    Ok(rows)
}

pub fn load_task_rows<P: AsRef<Path>>(path: P) -> GanttResult<Vec<TaskRow>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(GanttError::MissingFile {
            path: path.to_path_buf(),
        });
    }
    let rows = read_task_rows(File::open(path)?)?;
    debug!(path = %path.display(), rows = rows.len(), "input loaded");
    Ok(rows)
}

#[derive(Serialize)]
struct ScheduleCsvRecord {
    #[serde(rename = "Session")]
    session: String,
    #[serde(rename = "Task")]
    task: String,
    #[serde(rename = "Start")]
    start: String,
    #[serde(rename = "End")]
    end: String,
    start_num: i64,
    end_num: i64,
    days_start_to_end: i64,
    color: String,
}

impl From<ScheduledTask> for ScheduleCsvRecord {
    fn from(task: ScheduledTask) -> Self {
        Self {
            session: task.session,
            task: task.task,
            start: format_date(task.start),
            end: format_date(task.end),
            start_num: task.start_num,
            end_num: task.end_num,
            days_start_to_end: task.days_start_to_end,
            color: task.color,
        }
    }
}

pub fn save_schedule_to_csv<P: AsRef<Path>>(
    schedule: &GanttSchedule,
    path: P,
) -> GanttResult<()> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    for task in schedule.tasks()? {
        writer.serialize(ScheduleCsvRecord::from(task))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn save_schedule_to_json<P: AsRef<Path>>(
    schedule: &GanttSchedule,
    path: P,
) -> GanttResult<()> {
    let tasks = schedule.tasks()?;
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &tasks)?;
    Ok(())
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
