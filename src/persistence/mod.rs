use polars::prelude::PlSmallStr;
use polars::prelude::*;

use crate::task::TaskRow;

pub mod file;

pub use file::{load_task_rows, read_task_rows, save_schedule_to_csv, save_schedule_to_json};

/// Raw input rows as a table, with the input file's column names.
pub fn input_dataframe(rows: &[TaskRow]) -> PolarsResult<DataFrame> {
    DataFrame::new(vec![
        string_column("Session", rows.iter().map(|r| r.session.as_str()).collect()),
        string_column("Task", rows.iter().map(|r| r.task.as_str()).collect()),
        string_column("Start", rows.iter().map(|r| r.start.as_str()).collect()),
        string_column("Duration", rows.iter().map(|r| r.duration.as_str()).collect()),
        string_column("Label", rows.iter().map(|r| r.label.as_str()).collect()),
    ])
}

fn string_column(name: &'static str, values: Vec<&str>) -> Column {
    Series::new(PlSmallStr::from_static(name), values).into_column()
}
