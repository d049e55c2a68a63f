use chrono::NaiveDate;

use crate::task::ResolvedTask;

/// Plot coordinates of a row, in whole days from the project start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayOffsets {
    pub start_num: i64,
    pub end_num: i64,
    pub days_start_to_end: i64,
}

/// Earliest start over all rows.
pub fn project_start(tasks: &[ResolvedTask]) -> Option<NaiveDate> {
    tasks.iter().map(|t| t.start).min()
}

/// Latest end over all rows.
pub fn project_end(tasks: &[ResolvedTask]) -> Option<NaiveDate> {
    tasks.iter().map(|t| t.end).max()
}

pub fn day_offsets(task: &ResolvedTask, project_start: NaiveDate) -> DayOffsets {
    let start_num = (task.start - project_start).num_days();
    let end_num = (task.end - project_start).num_days();
    DayOffsets {
        start_num,
        end_num,
        days_start_to_end: end_num - start_num,
    }
}
