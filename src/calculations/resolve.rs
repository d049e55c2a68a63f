use tracing::{debug, trace};

use crate::duration::parse_span;
use crate::error::{GanttError, GanttResult};
use crate::labels::LabelTable;
use crate::task::{ResolvedTask, StartSpec, TaskRow};

/// Resolve a single row against the labels defined so far.
///
/// The table is taken by value and handed back with this row's label added
/// (unless it was already defined), so each step of a pass is a pure
/// `(row, labels) -> (resolved, labels)` transition. `line` is only used for
/// error reporting.
pub fn resolve_row(
    row: &TaskRow,
    line: usize,
    mut labels: LabelTable,
) -> GanttResult<(ResolvedTask, LabelTable)> {
    let start = match StartSpec::parse(&row.start, line)? {
        StartSpec::On(date) => date,
        StartSpec::After(label) => {
            labels
                .get(&label)
                .ok_or(GanttError::UnresolvedLabel { line, label })?
        }
    };

    let span = parse_span(&row.duration).map_err(|source| GanttError::DurationParse {
        line,
        token: row.duration.clone(),
        source,
    })?;
    let end = span
        .end_from(start)
        .ok_or(GanttError::DateOverflow { line })?;

    if labels.record(&row.label, end) {
        debug!(line, label = row.label.trim(), %end, "label defined");
    } else {
        trace!(line, label = row.label.trim(), "label already defined, keeping first");
    }

    debug!(line, session = %row.session, task = %row.task, %start, %end, "row resolved");
    Ok((
        ResolvedTask {
            session: row.session.clone(),
            task: row.task.clone(),
            start,
            end,
        },
        labels,
    ))
}

/// Fold [`resolve_row`] over `rows` in order, stopping at the first error.
///
/// Rows must be processed sequentially: a row may only reference labels of
/// strictly earlier rows.
pub fn resolve_rows(rows: &[TaskRow]) -> GanttResult<(Vec<ResolvedTask>, LabelTable)> {
    rows.iter().enumerate().try_fold(
        (Vec::with_capacity(rows.len()), LabelTable::new()),
        |(mut resolved, labels), (idx, row)| {
            let (task, labels) = resolve_row(row, idx + 1, labels)?;
            resolved.push(task);
            Ok((resolved, labels))
        },
    )
}
