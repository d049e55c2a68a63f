use chrono::NaiveDate;
use gantt_tool::calculations::{resolve_row, resolve_rows};
use gantt_tool::{GanttError, GanttSchedule, LabelTable, SpanError, TaskRow};

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn absolute_start_adds_duration() {
    let row = TaskRow::new("A", "Design", "2023-01-01", "5d", "L1");
    let (task, labels) = resolve_row(&row, 1, LabelTable::new()).unwrap();
    assert_eq!(task.session, "A");
    assert_eq!(task.task, "Design");
    assert_eq!(task.start, d(2023, 1, 1));
    assert_eq!(task.end, d(2023, 1, 6));
    assert_eq!(labels.get("L1"), Some(d(2023, 1, 6)));
}

#[test]
fn after_reference_starts_at_label_end() {
    let rows = vec![
        TaskRow::new("A", "Design", "2023-01-01", "5d", "L1"),
        TaskRow::new("A", "Review", "after L1", "2d", "L2"),
    ];
    let (resolved, labels) = resolve_rows(&rows).unwrap();
    assert_eq!(resolved[0].start, d(2023, 1, 1));
    assert_eq!(resolved[0].end, d(2023, 1, 6));
    assert_eq!(resolved[1].start, d(2023, 1, 6));
    assert_eq!(resolved[1].end, d(2023, 1, 8));
    assert_eq!(labels.get("L2"), Some(d(2023, 1, 8)));
}

#[test]
fn after_reference_tolerates_surrounding_whitespace() {
    let rows = vec![
        TaskRow::new("A", "Design", "2023-01-01", "5d", " L1 "),
        TaskRow::new("A", "Review", "  after   L1  ", "1d", "L2"),
    ];
    let (resolved, _) = resolve_rows(&rows).unwrap();
    assert_eq!(resolved[1].start, d(2023, 1, 6));
}

#[test]
fn duplicate_label_keeps_first_definition() {
    let rows = vec![
        TaskRow::new("A", "First", "2023-01-01", "3d", "X"),
        TaskRow::new("A", "Second", "2023-02-01", "10d", "X"),
        TaskRow::new("B", "Uses", "after X", "1d", "Y"),
        TaskRow::new("B", "Also uses", "after X", "2d", "Z"),
    ];
    let (resolved, labels) = resolve_rows(&rows).unwrap();
    assert_eq!(labels.get("X"), Some(d(2023, 1, 4)));
    assert_eq!(resolved[2].start, d(2023, 1, 4));
    assert_eq!(resolved[3].start, d(2023, 1, 4));
    assert_eq!(resolved[3].end, d(2023, 1, 6));
}

#[test]
fn forward_reference_is_an_error() {
    let rows = vec![
        TaskRow::new("A", "Early", "after LATER", "2d", "E"),
        TaskRow::new("A", "Late", "2023-01-01", "2d", "LATER"),
    ];
    match resolve_rows(&rows) {
        Err(GanttError::UnresolvedLabel { line, label }) => {
            assert_eq!(line, 1);
            assert_eq!(label, "LATER");
        }
        other => panic!("expected UnresolvedLabel, got {other:?}"),
    }
}

#[test]
fn failing_row_aborts_the_batch() {
    let rows = vec![
        TaskRow::new("A", "Ok", "2023-01-01", "2d", "L1"),
        TaskRow::new("A", "Typo", "after L9", "2d", "L2"),
        TaskRow::new("A", "Never", "after L2", "2d", "L3"),
    ];
    match resolve_rows(&rows) {
        Err(GanttError::UnresolvedLabel { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected UnresolvedLabel, got {other:?}"),
    }
}

#[test]
fn unsupported_unit_is_a_duration_error() {
    let row = TaskRow::new("A", "Weeks", "2023-01-01", "2w", "W");
    match resolve_row(&row, 4, LabelTable::new()) {
        Err(GanttError::DurationParse { line, token, source }) => {
            assert_eq!(line, 4);
            assert_eq!(token, "2w");
            assert_eq!(source, SpanError::UnsupportedUnit('w'));
        }
        other => panic!("expected DurationParse, got {other:?}"),
    }
}

#[test]
fn non_integer_count_is_a_duration_error() {
    let row = TaskRow::new("A", "Bad", "2023-01-01", "xd", "B");
    assert!(matches!(
        resolve_row(&row, 1, LabelTable::new()),
        Err(GanttError::DurationParse { .. })
    ));
}

#[test]
fn unparseable_start_is_a_date_error() {
    let row = TaskRow::new("A", "Bad", "someday", "1d", "B");
    assert!(matches!(
        resolve_row(&row, 1, LabelTable::new()),
        Err(GanttError::DateParse { .. })
    ));
}

#[test]
fn after_without_label_is_malformed() {
    let row = TaskRow::new("A", "Bad", "after", "1d", "B");
    assert!(matches!(
        resolve_row(&row, 1, LabelTable::new()),
        Err(GanttError::MalformedStart { .. })
    ));
}

#[test]
fn permissive_date_formats_are_accepted() {
    for start in [
        "2023-01-10",
        "2023/01/10",
        "01/10/2023",
        "10 Jan 2023",
        "20230110",
        "2023-01-10 08:30:00",
    ] {
        let row = TaskRow::new("A", "T", start, "1d", "");
        let (task, _) = resolve_row(&row, 1, LabelTable::new()).unwrap();
        assert_eq!(task.start, d(2023, 1, 10), "start format {start}");
        assert_eq!(task.end, d(2023, 1, 11));
    }
}

#[test]
fn zero_and_negative_spans_are_not_validated() {
    let rows = vec![
        TaskRow::new("A", "Milestone", "2023-01-10", "0d", "M"),
        TaskRow::new("A", "Backwards", "2023-01-10", "-2d", "N"),
    ];
    let (resolved, _) = resolve_rows(&rows).unwrap();
    assert_eq!(resolved[0].end, d(2023, 1, 10));
    assert_eq!(resolved[1].end, d(2023, 1, 8));
}

#[test]
fn end_past_date_range_is_an_overflow_error() {
    let row = TaskRow::new("A", "Forever", "2023-01-01", "9223372036854775807d", "F");
    match resolve_row(&row, 3, LabelTable::new()) {
        Err(GanttError::DateOverflow { line }) => assert_eq!(line, 3),
        other => panic!("expected DateOverflow, got {other:?}"),
    }
}

#[test]
fn overflowing_row_aborts_the_build() {
    let rows = vec![
        TaskRow::new("A", "Ok", "2023-01-01", "1d", "L1"),
        TaskRow::new("A", "Forever", "after L1", "9223372036854775807d", "L2"),
    ];
    assert!(matches!(
        GanttSchedule::build(&rows),
        Err(GanttError::DateOverflow { line: 2 })
    ));
}
