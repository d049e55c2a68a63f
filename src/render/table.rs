use polars::prelude::{AnyValue, DataFrame};

use crate::task::date_from_i32;

fn cell_text(value: &AnyValue) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::Date(days) => date_from_i32(*days).format("%Y-%m-%d").to_string(),
        other => other.to_string(),
    }
}

/// Draw a frame as a boxed, left-aligned text table with a leading index column.
pub fn render_df_as_text_table(df: &DataFrame) -> String {
    let columns = df.get_columns();
    let mut header: Vec<String> = vec![String::new()];
    header.extend(columns.iter().map(|c| c.name().to_string()));

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(df.height());
    for row_idx in 0..df.height() {
        let mut cells = vec![row_idx.to_string()];
        for col in columns {
            cells.push(col.get(row_idx).map(|av| cell_text(&av)).unwrap_or_default());
        }
        rows.push(cells);
    }

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for cells in &rows {
        for (ci, cell) in cells.iter().enumerate() {
            widths[ci] = widths[ci].max(cell.chars().count());
        }
    }

    let mut sep = String::from("+");
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    push_line(&mut out, &header, &widths);
    out.push_str(&sep);
    out.push('\n');
    for cells in &rows {
        push_line(&mut out, cells, &widths);
    }
    out.push_str(&sep);
    out.push('\n');
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    out.push('|');
    for (cell, width) in cells.iter().zip(widths) {
        out.push(' ');
        out.push_str(cell);
        let pad = width.saturating_sub(cell.chars().count());
        out.push_str(&" ".repeat(pad));
        out.push_str(" |");
    }
    out.push('\n');
}
