use std::io;
use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

use crate::duration::SpanError;

/// Every failure a resolution pass can report.
///
/// `line` fields are 1-based data row indices (the header is not counted).
/// Any row-level error aborts the whole batch: later rows may depend on
/// labels the failing row would have defined.
#[derive(Error, Debug)]
pub enum GanttError {
    #[error("file {} does not exist", .path.display())]
    MissingFile { path: PathBuf },

    #[error("row {line}: label '{label}' is not defined by an earlier row")]
    UnresolvedLabel { line: usize, label: String },

    #[error("row {line}: invalid duration '{token}': {source}")]
    DurationParse {
        line: usize,
        token: String,
        #[source]
        source: SpanError,
    },

    #[error("row {line}: unrecognised start date '{value}'")]
    DateParse { line: usize, value: String },

    #[error("row {line}: start '{value}' names no label after 'after'")]
    MalformedStart { line: usize, value: String },

    #[error("row {line}: expected 5 fields, found {fields}")]
    MalformedRow { line: usize, fields: usize },

    #[error("row {line}: end date is out of range")]
    DateOverflow { line: usize },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("dataframe error: {0}")]
    DataFrame(#[from] PolarsError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type GanttResult<T> = Result<T, GanttError>;
