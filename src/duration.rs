use chrono::{Duration, NaiveDate};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Units a duration token may carry. Only days exist today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanUnit {
    Days,
}

impl SpanUnit {
    pub fn from_suffix(suffix: char) -> Option<Self> {
        match suffix {
            'd' => Some(SpanUnit::Days),
            _ => None,
        }
    }

    pub fn suffix(&self) -> char {
        match self {
            SpanUnit::Days => 'd',
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpanError {
    #[error("duration is empty")]
    Empty,
    #[error("missing unit suffix")]
    MissingUnit,
    #[error("unsupported unit '{0}'")]
    UnsupportedUnit(char),
    #[error("count '{0}' is not an integer")]
    InvalidCount(String),
    #[error("count {0} is too large")]
    OutOfRange(i64),
}

/// A parsed duration token such as `5d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSpan {
    pub unit: SpanUnit,
    pub count: i64,
}

impl TaskSpan {
    pub fn days(count: i64) -> Self {
        Self {
            unit: SpanUnit::Days,
            count,
        }
    }

    pub fn offset(&self) -> Result<Duration, SpanError> {
        match self.unit {
            SpanUnit::Days => {
                Duration::try_days(self.count).ok_or(SpanError::OutOfRange(self.count))
            }
        }
    }

    /// `None` when the result falls outside chrono's supported range.
    pub fn end_from(&self, start: NaiveDate) -> Option<NaiveDate> {
        let offset = self.offset().ok()?;
        start.checked_add_signed(offset)
    }
}

impl fmt::Display for TaskSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.count, self.unit.suffix())
    }
}

impl FromStr for TaskSpan {
    type Err = SpanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_span(s)
    }
}

/// Parse `<signed integer><unit>`. Negative and zero counts are accepted.
pub fn parse_span(token: &str) -> Result<TaskSpan, SpanError> {
    let token = token.trim();
    let suffix = token.chars().last().ok_or(SpanError::Empty)?;
    if suffix.is_ascii_digit() {
        return Err(SpanError::MissingUnit);
    }
    let unit = SpanUnit::from_suffix(suffix).ok_or(SpanError::UnsupportedUnit(suffix))?;
    let prefix = &token[..token.len() - suffix.len_utf8()];
    let count = prefix
        .parse::<i64>()
        .map_err(|_| SpanError::InvalidCount(prefix.to_string()))?;
    Ok(TaskSpan { unit, count })
}
