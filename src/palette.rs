use std::collections::{HashMap, HashSet};

use crate::error::{GanttError, GanttResult};

pub const DEFAULT_PALETTE: [&str; 5] = ["#E64646", "#E69646", "#34D05C", "#34D0C3", "#3475D0"];

/// An ordered, non-empty list of colors handed out round-robin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Palette {
    pub fn new(colors: Vec<String>) -> GanttResult<Self> {
        if colors.is_empty() {
            return Err(GanttError::Config("palette must contain at least one color".into()));
        }
        Ok(Self { colors })
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn color_at(&self, index: usize) -> &str {
        &self.colors[index % self.colors.len()]
    }

    /// Map each session to a color, cycling through the palette in the
    /// order the sessions are given.
    pub fn assign<S: AsRef<str>>(&self, sessions: &[S]) -> HashMap<String, String> {
        sessions
            .iter()
            .enumerate()
            .map(|(idx, session)| (session.as_ref().to_string(), self.color_at(idx).to_string()))
            .collect()
    }
}

/// Distinct values in order of first appearance.
pub fn distinct_sessions<'a, I>(sessions: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    sessions
        .into_iter()
        .filter(|s| seen.insert(*s))
        .map(str::to_string)
        .collect()
}

/// [`Palette::assign`] with the default five colors.
pub fn assign_colors<S: AsRef<str>>(sessions: &[S]) -> HashMap<String, String> {
    Palette::default().assign(sessions)
}
