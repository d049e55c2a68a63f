use chrono::NaiveDate;
use std::collections::HashMap;

/// Label -> end date of the first row that defined it.
///
/// Entries are only ever added; a label that is already present keeps its
/// original date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTable {
    ends: HashMap<String, NaiveDate>,
    order: Vec<String>,
}

impl LabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, label: &str) -> Option<NaiveDate> {
        self.ends.get(label.trim()).copied()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.ends.contains_key(label.trim())
    }

    /// Returns `false` (and changes nothing) when the label already exists.
    pub fn record(&mut self, label: &str, end: NaiveDate) -> bool {
        let key = label.trim();
        if self.ends.contains_key(key) {
            return false;
        }
        self.ends.insert(key.to_string(), end);
        self.order.push(key.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Labels in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, NaiveDate)> + '_ {
        self.order
            .iter()
            .map(move |label| (label.as_str(), self.ends[label]))
    }
}
