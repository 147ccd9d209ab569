use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// Persisted as a bare JSON array of `YYYY-MM-DD` strings. Keys outside the
// configured schedule are kept verbatim: never rendered, never purged.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct CompletionSet {
    days: BTreeSet<String>,
}

impl CompletionSet {
    pub fn contains(&self, key: &str) -> bool {
        self.days.contains(key)
    }

    pub fn toggle(&mut self, key: &str) -> bool {
        if self.days.remove(key) {
            false
        } else {
            self.days.insert(key.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.days.clear();
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DayCell {
    Ordinary {
        date: String,
        label: String,
        checked: bool,
        today: bool,
    },
    Arrival {
        date: String,
        label: String,
    },
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub date: String,
}

#[derive(Debug, Serialize)]
pub struct ChecklistResponse {
    pub start_date: String,
    pub target_date: String,
    pub target_label: String,
    pub checked_count: usize,
    pub total_days: usize,
    pub percent: u32,
    pub days_remaining: u32,
    pub days: Vec<DayCell>,
}
