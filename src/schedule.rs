use crate::errors::ConfigError;
use chrono::{Duration, NaiveDate};
use std::env;

pub const DEFAULT_START: &str = "2025-12-02";
pub const DEFAULT_TARGET: &str = "2026-02-23";

const START_VAR: &str = "MOVE_START_DATE";
const TARGET_VAR: &str = "MOVE_TARGET_DATE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub start: NaiveDate,
    pub target: NaiveDate,
}

impl Schedule {
    pub fn new(start: NaiveDate, target: NaiveDate) -> Result<Self, ConfigError> {
        if start > target {
            return Err(ConfigError::InvertedRange { start, target });
        }
        Ok(Self { start, target })
    }

    // Inclusive of both endpoints, one entry per calendar day.
    pub fn days(&self) -> Vec<NaiveDate> {
        let span = (self.target - self.start).num_days();
        (0..=span)
            .map(|offset| self.start + Duration::days(offset))
            .collect()
    }

    pub fn total_days(&self) -> usize {
        (self.target - self.start).num_days() as usize + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.target
    }
}

pub fn resolve_schedule() -> Result<Schedule, ConfigError> {
    let start = date_from_env(START_VAR, DEFAULT_START)?;
    let target = date_from_env(TARGET_VAR, DEFAULT_TARGET)?;
    Schedule::new(start, target)
}

fn date_from_env(var: &'static str, default: &str) -> Result<NaiveDate, ConfigError> {
    let value = env::var(var).unwrap_or_else(|_| default.to_string());
    NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|source| ConfigError::InvalidDate {
        var,
        value,
        source,
    })
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
