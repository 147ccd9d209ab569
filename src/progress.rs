use crate::models::{ChecklistResponse, CompletionSet, DayCell};
use crate::schedule::{date_key, Schedule};
use chrono::{Local, NaiveDate};

pub fn build_checklist(schedule: &Schedule, checked: &CompletionSet) -> ChecklistResponse {
    build_checklist_at(Local::now().date_naive(), schedule, checked)
}

pub fn build_checklist_at(
    today: NaiveDate,
    schedule: &Schedule,
    checked: &CompletionSet,
) -> ChecklistResponse {
    let days = schedule
        .days()
        .into_iter()
        .map(|date| day_cell(today, schedule.target, checked, date))
        .collect();

    ChecklistResponse {
        start_date: date_key(schedule.start),
        target_date: date_key(schedule.target),
        target_label: full_label(schedule.target),
        checked_count: checked.len(),
        total_days: schedule.total_days(),
        percent: completion_percent(checked.len(), schedule.total_days()),
        days_remaining: days_remaining_at(today, schedule.target),
        days,
    }
}

fn day_cell(
    today: NaiveDate,
    target: NaiveDate,
    checked: &CompletionSet,
    date: NaiveDate,
) -> DayCell {
    let key = date_key(date);
    if date == target {
        DayCell::Arrival {
            label: short_label(date),
            date: key,
        }
    } else {
        DayCell::Ordinary {
            label: short_label(date),
            checked: checked.contains(&key),
            today: date == today,
            date: key,
        }
    }
}

// The checked count is the full set size; keys outside the schedule still
// weigh in.
pub fn completion_percent(checked: usize, total: usize) -> u32 {
    (checked as f64 / total as f64 * 100.0).round() as u32
}

pub fn days_remaining_at(today: NaiveDate, target: NaiveDate) -> u32 {
    (target - today).num_days().max(0) as u32
}

fn short_label(date: NaiveDate) -> String {
    date.format("%d/%m").to_string()
}

fn full_label(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}
