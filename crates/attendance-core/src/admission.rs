//! Category Admission Gate
//!
//! Decides which of a member's categories may be recorded right now.

use chrono::{NaiveTime, Timelike};

use crate::domain::{Category, Member};

/// Reason shown on a category control outside its window
pub const WINDOW_CLOSED_REASON: &str = "Time window closed";

/// Fixed daily admission window in local wall-clock time.
///
/// Both ends are inclusive. When `end` is earlier than `start` the window
/// wraps midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdmissionWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl AdmissionWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Build from `(hour, minute)` pairs. Out-of-range values clamp to midnight.
    pub fn from_hm(start: (u32, u32), end: (u32, u32)) -> Self {
        let at = |(h, m): (u32, u32)| NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN);
        Self::new(at(start), at(end))
    }

    /// Minute-granular membership test
    pub fn contains(&self, now: NaiveTime) -> bool {
        let now = truncate_to_minute(now);
        if self.end < self.start {
            now >= self.start || now <= self.end
        } else {
            now >= self.start && now <= self.end
        }
    }

    /// e.g. "11:55 AM - 12:30 PM"
    pub fn label(&self) -> String {
        format!("{} - {}", self.start.format("%I:%M %p"), self.end.format("%I:%M %p"))
    }
}

fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

/// Whether a category control is selectable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Open,
    Closed { window: AdmissionWindow },
}

/// One selectable control in the category step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryOption {
    pub category: Category,
    pub availability: Availability,
}

impl CategoryOption {
    pub fn is_open(&self) -> bool {
        matches!(self.availability, Availability::Open)
    }
}

/// Evaluate a single category for a member at `now`
pub fn availability(member: &Member, category: Category, now: NaiveTime) -> Availability {
    let window = category.admission_window();
    if member.role.is_privileged() || window.contains(now) {
        Availability::Open
    } else {
        Availability::Closed { window }
    }
}

/// One option per member category, in the member's order
pub fn category_options(member: &Member, now: NaiveTime) -> Vec<CategoryOption> {
    member
        .categories
        .iter()
        .map(|&category| CategoryOption {
            category,
            availability: availability(member, category, now),
        })
        .collect()
}
