use std::fmt;

use serde::{Deserialize, Serialize};

use crate::options::Options;

pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
/// 365.25 days, independent of the configured calendar.
pub const SECONDS_PER_YEAR: u64 = 31_557_600;

/// Canonical duration units, smallest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitName {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

impl UnitName {
    pub const ALL: [UnitName; 7] = [
        UnitName::Seconds,
        UnitName::Minutes,
        UnitName::Hours,
        UnitName::Days,
        UnitName::Weeks,
        UnitName::Months,
        UnitName::Years,
    ];

    /// Render order, largest first.
    pub const DISPLAY_ORDER: [UnitName; 7] = [
        UnitName::Years,
        UnitName::Months,
        UnitName::Weeks,
        UnitName::Days,
        UnitName::Hours,
        UnitName::Minutes,
        UnitName::Seconds,
    ];

    /// Units addressed by colon groups, right to left. Weeks never take part.
    pub const CHRONO_SEQUENCE: [UnitName; 6] = [
        UnitName::Seconds,
        UnitName::Minutes,
        UnitName::Hours,
        UnitName::Days,
        UnitName::Months,
        UnitName::Years,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            UnitName::Seconds => "seconds",
            UnitName::Minutes => "minutes",
            UnitName::Hours => "hours",
            UnitName::Days => "days",
            UnitName::Weeks => "weeks",
            UnitName::Months => "months",
            UnitName::Years => "years",
        }
    }

    /// Look up a canonical (already normalized) unit name.
    pub fn from_canonical(name: &str) -> Option<Self> {
        UnitName::ALL.into_iter().find(|unit| unit.as_str() == name)
    }
}

impl fmt::Display for UnitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit sizes in seconds for one calendar configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitTable {
    pub minute: u64,
    pub hour: u64,
    pub day: u64,
    pub week: u64,
    pub month: u64,
    pub year: u64,
}

impl UnitTable {
    pub fn new(options: &Options) -> Self {
        let day = options.hours_per_day.saturating_mul(SECONDS_PER_HOUR);
        Self {
            minute: SECONDS_PER_MINUTE,
            hour: SECONDS_PER_HOUR,
            day,
            week: day.saturating_mul(days_per_week(options.days_per_month)),
            month: day.saturating_mul(options.days_per_month),
            year: SECONDS_PER_YEAR,
        }
    }

    pub fn seconds_in(&self, unit: UnitName) -> u64 {
        match unit {
            UnitName::Seconds => 1,
            UnitName::Minutes => self.minute,
            UnitName::Hours => self.hour,
            UnitName::Days => self.day,
            UnitName::Weeks => self.week,
            UnitName::Months => self.month,
            UnitName::Years => self.year,
        }
    }
}

/// A week is a quarter of a month, rounded down to whole days.
pub fn days_per_week(days_per_month: u64) -> u64 {
    days_per_month / 4
}

pub fn unit_seconds(unit: UnitName, options: &Options) -> u64 {
    UnitTable::new(options).seconds_in(unit)
}

/// Multiplier for a canonical unit name; anything else counts as zero.
pub fn unit_seconds_by_name(name: &str, options: &Options) -> u64 {
    UnitName::from_canonical(name).map_or(0, |unit| unit_seconds(unit, options))
}
