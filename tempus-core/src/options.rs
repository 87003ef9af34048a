use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;
use crate::units::{UnitName, days_per_week};

pub const DEFAULT_HOURS_PER_DAY: u64 = 24;
pub const DEFAULT_DAYS_PER_MONTH: u64 = 30;

/// Output style used when rendering a duration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// `1 hr 30 mins`
    #[default]
    Default,
    /// `1h 30m`
    Short,
    /// `1 hour 30 minutes`
    Long,
    /// `1h30m`
    Micro,
    /// `1:30:00`
    Chrono,
}

impl Format {
    pub const ALL: [Format; 5] = [
        Format::Default,
        Format::Short,
        Format::Long,
        Format::Micro,
        Format::Chrono,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Format::Default => "default",
            Format::Short => "short",
            Format::Long => "long",
            Format::Micro => "micro",
            Format::Chrono => "chrono",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = OptionsError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        Format::ALL
            .into_iter()
            .find(|format| format.as_str() == normalized)
            .ok_or_else(|| OptionsError::UnknownFormat(raw.trim().to_owned()))
    }
}

/// Parsing and rendering knobs shared by every entry point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub hours_per_day: u64,
    pub days_per_month: u64,
    /// Unit applied to a number with no unit after it.
    pub default_unit: UnitName,
    /// Fail on unrecognized words instead of dropping them.
    pub raise_exceptions: bool,
    pub weeks: bool,
    /// Maximum number of rendered components.
    pub units: Option<usize>,
    pub format: Format,
    /// Separator between components; ignored by micro and chrono.
    pub joiner: Option<String>,
    pub limit_to_hours: bool,
    /// Keep a zero parse result and a zero seconds component.
    pub keep_zero: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            hours_per_day: DEFAULT_HOURS_PER_DAY,
            days_per_month: DEFAULT_DAYS_PER_MONTH,
            default_unit: UnitName::Seconds,
            raise_exceptions: false,
            weeks: false,
            units: None,
            format: Format::Default,
            joiner: None,
            limit_to_hours: false,
            keep_zero: false,
        }
    }
}

impl Options {
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Check the option bag once at the boundary.
    pub fn validated(self) -> Result<Self, OptionsError> {
        if self.hours_per_day == 0 {
            return Err(OptionsError::ZeroHoursPerDay);
        }

        if self.days_per_month == 0 {
            return Err(OptionsError::ZeroDaysPerMonth);
        }

        if self.weeks && days_per_week(self.days_per_month) == 0 {
            return Err(OptionsError::WeekTooShort {
                days_per_month: self.days_per_month,
            });
        }

        if self.units == Some(0) {
            return Err(OptionsError::ZeroUnits);
        }

        // Chrono groups are positional; cutting them leaves only leading zeros.
        if self.units.is_some() && self.format == Format::Chrono {
            return Err(OptionsError::UnitsWithChrono);
        }

        Ok(self)
    }
}
