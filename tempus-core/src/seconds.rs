use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::InvalidSeconds;

/// Nanosecond precision, the finest `std::time::Duration` carries.
pub const MAX_DECIMAL_PLACES: usize = 9;

/// A non-negative count of seconds.
///
/// `Whole` is produced when every contributing quantity was an integer, which
/// keeps large counts exact; `Fractional` carries anything else. The absence of
/// a duration is modelled with `Option<Seconds>`, never with zero.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seconds {
    Whole(u64),
    Fractional(f64),
}

impl Seconds {
    pub fn as_f64(self) -> f64 {
        match self {
            Seconds::Whole(value) => value as f64,
            Seconds::Fractional(value) => value,
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Seconds::Whole(value) => value == 0,
            Seconds::Fractional(value) => value == 0.0,
        }
    }

    /// Digits after the decimal point once the value is rounded to nanoseconds,
    /// so floating-point noise such as `3960.0000000000005` counts as whole.
    pub fn decimal_places(self) -> usize {
        match self {
            Seconds::Whole(_) => 0,
            Seconds::Fractional(value) if value.fract() == 0.0 => 0,
            Seconds::Fractional(value) => format!("{:.*}", MAX_DECIMAL_PLACES, value)
                .split_once('.')
                .map_or(0, |(_, fraction)| fraction.trim_end_matches('0').len()),
        }
    }

    /// Convert into a `std::time::Duration`; `None` when the value does not fit.
    pub fn to_std(self) -> Option<Duration> {
        match self {
            Seconds::Whole(value) => Some(Duration::from_secs(value)),
            Seconds::Fractional(value) => Duration::try_from_secs_f64(value).ok(),
        }
    }
}

impl From<u64> for Seconds {
    fn from(value: u64) -> Self {
        Seconds::Whole(value)
    }
}

impl From<f64> for Seconds {
    fn from(value: f64) -> Self {
        Seconds::Fractional(value)
    }
}

impl From<Duration> for Seconds {
    fn from(duration: Duration) -> Self {
        if duration.subsec_nanos() == 0 {
            Seconds::Whole(duration.as_secs())
        } else {
            Seconds::Fractional(duration.as_secs_f64())
        }
    }
}

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seconds::Whole(value) => write!(f, "{value}"),
            Seconds::Fractional(value) => write!(f, "{:.*}", self.decimal_places(), value),
        }
    }
}

impl FromStr for Seconds {
    type Err = InvalidSeconds;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim();
        if let Ok(whole) = value.parse::<u64>() {
            return Ok(Seconds::Whole(whole));
        }

        match value.parse::<f64>() {
            Ok(real) if real.is_finite() && real >= 0.0 => Ok(Seconds::Fractional(real)),
            _ => Err(InvalidSeconds(value.to_owned())),
        }
    }
}
