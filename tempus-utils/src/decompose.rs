use tempus_core::units::days_per_week;
use tempus_core::{Options, Seconds, UnitName, UnitTable};

/// A second count broken into calendar components.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Decomposed {
    pub years: u64,
    pub months: u64,
    pub weeks: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    /// Remaining seconds, including any fractional part of the input.
    pub seconds: f64,
    /// Decimal places of the input, used when rendering seconds.
    pub decimal_places: usize,
}

impl Decomposed {
    /// Whole-unit component; seconds are truncated.
    pub fn whole(&self, unit: UnitName) -> u64 {
        match unit {
            UnitName::Years => self.years,
            UnitName::Months => self.months,
            UnitName::Weeks => self.weeks,
            UnitName::Days => self.days,
            UnitName::Hours => self.hours,
            UnitName::Minutes => self.minutes,
            UnitName::Seconds => self.seconds.trunc() as u64,
        }
    }

    /// Largest unit with a non-zero component.
    pub fn leading_unit(&self) -> Option<UnitName> {
        UnitName::DISPLAY_ORDER.into_iter().find(|unit| match unit {
            UnitName::Seconds => self.seconds > 0.0,
            other => self.whole(*other) > 0,
        })
    }
}

fn truncate(value: f64) -> u64 {
    value.trunc() as u64
}

/// Greedily split `seconds` into components, largest unit first.
///
/// Inputs of a year or more (unless `limit_to_hours`) are split straight into
/// years, months, days, hours, minutes and seconds. Smaller inputs grow upward
/// from minutes only as far as their magnitude needs.
pub fn decompose(seconds: Seconds, options: &Options) -> Decomposed {
    let table = UnitTable::new(options);
    let hours_per_day = options.hours_per_day.max(1);
    let days_per_month = options.days_per_month.max(1);
    let week_days = days_per_week(days_per_month).max(1);

    let minute = table.minute as f64;
    let hour = table.hour as f64;
    let day = table.day.max(1) as f64;
    let month = table.month.max(1) as f64;
    let year = table.year as f64;

    let total = seconds.as_f64();
    let mut parts = Decomposed {
        seconds: total,
        decimal_places: seconds.decimal_places(),
        ..Decomposed::default()
    };

    if !options.limit_to_hours && total >= year {
        let mut rest = total;
        parts.years = truncate(rest / year);
        rest %= year;
        parts.months = truncate(rest / month);
        rest %= month;
        parts.days = truncate(rest / day);
        rest %= day;
        parts.hours = truncate(rest / hour);
        rest %= hour;
        parts.minutes = truncate(rest / minute);
        parts.seconds = rest % minute;
        return parts;
    }

    if total < minute {
        return parts;
    }

    parts.minutes = truncate(total / minute);
    parts.seconds = total % minute;
    if parts.minutes < 60 {
        return parts;
    }

    parts.hours = parts.minutes / 60;
    parts.minutes %= 60;
    if options.limit_to_hours || parts.hours < hours_per_day {
        return parts;
    }

    parts.days = parts.hours / hours_per_day;
    parts.hours %= hours_per_day;

    if options.weeks {
        if parts.days >= week_days {
            parts.weeks = parts.days / week_days;
            parts.days %= week_days;
            if parts.weeks >= 4 {
                parts.months = parts.weeks / 4;
                parts.weeks %= 4;
            }
        }
    } else if parts.days >= days_per_month {
        parts.months = parts.days / days_per_month;
        parts.days %= days_per_month;
    }

    parts
}
