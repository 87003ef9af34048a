use tempus_core::{Options, Seconds, UnitName, UnitTable};

use crate::normalize::is_numeric_literal;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Quantity {
    Integer(u64),
    Real(f64),
}

impl Quantity {
    fn parse(word: &str) -> Option<Self> {
        if !is_numeric_literal(word) {
            return None;
        }

        if !word.contains('.')
            && let Ok(integer) = word.parse::<u64>()
        {
            return Some(Quantity::Integer(integer));
        }

        word.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Quantity::Real)
    }
}

/// Running sum that stays exact while only integers contribute.
#[derive(Debug, Default)]
struct Total {
    whole: u64,
    real: f64,
    inexact: bool,
}

impl Total {
    fn add(&mut self, quantity: Quantity, multiplier: u64) {
        match quantity {
            Quantity::Integer(count) => {
                match count
                    .checked_mul(multiplier)
                    .and_then(|part| self.whole.checked_add(part))
                {
                    Some(sum) => self.whole = sum,
                    None => {
                        self.real += count as f64 * multiplier as f64;
                        self.inexact = true;
                    }
                }
            }
            Quantity::Real(value) => {
                self.real += value * multiplier as f64;
                self.inexact = true;
            }
        }
    }

    fn into_seconds(self) -> Seconds {
        if self.inexact {
            Seconds::Fractional(self.whole as f64 + self.real)
        } else {
            Seconds::Whole(self.whole)
        }
    }
}

/// Sum `quantity × unit size` over a normalized token stream.
///
/// A number takes the unit right after it; a number followed by another number
/// or by nothing takes `default_unit`.
pub fn accumulate(normalized: &str, options: &Options) -> Seconds {
    let table = UnitTable::new(options);
    let words: Vec<&str> = normalized.split_whitespace().collect();
    let mut total = Total::default();

    for (index, word) in words.iter().enumerate() {
        let Some(quantity) = Quantity::parse(word) else {
            continue;
        };

        let unit = words
            .get(index + 1)
            .and_then(|next| UnitName::from_canonical(next))
            .unwrap_or(options.default_unit);
        total.add(quantity, table.seconds_in(unit));
    }

    total.into_seconds()
}

#[cfg(test)]
mod tests {
    use super::{Quantity, accumulate};
    use tempus_core::{Options, Seconds, UnitName};

    #[test]
    fn quantities_keep_integer_and_real_apart() {
        assert_eq!(Quantity::parse("30"), Some(Quantity::Integer(30)));
        assert_eq!(Quantity::parse("1.5"), Some(Quantity::Real(1.5)));
        assert_eq!(Quantity::parse(".5"), Some(Quantity::Real(0.5)));
        assert_eq!(Quantity::parse("hours"), None);
    }

    #[test]
    fn literals_beyond_f64_range_are_not_quantities() {
        let huge = "9".repeat(320);
        assert_eq!(Quantity::parse(&huge), None);
        assert_eq!(
            accumulate(&format!("{huge} years 5 seconds"), &Options::default()),
            Seconds::Whole(5)
        );
    }

    #[test]
    fn sums_units() {
        let options = Options::default();
        assert_eq!(
            accumulate("1 hours 30 minutes", &options),
            Seconds::Whole(5_400)
        );
        assert_eq!(
            accumulate("2 days 4 hours", &options),
            Seconds::Whole(187_200)
        );
        assert_eq!(
            accumulate("1 years 1 months 1 weeks", &options),
            Seconds::Whole(31_557_600 + 2_592_000 + 604_800)
        );
    }

    #[test]
    fn bare_numbers_use_default_unit() {
        let options = Options::default();
        assert_eq!(accumulate("90", &options), Seconds::Whole(90));
        assert_eq!(accumulate("1 hours 30", &options), Seconds::Whole(3_630));
        assert_eq!(accumulate("1 2 hours", &options), Seconds::Whole(7_201));

        let minutes = Options {
            default_unit: UnitName::Minutes,
            ..Options::default()
        };
        assert_eq!(accumulate("90", &minutes), Seconds::Whole(5_400));
    }

    #[test]
    fn real_literals_make_fractional_totals() {
        let options = Options::default();
        assert_eq!(
            accumulate("1.5 hours", &options),
            Seconds::Fractional(5_400.0)
        );
        assert_eq!(
            accumulate("1 minutes 0.5 seconds", &options),
            Seconds::Fractional(60.5)
        );
    }

    #[test]
    fn respects_calendar_options() {
        let options = Options {
            hours_per_day: 8,
            days_per_month: 20,
            ..Options::default()
        };
        assert_eq!(accumulate("1 days", &options), Seconds::Whole(28_800));
        assert_eq!(accumulate("1 weeks", &options), Seconds::Whole(5 * 28_800));
        assert_eq!(accumulate("1 months", &options), Seconds::Whole(20 * 28_800));
    }

    #[test]
    fn overflow_falls_back_to_floating_point() {
        let options = Options::default();
        let total = accumulate("99999999999999999999 years", &options);
        assert!(matches!(total, Seconds::Fractional(value) if value > 1e27));
    }

    #[test]
    fn empty_stream_is_zero() {
        assert_eq!(accumulate("", &Options::default()), Seconds::Whole(0));
    }
}
