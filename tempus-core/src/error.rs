use thiserror::Error;

/// An unrecognized word met while parsing with `raise_exceptions` enabled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("an invalid word {word:?} was used in the string to be parsed")]
pub struct DurationParseError {
    word: String,
}

impl DurationParseError {
    pub fn new(word: impl Into<String>) -> Self {
        Self { word: word.into() }
    }

    pub fn word(&self) -> &str {
        &self.word
    }
}

/// Text that does not describe a finite, non-negative second count.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{0}` is not a non-negative number of seconds")]
pub struct InvalidSeconds(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("hours_per_day must be at least 1")]
    ZeroHoursPerDay,

    #[error("days_per_month must be at least 1")]
    ZeroDaysPerMonth,

    #[error("weeks need days_per_month of at least 4 (got {days_per_month})")]
    WeekTooShort { days_per_month: u64 },

    #[error("units must be at least 1 when set")]
    ZeroUnits,

    #[error("units cannot be combined with the chrono format")]
    UnitsWithChrono,

    #[error("unknown format `{0}` (expected default, short, long, micro or chrono)")]
    UnknownFormat(String),

    #[error("unknown unit `{0}`")]
    UnknownUnit(String),
}

#[cfg(test)]
mod tests {
    use super::{DurationParseError, OptionsError};

    #[test]
    fn parse_error_names_the_word() {
        let error = DurationParseError::new("forty");
        assert_eq!(error.word(), "forty");
        assert_eq!(
            error.to_string(),
            "an invalid word \"forty\" was used in the string to be parsed"
        );
    }

    #[test]
    fn options_errors_render() {
        assert_eq!(
            OptionsError::WeekTooShort { days_per_month: 3 }.to_string(),
            "weeks need days_per_month of at least 4 (got 3)"
        );
        assert_eq!(
            OptionsError::UnknownUnit("fortnight".to_owned()).to_string(),
            "unknown unit `fortnight`"
        );
    }
}
