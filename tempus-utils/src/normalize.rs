use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use tempus_core::alias::{is_join_word, resolve_alias};
use tempus_core::{DurationParseError, Options, UnitName};

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]*\.?[0-9]+").expect("number pattern compiles"));
static NUMERIC_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]*\.?[0-9]+$").expect("literal pattern compiles"));
static CHRONO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]*\.?[0-9]+(?::[0-9]*\.?[0-9]+)+$").expect("chrono pattern compiles")
});

/// One word of a normalized token stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    Number(&'a str),
    Unit(UnitName),
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(literal) => f.write_str(literal),
            Token::Unit(unit) => f.write_str(unit.as_str()),
        }
    }
}

pub fn is_numeric_literal(word: &str) -> bool {
    NUMERIC_LITERAL.is_match(word)
}

/// Rewrite colon notation (`3:41:59`) into explicit `<value> <unit>` pairs.
///
/// Groups are read right to left as seconds, minutes, hours, days, months and
/// years. Text that is not pure colon notation is returned unchanged; colon
/// notation with more groups than units expands to nothing.
pub fn expand_chrono(text: &str) -> String {
    let compact: String = text.chars().filter(|ch| !ch.is_whitespace()).collect();
    if !CHRONO.is_match(&compact) {
        return text.to_owned();
    }

    let groups: Vec<&str> = compact.split(':').collect();
    let sequence = UnitName::CHRONO_SEQUENCE;
    if groups.len() > sequence.len() {
        debug!(groups = groups.len(), "too many colon groups to expand");
        return String::new();
    }

    let last = groups.len() - 1;
    groups
        .iter()
        .enumerate()
        .map(|(index, value)| format!("{} {}", value, sequence[last - index]))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Separate numbers from adjacent words (`1h30m` -> `1 h 30 m`) and squeeze whitespace.
pub fn pad_numbers(text: &str) -> String {
    let padded = NUMBER.replace_all(text, " $0 ");
    padded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Map each word to a number or canonical unit, dropping join words.
///
/// Unknown words are dropped too, unless `raise_exceptions` is set. A stream
/// that opens with a unit (`"day"`, `"minute 30 sec"`) gets an implicit `1`.
pub fn resolve_tokens<'a>(
    text: &'a str,
    options: &Options,
) -> Result<Vec<Token<'a>>, DurationParseError> {
    let mut tokens = Vec::new();

    for word in text.split_whitespace() {
        if is_numeric_literal(word) {
            tokens.push(Token::Number(word));
            continue;
        }

        if let Some(unit) = resolve_alias(word) {
            tokens.push(Token::Unit(unit));
            continue;
        }

        if is_join_word(word) {
            continue;
        }

        if options.raise_exceptions {
            return Err(DurationParseError::new(word));
        }

        debug!(word, "dropping unrecognized duration word");
    }

    if matches!(tokens.first(), Some(Token::Unit(_))) {
        tokens.insert(0, Token::Number("1"));
    }

    Ok(tokens)
}

/// Turn raw duration text into a space-separated stream of numbers and unit names.
pub fn normalize(text: &str, options: &Options) -> Result<String, DurationParseError> {
    let lowered = text.to_lowercase();
    let expanded = expand_chrono(&lowered);
    let padded = pad_numbers(&expanded);
    let tokens = resolve_tokens(&padded, options)?;

    Ok(tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" "))
}

#[cfg(test)]
mod tests {
    use super::{Token, expand_chrono, is_numeric_literal, normalize, pad_numbers, resolve_tokens};
    use tempus_core::{Options, UnitName};

    fn strict() -> Options {
        Options {
            raise_exceptions: true,
            ..Options::default()
        }
    }

    #[test]
    fn recognizes_numeric_literals() {
        assert!(is_numeric_literal("30"));
        assert!(is_numeric_literal("1.5"));
        assert!(is_numeric_literal(".5"));
        assert!(!is_numeric_literal("1."));
        assert!(!is_numeric_literal("1h"));
        assert!(!is_numeric_literal("-1"));
    }

    #[test]
    fn expands_colon_notation() {
        assert_eq!(
            expand_chrono("3:41:59"),
            "3 hours 41 minutes 59 seconds"
        );
        assert_eq!(expand_chrono("1:30"), "1 minutes 30 seconds");
        assert_eq!(expand_chrono("1 : 30"), "1 minutes 30 seconds");
        assert_eq!(
            expand_chrono("2:1:0:0:0:5"),
            "2 years 1 months 0 days 0 hours 0 minutes 5 seconds"
        );
        assert_eq!(expand_chrono("0:30.5"), "0 minutes 30.5 seconds");
    }

    #[test]
    fn leaves_other_text_alone() {
        assert_eq!(expand_chrono("1h 30m"), "1h 30m");
        assert_eq!(expand_chrono("30"), "30");
        assert_eq!(expand_chrono("1:30 pm"), "1:30 pm");
    }

    #[test]
    fn too_many_colon_groups_expand_to_nothing() {
        assert_eq!(expand_chrono("1:2:3:4:5:6:7"), "");
    }

    #[test]
    fn pads_numbers_and_squeezes_whitespace() {
        assert_eq!(pad_numbers("1h30m"), "1 h 30 m");
        assert_eq!(pad_numbers("  2   days,4hrs "), "2 days, 4 hrs");
        assert_eq!(pad_numbers("1.5hrs"), "1.5 hrs");
        assert_eq!(pad_numbers(""), "");
    }

    #[test]
    fn resolves_tokens_with_implicit_one() {
        let tokens = resolve_tokens("minute 30 sec", &Options::default()).expect("lenient");
        assert_eq!(
            tokens,
            vec![
                Token::Number("1"),
                Token::Unit(UnitName::Minutes),
                Token::Number("30"),
                Token::Unit(UnitName::Seconds),
            ]
        );
    }

    #[test]
    fn normalizes_mixed_text() {
        let options = Options::default();
        assert_eq!(normalize("1h 30m", &options).as_deref(), Ok("1 hours 30 minutes"));
        assert_eq!(
            normalize("2 Days, 4 HRS", &options).as_deref(),
            Ok("2 days 4 hours")
        );
        assert_eq!(
            normalize("1 hour and 5 minutes", &options).as_deref(),
            Ok("1 hours 5 minutes")
        );
        assert_eq!(normalize("day", &options).as_deref(), Ok("1 days"));
        assert_eq!(
            normalize("3:41:59", &options).as_deref(),
            Ok("3 hours 41 minutes 59 seconds")
        );
    }

    #[test]
    fn drops_unknown_words_when_lenient() {
        let options = Options::default();
        assert_eq!(normalize("forty two", &options).as_deref(), Ok(""));
        assert_eq!(normalize("about 5 mins", &options).as_deref(), Ok("5 minutes"));
        assert_eq!(normalize("", &options).as_deref(), Ok(""));
    }

    #[test]
    fn reports_unknown_words_when_strict() {
        let error = normalize("forty two", &strict()).expect_err("strict mode rejects words");
        assert_eq!(error.word(), "forty");

        let error = normalize("5 fortnights", &strict()).expect_err("unknown unit");
        assert_eq!(error.word(), "fortnights");

        assert_eq!(
            normalize("1 hour plus 5 mins", &strict()).as_deref(),
            Ok("1 hours 5 minutes")
        );
    }

    #[test]
    fn normalization_is_idempotent() {
        let options = Options::default();
        for input in [
            "1h 30m",
            "3:41:59",
            "2 days 4 hrs",
            "minute 30 sec",
            "1.5 hours and .25 mins",
            "12 yrs 3 mo 1 wk",
            "forty two",
        ] {
            let once = normalize(input, &options).expect("lenient");
            let twice = normalize(&once, &options).expect("lenient");
            assert_eq!(once, twice, "input {input:?}");
        }
    }
}
