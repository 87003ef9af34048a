/// Sums a normalized token stream into seconds.
pub mod accumulate;
/// Greedy breakdown of a second count into calendar components.
pub mod decompose;
/// Renders decomposed components in the supported styles.
pub mod formatting;
/// Lowercasing, colon expansion, tokenizing and unit resolution.
pub mod normalize;
/// Text to seconds.
pub mod parse;

pub use formatting::format_duration as format;
pub use parse::parse_duration as parse;

#[cfg(test)]
mod tests {
    use tempus_core::alias::resolve_alias;
    use tempus_core::{Format, Options, Seconds, UnitName};

    #[test]
    fn chrono_text_round_trips() {
        let options = Options::default().with_format(Format::Chrono);
        for text in ["3:41:59", "1:30", "12:00:01", "2:03:04:05"] {
            let seconds = crate::parse(text, &options)
                .expect("lenient parse")
                .expect("non-zero duration");
            assert_eq!(crate::format(seconds, &options).as_deref(), Some(text));
        }
    }

    #[test]
    fn default_text_round_trips() {
        let options = Options::default();
        for seconds in [1_u64, 59, 90, 3_600, 5_400, 86_399, 187_200, 40_000_000] {
            let text = crate::format(Seconds::Whole(seconds), &options).expect("non-zero");
            assert_eq!(
                crate::parse(&text, &options),
                Ok(Some(Seconds::Whole(seconds))),
                "text {text:?}"
            );
        }
    }

    #[test]
    fn rendered_leading_unit_never_shrinks() {
        let options = Options::default().with_format(Format::Long);
        let rank = |unit: UnitName| {
            UnitName::DISPLAY_ORDER.len()
                - UnitName::DISPLAY_ORDER
                    .iter()
                    .position(|candidate| *candidate == unit)
                    .unwrap_or(UnitName::DISPLAY_ORDER.len())
        };

        let mut previous = 0;
        for seconds in (0..40_000_000_u64).step_by(9_973) {
            let current = crate::format(Seconds::Whole(seconds), &options).map_or(0, |text| {
                let unit = text
                    .split(' ')
                    .nth(1)
                    .and_then(resolve_alias)
                    .expect("long style names its leading unit");
                rank(unit)
            });
            assert!(current >= previous, "leading component shrank at {seconds}");
            previous = current;
        }
    }
}
