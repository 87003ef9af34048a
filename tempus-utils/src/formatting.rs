use tempus_core::{Format, Options, Seconds, UnitName};

use crate::decompose::{Decomposed, decompose};

/// Per-format suffixes and rendering rules.
#[derive(Debug)]
struct Dividers {
    years: &'static str,
    months: &'static str,
    weeks: &'static str,
    days: &'static str,
    hours: &'static str,
    minutes: &'static str,
    seconds: &'static str,
    pluralize: bool,
    keep_zero: bool,
    /// Joiner that overrides `Options::joiner`.
    fixed_joiner: Option<&'static str>,
}

impl Dividers {
    fn suffix(&self, unit: UnitName) -> &'static str {
        match unit {
            UnitName::Years => self.years,
            UnitName::Months => self.months,
            UnitName::Weeks => self.weeks,
            UnitName::Days => self.days,
            UnitName::Hours => self.hours,
            UnitName::Minutes => self.minutes,
            UnitName::Seconds => self.seconds,
        }
    }
}

const DEFAULT_DIVIDERS: Dividers = Dividers {
    years: " yr",
    months: " mo",
    weeks: " wk",
    days: " day",
    hours: " hr",
    minutes: " min",
    seconds: " sec",
    pluralize: true,
    keep_zero: false,
    fixed_joiner: None,
};

const SHORT_DIVIDERS: Dividers = Dividers {
    years: "y",
    months: "mo",
    weeks: "w",
    days: "d",
    hours: "h",
    minutes: "m",
    seconds: "s",
    pluralize: false,
    keep_zero: false,
    fixed_joiner: None,
};

const MICRO_DIVIDERS: Dividers = Dividers {
    fixed_joiner: Some(""),
    ..SHORT_DIVIDERS
};

const LONG_DIVIDERS: Dividers = Dividers {
    years: " year",
    months: " month",
    weeks: " week",
    days: " day",
    hours: " hour",
    minutes: " minute",
    seconds: " second",
    pluralize: true,
    keep_zero: false,
    fixed_joiner: None,
};

const CHRONO_DIVIDERS: Dividers = Dividers {
    years: ":",
    months: ":",
    weeks: ":",
    days: ":",
    hours: ":",
    minutes: ":",
    seconds: ":",
    pluralize: false,
    keep_zero: true,
    fixed_joiner: Some(""),
};

const DEFAULT_JOINER: &str = " ";

fn dividers_for(format: Format) -> &'static Dividers {
    match format {
        Format::Default => &DEFAULT_DIVIDERS,
        Format::Short => &SHORT_DIVIDERS,
        Format::Micro => &MICRO_DIVIDERS,
        Format::Long => &LONG_DIVIDERS,
        Format::Chrono => &CHRONO_DIVIDERS,
    }
}

fn component_text(parts: &Decomposed, unit: UnitName) -> String {
    match unit {
        UnitName::Seconds => format!("{:.*}", parts.decimal_places, parts.seconds),
        other => parts.whole(other).to_string(),
    }
}

/// Attach the unit suffix to a component, or drop it when it is a suppressed zero.
fn humanize_component(
    value: &str,
    suffix: &str,
    pluralize: bool,
    keep_zero: bool,
) -> Option<String> {
    if value == "0" && !keep_zero {
        return None;
    }

    let mut piece = format!("{value}{suffix}");
    if pluralize && value != "1" {
        piece.push('s');
    }

    Some(piece)
}

/// Pad colon groups to two digits and trim the unused leading groups.
fn chrono_post_process(rendered: &str, decimal_places: usize) -> String {
    let padded = rendered
        .split(':')
        .filter(|piece| !piece.is_empty())
        .map(|piece| {
            if piece.contains('.') {
                let value = piece.parse::<f64>().unwrap_or_default();
                format!(
                    "{:0width$.precision$}",
                    value,
                    width = 3 + decimal_places,
                    precision = decimal_places
                )
            } else {
                format!("{piece:0>2}")
            }
        })
        .collect::<Vec<_>>()
        .join(":");

    let mut trimmed = padded.as_str();
    while let Some(rest) = trimmed.strip_prefix("00:") {
        trimmed = rest;
    }
    let trimmed = trimmed.strip_prefix('0').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix(':').unwrap_or(trimmed);
    trimmed.to_owned()
}

/// Render decomposed components in the style chosen by `options.format`.
pub fn render(parts: &Decomposed, options: &Options) -> Option<String> {
    let dividers = dividers_for(options.format);

    let mut pieces = Vec::new();
    for unit in UnitName::DISPLAY_ORDER {
        if unit == UnitName::Weeks && !options.weeks {
            continue;
        }

        let value = component_text(parts, unit);
        let keep_zero = dividers.keep_zero || (unit == UnitName::Seconds && options.keep_zero);
        if let Some(piece) =
            humanize_component(&value, dividers.suffix(unit), dividers.pluralize, keep_zero)
        {
            pieces.push(piece);
        }
    }

    if let Some(limit) = options.units {
        pieces.truncate(limit);
    }

    let joiner = match dividers.fixed_joiner {
        Some(fixed) => fixed,
        None => options.joiner.as_deref().unwrap_or(DEFAULT_JOINER),
    };
    let mut rendered = pieces.join(joiner);

    if options.format == Format::Chrono {
        rendered = chrono_post_process(&rendered, parts.decimal_places);
    }

    if rendered.is_empty() {
        None
    } else {
        Some(rendered)
    }
}

/// Render a second count as human text, e.g. `5400` -> `"1 hr 30 mins"`.
///
/// Non-finite or negative counts render nothing.
pub fn format_duration(seconds: Seconds, options: &Options) -> Option<String> {
    let total = seconds.as_f64();
    if !total.is_finite() || total < 0.0 {
        return None;
    }

    render(&decompose(seconds, options), options)
}
