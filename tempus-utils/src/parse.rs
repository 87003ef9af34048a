use tracing::debug;

use tempus_core::{DurationParseError, Options, Seconds};

use crate::accumulate::accumulate;
use crate::normalize::normalize;

/// Parse free-form duration text (`1h 30m`, `3:41:59`, `2 days 4 hrs`) into seconds.
///
/// Returns `Ok(None)` when nothing contributes a duration, including a total of
/// exactly zero unless `keep_zero` is set and a total too large to represent.
/// Fails only in `raise_exceptions` mode, on the first unrecognized word.
pub fn parse_duration(
    text: &str,
    options: &Options,
) -> Result<Option<Seconds>, DurationParseError> {
    let normalized = normalize(text, options)?;
    let total = accumulate(&normalized, options);
    debug!(input = text, %normalized, %total, "parsed duration");

    if !total.as_f64().is_finite() {
        debug!(input = text, "duration total is not finite");
        return Ok(None);
    }

    if total.is_zero() && !options.keep_zero {
        return Ok(None);
    }

    Ok(Some(total))
}
