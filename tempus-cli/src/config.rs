use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Args;
use tracing::{debug, info};

use tempus_core::{Format, Options, UnitName};

/// Command-line overrides, applied after the config file and environment.
#[derive(Args, Debug, Default)]
pub struct OptionOverrides {
    /// Hours in a day unit
    #[arg(long, global = true)]
    pub hours_per_day: Option<u64>,

    /// Days in a month unit
    #[arg(long, global = true)]
    pub days_per_month: Option<u64>,

    /// Unit for numbers written without one
    #[arg(long, global = true)]
    pub default_unit: Option<UnitName>,

    /// Output style: default, short, long, micro or chrono
    #[arg(long, global = true)]
    pub format: Option<Format>,

    /// Maximum number of rendered components
    #[arg(long, global = true)]
    pub units: Option<usize>,

    /// Separator between rendered components
    #[arg(long, global = true)]
    pub joiner: Option<String>,

    /// Render a weeks component
    #[arg(long, global = true)]
    pub weeks: bool,

    /// Do not roll hours up into days
    #[arg(long, global = true)]
    pub limit_to_hours: bool,

    /// Keep zero results and zero seconds
    #[arg(long, global = true)]
    pub keep_zero: bool,

    /// Fail on unrecognized words instead of ignoring them
    #[arg(long = "strict", global = true)]
    pub raise_exceptions: bool,
}

impl OptionOverrides {
    fn apply(&self, options: &mut Options) {
        if let Some(hours_per_day) = self.hours_per_day {
            options.hours_per_day = hours_per_day;
        }
        if let Some(days_per_month) = self.days_per_month {
            options.days_per_month = days_per_month;
        }
        if let Some(default_unit) = self.default_unit {
            options.default_unit = default_unit;
        }
        if let Some(format) = self.format {
            options.format = format;
        }
        if let Some(units) = self.units {
            options.units = Some(units);
        }
        if let Some(joiner) = &self.joiner {
            options.joiner = Some(joiner.clone());
        }

        options.weeks |= self.weeks;
        options.limit_to_hours |= self.limit_to_hours;
        options.keep_zero |= self.keep_zero;
        options.raise_exceptions |= self.raise_exceptions;
    }
}

/// Build the effective options: defaults, then the JSON file, then `TEMPUS_*`
/// variables, then command-line flags.
pub fn load_options(
    config_path: Option<&Path>,
    overrides: &OptionOverrides,
) -> anyhow::Result<Options> {
    let config_path = config_path
        .map(Path::to_path_buf)
        .or_else(|| env::var("TEMPUS_CONFIG").ok().map(PathBuf::from));

    let mut options = match config_path {
        Some(path) => read_options_file(&path)?,
        None => Options::default(),
    };

    apply_env(&mut options, |key| env::var(key).ok())?;
    overrides.apply(&mut options);

    let options = options.validated().context("invalid duration options")?;
    debug!(?options, "duration options resolved");
    Ok(options)
}

fn read_options_file(path: &Path) -> anyhow::Result<Options> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read options file `{}`", path.display()))?;
    let options = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse options file `{}`", path.display()))?;
    info!(path = %path.display(), "loaded options file");
    Ok(options)
}

fn apply_env<F>(options: &mut Options, lookup: F) -> anyhow::Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    options.hours_per_day = env_u64(&lookup, "TEMPUS_HOURS_PER_DAY", options.hours_per_day);
    options.days_per_month = env_u64(&lookup, "TEMPUS_DAYS_PER_MONTH", options.days_per_month);
    options.weeks = env_bool(&lookup, "TEMPUS_WEEKS", options.weeks);
    options.keep_zero = env_bool(&lookup, "TEMPUS_KEEP_ZERO", options.keep_zero);
    options.limit_to_hours = env_bool(&lookup, "TEMPUS_LIMIT_TO_HOURS", options.limit_to_hours);
    options.raise_exceptions =
        env_bool(&lookup, "TEMPUS_RAISE_EXCEPTIONS", options.raise_exceptions);

    if let Some(raw) = lookup("TEMPUS_DEFAULT_UNIT") {
        options.default_unit = raw.parse::<UnitName>().context("invalid TEMPUS_DEFAULT_UNIT")?;
    }

    if let Some(raw) = lookup("TEMPUS_FORMAT") {
        options.format = raw.parse::<Format>().context("invalid TEMPUS_FORMAT")?;
    }

    if let Some(units) = lookup("TEMPUS_UNITS").and_then(|raw| raw.trim().parse::<usize>().ok()) {
        options.units = Some(units);
    }

    if let Some(joiner) = lookup("TEMPUS_JOINER") {
        options.joiner = Some(joiner);
    }

    Ok(())
}

pub fn env_bool_var(key: &str, default: bool) -> bool {
    env_bool(&|name: &str| env::var(name).ok(), key, default)
}

fn env_bool<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        None => default,
    }
}

fn env_u64<F>(lookup: &F, key: &str, default: u64) -> u64
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value.trim().parse::<u64>().unwrap_or(default),
        None => default,
    }
}
