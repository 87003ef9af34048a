use tempus_core::alias::{JOIN_WORDS, aliases_for};
use tempus_core::units::unit_seconds;
use tempus_core::{Error, Options, UnitName};

use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "units",
    desc: "List unit spellings and their size in seconds.",
    category: "utility",
    usage: "units [unit]",
};

fn unit_line(unit: UnitName, options: &Options) -> String {
    format!(
        "{} ({} s): {}",
        unit,
        unit_seconds(unit, options),
        aliases_for(unit).join(", ")
    )
}

pub fn units(args: &str, options: &Options) -> Result<String, Error> {
    let wanted = args.trim();
    if !wanted.is_empty() {
        return Ok(match wanted.parse::<UnitName>() {
            Ok(unit) => unit_line(unit, options),
            Err(source) => source.to_string(),
        });
    }

    let mut lines: Vec<String> = UnitName::DISPLAY_ORDER
        .into_iter()
        .map(|unit| unit_line(unit, options))
        .collect();
    lines.push(format!("joining words: {}", JOIN_WORDS.join(", ")));
    Ok(lines.join("\n"))
}
