use crate::CommandMeta;
use crate::utility::messages::{NONE_REPLY, invalid_seconds_message, usage_message};
use tempus_core::{Error, Options, Seconds};

pub const META: CommandMeta = CommandMeta {
    name: "format",
    desc: "Render a second count as human-readable text.",
    category: "duration",
    usage: "format <seconds>",
};

pub fn format(args: &str, options: &Options) -> Result<String, Error> {
    let raw = args.trim();
    if raw.is_empty() {
        return Ok(usage_message(META.usage));
    }

    let Ok(seconds) = raw.parse::<Seconds>() else {
        return Ok(invalid_seconds_message(raw, META.usage));
    };

    Ok(tempus_utils::format(seconds, options).unwrap_or_else(|| NONE_REPLY.to_owned()))
}
