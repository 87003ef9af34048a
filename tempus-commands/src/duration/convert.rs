use anyhow::Context as _;

use crate::CommandMeta;
use crate::utility::messages::{NONE_REPLY, usage_message};
use tempus_core::{Error, Options};

pub const META: CommandMeta = CommandMeta {
    name: "convert",
    desc: "Re-render duration text in the configured style.",
    category: "duration",
    usage: "convert <text>",
};

pub fn convert(args: &str, options: &Options) -> Result<String, Error> {
    let text = args.trim();
    if text.is_empty() {
        return Ok(usage_message(META.usage));
    }

    let parsed = tempus_utils::parse(text, options)
        .with_context(|| format!("failed to parse duration `{}`", text))?;

    Ok(parsed
        .and_then(|seconds| tempus_utils::format(seconds, options))
        .unwrap_or_else(|| NONE_REPLY.to_owned()))
}
