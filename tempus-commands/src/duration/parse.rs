use anyhow::Context as _;

use crate::CommandMeta;
use crate::utility::messages::{NONE_REPLY, usage_message};
use tempus_core::{Error, Options};

pub const META: CommandMeta = CommandMeta {
    name: "parse",
    desc: "Convert duration text (e.g. 1h 30m, 3:41:59) to seconds.",
    category: "duration",
    usage: "parse <text>",
};

pub fn parse(args: &str, options: &Options) -> Result<String, Error> {
    let text = args.trim();
    if text.is_empty() {
        return Ok(usage_message(META.usage));
    }

    let seconds = tempus_utils::parse(text, options)
        .with_context(|| format!("failed to parse duration `{}`", text))?;

    Ok(seconds.map_or_else(|| NONE_REPLY.to_owned(), |seconds| seconds.to_string()))
}

#[cfg(test)]
mod tests {
    use super::parse;
    use tempus_core::Options;

    #[test]
    fn replies_with_seconds() {
        let options = Options::default();
        assert_eq!(parse("1h 30m", &options).expect("parse"), "5400");
        assert_eq!(parse("3:41:59", &options).expect("parse"), "13319");
        assert_eq!(parse("1.5 min", &options).expect("parse"), "90");
        assert_eq!(parse("0.5 sec", &options).expect("parse"), "0.5");
    }

    #[test]
    fn nothing_parseable_replies_none() {
        assert_eq!(parse("whenever", &Options::default()).expect("parse"), "none");
    }

    #[test]
    fn missing_text_replies_usage() {
        assert_eq!(
            parse("  ", &Options::default()).expect("parse"),
            "Usage: `parse <text>`"
        );
    }

    #[test]
    fn strict_mode_surfaces_the_word() {
        let options = Options {
            raise_exceptions: true,
            ..Options::default()
        };
        let error = parse("5 fortnights", &options).expect_err("strict");
        assert_eq!(error.to_string(), "failed to parse duration `5 fortnights`");
        assert_eq!(
            error.root_cause().to_string(),
            "an invalid word \"fortnights\" was used in the string to be parsed"
        );
    }
}
