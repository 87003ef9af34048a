pub mod duration;
pub mod utility;

use tracing::debug;

use tempus_core::{Error, Options};

/// Optional prefix accepted in front of command names (`!parse 1h`).
pub const COMMAND_PREFIX: char = '!';

pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

/// Every command takes its raw argument text and the active options.
pub type Handler = fn(&str, &Options) -> Result<String, Error>;

pub const COMMANDS: &[CommandMeta] = &[
    utility::help::META,
    utility::usage::META,
    utility::units::META,
    duration::parse::META,
    duration::format::META,
    duration::convert::META,
];

pub fn handler(name: &str) -> Option<Handler> {
    let handler: Handler = match name {
        "help" => utility::help::help,
        "usage" => utility::usage::usage,
        "units" => utility::units::units,
        "parse" => duration::parse::parse,
        "format" => duration::format::format,
        "convert" => duration::convert::convert,
        _ => return None,
    };
    Some(handler)
}

/// Route one input line (`[!]<command> [args]`) to its handler.
pub fn dispatch(line: &str, options: &Options) -> Result<String, Error> {
    let line = line.trim();
    let line = line.strip_prefix(COMMAND_PREFIX).unwrap_or(line).trim_start();
    let (name, args) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let name = name.to_ascii_lowercase();

    let Some(handler) = handler(&name) else {
        debug!(command = %name, "unknown command invocation");
        return Ok(utility::messages::unknown_command_message(&name));
    };

    handler(args.trim(), options)
}

#[cfg(test)]
mod tests {
    use super::{COMMANDS, dispatch, handler};
    use tempus_core::Options;

    #[test]
    fn every_listed_command_has_a_handler() {
        for command in COMMANDS {
            assert!(handler(command.name).is_some(), "{}", command.name);
        }
    }

    #[test]
    fn dispatches_with_or_without_prefix() {
        let options = Options::default();
        assert_eq!(dispatch("parse 1h 30m", &options).expect("parse"), "5400");
        assert_eq!(dispatch("!parse 1h 30m", &options).expect("parse"), "5400");
        assert_eq!(dispatch("  FORMAT   3600 ", &options).expect("format"), "1 hr");
    }

    #[test]
    fn unknown_commands_point_to_help() {
        let reply = dispatch("frobnicate 3", &Options::default()).expect("reply");
        assert_eq!(
            reply,
            "Unknown command: `frobnicate`. Run `help` to list commands."
        );
    }

    #[test]
    fn strict_parse_errors_propagate() {
        let options = Options {
            raise_exceptions: true,
            ..Options::default()
        };
        let error = dispatch("parse forty two", &options).expect_err("strict");
        assert!(format!("{error:#}").contains("\"forty\""));
    }
}
