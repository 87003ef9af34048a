use crate::utility::messages::usage_message;
use crate::{COMMAND_PREFIX, COMMANDS, CommandMeta};
use tempus_core::{Error, Options};

pub const META: CommandMeta = CommandMeta {
    name: "usage",
    desc: "Show usage syntax for a specific command.",
    category: "utility",
    usage: "usage <command>",
};

pub fn usage(args: &str, _options: &Options) -> Result<String, Error> {
    let raw_name = args.trim();
    if raw_name.is_empty() {
        return Ok(usage_message(META.usage));
    }

    let lookup = raw_name
        .trim_start_matches(COMMAND_PREFIX)
        .to_ascii_lowercase();

    let Some(command) = COMMANDS.iter().find(|command| command.name == lookup) else {
        return Ok(format!("Unknown command: `{}`", lookup));
    };

    Ok(usage_message(command.usage))
}
