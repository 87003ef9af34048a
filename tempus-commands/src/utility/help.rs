use crate::utility::messages::{grouped_help_description, unknown_category_message};
use crate::{COMMANDS, CommandMeta};
use tempus_core::{Error, Options};

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Lists out all available commands.",
    category: "utility",
    usage: "help [category]",
};

pub fn help(args: &str, _options: &Options) -> Result<String, Error> {
    let query = args.trim().to_ascii_lowercase();
    let category = Some(query.as_str()).filter(|raw| !raw.is_empty());

    let mut categories: Vec<&str> = COMMANDS.iter().map(|c| c.category).collect();
    categories.sort_unstable();
    categories.dedup();

    if let Some(wanted_category) = category
        && !categories.contains(&wanted_category)
    {
        return Ok(unknown_category_message(wanted_category, &categories));
    }

    let commands = sorted_commands(category);
    Ok(grouped_help_description(&commands))
}

fn sorted_commands(category: Option<&str>) -> Vec<&'static CommandMeta> {
    let mut filtered: Vec<&'static CommandMeta> = COMMANDS
        .iter()
        .filter(|cmd| match category {
            Some(wanted) => cmd.category == wanted,
            None => true,
        })
        .collect();

    filtered.sort_unstable_by(|left, right| {
        left.category
            .cmp(right.category)
            .then_with(|| left.name.cmp(right.name))
    });

    filtered
}

#[cfg(test)]
mod tests {
    use super::{help, sorted_commands};
    use tempus_core::Options;

    #[test]
    fn commands_sort_by_category_then_name() {
        let names: Vec<&str> = sorted_commands(None).iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec!["convert", "format", "parse", "help", "units", "usage"]
        );
    }

    #[test]
    fn filters_by_category() {
        let reply = help("Duration", &Options::default()).expect("help");
        assert!(reply.starts_with("Duration\n"));
        assert!(reply.contains("convert"));
        assert!(!reply.contains("units"));
    }

    #[test]
    fn unknown_category_is_reported() {
        let reply = help("misc", &Options::default()).expect("help");
        assert!(reply.starts_with("Unknown category: Misc"));
    }
}
