use dice_lib::Verbosity;

pub(crate) const COMMAND_SIGIL: char = ':';
pub(crate) const COMMANDS: [&str; 3] = [":help", ":quit", ":verbose"];

pub(crate) const HELP: &str = "\
*roll* an expression like `3d6 + 2` or `2d20 + 1d4 + 1`
`:verbose <0|1|2>` (`:v`) total only, flat sum, or a table per die size
`:quit` (`:q`) leave the repl";

/// One line typed at the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command<'a> {
    Roll(&'a str),
    Verbose(Verbosity),
    Help,
    Quit,
}

impl<'a> Command<'a> {
    pub(crate) fn parse(line: &'a str) -> Result<Self, String> {
        let line = line.trim();
        if !line.starts_with(COMMAND_SIGIL) {
            return Ok(Command::Roll(line));
        }
        let mut words = line.split_whitespace();
        match (words.next(), words.next(), words.next()) {
            (Some(":h" | ":help"), None, None) => Ok(Command::Help),
            (Some(":q" | ":quit"), None, None) => Ok(Command::Quit),
            (Some(":v" | ":verbose"), Some(level), None) => level
                .parse::<u8>()
                .map_err(|_| format!("not a verbosity `{}`", level))
                .and_then(|level| Verbosity::try_from(level).map_err(|e| e.to_string()))
                .map(Command::Verbose),
            _ => Err(format!("unknown command `{}`, try `:help`", line)),
        }
    }
}
