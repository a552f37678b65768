mod command;
mod helper;

use command::Command;
use command::HELP;
use helper::ReplHelper;

use colored::Colorize;
use dice_lib::DiceExpression;
use dice_lib::RollOutcome;
use dice_lib::Verbosity;
use rustyline::error::ReadlineError;
use rustyline::hint::HistoryHinter;
use rustyline::CompletionType;
use rustyline::Config;
use rustyline::EditMode;
use rustyline::Editor;
use rustyline::Result;
use termimad::crossterm::style::Color;
use termimad::MadSkin;

const HISTORY_FILE: &str = "history";

fn render(
    skin: &MadSkin,
    expression: &DiceExpression,
    outcome: &RollOutcome,
    verbosity: Verbosity,
) {
    match verbosity {
        Verbosity::Total | Verbosity::Sum => println!(
            "{}",
            skin.inline(&format!("`{}` = **{}**", expression, outcome.pretty(verbosity)))
        ),
        Verbosity::Table => {
            println!("{}", skin.inline(&format!("`{}`", expression)));
            println!("{}", outcome.pretty(verbosity).magenta());
        }
    }
}

fn main() -> Result<()> {
    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();
    let helper = ReplHelper {
        hinter: HistoryHinter {},
        colored: "".to_owned(),
    };
    let mut skin = MadSkin::default();
    skin.bold.set_fg(Color::Yellow);
    skin.inline_code.set_fg(Color::Magenta);
    let mut rline = Editor::with_config(config)?;
    rline.set_helper(Some(helper));
    if rline.load_history(HISTORY_FILE).is_err() {
        eprintln!("{}", "repl: warn: no previous history".bold().yellow());
    }
    let mut verbosity = Verbosity::Sum;
    let mut count = 1u64;
    loop {
        let prompt = format!("repl: {}> ", count);
        if let Some(helper) = rline.helper_mut() {
            helper.colored = prompt.bold().green().to_string();
        }
        let readline = rline.readline(&prompt);
        match readline {
            Ok(line) => {
                rline.add_history_entry(line.as_str())?;
                match Command::parse(&line) {
                    Ok(Command::Roll("")) => (),
                    Ok(Command::Roll(input)) => match DiceExpression::parse(input)
                        .and_then(|dice| Ok((dice.roll()?, dice)))
                    {
                        Ok((outcome, dice)) => render(&skin, &dice, &outcome, verbosity),
                        Err(error) => {
                            eprintln!("{}", format!("repl: error: {}", error).bold().red())
                        }
                    },
                    Ok(Command::Verbose(level)) => {
                        verbosity = level;
                        eprintln!(
                            "{}",
                            format!("repl: verbosity {}", u8::from(level)).bold().yellow()
                        );
                    }
                    Ok(Command::Help) => println!("{}", skin.term_text(HELP)),
                    Ok(Command::Quit) => break,
                    Err(error) => {
                        eprintln!("{}", format!("repl: error: {}", error).bold().red())
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("{}", "repl: signal: CTRL-C".bold().yellow());
                break;
            }
            Err(ReadlineError::Eof) => {
                eprintln!("{}", "repl: signal: CTRL-D".bold().yellow());
                break;
            }
            Err(error) => {
                eprintln!("{}", format!("repl: error: `{:?}`", error).bold().red());
                break;
            }
        }
        count += 1;
    }
    rline.append_history(HISTORY_FILE)
}
