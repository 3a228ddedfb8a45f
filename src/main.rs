mod app;
mod grid;
mod help;
mod roster;
mod theme;
use crate::app::App;
use crate::grid::GridState;
use crate::roster::{Roster, YMD_FMT};
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::path::PathBuf;
use time::{Date, OffsetDateTime};

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        date: Option<Date>,
        roster: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut date = None;
        let mut roster = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('f') | Arg::Long("file") => {
                    roster = Some(PathBuf::from(parser.value()?));
                }
                Arg::Value(value) if date.is_none() => {
                    let value = value.string()?;
                    match Date::parse(&value, &YMD_FMT) {
                        Ok(d) => date = Some(d),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run { date, roster })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run { date, roster } => {
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                let roster = match roster {
                    Some(path) => Roster::load(&path)?,
                    None => Roster::sample(),
                };
                with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    let mut grid = GridState::new(today, roster);
                    if let Some(date) = date {
                        grid = grid.start_date(date);
                    }
                    App::new(grid).run(terminal)?;
                    Ok(())
                })
            }
            Command::Help => {
                println!("Usage: ptocal [-f FILE] [YYYY-MM-DD]");
                println!();
                println!("Terminal calendar grid showing per-employee paid-time-off by month");
                println!();
                println!("Options:");
                println!("  -f FILE, --file FILE    Read the PTO roster from FILE (a JSON array");
                println!("                          of {{\"name\", \"pto\"}} objects)");
                println!("  -h, --help              Display this help message and exit");
                println!("  -V, --version           Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}
