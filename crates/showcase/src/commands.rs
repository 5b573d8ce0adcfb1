//! Line commands understood by the terminal front end.

use std::str::FromStr;

use thiserror::Error;

use profiles::fields::ProfileField;
use profiles::filter::{CountryFilter, GenderFilter};

pub const HELP: &str = "\
Commands:
  list                     show the profile cards
  regenerate               replace all profiles with new random ones
  filters                  show or hide the filter panel
  gender <any|male|female> filter by gender
  age <min> <max>          filter by inclusive age range (18-80)
  country <name|any>       filter by country
  reset                    reset all filters
  open <n>                 open the detail view of card n
  close                    close the detail view
  copy <field>             copy a field of the open profile (e.g. email, credit-card)
  download                 save the open profile as JSON and close it
  help                     show this help
  quit                     exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Regenerate,
    ToggleFilters,
    Gender(GenderFilter),
    Age(u8, u8),
    Country(CountryFilter),
    Reset,
    Open(usize),
    Close,
    Copy(ProfileField),
    Download,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Missing argument for {0}")]
    MissingArgument(&'static str),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "list" | "ls" => Ok(Command::List),
            "regenerate" | "new" => Ok(Command::Regenerate),
            "filters" => Ok(Command::ToggleFilters),
            "gender" => required(rest, "gender")?
                .parse::<GenderFilter>()
                .map(Command::Gender)
                .map_err(|e| CommandError::InvalidArgument(format!("{e}"))),
            "age" => {
                let bounds: Vec<&str> = required(rest, "age")?.split_whitespace().collect();
                match bounds.as_slice() {
                    [min, max] => {
                        let parse = |s: &str| {
                            s.parse::<u8>()
                                .map_err(|_| CommandError::InvalidArgument(s.to_string()))
                        };
                        Ok(Command::Age(parse(*min)?, parse(*max)?))
                    }
                    _ => Err(CommandError::MissingArgument("age")),
                }
            }
            "country" => {
                let country: CountryFilter = required(rest, "country")?
                    .parse()
                    .unwrap_or(CountryFilter::Any);
                Ok(Command::Country(country))
            }
            "reset" => Ok(Command::Reset),
            "open" => required(rest, "open")?
                .parse::<usize>()
                .map(Command::Open)
                .map_err(|_| CommandError::InvalidArgument(rest.to_string())),
            "close" => Ok(Command::Close),
            "copy" => required(rest, "copy")?
                .parse::<ProfileField>()
                .map(Command::Copy)
                .map_err(|e| CommandError::InvalidArgument(format!("{e}"))),
            "download" => Ok(Command::Download),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn required<'a>(rest: &'a str, name: &'static str) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument(name))
    } else {
        Ok(rest)
    }
}
