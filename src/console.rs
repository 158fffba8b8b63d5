//! Команды консольного интерфейса виджета.

use std::str::FromStr;
use thiserror::Error;

use crate::config::{ConfigError, RowCountInput};
use crate::models::SeatId;

pub const HELP: &str = "\
Commands:
  rows <3-10>   set number of rows
  search        fetch seats for the current number of rows
  seat <n>      select or unselect seat n
  submit        book the selected seats
  show          print the seating chart
  json          print the view state as JSON
  help          show this help
  quit          exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Rows(i64),
    Search,
    Seat(SeatId),
    Submit,
    Show,
    Json,
    Help,
    Quit,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}', type 'help'")]
    Unknown(String),
    #[error("'{0}' expects an argument")]
    MissingArgument(&'static str),
    #[error("invalid seat number '{0}'")]
    InvalidSeat(String),
    #[error("rows must be between 3 and 10")]
    InvalidRows(#[from] ConfigError),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let name = parts.next().ok_or(CommandError::Empty)?.to_ascii_lowercase();
        let arg = parts.next();

        match name.as_str() {
            "rows" => {
                let raw = arg.ok_or(CommandError::MissingArgument("rows"))?;
                Ok(Command::Rows(RowCountInput::parse(raw)?))
            }
            "search" => Ok(Command::Search),
            "seat" | "click" => {
                let raw = arg.ok_or(CommandError::MissingArgument("seat"))?;
                raw.parse::<SeatId>()
                    .map(Command::Seat)
                    .map_err(|_| CommandError::InvalidSeat(raw.to_string()))
            }
            "submit" => Ok(Command::Submit),
            "show" => Ok(Command::Show),
            "json" => Ok(Command::Json),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
