// Command line parsing
//
// A line is trimmed, then split at its first whitespace character into a
// keyword and the rest. Keywords are case-sensitive. The parser only checks
// syntax; range checks and date parsing happen when the command executes.

use crate::error::CommandError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Install,
    Current,
    Clear,
    /// Unix timestamp to convert
    Unix(i64),
    /// Timeslot to describe
    Slot(i64),
    /// Date string, verbatim
    Time(String),
}

impl Command {
    /// Parse one input line.
    ///
    /// Returns `Ok(None)` for blank input.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        // `rest` starts right after the first separating whitespace character
        let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, Some(rest)),
            None => (trimmed, None),
        };

        let command = match (keyword, rest) {
            ("help", None) => Command::Help,
            ("install", None) => Command::Install,
            ("current", None) => Command::Current,
            ("clear", None) => Command::Clear,
            ("unix", Some(rest)) => Command::Unix(parse_integer(rest, "unix timestamp")?),
            ("slot", Some(rest)) => Command::Slot(parse_integer(rest, "slot number")?),
            ("time", Some(text)) => Command::Time(text.to_string()),
            // A bare `unix`, `slot` or `time` is not a command either
            _ => return Err(CommandError::UnknownCommand(trimmed.to_string())),
        };

        Ok(Some(command))
    }

    /// Keyword this command was parsed from.
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Install => "install",
            Command::Current => "current",
            Command::Clear => "clear",
            Command::Unix(_) => "unix",
            Command::Slot(_) => "slot",
            Command::Time(_) => "time",
        }
    }
}

// Only the first token counts; anything after it is ignored.
fn parse_integer(rest: &str, what: &str) -> Result<i64, CommandError> {
    let token = rest.split_whitespace().next().unwrap_or(rest);
    token
        .parse::<i64>()
        .map_err(|_| CommandError::InvalidArgument(format!("invalid {}: '{}'", what, token)))
}
