//! The command grammar the loop accepts.
//!
//! One input line is one command: whitespace-separated tokens, the first of
//! which names the operation. Dates are parsed here so a malformed date
//! surfaces as a [`CommandError`] before anything touches the store.

use crate::date::Date;
use crate::error::CommandError;

/// A fully parsed command, ready to run against a
/// [`Database`](crate::Database).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { date: Date, event: String },
    DeleteEvent { date: Date, event: String },
    DeleteDate { date: Date },
    Find { date: Date },
    Print,
}

impl Command {
    /// Parse one input line. `None` means the line was empty and should be
    /// skipped without output. A line of only whitespace is not empty: it
    /// has no operation token and reports an unknown command.
    pub fn parse(line: &str) -> Option<Result<Self, CommandError>> {
        if line.is_empty() {
            return None;
        }
        let mut tokens = line.split_whitespace();
        let operation = tokens.next().unwrap_or("");
        Some(Self::parse_operation(operation, tokens))
    }

    fn parse_operation<'a>(
        operation: &str,
        mut args: impl Iterator<Item = &'a str>,
    ) -> Result<Self, CommandError> {
        match operation {
            "Add" => {
                let date = parse_date_arg(&mut args)?;
                // A missing event token is kept as the empty string; the
                // store treats it like any other name.
                let event = args.next().unwrap_or("").to_string();
                Ok(Command::Add { date, event })
            }
            "Del" => {
                let date = parse_date_arg(&mut args)?;
                Ok(match args.next() {
                    Some(event) => Command::DeleteEvent {
                        date,
                        event: event.to_string(),
                    },
                    None => Command::DeleteDate { date },
                })
            }
            "Find" => Ok(Command::Find {
                date: parse_date_arg(&mut args)?,
            }),
            "Print" => Ok(Command::Print),
            unknown => Err(CommandError::Unknown(unknown.to_string())),
        }
    }
}

/// Take the next token as a date; a missing token parses the empty string
/// and fails with its format error.
fn parse_date_arg<'a>(
    args: &mut impl Iterator<Item = &'a str>,
) -> Result<Date, CommandError> {
    Ok(args.next().unwrap_or("").parse::<Date>()?)
}
