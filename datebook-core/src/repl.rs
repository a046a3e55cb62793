//! The command loop: lines in, protocol lines out.

use std::io::{BufRead, Write};

use crate::command::Command;
use crate::database::Database;

/// Process commands from `input` against `db` until end of input, writing
/// responses to `output`.
///
/// Command errors are written as protocol lines and never stop the loop. A
/// failed read is reported on stderr and ends the loop, matching a clean end
/// of input. Output is flushed after every command so a driving process sees
/// each response before sending the next line.
pub fn run<R: BufRead, W: Write>(
    db: &mut Database,
    input: R,
    mut output: W,
) -> std::io::Result<()> {
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Failed to read input: {}", e);
                break;
            }
        };

        match Command::parse(&line) {
            None => continue,
            Some(Err(e)) => writeln!(output, "{}", e)?,
            Some(Ok(command)) => execute(db, command, &mut output)?,
        }
        output.flush()?;
    }

    Ok(())
}

fn execute<W: Write>(db: &mut Database, command: Command, output: &mut W) -> std::io::Result<()> {
    match command {
        Command::Add { date, event } => db.add_event(date, event),
        Command::DeleteEvent { date, event } => {
            if db.delete_event(date, &event) {
                writeln!(output, "Deleted successfully")?;
            } else {
                writeln!(output, "Event not found")?;
            }
        }
        Command::DeleteDate { date } => {
            writeln!(output, "Deleted {} events", db.delete_date(date))?;
        }
        Command::Find { date } => {
            for event in db.find(date) {
                writeln!(output, "{}", event)?;
            }
        }
        Command::Print => {
            for (date, event) in db.iter() {
                writeln!(output, "{} {}", date, event)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(script: &str) -> String {
        let mut db = Database::new();
        let mut output = Vec::new();
        run(&mut db, script.as_bytes(), &mut output).expect("in-memory run should not fail");
        String::from_utf8(output).expect("output is UTF-8")
    }

    #[test]
    fn add_is_silent_and_find_lists() {
        assert_eq!(session("Add 2021-1-1 party\nFind 2021-1-1\n"), "party\n");
    }

    #[test]
    fn date_errors_do_not_stop_the_loop() {
        let output = session("Add 2021/01/01 party\nAdd 2021-1-1 party\nFind 2021-1-1\n");
        assert_eq!(output, "Wrong date format: 2021/01/01\nparty\n");
    }

    #[test]
    fn empty_lines_produce_no_output() {
        assert_eq!(session("\n\nPrint\n"), "");
    }

    #[test]
    fn input_without_final_newline_is_processed() {
        assert_eq!(session("Add 2021-1-1 party\nFind 2021-1-1"), "party\n");
    }
}
