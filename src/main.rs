//! datebook-cli - line-oriented datebook of events
//!
//! Reads commands from stdin, one per line, and answers on stdout:
//!
//!   Add <date> <event>
//!   Del <date> [<event>]
//!   Find <date>
//!   Print
//!
//! The store lives in memory for the lifetime of the process; end of input
//! ends the program.

use anyhow::Result;
use datebook_core::{Database, repl};
use std::io;

fn main() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut db = Database::new();
    repl::run(&mut db, stdin.lock(), stdout.lock())?;

    Ok(())
}
