//! Simple command line tool to convert between units of measurement.
//!
//! Type a conversion in the form: `<value> <from> <to>`, e.g. `1.5 m ft`, or `<value> <from>` to
//! convert to the reference unit of the quantity. Type `quantities` to list the known quantities,
//! and `units <quantity>` to list the units of one.
//!
//! Set `RUST_LOG` (e.g. `RUST_LOG=measures=debug`) to see diagnostic logs on stderr.

mod command;
mod error;
mod registry;

use command::Command;
use measures_error::Error;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::io::{self, BufRead, IsTerminal};
use tracing_subscriber::EnvFilter;

/// Parses and executes the given line of input. Returns [`None`] if the line is blank.
fn run(input: &str) -> Result<Option<String>, Error> {
    Command::parse(input)?
        .map(|command| command.execute())
        .transpose()
}

/// Runs the given line of input, printing the output or the error report.
fn run_and_print(input: &str) {
    match run(input) {
        Ok(Some(output)) => println!("{}", output),
        Ok(None) => (),
        Err(err) => {
            if let Err(io_err) = err.report_to_stderr(input) {
                tracing::error!(%io_err, "failed to print error report");
            }
        },
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if !io::stdin().is_terminal() {
        // read conversions from stdin, one per line
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => run_and_print(&line),
                Err(err) => {
                    eprintln!("{}", err);
                    break;
                },
            }
        }
        return;
    }

    // run the repl / interactive mode
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("{}", err);
            return;
        },
    };

    fn process_line(rl: &mut DefaultEditor) -> Result<(), ReadlineError> {
        let input = rl.readline("> ")?;
        if input.trim().is_empty() {
            return Ok(());
        }

        rl.add_history_entry(&input)?;
        run_and_print(&input);
        Ok(())
    }

    loop {
        if let Err(err) = process_line(&mut rl) {
            match err {
                ReadlineError::Eof | ReadlineError::Interrupted => (),
                _ => eprintln!("{}", err),
            }
            break;
        }
    }
}
