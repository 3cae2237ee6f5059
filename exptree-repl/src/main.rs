//! An interactive shell for creating, differentiating, simplifying and evaluating named expression
//! trees.
//!
//! Usage: `exptree [--steps] [FILE]`
//!
//! With a file, each line of the file is run as a command. Otherwise, each line of stdin is run if
//! stdin is not a terminal, or an interactive session is started. `--steps` lists the rules
//! applied by `simplify`.

mod command;
mod error;
mod visualize;

use command::{Response, Session};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs::File, io::{self, BufRead, BufReader, IsTerminal}, process::ExitCode};

/// Runs one line of input, printing the output or the error. Returns `false` if the session should
/// end.
fn run_line(session: &mut Session, line: &str) -> bool {
    match session.execute(line) {
        Ok(Response::Print(output)) => println!("{}", output),
        Ok(Response::Nothing) => (),
        Ok(Response::Stop) => return false,
        Err(err) => err.report_to_stderr(line),
    }
    true
}

/// Runs every line from the reader, until the input ends or a `stop` command.
fn run_lines(session: &mut Session, reader: impl BufRead) -> io::Result<()> {
    for line in reader.lines() {
        if !run_line(session, &line?) {
            break;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let mut show_steps = false;
    let mut filename = None;
    for arg in std::env::args().skip(1) {
        if arg == "--steps" {
            show_steps = true;
        } else {
            filename = Some(arg);
        }
    }

    let mut session = Session::new(show_steps);

    let result = if let Some(filename) = filename {
        // run source file
        File::open(&filename)
            .and_then(|file| run_lines(&mut session, BufReader::new(file)))
            .map_err(|err| format!("{}: {}", filename, err))
    } else if !io::stdin().is_terminal() {
        // read commands from stdin
        run_lines(&mut session, io::stdin().lock())
            .map_err(|err| err.to_string())
    } else {
        // run the repl / interactive mode
        println!("{}", Session::banner());

        fn process_line(rl: &mut DefaultEditor, session: &mut Session) -> Result<bool, ReadlineError> {
            let input = rl.readline("> ")?;
            if input.trim().is_empty() {
                return Ok(true);
            }

            rl.add_history_entry(&input)?;
            Ok(run_line(session, &input))
        }

        DefaultEditor::new()
            .and_then(|mut rl| {
                loop {
                    match process_line(&mut rl, &mut session) {
                        Ok(true) => (),
                        Ok(false) | Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
                        Err(err) => return Err(err),
                    }
                }
            })
            .map_err(|err| err.to_string())
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        },
    }
}
