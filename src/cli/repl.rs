//! Interactive read-parse-print loop
//!
//! Reads one line at a time, parses it, and prints either the canonical
//! rendering or the diagnostics, tab-indented, in source order.

use std::io::{self, BufRead, Write};

use mel_syntax::parser;

use super::{CliError, CliResult, ExitCode};

const PROMPT: &str = ">> ";

/// Start the REPL on stdin/stdout. Returns when the input stream ends.
pub fn start() -> CliResult<ExitCode> {
    println!("This is the MEL dialect frontend. Type in statements to see their parse.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("{PROMPT}");
        stdout
            .flush()
            .map_err(|e| CliError::failure(format!("Error writing prompt: {}", e)))?;

        line.clear();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .map_err(|e| CliError::failure(format!("Error reading input: {}", e)))?;
        if read == 0 {
            break;
        }

        let parsed = parser::parse(&line);
        if parsed.diagnostics.is_empty() {
            println!("{}", parsed.program.to_source());
        } else {
            for diagnostic in &parsed.diagnostics {
                println!("\t{diagnostic}");
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
