//! Command implementations for the MEL CLI
//!
//! Batch parsing over files and directories, plus a token-stream dump for
//! debugging the lexer.

use std::fs;
use std::path::{Path, PathBuf};

use mel_syntax::lexer::{Lexer, TokenKind};
use mel_syntax::parser;

use super::{CliError, CliResult, ExitCode};

/// Parse every `.mel` file reachable from `paths` and print the canonical
/// rendering. Diagnostics go to stderr; any diagnostic makes the exit code
/// non-zero.
pub fn parse_paths(paths: &[PathBuf]) -> CliResult<ExitCode> {
    let files = collect_mel_files(paths)?;
    if files.is_empty() {
        return Err(CliError::failure("Error: no .mel files found"));
    }
    tracing::debug!(count = files.len(), "parsing files");

    let mut failed = false;
    for file in files {
        let source = read_source(&file)?;
        let parsed = parser::parse(&source);
        println!("{}:", file.display());
        println!("{}", parsed.program.to_source());
        for diagnostic in &parsed.diagnostics {
            eprintln!("{}: {}", file.display(), diagnostic);
        }
        failed |= !parsed.diagnostics.is_empty();
    }

    if failed {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Tokenize `file` and print one token per line: position, kind, text.
pub fn lex_file(file: &Path) -> CliResult<ExitCode> {
    let source = read_source(file)?;
    let mut lexer = Lexer::new(&source);
    loop {
        let token = lexer.next_token();
        println!(
            "line:{}.{}\t{}\t{:?}",
            token.row, token.column, token.kind, token.literal
        );
        if token.kind == TokenKind::Eof {
            break;
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Expand `paths` into the list of `.mel` files to parse: files are taken
/// as-is, directories are walked recursively in sorted order.
fn collect_mel_files(paths: &[PathBuf]) -> CliResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            walk_dir(path, &mut files)?;
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

fn walk_dir(dir: &Path, files: &mut Vec<PathBuf>) -> CliResult<()> {
    let entries = fs::read_dir(dir).map_err(|e| {
        CliError::failure(format!("Error reading directory {}: {}", dir.display(), e))
    })?;
    let mut children: Vec<PathBuf> = entries.filter_map(Result::ok).map(|e| e.path()).collect();
    children.sort();

    for child in children {
        if child.is_dir() {
            walk_dir(&child, files)?;
        } else if child.extension().is_some_and(|ext| ext == "mel") {
            files.push(child);
        }
    }
    Ok(())
}

fn read_source(file: &Path) -> CliResult<String> {
    fs::read_to_string(file)
        .map_err(|e| CliError::failure(format!("Error reading {}: {}", file.display(), e)))
}
