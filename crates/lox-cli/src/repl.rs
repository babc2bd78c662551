//! Interactive read-scan-print loop.
//!
//! The scanner itself is stateless across calls; this driver owns the
//! input loop, history, and exit handling. Each submitted line is an
//! independent scan invocation.

use lox_lexer::Scanner;
use owo_colors::OwoColorize;
use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};
use std::process::ExitCode;

/// Scan one source string, dump its token stream, and print every
/// diagnostic in contract format. Returns true when the source was
/// lexically clean.
pub fn scan_and_report(source: &str) -> bool {
    let out = Scanner::scan(source);

    for token in &out.tokens {
        println!("{token}");
    }
    for err in &out.diagnostics {
        eprintln!("{}", err.red());
    }

    out.diagnostics.is_empty()
}

/// The `exit` directive terminates the loop, whatever its case.
fn is_exit_directive(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("exit")
}

fn build_editor() -> rustyline::Result<DefaultEditor> {
    let config = Config::builder()
        .history_ignore_dups(true)?
        .auto_add_history(true)
        .build();
    DefaultEditor::with_config(config)
}

/// Run the interactive prompt until `exit`, Ctrl-D, or a closed input
/// stream.
pub fn run() -> ExitCode {
    let mut editor = match build_editor() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("{}: failed to initialize prompt: {e}", "Error".red().bold());
            return ExitCode::FAILURE;
        }
    };

    loop {
        match editor.readline(&format!("{} ", "lox>".bright_green().bold())) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if is_exit_directive(trimmed) {
                    println!("Exiting...");
                    break;
                }
                scan_and_report(trimmed);
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".dimmed());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "^D".dimmed());
                break;
            }
            Err(e) => {
                eprintln!("{}: {e}", "Error".red().bold());
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
