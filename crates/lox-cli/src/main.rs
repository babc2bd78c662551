use clap::Parser;
use owo_colors::OwoColorize;
use std::path::Path;
use std::process::ExitCode;

mod repl;

#[derive(Parser)]
#[command(name = "lox")]
#[command(about = "Lox scripting language front end")]
#[command(version)]
struct Cli {
    /// Script file to tokenize; omit to start the interactive prompt
    script: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.script {
        Some(path) => run_file(&path),
        None => repl::run(),
    }
}

fn read_source(path: &str) -> Result<String, ExitCode> {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("{}: file not found: {path}", "Error".red().bold());
        return Err(ExitCode::FAILURE);
    }
    std::fs::read_to_string(p).map_err(|e| {
        eprintln!("{}: reading {path}: {e}", "Error".red().bold());
        ExitCode::FAILURE
    })
}

fn run_file(path: &str) -> ExitCode {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(code) => return code,
    };

    if repl::scan_and_report(&source) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
