// SPDX-License-Identifier: MIT
//
// swatch: preview tool for the generated theme matrix.
//
// Builds the process-wide matrix exactly the way an app would at startup
// (so a bad seed or an illegible variant fails here first) and prints it:
//
//   swatch list          every variant and alias
//   swatch show <name>   all 40 tokens of one variant or alias
//   swatch report        measured ratio of every guarded pair
//
// Log output goes to stderr and is filtered by SWATCH_LOG (default: warn),
// e.g. `SWATCH_LOG=debug swatch report` to see each variant as it is built.

use std::env;
use std::fmt::Write as _;
use std::process;

use swatch_color::WCAG_AA;
use swatch_theme::{ThemeMatrix, Token};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
usage: swatch <command>

commands:
  list          list theme variants and aliases
  show <name>   print every token of a variant or alias
  report        print the contrast of every guarded pair
  help          show this message";

// ─── Commands ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    List,
    Show(String),
    Report,
    Help,
}

impl Command {
    /// Parse the arguments after the program name.
    fn parse(args: &[String]) -> Option<Self> {
        match args {
            [] => Some(Self::Help),
            [cmd] if cmd == "list" => Some(Self::List),
            [cmd] if cmd == "report" => Some(Self::Report),
            [cmd] if cmd == "help" || cmd == "-h" || cmd == "--help" => Some(Self::Help),
            [cmd, name] if cmd == "show" => Some(Self::Show(name.clone())),
            _ => None,
        }
    }
}

fn render_list(matrix: &ThemeMatrix) -> String {
    let mut out = String::new();
    for name in matrix.canonical_keys() {
        let _ = writeln!(out, "{name}");
    }
    for (alias, target) in matrix.aliases() {
        let _ = writeln!(out, "{alias} -> {target}");
    }
    out
}

/// Every token of `name`, or `None` if the matrix has no such entry.
fn render_show(matrix: &ThemeMatrix, name: &str) -> Option<String> {
    let set = matrix.get(name)?;
    let mut out = String::new();
    match matrix.alias_target(name) {
        Some(target) => {
            let _ = writeln!(out, "{name} -> {target}");
        }
        None => {
            let _ = writeln!(out, "{name}");
        }
    }
    let width = Token::ALL.iter().map(|t| t.name().len()).max().unwrap_or(0);
    for (token, value) in set.iter() {
        let _ = writeln!(out, "  {:<width$}  {value}", token.name());
    }
    Some(out)
}

fn render_report(matrix: &ThemeMatrix) -> String {
    let mut out = String::new();
    for (name, rows) in matrix.contrast_report() {
        let _ = writeln!(out, "{name}");
        for row in rows {
            let mark = if row.ratio >= WCAG_AA { "ok" } else { "FAIL" };
            let pair = format!("{} on {}", row.foreground, row.background);
            let _ = writeln!(out, "  {pair:<40} {:>6.2}:1  {mark}", row.ratio);
        }
    }
    out
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn init_logging() {
    let filter = EnvFilter::try_from_env("SWATCH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = Command::parse(&args) else {
        eprintln!("swatch: unknown command: {}", args.join(" "));
        eprintln!("{USAGE}");
        process::exit(2);
    };

    debug!(?command, "swatch starting");

    if command == Command::Help {
        println!("{USAGE}");
        return;
    }

    let matrix = swatch_theme::matrix::init().unwrap_or_else(|e| {
        eprintln!("swatch: {e}");
        process::exit(1);
    });

    match command {
        Command::List => print!("{}", render_list(matrix)),
        Command::Report => print!("{}", render_report(matrix)),
        Command::Show(name) => {
            if let Some(text) = render_show(matrix, &name) {
                print!("{text}");
            } else {
                eprintln!("swatch: unknown theme {name:?} (try `swatch list`)");
                process::exit(2);
            }
        }
        Command::Help => {}
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
