use std::path::PathBuf;

use clap::Parser;
use lithp::render_line;
use rustyline::{DefaultEditor, error::ReadlineError};

/// lithp is an interactive calculator for prefix arithmetic such as
/// `+ 1 (* 2 3)`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The prompt shown before each line.
    #[arg(long, default_value = "lithp> ")]
    prompt: String,

    /// Skips the startup banner.
    #[arg(short, long)]
    quiet: bool,

    /// Significant digits used when printing decimals.
    #[arg(short, long, default_value_t = 6)]
    precision: usize,

    /// A file to load line history from at startup and save it to on exit.
    #[arg(long)]
    history: Option<PathBuf>,

    /// Evaluates this one line and exits instead of starting the REPL.
    expression: Option<String>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    if let Some(expression) = &args.expression {
        if !evaluate_line(expression, args.precision) {
            std::process::exit(1);
        }
        return;
    }

    if let Err(e) = repl(&args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Reads, evaluates, and prints lines until Ctrl-C or end of input.
fn repl(args: &Args) -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;

    if let Some(path) = &args.history
       && let Err(e) = editor.load_history(path)
    {
        log::warn!("could not load history from {}: {e}", path.display());
    }

    if !args.quiet {
        println!("Lithp Version {}", env!("CARGO_PKG_VERSION"));
        println!("Press Ctrl+c to Exit\n");
    }

    loop {
        match editor.readline(&args.prompt) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                editor.add_history_entry(line.as_str())?;
                evaluate_line(&line, args.precision);
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        }
    }

    if let Some(path) = &args.history
       && let Err(e) = editor.save_history(path)
    {
        log::warn!("could not save history to {}: {e}", path.display());
    }

    Ok(())
}

/// Evaluates one line, printing the value to stdout or the syntax error to
/// stderr. Returns whether the line parsed.
fn evaluate_line(line: &str, precision: usize) -> bool {
    match render_line(line, precision) {
        Ok(text) => {
            println!("{text}");
            true
        },
        Err(diagnostic) => {
            eprintln!("{diagnostic}");
            false
        },
    }
}
