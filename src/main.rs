use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use assignment_interpreter::{execute, parse, tokenize};
use clap::Parser;

/// Evaluates a single assignment statement such as `x = 2 + 3 * (4 - 1);`.
///
/// With neither STATEMENT nor --file, one line is read from stdin.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Read the statement from this file.
    #[arg(short, long, conflicts_with = "statement")]
    file: Option<PathBuf>,

    /// Print the token stream instead of evaluating.
    #[arg(long, conflicts_with = "ast")]
    tokens: bool,

    /// Print the parsed tree instead of evaluating.
    #[arg(long)]
    ast: bool,

    statement: Option<String>,
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn read_statement(args: &Args) -> io::Result<String> {
    if let Some(statement) = &args.statement {
        return Ok(statement.clone());
    }
    if let Some(path) = &args.file {
        return fs::read_to_string(path);
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        print!("Enter a statement (e.g., x = 2 + 3 * (4 - 1);):\n> ");
        io::stdout().flush()?;
    }
    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    Ok(line)
}

fn run(args: &Args, statement: &str) -> Result<String, assignment_interpreter::Error> {
    if args.tokens {
        let tokens = tokenize(statement)?;
        return Ok(tokens
            .iter()
            .map(|token| format!("{:?} {}\n", token.kind, token.describe()))
            .collect());
    }
    if args.ast {
        return Ok(format!("{}\n", parse(statement)?));
    }
    Ok(execute(statement)?.to_string())
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let statement = read_statement(&args).unwrap_or_else(|err| {
        eprintln!("error: failed to read statement: {err}");
        process::exit(1);
    });

    match run(&args, &statement) {
        Ok(output) => print!("{output}"),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}
