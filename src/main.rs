use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use mini_compiler::{
    ast::printer::pretty,
    errors::errors::{Error, ErrorPhase},
    lexer::{lexer::tokenize, tokens::Token},
    parser::parser::parse,
    render_error,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Which stages of the pipeline to print.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Emit {
    Tokens,
    Ast,
    All,
}

/// Tokenize and parse a mini-language source file, printing each stage.
#[derive(Parser, Debug)]
#[command(name = "minic", version, about)]
struct Args {
    /// Source file to compile; reads stdin when omitted or `-`
    file: Option<PathBuf>,

    /// Stages to print
    #[arg(long, value_enum, default_value_t = Emit::All)]
    emit: Emit,

    /// Print the syntax tree on a single line
    #[arg(long)]
    compact: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mini_compiler={0},minic={0}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_source(file: Option<&PathBuf>) -> anyhow::Result<(String, String)> {
    match file {
        Some(path) if path.as_os_str() != "-" => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok((source, path.display().to_string()))
        }
        _ => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("failed to read source from stdin")?;
            Ok((source, String::from("<stdin>")))
        }
    }
}

fn render_tokens(tokens: &[Token], out: &mut String) {
    out.push_str("=== Lexical Analysis ===\n");
    for token in tokens {
        out.push_str(&token.debug());
        out.push('\n');
    }
}

/// Runs the stages selected by `args`, appending their listings to `out`.
///
/// Stages that finished before an error keep their output in `out`.
fn compile(args: &Args, source: &str, out: &mut String) -> Result<(), Error> {
    let start = Instant::now();
    let tokens = tokenize(source)?;
    info!(elapsed = ?start.elapsed(), tokens = tokens.len(), "tokenized");

    if args.emit != Emit::Ast {
        render_tokens(&tokens, out);
    }
    if args.emit == Emit::Tokens {
        return Ok(());
    }

    let parse_start = Instant::now();
    let program = parse(tokens)?;
    info!(elapsed = ?parse_start.elapsed(), statements = program.body.len(), "parsed");

    if args.emit == Emit::All {
        out.push('\n');
    }
    out.push_str("=== Syntax Analysis ===\n");
    if args.compact {
        out.push_str(&program.to_string());
    } else {
        out.push_str(&pretty(&program));
    }
    out.push('\n');

    info!(elapsed = ?start.elapsed(), "total");
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let (source, file_name) = match read_source(args.file.as_ref()) {
        Ok(input) => input,
        Err(error) => {
            eprintln!("Error: {:#}", error);
            return ExitCode::FAILURE;
        }
    };

    let mut out = String::new();
    let result = compile(&args, &source, &mut out);
    print!("{}", out);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            match error.get_phase() {
                ErrorPhase::Lexical => warn!(%error, "lexical analysis failed"),
                ErrorPhase::Syntax => warn!(%error, "syntax analysis failed"),
            }
            eprintln!("{}", render_error(&error, &source, &file_name));
            ExitCode::FAILURE
        }
    }
}
