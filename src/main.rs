use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use clap::Parser;
use semicalc::evaluate;

/// semicalc evaluates semicolon-terminated arithmetic and boolean
/// statements, one per line, and reports each value or a precise error.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the input as a literal statement instead of a file path.
    #[arg(short, long)]
    expr: bool,

    /// Write the report to this file instead of standard output.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// A file of statements, or with --expr the statement itself.
    input: String,
}

fn main() {
    let args = Args::parse();

    let source = if args.expr {
        args.input
    } else {
        fs::read_to_string(&args.input).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.input);
            std::process::exit(1);
        })
    };

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file = File::create(path).unwrap_or_else(|e| {
                eprintln!("Failed to create the output file '{}': {e}", path.display());
                std::process::exit(1);
            });
            Box::new(BufWriter::new(file))
        },
        None => Box::new(io::stdout().lock()),
    };

    if let Err(e) = report(&source, &mut out) {
        eprintln!("Failed to write the report: {e}");
        std::process::exit(1);
    }
}

/// Writes the per-line report for a whole source text.
///
/// Each input line is echoed as-is, followed by `Syntax OK` and the value
/// on success, or the error's kind-specific message on failure.
fn report(source: &str, out: &mut dyn Write) -> io::Result<()> {
    for line in source.lines() {
        writeln!(out, "{line}")?;
        match evaluate(line) {
            Ok(value) => {
                writeln!(out, "Syntax OK")?;
                writeln!(out, "Value is {value}")?;
            },
            Err(e) => writeln!(out, "{e}")?,
        }
    }
    out.flush()
}
