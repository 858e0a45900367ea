use std::fs;

use asmexpr::{Options, get_result};
use clap::Parser;

/// asmexpr evaluates scripts in an assembler's expression language.
///
/// A script is a sequence of lines, each either `let NAME = expr`,
/// `assert expr`, `org expr` or a bare expression.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells asmexpr to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode automatically prints out the value of the last expression
    /// statement of the script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// The program counter the script starts at.
    #[arg(long, default_value_t = 0, value_parser = parse_origin)]
    origin: u64,

    /// Defines a symbol before the script runs, written `NAME=EXPR`.
    #[arg(short = 'D', long = "define", value_name = "NAME=EXPR")]
    definitions: Vec<String>,

    /// Increases logging verbosity (`-v` debug, `-vv` trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let options = Options { origin:      args.origin,
                            definitions: args.definitions,
                            auto_print:  args.pipe_mode, };

    if let Err(e) = get_result(&script, &options) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Reads an origin written in decimal or with a `0x` or `0b` prefix.
fn parse_origin(text: &str) -> Result<u64, String> {
    let (digits, radix) = if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        (hex, 16)
    } else if let Some(bin) = text.strip_prefix("0b").or_else(|| text.strip_prefix("0B")) {
        (bin, 2)
    } else {
        (text, 10)
    };

    u64::from_str_radix(digits, radix).map_err(|e| format!("invalid origin '{text}': {e}"))
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over `-v`.
fn setup_logging(verbose: u8) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                                                      EnvFilter::new(match verbose {
                                                                         0 => "warn",
                                                                         1 => "debug",
                                                                         _ => "trace",
                                                                     })
                                                  });

    let formatter = tracing_subscriber::fmt::layer().with_writer(std::io::stderr)
                                                    .with_target(false)
                                                    .with_level(true);

    tracing_subscriber::registry().with(formatter).with(filter).init();
}
