use std::env;
use std::process;

use clap::{ArgAction, Parser};
use serde::Serialize;
use tracing::level_filters::LevelFilter;

mod clipboard;
mod interactive;

/// Generate random passwords.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Number of characters in the password [default: 8].
    #[arg(short, long, allow_hyphen_values = true)]
    length: Option<i64>,
    /// Add the symbols !@#$%^&*(){}[]=<>,.?/:;~`| to the letters and digits.
    #[arg(short, long)]
    symbols: bool,
    /// Only use the digits 0-9. Takes precedence over --symbols.
    #[arg(short, long)]
    numbers_only: bool,
    /// Also copy the password to the clipboard. Nothing is printed if copying fails.
    #[arg(short, long, conflicts_with = "interactive")]
    copy: bool,
    /// Print the password and the settings used as JSON.
    #[arg(long, conflicts_with = "interactive")]
    json: bool,
    /// Adjust the settings, generate and copy passwords from a menu.
    #[arg(short, long)]
    interactive: bool,
    /// Log more; repeat for even more.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    config: genpass::GenerationConfig,
    password: &'a genpass::Secret,
}

fn run() -> Result<(), ProgError> {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.interactive {
        return interactive::run(initial_state(&args)?);
    }

    let length = args.length.unwrap_or(genpass::DEFAULT_LENGTH as i64);
    let config = genpass::GenerationConfig::try_new(length, args.symbols, args.numbers_only)?;
    tracing::debug!(?config, "parsed arguments");

    let password = config.generate()?;
    if args.copy {
        clipboard::send_to_clipboard(password.as_str().as_bytes())?;
        eprintln!("Copied to the clipboard.");
    }

    if args.json {
        let output = JsonOutput {
            config,
            password: &password,
        };
        let json = serde_json::to_string(&output)
            .map_err(|err| ProgError::Other(anyhow::Error::new(err)))?;
        println!("{json}");
    } else {
        println!("{}", password.as_str());
    }

    Ok(())
}

/// The interactive screen starts in its usual state; only flags actually given change it.
fn initial_state(args: &Args) -> Result<genpass::GeneratorState, genpass::GenerateError> {
    let mut state = genpass::GeneratorState::new();
    if let Some(length) = args.length {
        let config = genpass::GenerationConfig::try_new(length, false, false)?;
        state.set_length(config.length);
    }
    if args.symbols {
        state.set_include_symbols(true);
    }
    if args.numbers_only {
        state.set_numbers_only(true);
    }
    Ok(state)
}

fn main() {
    match run() {
        Ok(()) => (),
        Err(err) => {
            eprintln!("{err:#}");
            process::exit(1);
        }
    }
}

/// `-v` flags win over `GENPASS_LOG`; without either only warnings and errors are shown.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => env::var("GENPASS_LOG")
            .ok()
            .and_then(|level| level.parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::WARN),
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error(transparent)]
    Generate(#[from] genpass::GenerateError),
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<anyhow::Error> for ProgError {
    fn from(err: anyhow::Error) -> ProgError {
        ProgError::Other(err)
    }
}
