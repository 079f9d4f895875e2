//! Placeholder Resolver CLI
//!
//! Usage:
//!   placeholder-resolver [OPTIONS] --recipient <ADDR> [FILE]
//!
//! Options:
//!   -r, --recipient <ADDR>   Recipient to expand the template for (repeatable)
//!   -c, --config <FILE>      Resolver configuration (TOML format)
//!   -d, --data-dir <DIR>     Directory holding the lookup lists
//!   --strict                 Exit with status 2 if any marker had no data
//!   --list-markers           Show the supported markers
//!   -h, --help               Print help

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use placeholder_resolver::{Family, Marker, Resolver, ResolverConfig};

#[derive(Parser)]
#[command(name = "placeholder-resolver")]
#[command(about = "Preview per-recipient expansion of ##marker## templates")]
struct Cli {
    /// Template file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Recipient address; the template is expanded once per recipient
    #[arg(short, long = "recipient", required_unless_present = "list_markers")]
    recipients: Vec<String>,

    /// Resolver configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the lookup lists, overrides the config
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Exit with status 2 if any marker had no data
    #[arg(long)]
    strict: bool,

    /// Show the supported markers
    #[arg(long)]
    list_markers: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.list_markers {
        print_markers();
        return ExitCode::SUCCESS;
    }

    // Load config
    let mut config = match &cli.config {
        Some(path) => match ResolverConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => ResolverConfig::default(),
    };
    if let Some(dir) = cli.data_dir {
        config = config.with_data_dir(dir);
    }

    // Read template
    let template = match &cli.input {
        Some(path) => match fs::read(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            let mut buffer = Vec::new();
            if let Err(e) = io::stdin().read_to_end(&mut buffer) {
                eprintln!("Error reading from stdin: {}", e);
                return ExitCode::FAILURE;
            }
            buffer
        }
    };

    let mut resolver = Resolver::from_config(config);
    let mut incomplete = false;
    for (i, recipient) in cli.recipients.iter().enumerate() {
        if i > 0 {
            println!("---");
        }
        let resolution = resolver.resolve_raw(&template, recipient.as_bytes());
        for missing in &resolution.unresolved {
            tracing::warn!(recipient = %recipient, "{}", missing);
        }
        incomplete |= !resolution.is_complete();
        println!("{}", resolution.text);
    }

    if cli.strict && incomplete {
        return ExitCode::from(2);
    }
    ExitCode::SUCCESS
}

fn print_markers() {
    println!("FIXED MARKERS");
    println!("-------------");
    for marker in Marker::all() {
        println!("{:<22} {}", marker.key(), marker.description());
    }
    println!();
    println!("PARAMETERIZED MARKERS");
    println!("---------------------");
    for family in Family::all() {
        println!("{:<22} {}", family.template(), family.description());
    }
}
