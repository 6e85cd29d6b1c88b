use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "vector-trim")]
#[command(about = "Trim test-vector files to one test per group and compress them", long_about = None)]
#[command(version)]
struct Cli {
    /// Comma-separated list of algorithms
    #[arg(long, default_value = "all")]
    algorithms: String,

    /// Directory holding one vector file per algorithm
    #[arg(long, default_value = vector_trim_core::config::DEFAULT_VECTORS_DIR)]
    vectors_dir: String,

    /// Enable verbose logging (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Accept the single-dash long form (`-algorithms foo`) alongside `--algorithms`.
fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    const LONG_FLAGS: [&str; 2] = ["algorithms", "vectors-dir"];

    args.into_iter()
        .map(|arg| {
            let long = arg
                .strip_prefix('-')
                .filter(|rest| !rest.starts_with('-'))
                .filter(|rest| {
                    let name = rest.split('=').next().unwrap_or_default();
                    LONG_FLAGS.contains(&name)
                });
            match long {
                Some(rest) => format!("--{}", rest),
                None => arg,
            }
        })
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse_from(normalize_args(std::env::args()));

    // Initialize tracing
    // Priority: RUST_LOG env var > verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match cli.verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    commands::trim::run(&cli.algorithms, &cli.vectors_dir)?;

    Ok(())
}
