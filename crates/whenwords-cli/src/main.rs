//! `whenwords` CLI — relative times, durations and date ranges from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Relative to now
//! whenwords ago 2024-01-15T09:30:00
//!
//! # Relative to an explicit reference (epoch seconds or ISO text)
//! whenwords ago 1704049200 --reference 1704067200
//!
//! # Durations
//! whenwords duration 93661 --max-units 3
//! whenwords duration 9000 --compact
//! whenwords duration 9000 --options '{"compact":true,"max_units":1}'
//!
//! # Parse duration text back into seconds
//! whenwords parse "2 hours and 30 minutes"
//!
//! # Day names and ranges
//! whenwords human-date 2024-01-13 --reference 2024-01-15
//! whenwords range 2024-01-15 2024-01-22
//! ```
//!
//! Set `RUST_LOG=whenwords=debug` (or `--log-level debug`) to see why an input
//! was rejected.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use whenwords::{DurationOptions, Timestamp};

#[derive(Parser)]
#[command(
    name = "whenwords",
    version,
    about = "Human-friendly relative times, durations and date ranges"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level when RUST_LOG is not set (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Describe a timestamp relative to a reference ("3 hours ago", "in 2 days")
    Ago {
        /// Epoch seconds or ISO text (YYYY-MM-DD[THH:MM:SS])
        #[arg(allow_hyphen_values = true)]
        timestamp: String,
        /// Reference instant (defaults to now)
        #[arg(short, long, allow_hyphen_values = true)]
        reference: Option<String>,
    },
    /// Render a number of seconds as a duration
    Duration {
        /// Nonnegative number of seconds
        #[arg(allow_hyphen_values = true)]
        seconds: f64,
        /// Use abbreviated units ("2h 30m")
        #[arg(short, long)]
        compact: bool,
        /// Maximum number of unit slots to render
        #[arg(short, long, allow_hyphen_values = true)]
        max_units: Option<i64>,
        /// Options as JSON, e.g. '{"compact":true,"max_units":3}'; flags override it
        #[arg(long)]
        options: Option<String>,
    },
    /// Parse duration text ("2h30m", "1:30:00") into seconds
    Parse {
        /// Duration text
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Name the day of a timestamp relative to a reference ("Yesterday", "Last Friday")
    HumanDate {
        /// Epoch seconds or ISO text
        #[arg(allow_hyphen_values = true)]
        timestamp: String,
        /// Reference instant (defaults to now)
        #[arg(short, long, allow_hyphen_values = true)]
        reference: Option<String>,
    },
    /// Render the calendar span between two timestamps
    Range {
        /// Epoch seconds or ISO text
        #[arg(allow_hyphen_values = true)]
        start: String,
        /// Epoch seconds or ISO text
        #[arg(allow_hyphen_values = true)]
        end: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let output = match cli.command {
        Commands::Ago {
            timestamp,
            reference,
        } => {
            let timestamp = parse_timestamp_arg(&timestamp);
            let reference = reference_or_now(reference.as_deref());
            whenwords::timeago(&timestamp, &reference)
                .context("Failed to format relative time")?
        }
        Commands::Duration {
            seconds,
            compact,
            max_units,
            options,
        } => {
            let options = build_duration_options(options.as_deref(), compact, max_units)?;
            whenwords::duration(seconds, Some(&options)).context("Failed to format duration")?
        }
        Commands::Parse { text } => {
            let seconds =
                whenwords::parse_duration(&text).context("Failed to parse duration text")?;
            seconds.to_string()
        }
        Commands::HumanDate {
            timestamp,
            reference,
        } => {
            let timestamp = parse_timestamp_arg(&timestamp);
            let reference = reference_or_now(reference.as_deref());
            whenwords::human_date(&timestamp, &reference).context("Failed to format date")?
        }
        Commands::Range { start, end } => {
            let start = parse_timestamp_arg(&start);
            let end = parse_timestamp_arg(&end);
            whenwords::date_range(&start, &end).context("Failed to format date range")?
        }
    };

    tracing::debug!(%output, "formatted");
    println!("{}", output);
    Ok(())
}

/// Numbers are epoch seconds; anything else is handed to the ISO parser.
fn parse_timestamp_arg(raw: &str) -> Timestamp {
    match raw.trim().parse::<f64>() {
        Ok(seconds) => Timestamp::unix(seconds),
        Err(_) => Timestamp::iso(raw),
    }
}

fn reference_or_now(raw: Option<&str>) -> Timestamp {
    match raw {
        Some(raw) => parse_timestamp_arg(raw),
        None => Timestamp::from(chrono::Utc::now()),
    }
}

/// Start from `--options` JSON (or defaults), then apply `--compact` / `--max-units`.
fn build_duration_options(
    json: Option<&str>,
    compact: bool,
    max_units: Option<i64>,
) -> Result<DurationOptions> {
    let mut options = match json {
        Some(raw) => serde_json::from_str::<DurationOptions>(raw)
            .with_context(|| format!("Invalid --options JSON: {}", raw))?,
        None => DurationOptions::default(),
    };
    if compact {
        options.compact = true;
    }
    if let Some(n) = max_units {
        options.max_units = n;
    }
    Ok(options)
}
