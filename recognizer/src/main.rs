//! asl-recognizer - classify ASL hand signs from landmark streams.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::info;

use asl_recognizer::frame::{self, OutputFormat};
use asl_recognizer::vocabulary::{self, Category};
use asl_recognizer::{Classifier, RuleTable, Thresholds};

#[derive(Parser, Debug)]
#[command(name = "asl-recognizer", version, about = "Rule-based ASL sign recognizer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify JSON-lines landmark frames, one event per recognized hand
    Classify {
        /// Read frames from a file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,

        /// Threshold overrides (s-expression plist)
        #[arg(long)]
        thresholds: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Sexp)]
        format: OutputFormat,
    },
    /// Print the signs guide
    Guide {
        /// Only show one category, e.g. "feelings" or "food-drink"
        #[arg(long)]
        category: Option<String>,
    },
    /// List rules in evaluation order
    Rules,
    /// Print the effective thresholds as a plist
    Config {
        /// Threshold overrides (s-expression plist)
        #[arg(long)]
        thresholds: Option<PathBuf>,
    },
}

fn load_thresholds(path: Option<&Path>) -> anyhow::Result<Thresholds> {
    match path {
        Some(path) => Thresholds::load(path)
            .with_context(|| format!("loading thresholds from {}", path.display())),
        None => Ok(Thresholds::default()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries events.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "asl_recognizer=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Classify {
            input,
            thresholds,
            format,
        } => {
            let classifier = Classifier::new(load_thresholds(thresholds.as_deref())?)
                .context("invalid thresholds")?;
            info!(
                "asl-recognizer v{} classifying {} rules",
                env!("CARGO_PKG_VERSION"),
                classifier.table().len()
            );

            let reader: Box<dyn BufRead> = match &input {
                Some(path) => Box::new(BufReader::new(
                    File::open(path).with_context(|| format!("opening {}", path.display()))?,
                )),
                None => Box::new(io::stdin().lock()),
            };
            frame::run_stream(reader, &mut out, &classifier, format)
                .context("classifying input stream")?;
        }
        Command::Guide { category } => {
            let filter = match category.as_deref() {
                Some(name) => match Category::parse(name) {
                    Some(c) => Some(c),
                    None => bail!("unknown category: {name}"),
                },
                None => None,
            };
            write!(out, "{}", vocabulary::render_guide(filter))?;
        }
        Command::Rules => {
            for (i, rule) in RuleTable::standard().rules().iter().enumerate() {
                writeln!(out, "{:>3}  {}", i, rule.label)?;
            }
        }
        Command::Config { thresholds } => {
            writeln!(out, "{}", load_thresholds(thresholds.as_deref())?.to_sexp())?;
        }
    }

    Ok(())
}
