//! relurl CLI
//!
//! Command-line front end for relative/absolute URL classification.

mod bench;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use relurl::{Candidate, Classifier, ClassifierConfig, ClassifyOptions};

/// relurl - classify URL references as relative or absolute
#[derive(Parser)]
#[command(name = "relurl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    /// Treat `//host/path` references as absolute
    #[arg(long, global = true)]
    no_protocol_relative: bool,

    /// Result cache capacity
    #[arg(long, global = true, env = "RELURL_CACHE_CAPACITY")]
    capacity: Option<usize>,

    /// Disable the result cache
    #[arg(long, global = true)]
    no_cache: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify each argument
    Check {
        /// References to classify
        #[arg(required = true)]
        inputs: Vec<String>,
        /// Print one JSON object per input
        #[arg(long)]
        json: bool,
    },

    /// Classify each line of standard input
    Stdin {
        /// Parse each line as a JSON value; non-string values are classified as relative
        #[arg(long)]
        json_input: bool,
        /// Print one JSON object per input
        #[arg(long)]
        json: bool,
    },

    /// Measure cached against uncached classification
    Bench {
        /// Number of classifications per run
        #[arg(short, long, default_value = "100000")]
        count: usize,
        /// Number of distinct inputs in the workload
        #[arg(short, long, default_value = "500")]
        distinct: usize,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// One classified input, as printed in JSON mode.
#[derive(Serialize)]
struct Verdict<'a> {
    input: &'a Value,
    relative: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.log_json);

    let config = build_config(&cli)?;
    debug!(?config, "resolved configuration");
    let options = config.defaults;

    match cli.command {
        Commands::Check { inputs, json } => cmd_check(config, &options, &inputs, json),
        Commands::Stdin { json_input, json } => cmd_stdin(config, &options, json_input, json),
        Commands::Bench { count, distinct, json } => bench::run(config, count, distinct, json),
    }
}

fn init_logging(verbose: bool, json: bool) {
    let filter = if verbose {
        "relurl=debug,info"
    } else {
        "relurl=info,warn"
    };

    let (plain, json) = if json {
        (None, Some(tracing_subscriber::fmt::layer().json().with_writer(io::stderr)))
    } else {
        (Some(tracing_subscriber::fmt::layer().with_writer(io::stderr)), None)
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(plain)
        .with(json)
        .init();
}

/// Environment first, then command-line flags on top.
fn build_config(cli: &Cli) -> Result<ClassifierConfig> {
    let mut config = ClassifierConfig::from_env().context("Invalid relurl environment")?;

    if let Some(capacity) = cli.capacity {
        config = config.with_capacity(capacity);
    }
    if cli.no_cache {
        config = config.no_cache();
    }
    if cli.no_protocol_relative {
        config = config.with_defaults(ClassifyOptions::strict());
    }

    config.validate().context("Invalid relurl configuration")?;
    Ok(config)
}

/// Classify command-line arguments
fn cmd_check(
    config: ClassifierConfig,
    options: &ClassifyOptions,
    inputs: &[String],
    json: bool,
) -> Result<()> {
    let classifier = Classifier::with_config(config)?;
    let mut out = io::stdout().lock();

    for input in inputs {
        let relative = classifier.is_relative(input, options);
        emit(&mut out, &Value::String(input.clone()), relative, json)?;
    }

    Ok(())
}

/// Classify standard input, one reference per line
fn cmd_stdin(
    config: ClassifierConfig,
    options: &ClassifyOptions,
    json_input: bool,
    json: bool,
) -> Result<()> {
    let classifier = Classifier::with_config(config)?;
    let mut out = io::stdout().lock();
    let mut lines = 0usize;

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read standard input")?;
        let value = if json_input {
            serde_json::from_str(&line).unwrap_or(Value::String(line))
        } else {
            Value::String(line)
        };

        let relative = classifier.is_relative(Candidate::from(&value), options);
        emit(&mut out, &value, relative, json)?;
        lines += 1;
    }

    debug!(lines, cached = classifier.cache().len(), "finished reading stdin");
    Ok(())
}

fn emit(out: &mut impl Write, input: &Value, relative: bool, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, &Verdict { input, relative })?;
        writeln!(out)?;
        return Ok(());
    }

    let label = if relative {
        "relative".green()
    } else {
        "absolute".yellow()
    };
    match input {
        Value::String(s) => writeln!(out, "{:<8}  {}", label, s)?,
        other => writeln!(out, "{:<8}  {} {}", label, other, "(non-string)".dimmed())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("relurl").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_check() {
        let cli = parse(&["--no-protocol-relative", "check", "//a", "/b"]);
        assert!(cli.no_protocol_relative);
        assert!(matches!(cli.command, Commands::Check { ref inputs, json: false } if inputs.len() == 2));
    }

    #[test]
    fn test_check_requires_input() {
        assert!(Cli::try_parse_from(["relurl", "check"]).is_err());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = parse(&["--capacity", "8", "--no-protocol-relative", "--no-cache", "check", "x"]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config.cache.max_entries, 8);
        assert!(!config.enable_cache);
        assert!(!config.defaults.allow_protocol_relative);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let cli = parse(&["--capacity", "0", "check", "x"]);
        assert!(build_config(&cli).is_err());
    }

    #[test]
    fn test_emit_json() {
        let mut buf = Vec::new();
        emit(&mut buf, &Value::String("/a".into()), true, true).unwrap();
        emit(&mut buf, &serde_json::json!(3), true, true).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], r#"{"input":"/a","relative":true}"#);
        assert_eq!(lines[1], r#"{"input":3,"relative":true}"#);
    }

    #[test]
    fn test_emit_plain() {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        emit(&mut buf, &Value::String("https://a.b".into()), false, false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "absolute  https://a.b\n");
    }
}
