//! Command-line surface: argument parsing, logging bootstrap and the
//! `seedkit` run itself.

use anyhow::Context;
use clap::Parser;
use seedkit_core::config::{Config, StoreBackend, StoreConfig};
use seedkit_core::normalizer::coerce_views;
use seedkit_core::{export, open_store, pipeline, SeedOptions};
use seedkit_sources::InputSource;
use std::convert::Infallible;
use std::io::Write;
use std::num::NonZeroUsize;
use std::path::PathBuf;

pub const EXIT_OK: u8 = 0;
/// Reserved for clap, which exits with 2 on bad arguments.
pub const EXIT_USAGE: u8 = 2;
pub const EXIT_DATA_ERROR: u8 = 3;

#[derive(Debug, Parser)]
#[command(
    name = "seedkit",
    version,
    about = "Seed Kit — converts CSV article seeds to standardised JSON",
    after_help = "Examples:\n  seedkit --input=storage/seeds/articles.csv --limit=3\n  \
                  cat articles.csv | seedkit --input=- --published-only > output.json"
)]
pub struct Cli {
    /// CSV seed file, or `-` to read standard input.
    #[arg(long, value_name = "PATH|-")]
    pub input: String,

    /// Keep only rows whose `published` column is true.
    #[arg(long)]
    pub published_only: bool,

    /// Keep at most N articles. A bare `--limit` means 1; the integer prefix
    /// of N is used and anything below 1 counts as 1.
    #[arg(
        long,
        value_name = "N",
        num_args = 0..=1,
        default_missing_value = "1",
        allow_negative_numbers = true,
        value_parser = parse_limit
    )]
    pub limit: Option<NonZeroUsize>,

    /// Also save the articles into a store, skipping duplicate slugs. A bare
    /// `--store` uses the configured store; `--store=PATH` uses a JSON file.
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub store: Option<Option<PathBuf>>,

    /// Configuration file (defaults to `$XDG_CONFIG_HOME/seedkit/config.toml`).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log at debug level to stderr.
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    pub fn seed_options(&self) -> SeedOptions {
        SeedOptions {
            published_only: self.published_only,
            limit: self.limit,
        }
    }

    /// Store selected by `--store`, if any.
    pub fn store_config(&self, config: &Config) -> Option<StoreConfig> {
        match &self.store {
            None => None,
            Some(None) => Some(config.store.clone()),
            Some(Some(path)) => Some(StoreConfig {
                backend: StoreBackend::Json,
                path: path.clone(),
            }),
        }
    }
}

/// Lenient `--limit` value: `"2.5"` → 2, `"abc"` → 1, `"-4"` → 1.
fn parse_limit(raw: &str) -> Result<NonZeroUsize, Infallible> {
    let n = usize::try_from(coerce_views(raw)).unwrap_or(usize::MAX);
    Ok(NonZeroUsize::new(n).unwrap_or(NonZeroUsize::MIN))
}

/// Install the stderr subscriber. `RUST_LOG` wins over `--debug`, which wins
/// over the configured level.
pub fn init_logging(debug: bool, configured_level: &str) {
    let fallback = if debug { "debug" } else { configured_level };
    let filter = tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}

/// Run one invocation, writing the seed document to `out`.
///
/// Nothing is written to `out` unless every step succeeded.
pub fn execute<W: Write>(cli: &Cli, config: &Config, out: &mut W) -> anyhow::Result<()> {
    let source = InputSource::parse(&cli.input);
    let text = source.read_to_string()?;

    let articles = pipeline::run(&text, &cli.seed_options())
        .with_context(|| format!("invalid seed data in {source}"))?;
    let document = export::to_seed_json(&articles).context("cannot encode seed JSON")?;

    if let Some(store_config) = cli.store_config(config) {
        let mut store = open_store(&store_config);
        pipeline::import(store.as_mut(), articles)?;
    }

    writeln!(out, "{document}").context("cannot write seed JSON")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("seedkit").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn input_is_required() {
        let err = Cli::try_parse_from(["seedkit"]).unwrap_err();
        assert_eq!(err.exit_code(), i32::from(EXIT_USAGE));
    }

    #[test]
    fn limit_forms() {
        assert_eq!(parse(&["--input=-"]).seed_options().limit, None);
        assert_eq!(parse(&["--input=-", "--limit"]).seed_options().limit, NonZeroUsize::new(1));
        assert_eq!(parse(&["--input=-", "--limit=3"]).seed_options().limit, NonZeroUsize::new(3));
        assert_eq!(parse(&["--input=-", "--limit=0"]).seed_options().limit, NonZeroUsize::new(1));
        assert_eq!(parse(&["--input=-", "--limit=-4"]).seed_options().limit, NonZeroUsize::new(1));
    }

    #[test]
    fn non_integer_limit_is_coerced() {
        assert_eq!(parse(&["--input=-", "--limit=2.5"]).seed_options().limit, NonZeroUsize::new(2));
        assert_eq!(parse(&["--input=-", "--limit=abc"]).seed_options().limit, NonZeroUsize::new(1));
        assert_eq!(parse(&["--input=-", "--limit=7 items"]).seed_options().limit, NonZeroUsize::new(7));
    }

    #[test]
    fn store_forms() {
        let config = Config::defaults();
        assert_eq!(parse(&["--input=-"]).store_config(&config), None);
        assert_eq!(
            parse(&["--input=-", "--store"]).store_config(&config),
            Some(config.store.clone())
        );
        assert_eq!(
            parse(&["--input=-", "--store=out.json"]).store_config(&config),
            Some(StoreConfig {
                backend: StoreBackend::Json,
                path: PathBuf::from("out.json"),
            })
        );
    }

    #[test]
    fn help_exits_zero() {
        let err = Cli::try_parse_from(["seedkit", "--help"]).unwrap_err();
        assert_eq!(err.exit_code(), i32::from(EXIT_OK));
    }
}
