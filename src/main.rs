// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, Context};
use clap::Parser;
use log::{LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::io::Write;

use yalt::{Config, Controller};

/// YALT - Yet Another Locale Translator
///
/// Translates a single-level YAML localization file into one or more
/// target languages, writing one `<lang>.yml` file per language.
#[derive(Parser, Debug)]
#[command(name = "yalt")]
#[command(version)]
#[command(about = "Line-by-line localization file translator")]
#[command(long_about = "YALT reads the source localization file line by line and translates every `key: value` entry into each target language, one language at a time.

EXAMPLES:
    yalt en                                     # Write en.yml
    yalt en es fr                               # Write en.yml, es.yml and fr.yml

CONFIGURATION:
    Settings are read from yalt.json in the working directory when present
    (source language, input file, output and log directories, batching and
    retry settings, log level). Defaults apply otherwise.

FILES:
    ./pt-br.yml                                 # Default source file
    ./<lang>.yml                                # Output, rewritten at every checkpoint
    ./logs/erro-traducao-<lang>.log             # Failed translation attempts")]
struct CommandLineOptions {
    /// Target language codes (e.g., 'en', 'es', 'fr')
    #[arg(value_name = "LANG")]
    languages: Vec<String>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji and ANSI color for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌", "1;31"),
            Level::Warn => ("⚠️ ", "1;33"),
            Level::Info => ("✔️ ", "1;32"),
            Level::Debug => ("🔍", "1;36"),
            Level::Trace => ("📋", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (emoji, color) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                color, now, emoji, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // The level is lowered or raised once the config is loaded; the logger
    // itself lets everything through so `set_max_level` alone decides
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if cli.languages.is_empty() {
        eprintln!("❌ Provide at least one target language. Example: yalt en es");
        std::process::exit(1);
    }

    run(cli.languages).await
}

async fn run(languages: Vec<String>) -> Result<()> {
    let config = Config::load_or_default(Config::FILE_NAME)
        .with_context(|| format!("Failed to load config file: {}", Config::FILE_NAME))?;

    log::set_max_level(config.log_level.into());

    let controller = Controller::with_config(config)?;
    controller.run(&languages).await?;

    Ok(())
}
