// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info};
use std::io::Write;
use std::path::PathBuf;

use crate::app_config::{Config, LogLevel};
use crate::app_controller::Controller;
use crate::translation::core::PayloadKind;

mod app_config;
mod app_controller;
mod errors;
mod language_utils;
mod providers;
mod table;
mod translation;

/// CLI wrapper for PayloadKind to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliField {
    Name,
    Description,
}

impl From<CliField> for PayloadKind {
    fn from(field: CliField) -> Self {
        match field {
            CliField::Name => PayloadKind::Name,
            CliField::Description => PayloadKind::Description,
        }
    }
}

/// CLI wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for yattwai
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// YATTwAI - Yet Another Table Translator with AI
///
/// Translates the name or description column of a CSV table into multiple
/// languages and fills the matching "{language_code} name" /
/// "{language_code} description" columns.
#[derive(Parser, Debug)]
#[command(name = "yattwai")]
#[command(version = "1.0.0")]
#[command(about = "AI-powered table translation tool")]
#[command(long_about = "YATTwAI reads a CSV table of skills, translates the chosen field for every row \
using an OpenAI-compatible model, and writes the table back with the \
\"{language_code} {field}\" columns filled in.

EXAMPLES:
    yattwai skills.csv                          # Translate descriptions, discover languages
    yattwai --field name skills.csv             # Translate the name column instead
    yattwai -l fr,de,ja skills.csv              # Translate into an explicit language list
    yattwai -w 10 skills.csv                    # Use 10 parallel workers
    yattwai -o out.csv -f skills.csv            # Choose the output file, overwrite it
    yattwai completions bash > yattwai.bash     # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically. The API key and model are read from the
    config file.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input CSV file to translate
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Output CSV file (defaults to "<input>.translated.csv")
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Which field to translate
    #[arg(long, value_enum, default_value = "description")]
    field: CliField,

    /// Source column name, when it differs from the field name
    #[arg(long)]
    column: Option<String>,

    /// Target language codes (comma separated, e.g. 'fr,de,zh_CN');
    /// discovered from the table's columns when omitted
    #[arg(short, long, value_delimiter = ',')]
    languages: Option<Vec<String>>,

    /// Number of parallel translation workers
    #[arg(short, long)]
    workers: Option<usize>,

    /// Model name to use for translation
    #[arg(short, long)]
    model: Option<String>,

    /// Force overwrite of an existing output file
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
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
    // The logger itself passes everything; log::set_max_level does the
    // filtering so the level can be raised after the config is loaded.
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and emoji for log level
    fn decoration_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "❌ "),
            Level::Warn => ("\x1B[1;33m", "🚧 "),
            Level::Info => ("\x1B[1;32m", " "),
            Level::Debug => ("\x1B[1;36m", "🔍 "),
            Level::Trace => ("\x1B[1;35m", "📋 "),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let (color, emoji) = Self::decoration_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default.
    // The level is updated after loading the config.
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    let Some(input_path) = cli.input_path else {
        CommandLineOptions::command().print_help()?;
        return Ok(());
    };

    // Load the config, creating a default one on first run
    let mut config = if std::path::Path::new(&cli.config_path).exists() {
        Config::from_file(&cli.config_path)?
    } else {
        info!("Creating default configuration at {}", cli.config_path);
        Config::create_default_config(&cli.config_path)?
    };

    // Apply command line overrides
    if let Some(languages) = cli.languages {
        config.languages = languages;
    }
    if let Some(workers) = cli.workers {
        config.workers = workers;
    }
    if let Some(model) = cli.model {
        config.translation.model = model;
    }
    if let Some(log_level) = cli.log_level {
        config.log_level = log_level.into();
    }
    log::set_max_level(config.log_level.to_level_filter());

    let output_path = cli.output
        .unwrap_or_else(|| app_controller::default_output_path(&input_path));

    let controller = Controller::with_config(config)?;
    controller
        .run(
            input_path,
            output_path,
            cli.field.into(),
            cli.column,
            cli.force_overwrite,
        )
        .await
}
