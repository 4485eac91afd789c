// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use potwai::app_config::Config;
use potwai::app_controller::{Controller, TranslationJob};

/// potwai - PO Translator with AI
///
/// Translates every entry of a Gettext .po catalog into a target language
/// with an OpenAI-compatible chat completion API.
#[derive(Parser, Debug)]
#[command(name = "potwai")]
#[command(version)]
#[command(about = "Translate Gettext .po catalogs with an AI model")]
#[command(long_about = "potwai sends all source strings of a .po catalog to a chat completion model in one request and writes the translated catalog.

EXAMPLES:
    potwai --input-file template.pot --output-file fr.po --language fr
    potwai --input-file en.po --output-file zh_CN.po --language zh_CN

ENVIRONMENT:
    OPENAI_API_KEY       API key (required)
    OPENAI_BASE_URL      Base URL of an OpenAI-compatible server (default: https://api.openai.com/v1)
    OPENAI_MODEL         Model name (default: gpt-5-nano)
    OPENAI_TIMEOUT_SECS  Request timeout in seconds (default: 600)
    PO_PROJECT_ID        Project-Id-Version written when the catalog has none
    POTWAI_LOG_LEVEL     error, warn, info, debug or trace (default: info)")]
struct CommandLineOptions {
    /// Path to the source .po or .pot file
    #[arg(long)]
    input_file: PathBuf,

    /// Path of the translated .po file to write
    #[arg(long)]
    output_file: PathBuf,

    /// Target language code (e.g., 'fr', 'pt_BR', 'zh_CN')
    #[arg(long)]
    language: String,
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
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }

    // @returns: ANSI color for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
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
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                Self::get_color_for_level(record.level()),
                now,
                Self::get_emoji_for_level(record.level()),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Info until the configured level is known
    if CustomLogger::init(LevelFilter::Info).is_err() {
        eprintln!("Failed to initialize logger");
    }

    let options = CommandLineOptions::parse();

    match run(options).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(options: CommandLineOptions) -> Result<()> {
    // Configuration errors must surface before the input is touched
    let config = Config::from_env().context("Configuration error")?;
    log::set_max_level(config.log_level.into());

    if let Ok(json) = serde_json::to_string(&config) {
        debug!("Resolved configuration: {}", json);
    }

    let job = TranslationJob::new(options.input_file, options.output_file, options.language);
    let controller = Controller::with_config(config);
    controller.run(&job).await?;

    Ok(())
}
