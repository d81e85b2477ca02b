// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info, warn};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use crate::app_config::{Config, TranslationService};
use crate::app_controller::Controller;
use crate::buffer_store::DirBufferStore;

mod app_config;
mod app_controller;
mod buffer_store;
mod errors;
mod file_utils;
mod language_registry;
mod providers;
mod translation;
mod ui_locale;

/// CLI Wrapper for TranslationService to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliTranslationService {
    Google,
    Bing,
    Baidu,
    Sogou,
}

impl From<CliTranslationService> for TranslationService {
    fn from(cli_service: CliTranslationService) -> Self {
        match cli_service {
            CliTranslationService::Google => TranslationService::Google,
            CliTranslationService::Bing => TranslationService::Bing,
            CliTranslationService::Baidu => TranslationService::Baidu,
            CliTranslationService::Sogou => TranslationService::Sogou,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate a text file into a buffer named after the target language (default command)
    Translate(TranslateArgs),

    /// Swap the configured source and target languages for quick reverse translation
    Reverse(ReverseArgs),

    /// Toggle the UI language between the two configured locales
    Toggle(ToggleArgs),

    /// List registered languages, services and UI locales
    Languages,

    /// Generate shell completions for textlate
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Input text file to translate
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Overwrite the destination buffer instead of prepending to it
    #[arg(short, long)]
    overwrite: bool,

    /// Translation service to use
    #[arg(long, value_enum)]
    service: Option<CliTranslationService>,

    /// Source language code (e.g. 'en', 'es', 'fr')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g. 'en', 'es', 'fr')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "textlate.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Parser, Debug)]
struct ReverseArgs {
    /// Workspace directory holding the language buffers
    #[arg(value_name = "WORKSPACE", default_value = ".")]
    workspace: PathBuf,

    /// Configuration file path
    #[arg(short, long, default_value = "textlate.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Parser, Debug)]
struct ToggleArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "textlate.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Parser, Debug)]
#[command(name = "textlate", version)]
#[command(about = "Translate text buffers between languages using online translation services")]
#[command(long_about = "textlate translates the contents of a text file into a buffer named
after the target language, stored as a file next to the input. Repeated
translations stack newest-first unless overwriting is requested.

CONFIGURATION:
    Settings live in a JSON config file (default: textlate.json). If the
    file does not exist it will be created automatically.

SUPPORTED SERVICES:
    google - Google Translate public endpoint (no credentials)
    bing   - Microsoft Bing Translate (requires API key)
    baidu  - Baidu Translate (requires app id and key)
    sogou  - Sogou (requires pid and key)")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input text file to translate
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Overwrite the destination buffer instead of prepending to it
    #[arg(short, long)]
    overwrite: bool,

    /// Translation service to use
    #[arg(long, value_enum)]
    service: Option<CliTranslationService>,

    /// Source language code (e.g. 'en', 'es', 'fr')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g. 'en', 'es', 'fr')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "textlate.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    /// New logger with the specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    /// Initialize the global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    /// ANSI color code and tag for a log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "ERROR"),
            Level::Warn => ("\x1B[1;33m", "WARN "),
            Level::Info => ("\x1B[1;32m", "INFO "),
            Level::Debug => ("\x1B[1;36m", "DEBUG"),
            Level::Trace => ("\x1B[1;35m", "TRACE"),
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
            let (color, tag) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color,
                now,
                tag,
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "textlate", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Languages) => {
            run_languages();
            Ok(())
        }
        Some(Commands::Toggle(args)) => run_toggle(args),
        Some(Commands::Reverse(args)) => run_reverse(args),
        Some(Commands::Translate(args)) => run_translate(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_path = cli
                .input_path
                .ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;

            let translate_args = TranslateArgs {
                input_path,
                overwrite: cli.overwrite,
                service: cli.service,
                source_language: cli.source_language,
                target_language: cli.target_language,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_translate(translate_args).await
        }
    }
}

/// Apply a config log level to the global logger
fn apply_log_level(level: app_config::LogLevel) {
    let filter = match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    };
    log::set_max_level(filter);
}

/// Load the configuration from disk, creating a default file if absent
fn load_or_create_config(config_path: &str) -> Result<Config> {
    if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;
        Ok(config)
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);
        let config = Config::default();
        config.save(config_path)?;
        Ok(config)
    }
}

async fn run_translate(options: TranslateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        apply_log_level(cmd_log_level.clone().into());
    }

    let mut config = load_or_create_config(&options.config_path)?;

    // Override config with CLI options if provided
    if let Some(service) = &options.service {
        config.translation.service = service.clone().into();
    }
    if let Some(source_lang) = &options.source_language {
        config.source_language = source_lang.clone();
    }
    if let Some(target_lang) = &options.target_language {
        config.target_language = target_lang.clone();
    }
    if options.overwrite {
        config.translation.overwrite = true;
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        apply_log_level(config.log_level);
    }

    let controller = Controller::with_config(config)?;
    let outcome = controller.run_translate(&options.input_path).await?;

    println!(
        "Translated into buffer '{}'{}",
        outcome.buffer_name,
        outcome
            .renamed_source
            .map(|name| format!(" (source renamed to '{}')", name))
            .unwrap_or_default()
    );
    Ok(())
}

fn run_reverse(options: ReverseArgs) -> Result<()> {
    if let Some(cmd_log_level) = &options.log_level {
        apply_log_level(cmd_log_level.clone().into());
    }

    let config = load_or_create_config(&options.config_path)?;
    let mut controller = Controller::with_config(config)?;

    let store = DirBufferStore::open(options.workspace)?;
    let (new_source, new_target) = controller.reverse_languages(&store)?;
    controller.config().save(&options.config_path)?;

    println!("Now translating {} -> {}", new_source, new_target);
    Ok(())
}

fn run_toggle(options: ToggleArgs) -> Result<()> {
    if let Some(cmd_log_level) = &options.log_level {
        apply_log_level(cmd_log_level.clone().into());
    }

    let config = load_or_create_config(&options.config_path)?;
    let mut controller = Controller::with_config(config)?;

    let new_language = controller.toggle_ui_language()?;
    controller.config().save(&options.config_path)?;

    let name = ui_locale::locale_name(&new_language).unwrap_or("?");
    info!("UI language is now {} ({})", new_language, name);
    println!("{}", new_language);
    Ok(())
}

fn run_languages() {
    println!("Languages:");
    for (code, name) in language_registry::all() {
        println!("  {:<4} {}", code, name);
    }
    println!("\nServices:");
    for service in TranslationService::all() {
        println!("  {:<8} {}", service.to_lowercase_string(), service.display_name());
    }
    println!("\nUI locales:");
    for (locale, name) in ui_locale::UI_LOCALES {
        println!("  {:<6} {}", locale, name);
    }
}
