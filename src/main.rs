// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use indicatif::{ProgressBar, ProgressStyle};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, error, info, warn};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use lyricscope::app_config::{self, Config};
use lyricscope::batch::{BatchAnalyzer, FileAnalysis, FileOutcome};
use lyricscope::errors::{AppError, InputError};
use lyricscope::file_utils::FileManager;
use lyricscope::{AnalysisReport, GenerationHints, LyricAnalyzer};

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

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a lyric file, a directory of lyric files, or stdin
    Analyze(AnalyzeArgs),

    /// Write a default configuration file
    InitConfig {
        /// Where to write the configuration
        #[arg(default_value = "conf.json")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completions for lyricscope
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct AnalyzeArgs {
    /// Lyric file or directory to analyze, or '-' for stdin
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", env = "LYRICSCOPE_CONFIG")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Also print generation hints for this complexity level (0-100)
    #[arg(long, value_name = "LEVEL")]
    complexity: Option<u8>,
}

/// lyricscope - Lyric analysis engine
///
/// Analyzes song lyrics for metre, stress, rhyme, repetition, poetic devices,
/// theme and thematic coherence.
#[derive(Parser, Debug)]
#[command(name = "lyricscope")]
#[command(version)]
#[command(about = "Structured analysis of song lyrics")]
#[command(long_about = "lyricscope turns raw lyric text into a structured analysis report.

EXAMPLES:
    lyricscope analyze song.txt                     # Human-readable report
    lyricscope analyze -f json song.txt             # JSON report
    cat song.txt | lyricscope analyze -             # Read lyrics from stdin
    lyricscope analyze --complexity 70 song.txt     # Include generation hints
    lyricscope analyze --log-level debug lyrics/    # Analyze a whole directory
    lyricscope init-config                          # Write conf.json with defaults
    lyricscope completions bash > lyricscope.bash   # Generate bash completions

CONFIGURATION:
    Configuration is read from conf.json by default. You can specify a different
    config file with --config-path. If the file doesn't exist, defaults are used.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger { level: LevelFilter::Trace }))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and emoji for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "❌ "),
            Level::Warn => ("1;33", "🚧 "),
            Level::Info => ("1;32", " "),
            Level::Debug => ("1;36", "🔍 "),
            Level::Trace => ("1;35", "📋 "),
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
            let (color, emoji) = Self::style_for_level(record.level());

            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {} {}\x1B[0m",
                color,
                now,
                emoji,
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
    // Info by default; the level is updated once the config is loaded
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "lyricscope", &mut std::io::stdout());
            Ok(())
        }
        Commands::InitConfig { path, force } => init_config(&path, force),
        Commands::Analyze(args) => Ok(run_analyze(args).await?),
    }
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        warn!("Config file already exists: {:?}. Use -f to overwrite.", path);
        return Ok(());
    }

    Config::default()
        .save(path)
        .with_context(|| format!("Failed to write default config to {:?}", path))?;
    info!("Default configuration written to {:?}", path);
    Ok(())
}

fn load_config(options: &AnalyzeArgs) -> Result<Config, AppError> {
    let config_path = Path::new(&options.config_path);

    let mut config = if config_path.exists() {
        Config::from_file(config_path)?
    } else {
        warn!(
            "Config file not found at '{}', using default settings.",
            options.config_path
        );
        Config::default()
    };

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate()?;
    Ok(config)
}

async fn run_analyze(options: AnalyzeArgs) -> Result<(), AppError> {
    let config = load_config(&options)?;
    log::set_max_level(config.log_level.to_level_filter());

    let analyzer = LyricAnalyzer::with_config(config.analysis.clone());

    if options.input_path.as_os_str() == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .map_err(|e| InputError::Unreadable(format!("stdin: {}", e)))?;

        let outcome = FileOutcome::from(analyzer.analyze(&raw));
        print_outcome(None, &outcome, &options, &config)?;
        return Ok(());
    }

    let files = FileManager::collect_inputs(&options.input_path, &config.batch.extensions)?;

    if let [path] = files.as_slice() {
        let outcome = BatchAnalyzer::new(analyzer, 1).analyze_path(path).await;
        if let FileOutcome::Failed(message) = &outcome {
            return Err(AppError::File(format!("{}: {}", path.display(), message)));
        }
        print_outcome(Some(path), &outcome, &options, &config)?;
        return Ok(());
    }

    info!("Analyzing {} files from {:?}", files.len(), options.input_path);
    let results = analyze_with_progress(analyzer, &files, config.batch.concurrent_files).await;
    print_batch(&results, &options, &config)?;
    Ok(())
}

async fn analyze_with_progress(
    analyzer: LyricAnalyzer,
    files: &[PathBuf],
    concurrent_files: usize,
) -> Vec<FileAnalysis> {
    let progress_bar = ProgressBar::new(files.len() as u64);
    let template_result = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
        .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    progress_bar.set_style(template_result.progress_chars("█▓▒░"));
    progress_bar.set_message("Analyzing");

    let pb = progress_bar.clone();
    let results = BatchAnalyzer::new(analyzer, concurrent_files)
        .analyze_files(files, move |done, _total| pb.set_position(done as u64))
        .await;

    progress_bar.finish_and_clear();
    results
}

fn hints_for(report: &AnalysisReport, options: &AnalyzeArgs, config: &Config) -> Option<GenerationHints> {
    options
        .complexity
        .map(|level| GenerationHints::from_report(report, level, &config.hints))
}

fn print_report(
    path: Option<&Path>,
    report: &AnalysisReport,
    options: &AnalyzeArgs,
    config: &Config,
) -> Result<()> {
    let hints = hints_for(report, options, config);

    match options.format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "path": path,
                "report": report,
                "hints": hints,
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&value).context("Failed to serialize report")?
            );
        }
        OutputFormat::Text => {
            if let Some(path) = path {
                println!("== {} ==", path.display());
            }
            print!("{}", report.summary());
            if let Some(hints) = hints {
                println!("\n{}", hints.render());
            }
        }
    }

    Ok(())
}

fn print_outcome(
    path: Option<&Path>,
    outcome: &FileOutcome,
    options: &AnalyzeArgs,
    config: &Config,
) -> Result<()> {
    let source = path.map_or_else(|| "stdin".to_string(), |p| p.display().to_string());

    match outcome {
        FileOutcome::Analyzed(report) => print_report(path, report, options, config),
        FileOutcome::InsufficientText => {
            warn!("Skipped {}: not enough text to analyze", source);

            if options.format == OutputFormat::Json {
                let value = serde_json::json!({ "path": path, "report": null });
                println!(
                    "{}",
                    serde_json::to_string_pretty(&value).context("Failed to serialize report")?
                );
            }
            Ok(())
        }
        FileOutcome::Failed(message) => {
            error!("Failed {}: {}", source, message);
            Ok(())
        }
    }
}

fn print_batch(results: &[FileAnalysis], options: &AnalyzeArgs, config: &Config) -> Result<()> {
    let mut analyzed = 0;

    if options.format == OutputFormat::Json {
        let entries: Vec<serde_json::Value> = results
            .iter()
            .map(|result| match &result.outcome {
                FileOutcome::Analyzed(report) => serde_json::json!({
                    "path": result.path,
                    "report": report,
                    "hints": hints_for(report, options, config),
                }),
                FileOutcome::InsufficientText => serde_json::json!({
                    "path": result.path,
                    "report": null,
                }),
                FileOutcome::Failed(message) => serde_json::json!({
                    "path": result.path,
                    "error": message,
                }),
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&entries).context("Failed to serialize reports")?
        );
        analyzed = results.iter().filter(|r| r.report().is_some()).count();
    } else {
        for result in results {
            match &result.outcome {
                FileOutcome::Analyzed(report) => {
                    print_report(Some(&result.path), report, options, config)?;
                    println!();
                    analyzed += 1;
                }
                outcome => print_outcome(Some(&result.path), outcome, options, config)?,
            }
        }
    }

    info!("Analyzed {} of {} files", analyzed, results.len());
    Ok(())
}
