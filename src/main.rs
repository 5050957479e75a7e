use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use contest_scoring::cli::{
    handle_backup_command, handle_contestant_command, handle_export_command, handle_reset_command,
    handle_results_command,
};
use contest_scoring::config::{paths::ScoringPaths, settings::Settings};
use contest_scoring::display::format_contest_list;
use contest_scoring::storage::DataStore;

#[derive(Parser)]
#[command(
    name = "contest",
    version,
    about = "Record contestants, rank them per age group and export results",
    long_about = "Records contestants and scores for several simultaneous contests, \
                  ranks them within each age group (on-time entries before over-time \
                  ones) and exports the ranked results for spreadsheets, printing \
                  or the clipboard."
)]
struct Cli {
    /// Log level for diagnostics on stderr (overrides RUST_LOG)
    #[arg(long, global = true, value_enum)]
    log_level: Option<LogLevel>,

    /// Base URL of the shared remote store
    #[arg(long, global = true, env = "CONTEST_SCORING_REMOTE_URL")]
    remote: Option<String>,

    /// Ignore any configured remote store for this run
    #[arg(long, global = true)]
    local: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the contests
    Contests,

    /// Contestant data entry
    #[command(subcommand)]
    Contestant(contest_scoring::cli::ContestantCommands),

    /// Show ranked results for a contest
    Results {
        /// Contest ID or path
        contest: String,
        /// Only rank names containing this text
        #[arg(long)]
        search: Option<String>,
    },

    /// Export ranked results of all contests
    #[command(subcommand)]
    Export(contest_scoring::cli::ExportCommands),

    /// Backup management commands
    #[command(subcommand)]
    Backup(contest_scoring::cli::BackupCommands),

    /// Back up, then clear all contestants
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration and paths
    Config,
}

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Install the stderr subscriber; stdout is reserved for command output
fn initialize_tracing(log_level: Option<&LogLevel>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level.to_filter_directive()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(cli.log_level.as_ref());

    // Initialize paths and settings
    let paths = ScoringPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    if !paths.settings_file().exists() {
        // Persist defaults on first run so they can be edited by hand
        settings.save(&paths)?;
    }
    if cli.local {
        settings.remote_url = None;
    } else if let Some(url) = cli.remote {
        settings.remote_url = Some(url);
    }
    debug!(base_dir = %paths.base_dir().display(), remote = ?settings.remote_url, "starting");

    let Some(command) = cli.command else {
        println!("contest - contest scoring and results");
        println!();
        println!("Run 'contest --help' for usage information.");
        println!("Run 'contest contests' to see the available contests.");
        return Ok(());
    };

    // Backend is chosen once for the whole session
    let store = DataStore::connect(&paths, &settings)?;

    match command {
        Commands::Contests => {
            println!(
                "{}",
                format_contest_list(&store.catalog().sorted_by_name()).trim_end()
            );
        }
        Commands::Contestant(cmd) => {
            handle_contestant_command(&store, cmd)?;
        }
        Commands::Results { contest, search } => {
            handle_results_command(&store, &settings, &contest, search.as_deref())?;
        }
        Commands::Export(cmd) => {
            handle_export_command(&store, &settings, cmd)?;
        }
        Commands::Backup(cmd) => {
            handle_backup_command(&store, cmd)?;
        }
        Commands::Reset { force } => {
            handle_reset_command(&store, force)?;
        }
        Commands::Config => {
            println!("Contest Scoring Configuration");
            println!("=============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data file:        {}", paths.store_file().display());
            println!("Backup directory: {}", paths.backup_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Active backend:   {}", store.kind());
            println!();
            println!("Settings:");
            println!(
                "  Remote URL:          {}",
                settings.remote_url.as_deref().unwrap_or("(none)")
            );
            println!("  Remote timeout:      {}s", settings.remote_timeout_secs);
            println!(
                "  Over-time threshold: {} min",
                settings.over_time_threshold_minutes
            );
            println!("  Document title:      {}", settings.document_title);
        }
    }

    Ok(())
}
