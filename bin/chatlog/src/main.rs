//! Chatlog CLI
//!
//! Turns a WhatsApp chat export into an activity report.
//! Writes JSON reports and prints terminal summaries.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::debug;
use std::path::PathBuf;

use chatlog_studio::aggregator::TimeRange;
use chatlog_studio::commands::{
    display_schema, display_version, execute_analyze, execute_digest, validate_args,
    validate_report_file, AnalyzeArgs, DigestArgs,
};

/// Chatlog - activity reports for WhatsApp chat exports
#[derive(Parser, Debug)]
#[command(name = "chatlog")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a chat export and build a report
    Analyze {
        /// Exported chat transcript (.txt)
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the JSON report (placed in artifacts/ by default)
        #[arg(short, long, default_value = "artifacts/report.json")]
        output: PathBuf,

        /// Skip writing the JSON report
        #[arg(long)]
        no_output: bool,

        /// Time range for the activity series
        #[arg(short, long, value_enum)]
        range: Option<TimeRange>,

        /// Number of senders on the leaderboard
        #[arg(long)]
        top: Option<usize>,

        /// Narrow the activity series to one sender
        #[arg(long)]
        sender: Option<String>,

        /// First day to include (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Last day to include (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// TOML config file
        #[arg(short, long, env = "CHATLOG_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Prepare the recent-history digest for AI insights
    Digest {
        /// Exported chat transcript (.txt)
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the digest JSON (prints the text if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Days of history before the latest message
        #[arg(long)]
        days: Option<i64>,

        /// Character budget for the digest text
        #[arg(long)]
        max_chars: Option<usize>,

        /// TOML config file
        #[arg(short, long, env = "CHATLOG_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    debug!("Dispatching {:?}", cli.command);

    // Execute command
    match cli.command {
        Commands::Analyze {
            input,
            mut output,
            no_output,
            range,
            top,
            sender,
            from,
            to,
            summary,
            config,
        } => {
            // Ensure the report goes to artifacts/ if no directory is specified
            if output.parent().map(|p| p.as_os_str().is_empty()).unwrap_or(true) {
                output = PathBuf::from("artifacts").join(output);
            }

            let args = AnalyzeArgs {
                input,
                output_json: (!no_output).then_some(output),
                range,
                top_senders: top,
                sender,
                from,
                to,
                print_summary: summary,
                config_path: config,
                today: None,
            };

            // Validate args first
            validate_args(&args)?;

            execute_analyze(args)?;
        }

        Commands::Digest {
            input,
            output,
            days,
            max_chars,
            config,
        } => {
            execute_digest(DigestArgs {
                input,
                output_json: output,
                days,
                max_chars,
                config_path: config,
            })?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
