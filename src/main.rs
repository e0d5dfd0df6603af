use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

mod authlog;
mod commands;
mod utils;

#[derive(Parser)]
#[command(name = "auth-audit")]
#[command(about = "Authentication log analysis tools", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Per-user activity summary with failure/success counts
    UserSummary {
        /// Path to the auth log file (plain or .gz)
        log_file: String,

        /// Number of users to show
        #[arg(long, default_value = "50")]
        top: usize,

        /// Restrict the summary to a single user
        #[arg(long)]
        user: Option<String>,
    },

    /// Rank users by failed logins and flag shared source addresses
    FailedLogins {
        /// Path to the auth log file (plain or .gz)
        log_file: String,

        /// Minimum failures to include a user
        #[arg(long, default_value = "1")]
        min_failures: usize,

        /// Number of entries to show per section
        #[arg(long, default_value = "50")]
        top: usize,
    },

    /// List distinct sudo commands per user
    SudoActivity {
        /// Path to the auth log file (plain or .gz)
        log_file: String,

        /// Restrict the listing to a single user
        #[arg(long)]
        user: Option<String>,
    },

    /// Export the per-user aggregate to JSON or CSV
    Export {
        /// Path to the auth log file (plain or .gz)
        log_file: String,

        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Output format: json or csv
        #[arg(long, default_value = "json", value_parser = ["json", "csv"])]
        format: String,
    },

    /// Generate shell completion scripts
    GenerateCompletion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::UserSummary {
            log_file,
            top,
            user,
        } => commands::user_summary::run(&log_file, top, user.as_deref()),
        Commands::FailedLogins {
            log_file,
            min_failures,
            top,
        } => commands::failed_logins::run(&log_file, min_failures, top),
        Commands::SudoActivity { log_file, user } => {
            commands::sudo_activity::run(&log_file, user.as_deref())
        }
        Commands::Export {
            log_file,
            output,
            format,
        } => commands::export::run(&log_file, output.as_deref(), format.as_str()),
        Commands::GenerateCompletion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "auth-audit", &mut std::io::stdout());
            Ok(())
        }
    }
}
