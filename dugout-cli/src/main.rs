mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dugout")]
#[command(about = "Team toolkit: next event, roster stats, photos, and role admin")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the next upcoming event from the team calendar
    Next {
        /// Also show records skipped while parsing the feed
        #[arg(short, long)]
        verbose: bool,
    },
    /// Sign up, log in, or log out
    Auth {
        #[command(subcommand)]
        command: commands::auth::AuthCommands,
    },
    /// View and edit player statistics
    Roster {
        #[command(subcommand)]
        command: commands::roster::RosterCommands,
    },
    /// List team photo gallery URLs
    Photos {
        /// Request signed URLs instead of public ones
        #[arg(long)]
        signed: bool,

        /// Signed URL lifetime in seconds
        #[arg(long, default_value_t = 3600)]
        expires: u64,
    },
    /// Coach-only account management
    Admin {
        #[command(subcommand)]
        command: commands::admin::AdminCommands,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Next { verbose } => commands::next::run(verbose).await,
        Commands::Auth { command } => commands::auth::run(command).await,
        Commands::Roster { command } => commands::roster::run(command).await,
        Commands::Photos { signed, expires } => commands::photos::run(signed, expires).await,
        Commands::Admin { command } => commands::admin::run(command).await,
    }
}
