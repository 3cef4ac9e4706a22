use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use obot_cli::cli::{self, commands};
use obot_core::api::ApiClient;

#[derive(Parser)]
#[command(name = "obot", about = "Inspect an Obot server from the terminal")]
struct Cli {
    /// API base URL, e.g. http://localhost:8080/api
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// Path to the CLI config file
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the CLI version
    Version,
    /// List agents
    Agents {
        /// Print raw JSON
        #[arg(long)]
        pretty: bool,
    },
    /// List obots, narrowed the way the obots page narrows
    Obots {
        /// Show a single obot by id
        #[arg(long)]
        obot_id: Option<String>,
        /// Show the children of an obot
        #[arg(long)]
        parent_obot_id: Option<String>,
        /// Print raw JSON
        #[arg(long)]
        pretty: bool,
    },
    /// List models with their providers
    Models {
        /// Print raw JSON
        #[arg(long)]
        pretty: bool,
    },
    /// List chat threads with the active filters applied
    Threads {
        /// Filter by agent id
        #[arg(long)]
        agent: Option<String>,
        /// Filter by user id
        #[arg(long)]
        user: Option<String>,
        /// Filter by task id
        #[arg(long)]
        task: Option<String>,
        /// Filter by obot id
        #[arg(long)]
        obot: Option<String>,
        /// Only threads created on or after this date (YYYY-MM-DD)
        #[arg(long)]
        created_start: Option<String>,
        /// Only threads created on or before this date (YYYY-MM-DD)
        #[arg(long)]
        created_end: Option<String>,
        /// Print raw JSON
        #[arg(long)]
        pretty: bool,
    },
    /// List the tool catalog grouped by category
    Tools {
        /// Print raw JSON
        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    obot_core::tracing_setup::init_tracing()?;

    let cli = Cli::parse();
    let config = cli::load_core_config(cli.api_base.as_deref(), cli.config.as_deref())?;
    tracing::debug!(api_base = %config.api_base, "resolved configuration");
    let client = ApiClient::new(&config)?;

    match cli.command {
        Command::Version => commands::version(),
        Command::Agents { pretty } => commands::agents(&client, pretty).await?,
        Command::Obots {
            obot_id,
            parent_obot_id,
            pretty,
        } => {
            commands::obots(
                &client,
                obot_id.as_deref(),
                parent_obot_id.as_deref(),
                pretty,
            )
            .await?
        }
        Command::Models { pretty } => commands::models(&client, pretty).await?,
        Command::Threads {
            agent,
            user,
            task,
            obot,
            created_start,
            created_end,
            pretty,
        } => {
            let flags = commands::ThreadFlags {
                agent,
                user,
                task,
                obot,
                created_start,
                created_end,
            };
            commands::threads(&client, &flags, pretty).await?
        }
        Command::Tools { pretty } => commands::tools(&client, pretty).await?,
    }

    Ok(())
}
