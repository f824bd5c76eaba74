use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "jobradar", about = "Aggregated job board backend")]
pub struct Config {
    /// Database connection URL
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Run database migrations on startup
    #[arg(long, env = "RUN_MIGRATIONS", default_value = "true")]
    pub run_migrations: bool,

    /// API key for the Jooble source; the source is skipped when unset
    #[arg(long, env = "JOOBLE_API_KEY")]
    pub jooble_api_key: Option<String>,

    /// Keywords used when querying sources that require a search term
    #[arg(long, env = "SYNC_KEYWORDS", default_value = "humanitarian")]
    pub sync_keywords: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub enum Command {
    /// Start the web server (default when no subcommand given)
    Serve {
        /// Listen address
        #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:8080")]
        listen_addr: String,
    },
    /// Run the job-source sync, once or on an interval
    Sync {
        /// Only sync this source (default: all registered sources)
        #[arg(long)]
        source: Option<String>,

        /// Repeat every N seconds instead of running once
        #[arg(long, env = "SYNC_INTERVAL")]
        every: Option<u64>,
    },
    /// Create an API token and print it to stdout
    CreateToken {
        /// Token name, shown in the token listing
        #[arg(long)]
        name: String,
    },
}

impl Config {
    /// Resolve the command, defaulting to Serve if none specified.
    pub fn resolved_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve {
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
        })
    }
}
