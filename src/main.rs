use check_the_score::commands;
use check_the_score::config;
use check_the_score::espn::{EspnClient, League};
use check_the_score::table::TableStyle;
use clap::{Parser, ValueEnum};
use std::io::IsTerminal;
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "check-the-score")]
#[command(version, about = "Current-week scores as a terminal table")]
struct Cli {
    /// Scores API to query
    api: Api,

    /// Date in YYYY-MM-DD format (optional, defaults to the current week)
    #[arg(short, long)]
    date: Option<String>,

    /// Draw table borders with ASCII characters
    #[arg(long)]
    ascii: bool,

    /// Disable colors and highlighting
    #[arg(long)]
    no_color: bool,

    /// Serve fixture data instead of calling the API
    #[cfg(feature = "development")]
    #[arg(long)]
    mock: bool,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, default_value = DEFAULT_LOG_FILE)]
    log_file: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum Api {
    /// National Football League
    #[value(name = "nfl")]
    Nfl,
}

impl Api {
    fn to_league(self) -> League {
        match self {
            Api::Nfl => League::Nfl,
        }
    }
}

fn create_client(config: &config::Config) -> EspnClient {
    let timeout = Duration::from_secs(config.request_timeout_secs);
    match EspnClient::new(&config.api_base_url, timeout) {
        Ok(client) => client,
        Err(e) => {
            let error_msg = format!("Failed to create scoreboard API client: {}", e);
            tracing::error!("{}", error_msg);
            eprintln!("{}", error_msg);
            std::process::exit(1);
        }
    }
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Apply CLI display flags on top of the config file
fn resolve_display_config(cli: &Cli, mut config: config::Config) -> config::Config {
    if cli.ascii {
        config.use_unicode = false;
    }
    if cli.no_color || !std::io::stdout().is_terminal() {
        config.use_color = false;
    }
    config
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    let config = resolve_display_config(&cli, config);
    let style = TableStyle::from_config(&config);
    let league = cli.api.to_league();

    #[cfg(feature = "development")]
    if cli.mock {
        let client = check_the_score::dev::mock_client::MockClient::new();
        if let Err(e) = commands::scores::run(&client, league, cli.date.clone(), &style, config.use_color).await {
            exit_with_error(&e);
        }
        return;
    }

    let client = create_client(&config);
    if let Err(e) = commands::scores::run(&client, league, cli.date, &style, config.use_color).await {
        exit_with_error(&e);
    }
}

/// Report a failed run on stderr and in the log, then exit with status 1
fn exit_with_error(e: &anyhow::Error) -> ! {
    eprintln!("{}", error_message(e));
    tracing::error!("Command failed: {:#}", e);
    std::process::exit(1);
}

fn error_message(e: &anyhow::Error) -> String {
    format!("Error: {:#}", e)
}
