use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotify_linker::{
    config, error, info,
    server::{AppState, start_api_server},
    spotify::SpotifyClient,
    success,
    telegram::TelegramClient,
    warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Run the webhook server (default)
    Serve,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment file: {}", e);
    }

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}

async fn serve() {
    info!("Spotify Linker service is starting up");
    validate_critical_settings();

    let spotify = match SpotifyClient::from_env() {
        Ok(client) => {
            success!("Spotify client initialized successfully");
            Some(client)
        }
        Err(e) => {
            warning!("Spotify client not initialized: {}", e);
            None
        }
    };

    let telegram = match TelegramClient::from_env() {
        Ok(client) => {
            success!("Telegram client initialized successfully");
            Some(client)
        }
        Err(e) => {
            warning!("Telegram client not initialized: {}", e);
            None
        }
    };

    let state = Arc::new(AppState { spotify, telegram });

    info!("Listening on {}", config::server_addr());
    if let Err(e) = start_api_server(state).await {
        error!("Failed to start API server: {}", e);
    }
}

fn validate_critical_settings() {
    let mut missing: Vec<&str> = Vec::new();
    if config::telegram_bot_token().is_none() {
        missing.push("TELEGRAM_BOT_TOKEN");
    }
    if config::spotify_client_id().is_none() {
        missing.push("SPOTIFY_CLIENT_ID");
    }
    if config::spotify_client_secret().is_none() {
        missing.push("SPOTIFY_CLIENT_SECRET");
    }

    if missing.is_empty() {
        info!("All critical environment variables are present");
    } else {
        warning!(
            "Missing recommended environment variables: {}",
            missing.join(", ")
        );
    }
}
