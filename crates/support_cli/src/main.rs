use std::io::{self, Write};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use colored::Colorize;

use dialog_session::{DialogEngine, DialogSession};
use support_core::{Config, OutboundMessage};
use support_gateway::{CannedSupportGateway, HttpSupportGateway, SupportGateway};

#[derive(Parser)]
#[command(name = "support-cli")]
#[command(about = "Terminal client for the auto parts support assistant")]
#[command(version)]
struct Cli {
    /// Backend base URL; falls back to config.toml / SUPPORT_API_BASE
    #[arg(long)]
    server_url: Option<String>,

    /// Run without a backend; freight quotes use fixed data and nothing is recorded
    #[arg(long, default_value = "false")]
    offline: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive conversation (default)
    Chat,
    /// Check the backend health endpoint
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::new();
    let server_url = cli.server_url.unwrap_or_else(|| config.api_base.clone());

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => run_chat(&server_url, cli.offline).await,
        Commands::Health => check_health(&server_url).await,
    }
}

async fn run_chat(server_url: &str, offline: bool) -> anyhow::Result<()> {
    let gateway: Arc<dyn SupportGateway> = if offline {
        println!("{}", "(modo offline: nada será registrado)".dimmed());
        Arc::new(CannedSupportGateway::new())
    } else {
        println!("{}", format!("Servidor: {server_url}").dimmed());
        Arc::new(HttpSupportGateway::new(server_url))
    };

    let engine = DialogEngine::new(gateway);
    let mut session = DialogSession::new();

    print_messages(&engine.welcome());
    println!("{}", "(digite 'sair' para encerrar)".dimmed());

    let stdin = io::stdin();
    loop {
        if session.state().awaits_free_text() {
            println!("{}", format!("[{}]", session.state().description()).dimmed());
        }
        print!("{} ", ">".cyan());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.eq_ignore_ascii_case("sair") || input.eq_ignore_ascii_case("exit") {
            break;
        }

        let messages = engine.handle_message(&mut session, input).await;
        print_messages(&messages);
    }

    println!("{}", "Até logo!".green());
    Ok(())
}

fn print_messages(messages: &[OutboundMessage]) {
    for message in messages {
        if message.is_bot() {
            println!("{} {}", "🤖".cyan(), message.text);
        } else {
            println!("{}", format!("   {}", message.text).dimmed());
        }
    }
}

async fn check_health(server_url: &str) -> anyhow::Result<()> {
    let url = format!("{}/api/health", server_url.trim_end_matches('/'));
    println!("{}", format!("GET {url}").dimmed());

    match reqwest::get(&url).await {
        Ok(response) if response.status().is_success() => {
            let body: serde_json::Value = response.json().await?;
            println!("{} {}", "✅".green(), body);
            Ok(())
        }
        Ok(response) => {
            println!("{} {}", "❌".red(), response.status());
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "❌".red(), e);
            Ok(())
        }
    }
}
