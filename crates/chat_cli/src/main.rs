use std::io::{self, BufRead, Write};
use std::sync::Arc;

use chat_client::HttpChatTransport;
use chat_core::{Entry, Sender};
use chat_widget::{TranscriptView, WidgetController};
use clap::{Parser, Subcommand};
use colored::Colorize;

#[derive(Parser)]
#[command(name = "chat-cli")]
#[command(about = "Terminal front end for the chat service")]
#[command(version)]
struct Cli {
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    server_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start interactive chat
    Chat,
    /// Send a single message
    Send {
        /// Message content
        message: String,
    },
}

/// Prints each entry as it is appended, colored by sender.
struct TerminalView;

impl TranscriptView for TerminalView {
    fn entry_appended(&self, entry: &Entry) {
        let line = match entry.sender {
            Sender::User => format!("you: {}", entry.text).cyan(),
            Sender::Bot => format!("bot: {}", entry.text).green(),
        };
        println!("{line}");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let endpoint = format!("{}/chat", cli.server_url.trim_end_matches('/'));
    let transport = Arc::new(HttpChatTransport::new(endpoint));
    let controller = WidgetController::new(transport, TerminalView);

    match cli.command {
        Commands::Chat => run_interactive_chat(&controller).await,
        Commands::Send { message } => {
            controller.set_pending(message);
            controller.send().await;
            Ok(())
        }
    }
}

async fn run_interactive_chat(
    controller: &WidgetController<TerminalView>,
) -> anyhow::Result<()> {
    println!("{}", "Connected. Type a message and press Enter; 'exit' to quit.".dimmed());

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim_end_matches(['\r', '\n']);
        if matches!(line.trim(), "exit" | "quit") {
            break;
        }

        // Pressing Enter submits whatever is pending; blank lines fall
        // through the controller's empty-input guard and do nothing.
        controller.set_pending(line);
        controller.send().await;
    }

    Ok(())
}
