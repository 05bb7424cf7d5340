use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "chatd")]
#[command(about = "Standalone chat service")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(long, env = "APP_PORT", default_value_t = 8080)]
    port: u16,

    /// Path to the question/answer store
    #[arg(long, env = "KNOWLEDGE_BASE", default_value = "knowledge_base.json")]
    knowledge_base: PathBuf,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_line_number(true)
                .with_file(false),
        )
        .init();

    let args = Args::parse();
    tracing::info!(
        "Starting chat service on port {} with knowledge base {}",
        args.port,
        args.knowledge_base.display()
    );

    if let Err(e) = chat_service::server::run(args.knowledge_base, args.port).await {
        tracing::error!("Failed to run chat service: {}", e);
        std::process::exit(1);
    }
}
