use clap::Parser;
use solace_gateway::GatewayServer;
use solace_reasoning::{ConversationEngine, OpenAiClient};
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the HTTP gateway to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind the HTTP gateway to
    #[arg(short, long, default_value_t = 8000)]
    port: u16,

    /// Completion model to use
    #[arg(short, long, default_value = "gpt-3.5-turbo", env = "SOLACE_MODEL")]
    model: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    info!("Starting Solace backend with model {}...", args.model);
    let client = Arc::new(OpenAiClient::new(&args.model)?);
    let engine = Arc::new(ConversationEngine::new(client));

    let server = GatewayServer::new(engine, &args.host, args.port);
    server.start().await?.await?;

    Ok(())
}
