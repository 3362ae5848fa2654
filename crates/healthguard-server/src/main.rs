//! Health Guardian WebSocket Server
//!
//! Hosts either the user-facing guardian agent or the medical brain agent.

mod link;
mod router;
mod server;
mod session;

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use healthguard::{load_knowledge_graph, Analyzer, BrainAgent, ChatAgent, Config, GuardianAgent, KnowledgeTable};
use router::Router;
use server::Server;

/// Health Guardian WebSocket Server
#[derive(Parser, Debug)]
#[command(name = "healthguard-server")]
#[command(author, version, about = "WebSocket host for the Health Guardian agents")]
struct Args {
    /// Config file (defaults to ~/.config/healthguard/config.toml)
    #[arg(short, long, env = "HEALTHGUARD_CONFIG")]
    config: Option<PathBuf>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the user-facing guardian agent
    Guardian {
        /// Address to listen on
        #[arg(short, long)]
        listen: Option<SocketAddr>,

        /// WebSocket URL of the brain agent
        #[arg(long, env = "HEALTHGUARD_BRAIN_URL")]
        brain_url: Option<String>,

        /// Answer locally even if a brain URL is configured
        #[arg(long)]
        standalone: bool,
    },

    /// Run the medical brain agent
    Brain {
        /// Address to listen on
        #[arg(short, long)]
        listen: Option<SocketAddr>,

        /// Knowledge graph fact file
        #[arg(long, env = "HEALTHGUARD_KNOWLEDGE_GRAPH")]
        knowledge_graph: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env files before parsing so env fallbacks see them
    let _ = dotenvy::from_filename(".env");
    if let Some(home) = dirs::home_dir() {
        let _ = dotenvy::from_path(home.join(".env"));
    }

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Set up file-based logging
    let log_path = args.log_file.clone().unwrap_or_else(|| config.logging.file.clone());
    let log_file = std::fs::File::create(&log_path)?;
    tracing_subscriber::registry()
        .with(EnvFilter::new(&config.logging.filter))
        .with(fmt::layer().with_writer(log_file).with_ansi(false))
        .init();

    match args.command {
        Command::Guardian {
            listen,
            brain_url,
            standalone,
        } => {
            let listen = listen.unwrap_or(config.guardian.listen);
            let brain_url = if standalone {
                None
            } else {
                brain_url.or_else(|| config.guardian.brain_url.clone())
            };

            // Used for every reply while no brain link is up
            let graph = load_knowledge_graph(config.brain.knowledge_graph.as_deref());
            let analyzer = Analyzer::new(KnowledgeTable::builtin(), graph);
            let agent = match &brain_url {
                Some(_) => GuardianAgent::forwarding(&config.guardian.brain_address, analyzer),
                None => GuardianAgent::standalone(analyzer),
            };

            let mode = match &brain_url {
                Some(url) => format!("forwarding to {}", url),
                None => "standalone".to_string(),
            };
            print_banner(&agent, listen, &mode, &log_path);

            let router = Router::new(Box::new(agent));
            if let Some(url) = &brain_url {
                if let Err(e) = link::connect_brain(url, &config.guardian.brain_address, router.clone()).await {
                    tracing::warn!("{:#}, answering locally", e);
                    eprintln!("Warning: {:#}, answering locally", e);
                }
            }

            Server::new(listen, router).run().await
        }

        Command::Brain {
            listen,
            knowledge_graph,
        } => {
            let listen = listen.unwrap_or(config.brain.listen);
            let graph_path = knowledge_graph.or_else(|| config.brain.knowledge_graph.clone());

            let graph = load_knowledge_graph(graph_path.as_deref());
            let agent = BrainAgent::new(Analyzer::new(KnowledgeTable::builtin(), graph));

            let mode = if agent.analyzer().graph_live() {
                "knowledge graph enabled"
            } else {
                "built-in table only"
            };
            print_banner(&agent, listen, mode, &log_path);

            Server::new(listen, Router::new(Box::new(agent))).run().await
        }
    }
}

fn print_banner(agent: &dyn ChatAgent, listen: SocketAddr, mode: &str, log_path: &std::path::Path) {
    eprintln!("Health Guardian - {}", agent.name());
    eprintln!("Listening on: ws://{}", listen);
    eprintln!("Mode: {}", mode);
    eprintln!("Log file: {}", log_path.display());
    eprintln!();
    eprintln!("Press Ctrl+C to stop");
}
