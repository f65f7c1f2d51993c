//! Wingman HTTP server.

use std::process;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use wingman::adapters::ai::OpenAIProvider;
use wingman::adapters::http::{app_router, ChatAppState};
use wingman::adapters::sentiment::AfinnLexicon;
use wingman::adapters::storage::{FileContextStore, InMemoryContextStore};
use wingman::config::AppConfig;
use wingman::domain::conversation::ConversationEngine;
use wingman::ports::ContextStore;

#[tokio::main]
async fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    init_tracing(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server stopped");
        process::exit(1);
    }
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    config.validate()?;

    let provider = OpenAIProvider::new(config.ai.openai_config()?)?;
    let engine = ConversationEngine::new(
        Arc::new(provider),
        Arc::new(AfinnLexicon::new()),
        config.conversation.clone(),
    )
    .with_generation_timeout(config.ai.call_budget());

    let store: Arc<dyn ContextStore> = match &config.storage.data_dir {
        Some(dir) => {
            tracing::info!(data_dir = %dir.display(), "Persisting contexts to disk");
            Arc::new(FileContextStore::new(dir))
        }
        None => {
            tracing::info!("Keeping contexts in memory");
            Arc::new(InMemoryContextStore::new())
        }
    };

    let app = app_router(
        ChatAppState::new(Arc::new(engine), store),
        config.server.request_timeout(),
        &config.server.cors_origins_list(),
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        model = %config.ai.model,
        version = env!("CARGO_PKG_VERSION"),
        "Wingman listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
