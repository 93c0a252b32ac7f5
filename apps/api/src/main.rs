mod assessment;
mod config;
mod errors;
mod llm_client;
mod render;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{LlmClient, TextGenerator};
use crate::render::mailer::{Mailer, PostmarkMailer};
use crate::routes::build_router;
use crate::state::{AppState, MailDelivery};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Assessment API v{}", env!("CARGO_PKG_VERSION"));

    // Enrichment is optional: no key, no LLM calls
    let text_generator: Option<Arc<dyn TextGenerator>> = match &config.anthropic_api_key {
        Some(key) => {
            let llm: Arc<dyn TextGenerator> = Arc::new(LlmClient::new(key.clone())?);
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(llm)
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; analysis enrichment disabled");
            None
        }
    };

    let mail = match &config.mail {
        Some(mail_config) => {
            let mailer: Arc<dyn Mailer> = Arc::new(PostmarkMailer::new(
                mail_config.server_token.clone(),
                mail_config.from.clone(),
            )?);
            info!(
                "Mail delivery initialized ({} recipients)",
                mail_config.recipients.len()
            );
            Some(MailDelivery {
                mailer,
                recipients: mail_config.recipients.clone(),
            })
        }
        None => {
            warn!("Mail settings incomplete; submissions will fail at delivery");
            None
        }
    };

    let state = AppState {
        text_generator,
        mail,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the form's host once it is deployed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
