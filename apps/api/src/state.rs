use std::sync::Arc;

use crate::llm_client::TextGenerator;
use crate::render::mailer::Mailer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Enrichment backend. `None` when no LLM credentials are configured.
    pub text_generator: Option<Arc<dyn TextGenerator>>,
    /// Delivery backend plus its fixed recipient list. `None` when mail is not configured.
    pub mail: Option<MailDelivery>,
}

#[derive(Clone)]
pub struct MailDelivery {
    pub mailer: Arc<dyn Mailer>,
    pub recipients: Vec<String>,
}
