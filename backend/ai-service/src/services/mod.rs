use crate::config::Config;

/// Read-only state shared by every request.
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        tracing::info!("Serving model '{}'", config.model_name);
        Self { config }
    }
}

pub mod chat_responder;
pub mod question_generator;
