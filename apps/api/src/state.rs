use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Parsing and scoring are stateless; only read-only configuration travels here.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
