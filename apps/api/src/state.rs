use std::sync::Arc;

use crate::config::Config;
use crate::lexicon::Lexicon;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Linguistic resource loaded once at startup. Handlers pass it into
    /// extractor calls explicitly rather than reaching for a global.
    pub lexicon: Arc<Lexicon>,
}
