//! Handbook Advisor server entry point.
//!
//! Startup order: configuration → tracing → handbook existence check →
//! provider wiring → router → serve. A missing handbook file is fatal here;
//! a missing API key only disables the suggestion endpoint.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use handbook_advisor::adapters::ai::{GeminiConfig, GeminiProvider};
use handbook_advisor::adapters::document::{LocalHandbookStorage, PdfHandbookAnalyzer};
use handbook_advisor::adapters::http::{advisor_routes, AdvisorAppState, HandbookInfo};
use handbook_advisor::application::handlers::{
    GetHandbookOverviewHandler, RequestSuggestionsHandler,
};
use handbook_advisor::application::ExtractCache;
use handbook_advisor::config::AppConfig;
use handbook_advisor::ports::{HandbookStorage, SuggestionProvider};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("handbook-advisor failed to start: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    let filter = EnvFilter::try_new(&config.server.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let storage: Arc<dyn HandbookStorage> = Arc::new(LocalHandbookStorage::new());

    // The handbook must exist at process start; every interaction needs it.
    if !storage.exists(&config.handbook.path).await {
        return Err(format!(
            "handbook file not found: {}",
            config.handbook.path.display()
        )
        .into());
    }

    let provider: Option<Arc<dyn SuggestionProvider>> = if config.ai.has_gemini() {
        let api_key = config
            .ai
            .gemini_api_key
            .clone()
            .unwrap_or_default();
        let gemini_config = GeminiConfig::new(api_key)
            .with_model(&config.ai.model)
            .with_base_url(&config.ai.base_url)
            .with_timeout(config.ai.timeout());
        Some(Arc::new(GeminiProvider::new(gemini_config)))
    } else {
        tracing::warn!("no Gemini API key configured; suggestion requests will be rejected");
        None
    };

    let cache = Arc::new(ExtractCache::new(config.handbook.cache_ttl()));
    let analyzer = Arc::new(PdfHandbookAnalyzer::new());

    let state = AdvisorAppState {
        overview_handler: Arc::new(GetHandbookOverviewHandler::new(
            analyzer,
            cache,
            config.handbook.path.clone(),
        )),
        suggestions_handler: Arc::new(RequestSuggestionsHandler::new(
            provider,
            Arc::clone(&storage),
            config.handbook.path.clone(),
        )),
        info: HandbookInfo {
            source_file: config.handbook.file_name(),
            model: config.ai.model.clone(),
        },
    };

    let app = advisor_routes(state);
    let addr = config.server.socket_addr()?;

    tracing::info!(
        %addr,
        handbook = %config.handbook.path.display(),
        model = %config.ai.model,
        "handbook-advisor listening"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
