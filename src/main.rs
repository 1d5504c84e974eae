use ai_relay::{build_app, run_server, AppConfig, AppState};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    config.logging.init();
    config.warn_missing_credentials();
    info!(
        gpt_model = %config.openai.model,
        gemini_model = %config.gemini.model,
        "ai-relay starting"
    );

    let app = build_app(AppState::from_config(&config));

    if let Err(e) = run_server(app, config.port).await {
        error!(error = %e, "fatal error");
        std::process::exit(1);
    }
}
