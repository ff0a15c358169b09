use emotion_classifier::{config, model, observability, server};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Init
    observability::init_tracing();
    let metrics = observability::install_metrics()?;

    // 2. Load Config
    let config = config::AppConfig::load("config.yaml")?;

    // 3. Load the classifier; nothing is served without it
    tracing::info!("Loading model from {}", config.model.path);
    let classifier = match load_classifier(&config.model) {
        Ok(classifier) => classifier,
        Err(e) => {
            tracing::error!("Error loading the model: {}", e);
            return Err(e.into());
        }
    };

    // 4. Create Router
    let state = server::types::AppState {
        classifier: Arc::new(classifier),
        profile: config.presentation.resolve(),
        metrics,
    };
    let app = server::routes::create_router(state, config.server.body_limit());

    // 5. Bind & Serve
    let listener =
        TcpListener::bind(format!("{}:{}", config.server.host, config.server.port)).await?;
    tracing::info!(
        "Server listening on http://{}:{}",
        config.server.host,
        config.server.port
    );

    axum::serve(listener, app).await?;

    Ok(())
}

fn load_classifier(
    model_config: &config::ModelConfig,
) -> Result<model::OnnxClassifier, emotion_classifier::ModelLoadError> {
    model::loader::init_ort()?;
    model::OnnxClassifier::load(model_config)
}
