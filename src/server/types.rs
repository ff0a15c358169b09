use crate::config::PresentationProfile;
use crate::model::Classifier;
use crate::prediction::Label;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use std::sync::Arc;

/// Shared Application State
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<dyn Classifier>,
    pub profile: PresentationProfile,
    pub metrics: PrometheusHandle,
}

// --- DTOs (Data Transfer Objects) ---

#[derive(Serialize)]
pub struct ClassifyResponse {
    pub label: Label,
    pub confidence: f32,
    pub score: f32,
    pub inference_time_ms: f64,
}
