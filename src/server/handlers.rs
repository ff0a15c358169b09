use axum::{
    body::Bytes,
    extract::{Multipart, State},
    http::StatusCode,
    response::Html,
    Json,
};
use base64::{engine::general_purpose, Engine as _};
use image::ImageFormat;
use std::sync::Arc;

use crate::error::InferenceError;
use crate::inference::{self, Classification};
use crate::preprocessing::image::decode_upload;
use crate::server::page::{self, Outcome};
use crate::server::types::*;

/// Multipart field carrying the image.
const UPLOAD_FIELD: &str = "file";

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn metrics(State(state): State<Arc<AppState>>) -> String {
    state.metrics.render()
}

pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(page::render(&state.profile, &Outcome::Empty))
}

/// Form submission: renders the uploaded image with its prediction, or an
/// error banner for this request only.
pub async fn classify_form(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> (StatusCode, Html<String>) {
    let result = match read_upload(multipart).await {
        Ok(bytes) => run_upload(&state, bytes.clone()).await.map(|r| (bytes, r)),
        Err(InferenceError::MissingUpload) => {
            return (
                StatusCode::OK,
                Html(page::render(&state.profile, &Outcome::Empty)),
            );
        }
        Err(e) => Err(e),
    };

    match result {
        Ok((bytes, (classification, format))) => {
            let image_src = format!(
                "data:{};base64,{}",
                format.to_mime_type(),
                general_purpose::STANDARD.encode(&bytes)
            );
            let outcome = Outcome::Result {
                image_src: &image_src,
                prediction: &classification.prediction,
            };
            (StatusCode::OK, Html(page::render(&state.profile, &outcome)))
        }
        Err(e) => {
            let message = e.to_string();
            (
                e.status(),
                Html(page::render(&state.profile, &Outcome::Error(&message))),
            )
        }
    }
}

pub async fn classify_api(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<ClassifyResponse>, InferenceError> {
    let bytes = read_upload(multipart).await?;
    let (classification, _) = run_upload(&state, bytes).await?;
    let prediction = classification.prediction;

    Ok(Json(ClassifyResponse {
        label: prediction.label,
        confidence: prediction.confidence,
        score: prediction.score,
        inference_time_ms: classification.elapsed.as_secs_f64() * 1000.0,
    }))
}

/// Pulls the upload field out of the form. An empty file counts as missing.
async fn read_upload(mut multipart: Multipart) -> Result<Bytes, InferenceError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| InferenceError::Upload(e.to_string()))?
    {
        if field.name() == Some(UPLOAD_FIELD) {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| InferenceError::Upload(e.to_string()))?;
            if bytes.is_empty() {
                return Err(InferenceError::MissingUpload);
            }
            return Ok(bytes);
        }
    }
    Err(InferenceError::MissingUpload)
}

/// Decodes and classifies on the blocking pool.
async fn run_upload(
    state: &AppState,
    bytes: Bytes,
) -> Result<(Classification, ImageFormat), InferenceError> {
    let classifier = Arc::clone(&state.classifier);
    let size = bytes.len();

    let result = tokio::task::spawn_blocking(move || {
        let (img, format) = decode_upload(&bytes)?;
        let classification = inference::classify(classifier.as_ref(), &img)?;
        Ok::<_, InferenceError>((classification, format))
    })
    .await
    .map_err(|e| InferenceError::TaskFailed(e.to_string()))?;

    match &result {
        Ok((classification, format)) => tracing::debug!(
            "Classified {} byte {:?} upload as {} ({:.4}) in {:?}",
            size,
            format,
            classification.prediction.label,
            classification.prediction.score,
            classification.elapsed
        ),
        Err(e) => tracing::warn!("Prediction failed for {} byte upload: {}", size, e),
    }

    result
}
