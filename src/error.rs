use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ndarray::ShapeError;
use serde_json::json;
use thiserror::Error;

/// Fatal startup failure. The process never serves a request after one.
#[derive(Error, Debug)]
pub enum ModelLoadError {
    #[error("Model not found at path: {0}")]
    NotFound(String),

    #[error("ONNX Runtime error: {0}")]
    Runtime(#[from] ort::Error),

    #[error("Incompatible model: {0}")]
    Incompatible(String),
}

/// Per-request failure. Surfaced to the caller; the process keeps serving.
#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("No file uploaded")]
    MissingUpload,

    #[error("Upload failed: {0}")]
    Upload(String),

    #[error("Unsupported image format: {0} (expected PNG or JPEG)")]
    UnsupportedFormat(String),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Preprocessing error: {0}")]
    Preprocessing(String),

    #[error("Input shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    #[error("Shape error: {0}")]
    Shape(#[from] ShapeError),

    #[error("ONNX Runtime error: {0}")]
    Runtime(#[from] ort::Error),

    #[error("Model produced an empty output")]
    EmptyOutput,

    #[error("Model score {0} is outside [0, 1]")]
    ScoreOutOfRange(f32),

    #[error("Model session is unavailable after a previous panic")]
    SessionPoisoned,

    #[error("Inference task failed: {0}")]
    TaskFailed(String),
}

impl InferenceError {
    pub fn status(&self) -> StatusCode {
        match self {
            InferenceError::MissingUpload
            | InferenceError::Upload(_)
            | InferenceError::UnsupportedFormat(_)
            | InferenceError::Image(_)
            | InferenceError::Preprocessing(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for InferenceError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
