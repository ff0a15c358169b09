//! Stub classifiers and request builders shared by the test modules.

use crate::config::PresentationProfile;
use crate::error::InferenceError;
use crate::model::Classifier;
use crate::preprocessing::image::INPUT_SHAPE;
use crate::server::types::AppState;
use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use metrics_exporter_prometheus::PrometheusBuilder;
use ndarray::Array4;
use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const BOUNDARY: &str = "----emotion-classifier-test-boundary";

/// Returns the same score for every input.
pub struct FixedClassifier(pub f32);

impl Classifier for FixedClassifier {
    fn predict(&self, input: Array4<f32>) -> Result<f32, InferenceError> {
        assert_eq!(input.shape(), &INPUT_SHAPE);
        assert!(input.iter().all(|&v| (0.0..=1.0).contains(&v)));
        Ok(self.0)
    }
}

/// Fails every forward pass.
pub struct FailingClassifier;

impl Classifier for FailingClassifier {
    fn predict(&self, _input: Array4<f32>) -> Result<f32, InferenceError> {
        Err(InferenceError::Runtime(ort::Error::new(
            "Got invalid dimensions for input",
        )))
    }
}

/// Fails the first call only, then returns `score`.
pub struct FlakyClassifier {
    pub score: f32,
    pub calls: AtomicUsize,
}

impl FlakyClassifier {
    pub fn new(score: f32) -> Self {
        Self {
            score,
            calls: AtomicUsize::new(0),
        }
    }
}

impl Classifier for FlakyClassifier {
    fn predict(&self, _input: Array4<f32>) -> Result<f32, InferenceError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            return Err(InferenceError::Runtime(ort::Error::new("transient failure")));
        }
        Ok(self.score)
    }
}

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb([200, 120, 40]));
    let mut buffer = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .unwrap();
    buffer
}

/// Builds a `multipart/form-data` body with one file field.
pub fn multipart_body(field: &str, filename: &str, content: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field, filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", BOUNDARY)
}

pub fn app_state(classifier: Arc<dyn Classifier>, profile: PresentationProfile) -> AppState {
    let recorder = PrometheusBuilder::new().build_recorder();
    AppState {
        classifier,
        profile,
        metrics: recorder.handle(),
    }
}

pub fn upload_request(uri: &str, field: &str, content: &[u8]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, multipart_content_type())
        .body(Body::from(multipart_body(field, "face.png", content)))
        .unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
