use crate::config::ModelConfig;
use crate::error::{InferenceError, ModelLoadError};
use crate::model::loader;
use ndarray::Array4;
use ort::session::Session;
use ort::value::Tensor;
use std::sync::Mutex;

/// A binary image classifier scoring an image as P(sad).
///
/// Implementations are loaded once and shared read-only across requests.
pub trait Classifier: Send + Sync {
    /// Runs one forward pass over a `[1, 256, 256, 3]` tensor and returns the
    /// raw scalar output.
    fn predict(&self, input: Array4<f32>) -> Result<f32, InferenceError>;
}

/// Classifier backed by an ONNX Runtime session.
pub struct OnnxClassifier {
    // `Session::run` needs exclusive access
    session: Mutex<Session>,
    input_name: String,
}

impl OnnxClassifier {
    pub fn load(config: &ModelConfig) -> Result<Self, ModelLoadError> {
        let session = loader::load_model(&config.path, config.intra_threads)?;
        Self::from_session(session)
    }

    pub fn from_session(session: Session) -> Result<Self, ModelLoadError> {
        let input_name = session
            .inputs
            .first()
            .map(|input| input.name.clone())
            .ok_or_else(|| ModelLoadError::Incompatible("model declares no inputs".to_string()))?;
        if session.outputs.is_empty() {
            return Err(ModelLoadError::Incompatible(
                "model declares no outputs".to_string(),
            ));
        }

        Ok(Self {
            session: Mutex::new(session),
            input_name,
        })
    }
}

impl Classifier for OnnxClassifier {
    fn predict(&self, input: Array4<f32>) -> Result<f32, InferenceError> {
        let shape: Vec<i64> = input.shape().iter().map(|&d| d as i64).collect();
        let data = row_major(&input)?;
        let input_value = Tensor::from_array((shape, data))?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| InferenceError::SessionPoisoned)?;
        let outputs = session.run(ort::inputs![self.input_name.as_str() => input_value])?;

        let (_, scores) = outputs[0].try_extract_tensor::<f32>()?;
        first_score(scores)
    }
}

/// Copies the tensor out in logical row-major order, whatever its strides.
fn row_major(input: &Array4<f32>) -> Result<Vec<f32>, InferenceError> {
    let input = input.as_standard_layout();
    input
        .as_slice()
        .map(<[f32]>::to_vec)
        .ok_or_else(|| InferenceError::Preprocessing("tensor is not contiguous".to_string()))
}

fn first_score(scores: &[f32]) -> Result<f32, InferenceError> {
    scores.first().copied().ok_or(InferenceError::EmptyOutput)
}
