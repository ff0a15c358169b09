use crate::error::ModelLoadError;
use ort::session::{builder::GraphOptimizationLevel, Session};
use std::path::Path;

// Initialize the global environment for ORT (only needed once)
pub fn init_ort() -> Result<(), ModelLoadError> {
    ort::init().with_name("emotion-classifier").commit()?;
    Ok(())
}

/// Loads an ONNX model from disk and creates an inference session.
///
/// # Arguments
/// * `model_path` - Path to the .onnx file
/// * `intra_threads` - Parallelism within a single operator
pub fn load_model(
    model_path: impl AsRef<Path>,
    intra_threads: usize,
) -> Result<Session, ModelLoadError> {
    let path = model_path.as_ref();
    if !path.exists() {
        return Err(ModelLoadError::NotFound(path.display().to_string()));
    }

    let session = Session::builder()?
        .with_optimization_level(GraphOptimizationLevel::Level3)?
        .with_intra_threads(intra_threads)?
        .commit_from_file(path)?;

    tracing::info!("Loaded model: {}", path.display());
    for (i, input) in session.inputs.iter().enumerate() {
        tracing::info!("  Input {}: {} ({:?})", i, input.name, input.input_type);
    }
    for (i, output) in session.outputs.iter().enumerate() {
        tracing::info!("  Output {}: {} ({:?})", i, output.name, output.output_type);
    }

    Ok(session)
}
