use crate::error::InferenceError;
use crate::model::Classifier;
use crate::prediction::Prediction;
use crate::preprocessing::image::{to_tensor, INPUT_SHAPE};
use image::DynamicImage;
use metrics::{counter, histogram};
use std::time::{Duration, Instant};

/// Outcome of one successful forward pass.
#[derive(Debug, Clone, Copy)]
pub struct Classification {
    pub prediction: Prediction,
    pub elapsed: Duration,
}

/// Preprocesses `img`, runs the classifier once and applies the decision rule.
pub fn classify(
    classifier: &dyn Classifier,
    img: &DynamicImage,
) -> Result<Classification, InferenceError> {
    let start = Instant::now();
    let result = to_tensor(img).and_then(|tensor| run(classifier, tensor));
    let elapsed = start.elapsed();

    match result {
        Ok(prediction) => {
            histogram!("inference_duration_seconds").record(elapsed.as_secs_f64());
            counter!("predictions_total", "label" => prediction.label.as_str()).increment(1);
            Ok(Classification {
                prediction,
                elapsed,
            })
        }
        Err(e) => {
            counter!("prediction_failures_total").increment(1);
            Err(e)
        }
    }
}

fn run(
    classifier: &dyn Classifier,
    tensor: ndarray::Array4<f32>,
) -> Result<Prediction, InferenceError> {
    if tensor.shape() != INPUT_SHAPE {
        return Err(InferenceError::ShapeMismatch {
            expected: INPUT_SHAPE.to_vec(),
            got: tensor.shape().to_vec(),
        });
    }

    let score = classifier.predict(tensor)?;
    if !(0.0..=1.0).contains(&score) {
        return Err(InferenceError::ScoreOutOfRange(score));
    }

    Ok(Prediction::from_score(score))
}
