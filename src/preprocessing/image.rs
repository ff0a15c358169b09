use crate::error::InferenceError;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use ndarray::{Array, Array4, Axis};

/// Side length the classifier was trained on.
pub const INPUT_SIZE: u32 = 256;

/// Batch, height, width, channels.
pub const INPUT_SHAPE: [usize; 4] = [1, INPUT_SIZE as usize, INPUT_SIZE as usize, 3];

/// Decodes an upload, accepting only PNG and JPEG.
pub fn decode_upload(buffer: &[u8]) -> Result<(DynamicImage, ImageFormat), InferenceError> {
    let format = image::guess_format(buffer)
        .map_err(|_| InferenceError::UnsupportedFormat("unrecognized data".to_string()))?;

    match format {
        ImageFormat::Png | ImageFormat::Jpeg => {}
        other => return Err(InferenceError::UnsupportedFormat(format!("{:?}", other))),
    }

    let img = image::load_from_memory_with_format(buffer, format)?;
    Ok((img, format))
}

/// Turns a decoded image into a `[1, 256, 256, 3]` tensor with values in [0, 1].
///
/// The image is stretched to the square input size; aspect ratio is not kept.
pub fn to_tensor(img: &DynamicImage) -> Result<Array4<f32>, InferenceError> {
    let side = INPUT_SIZE as usize;
    let resized = img.resize_exact(INPUT_SIZE, INPUT_SIZE, FilterType::Triangle);

    let mut data = Vec::with_capacity(side * side * 3);
    for pixel in resized.to_rgb8().pixels() {
        data.push(pixel[0] as f32 / 255.0);
        data.push(pixel[1] as f32 / 255.0);
        data.push(pixel[2] as f32 / 255.0);
    }

    // Pixels come out row-major as [R, G, B, ...], i.e. [H, W, C]
    let array = Array::from_shape_vec((side, side, 3), data)
        .map_err(|e| InferenceError::Preprocessing(e.to_string()))?;

    Ok(array.insert_axis(Axis(0)))
}

/// Decode and preprocess raw upload bytes in one step.
pub fn process_bytes(buffer: &[u8]) -> Result<Array4<f32>, InferenceError> {
    let (img, _) = decode_upload(buffer)?;
    to_tensor(&img)
}
