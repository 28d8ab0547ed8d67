use image::{DynamicImage, GrayImage};
use ocrs::{ImageSource, OcrEngine, OcrEngineParams};
use rten::Model;
use std::path::Path;

/// The text-recognition capability consumed by the pipeline.
///
/// The pipeline only needs "image in, tokens out"; anything satisfying that
/// can stand in for the real engine, which keeps the rest of the pipeline
/// testable with synthetic fixtures.
pub trait TextReader: Send + Sync {
    /// Recognize text in an enhanced region, in reading order.
    fn read_tokens(&self, region: &GrayImage) -> anyhow::Result<Vec<String>>;
}

/// OCR backed by the ocrs engine with models from the standard cache location.
pub struct OcrsReader {
    engine: OcrEngine,
}

impl OcrsReader {
    /// Load the detection and recognition models and build the engine.
    ///
    /// Failure here is fatal for the whole session; there is no per-image
    /// fallback when the engine cannot be constructed.
    pub fn new() -> anyhow::Result<Self> {
        let home_dir = std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE"))?;

        let cache_dir = Path::new(&home_dir).join(".cache/ocrs");
        let detection_model_path = cache_dir.join("text-detection.rten");
        let recognition_model_path = cache_dir.join("text-recognition.rten");

        if !detection_model_path.exists() || !recognition_model_path.exists() {
            anyhow::bail!(
                "OCR models not found. Please run: ocrs-cli --help (or download models manually)\n\
                 Expected locations:\n  - {}\n  - {}",
                detection_model_path.display(),
                recognition_model_path.display()
            );
        }

        let detection_model = Model::load_file(&detection_model_path)?;
        let recognition_model = Model::load_file(&recognition_model_path)?;

        let engine = OcrEngine::new(OcrEngineParams {
            detection_model: Some(detection_model),
            recognition_model: Some(recognition_model),
            ..Default::default()
        })?;

        Ok(Self { engine })
    }
}

impl TextReader for OcrsReader {
    fn read_tokens(&self, region: &GrayImage) -> anyhow::Result<Vec<String>> {
        // ocrs expects RGB input
        let rgb = DynamicImage::ImageLuma8(region.clone()).to_rgb8();

        let source = ImageSource::from_bytes(rgb.as_raw(), rgb.dimensions())?;
        let input = self.engine.prepare_input(source)?;
        let text = self.engine.get_text(&input)?;

        Ok(text.split_whitespace().map(str::to_string).collect())
    }
}
