pub mod crop;
pub mod enhance;
pub mod ocr;
pub mod parse;
pub mod select;
pub mod split;

use anyhow::{Context, Result};
use image::ImageReader;
use std::path::Path;

use crate::config::PipelineConfig;
use crate::models::{CardSlot, CardValue, Decision};
use ocr::TextReader;

/// Runs the full extraction over a drop screenshot: split into three card
/// slots, crop and enhance each slot's value region, recognize and parse the
/// value, then select the priority card.
pub struct ExtractionPipeline<R: TextReader> {
    reader: R,
    config: PipelineConfig,
    verbose: bool,
}

impl<R: TextReader> ExtractionPipeline<R> {
    pub fn new(reader: R, config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            reader,
            config,
            verbose: false,
        })
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Locate the priority card in the screenshot at `path`.
    ///
    /// Returns `Ok(None)` when the file cannot be decoded as an image; that
    /// screenshot should simply be skipped. All three slots always produce a
    /// decision otherwise, even when every region is unrecognized.
    pub fn locate_priority_card(&self, path: &Path) -> Result<Option<Decision>> {
        let img = match ImageReader::open(path) {
            Ok(reader) => match reader.decode() {
                Ok(img) => img,
                Err(_) => return Ok(None),
            },
            Err(_) => return Ok(None),
        };

        if self.verbose {
            println!("Image loaded: {}x{}", img.width(), img.height());
        }

        Ok(Some(self.evaluate(&img)?))
    }

    /// Run the per-slot pipeline on an already decoded screenshot.
    pub fn evaluate(&self, img: &image::DynamicImage) -> Result<Decision> {
        std::fs::create_dir_all(&self.config.output_dir).with_context(|| {
            format!(
                "Failed to create diagnostic directory {}",
                self.config.output_dir.display()
            )
        })?;

        let slots = split::split_into_slots(img);

        let mut readings = [
            (CardSlot::First, CardValue::Unrecognized),
            (CardSlot::Second, CardValue::Unrecognized),
            (CardSlot::Third, CardValue::Unrecognized),
        ];

        for (slot, slot_img) in CardSlot::ALL.into_iter().zip(slots.iter()) {
            let region = crop::crop_value_region(slot_img, &self.config.ratios);
            let enhanced = enhance::enhance_region(&region, &self.config.enhance);

            let diagnostic_path = self.config.output_dir.join(slot.diagnostic_filename());
            enhanced.save(&diagnostic_path).with_context(|| {
                format!("Failed to save diagnostic image {}", diagnostic_path.display())
            })?;

            let tokens = self.reader.read_tokens(&enhanced)?;
            let value = parse::parse_value(&tokens);

            if self.verbose {
                println!("{}: [ {} ]", slot.label(), value);
            }

            readings[slot.index()].1 = value;
        }

        Ok(select::choose_target(&readings))
    }
}
