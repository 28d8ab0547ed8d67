pub mod config;
pub mod extraction;
pub mod models;

pub use config::{EnhanceParams, PipelineConfig, ValueRegionRatios};
pub use extraction::ExtractionPipeline;
pub use extraction::ocr::{OcrsReader, TextReader};
pub use models::{CardSlot, CardValue, Decision, SENTINEL};
