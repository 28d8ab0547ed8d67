use cardsift::TextReader;
use image::{GrayImage, ImageBuffer, Rgb};
use std::collections::VecDeque;
use std::sync::Mutex;
use tempfile::NamedTempFile;

/// Creates a 300x200 gradient test screenshot and returns the temp file.
/// The file is cleaned up when dropped.
pub fn create_screenshot() -> NamedTempFile {
    let img = ImageBuffer::from_fn(300, 200, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128u8])
    });
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file");
    img.save_with_format(file.path(), image::ImageFormat::Png)
        .expect("Failed to save test image");
    file
}

/// Creates a file that is not a decodable image.
pub fn create_undecodable_file() -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp file");
    std::fs::write(file.path(), b"definitely not a png").expect("Failed to write temp file");
    file
}

/// Text reader that replays scripted token lists, one per call in slot order.
/// Calls beyond the script yield no tokens.
pub struct ScriptedReader {
    responses: Mutex<VecDeque<Vec<String>>>,
}

impl ScriptedReader {
    pub fn new(responses: &[&[&str]]) -> Self {
        let responses = responses
            .iter()
            .map(|tokens| tokens.iter().map(|t| t.to_string()).collect())
            .collect();
        Self {
            responses: Mutex::new(responses),
        }
    }
}

impl TextReader for ScriptedReader {
    fn read_tokens(&self, _region: &GrayImage) -> anyhow::Result<Vec<String>> {
        let mut responses = self.responses.lock().unwrap();
        Ok(responses.pop_front().unwrap_or_default())
    }
}
