use image::imageops::FilterType;
use image::{DynamicImage, GrayImage};
use imageproc::contrast::adaptive_threshold;
use imageproc::filter::gaussian_blur_f32;

use crate::config::EnhanceParams;

/// Prepare a cropped value region for OCR.
///
/// Fixed order: cubic upscale, grayscale, Gaussian blur, adaptive threshold.
/// Upscaling first recovers sub-pixel strokes lost to compression; the blur
/// runs before thresholding so artifact speckle does not survive
/// binarization. The threshold is local (window of 2·block_radius + 1), which
/// holds up under the uneven brightness of lossy screenshots where a global
/// cutoff fails. The result is inverted so text becomes foreground.
pub fn enhance_region(region: &DynamicImage, params: &EnhanceParams) -> GrayImage {
    let scaled_w = ((region.width() as f32) * params.scale_factor).round().max(1.0) as u32;
    let scaled_h = ((region.height() as f32) * params.scale_factor).round().max(1.0) as u32;
    let enlarged = region.resize_exact(scaled_w, scaled_h, FilterType::CatmullRom);

    let gray = enlarged.to_luma8();
    let blurred = gaussian_blur_f32(&gray, params.blur_sigma);

    let mut thresholded = adaptive_threshold(&blurred, params.block_radius);
    image::imageops::colorops::invert(&mut thresholded);
    thresholded
}
