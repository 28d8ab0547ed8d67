use image::DynamicImage;

use crate::config::ValueRegionRatios;

/// Crop the band of a card slot where the value text renders.
///
/// Pure geometric crop from the configured ratios; clamped to at least one
/// pixel in each dimension so degenerate slots still yield a valid image.
pub fn crop_value_region(slot: &DynamicImage, ratios: &ValueRegionRatios) -> DynamicImage {
    let (width, height) = (slot.width(), slot.height());

    let top = (height as f32 * ratios.vertical_start) as u32;
    let bottom = (height as f32 * ratios.vertical_end) as u32;
    let left = (width as f32 * ratios.left_trim) as u32;
    let right = (width as f32 * (1.0 - ratios.right_trim)) as u32;

    let region_width = right.saturating_sub(left).max(1);
    let region_height = bottom.saturating_sub(top).max(1);

    slot.crop_imm(left, top, region_width, region_height)
}
