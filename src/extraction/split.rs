use image::DynamicImage;

/// Split a screenshot into its three card slots.
///
/// Slot boundaries fall at floor(W/3) and floor(2W/3), so the slots always
/// partition the full width; any integer-division remainder widens the
/// later slots rather than dropping columns.
pub fn split_into_slots(img: &DynamicImage) -> [DynamicImage; 3] {
    let (width, height) = (img.width(), img.height());
    let first_end = width / 3;
    let second_end = (2 * width) / 3;

    [
        img.crop_imm(0, 0, first_end, height),
        img.crop_imm(first_end, 0, second_end - first_end, height),
        img.crop_imm(second_end, 0, width - second_end, height),
    ]
}
