mod common;

use cardsift::{CardSlot, CardValue, ExtractionPipeline, PipelineConfig, SENTINEL};
use common::{create_screenshot, create_undecodable_file, ScriptedReader};

fn pipeline_with(
    responses: &[&[&str]],
    out_dir: &std::path::Path,
) -> ExtractionPipeline<ScriptedReader> {
    let config = PipelineConfig {
        output_dir: out_dir.to_path_buf(),
        ..PipelineConfig::default()
    };
    ExtractionPipeline::new(ScriptedReader::new(responses), config)
        .expect("default config should validate")
}

#[test]
fn picks_the_card_with_the_lowest_value() -> anyhow::Result<()> {
    let screenshot = create_screenshot();
    let out = tempfile::TempDir::new()?;
    let pipeline = pipeline_with(&[&["G120"], &["G80"], &["G45"]], out.path());

    let decision = pipeline
        .locate_priority_card(screenshot.path())?
        .expect("decodable image must yield a decision");

    assert_eq!(decision.slot, CardSlot::Third);
    assert_eq!(decision.value, CardValue::Numeric(45));
    Ok(())
}

#[test]
fn special_card_is_targeted_when_lowest_reading_is_small() -> anyhow::Result<()> {
    let screenshot = create_screenshot();
    let out = tempfile::TempDir::new()?;
    let pipeline = pipeline_with(&[&["sparkle"], &["G30"], &[]], out.path());

    let decision = pipeline
        .locate_priority_card(screenshot.path())?
        .expect("decision expected");

    // Slots 1 and 3 are unrecognized; the earliest one is chosen, while the
    // reported value comes from the G30 slot
    assert_eq!(decision.slot, CardSlot::First);
    assert_eq!(decision.value, CardValue::Numeric(30));
    Ok(())
}

#[test]
fn all_unrecognized_still_yields_a_decision() -> anyhow::Result<()> {
    let screenshot = create_screenshot();
    let out = tempfile::TempDir::new()?;
    let pipeline = pipeline_with(&[&[], &["noise"], &["???"]], out.path());

    let decision = pipeline
        .locate_priority_card(screenshot.path())?
        .expect("decision expected even with no readings");

    assert_eq!(decision.slot, CardSlot::First);
    assert_eq!(decision.value.reported(), SENTINEL);
    Ok(())
}

#[test]
fn middle_card_wins_without_any_special_card() -> anyhow::Result<()> {
    let screenshot = create_screenshot();
    let out = tempfile::TempDir::new()?;
    let pipeline = pipeline_with(&[&["G200"], &["G150"], &["G300"]], out.path());

    let decision = pipeline
        .locate_priority_card(screenshot.path())?
        .expect("decision expected");

    assert_eq!(decision.slot, CardSlot::Second);
    assert_eq!(decision.value, CardValue::Numeric(150));
    Ok(())
}

#[test]
fn undecodable_image_yields_no_decision() -> anyhow::Result<()> {
    let garbage = create_undecodable_file();
    let out = tempfile::TempDir::new()?;
    let pipeline = pipeline_with(&[], out.path());

    assert!(pipeline.locate_priority_card(garbage.path())?.is_none());
    Ok(())
}

#[test]
fn missing_file_yields_no_decision() -> anyhow::Result<()> {
    let out = tempfile::TempDir::new()?;
    let pipeline = pipeline_with(&[], out.path());

    let missing = out.path().join("does_not_exist.png");
    assert!(pipeline.locate_priority_card(&missing)?.is_none());
    Ok(())
}

#[test]
fn writes_one_diagnostic_image_per_slot() -> anyhow::Result<()> {
    let screenshot = create_screenshot();
    let out = tempfile::TempDir::new()?;
    let pipeline = pipeline_with(&[&["G10"], &["G20"], &["G30"]], out.path());

    pipeline.locate_priority_card(screenshot.path())?;

    for slot in CardSlot::ALL {
        let path = out.path().join(slot.diagnostic_filename());
        assert!(path.exists(), "missing diagnostic for {}", slot.label());
        let img = image::ImageReader::open(&path)?.decode()?;
        assert!(img.width() > 0 && img.height() > 0);
    }
    Ok(())
}

#[test]
fn ocr_glyph_confusions_are_corrected_end_to_end() -> anyhow::Result<()> {
    let screenshot = create_screenshot();
    let out = tempfile::TempDir::new()?;
    let pipeline = pipeline_with(&[&["GlO2"], &["G500"], &["G600"]], out.path());

    let decision = pipeline
        .locate_priority_card(screenshot.path())?
        .expect("decision expected");

    assert_eq!(decision.slot, CardSlot::First);
    assert_eq!(decision.value, CardValue::Numeric(102));
    Ok(())
}
