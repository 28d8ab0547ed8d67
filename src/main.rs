use clap::Parser;
use std::path::PathBuf;

use cardsift::{CardValue, ExtractionPipeline, OcrsReader, PipelineConfig};

#[derive(Parser)]
#[command(name = "cardsift")]
#[command(about = "Read the G value on each card in a drop screenshot and pick the priority card")]
struct Cli {
    /// Path to the screenshot to analyze
    #[arg(value_name = "IMAGE")]
    image_path: PathBuf,

    /// Pipeline configuration file (JSON); defaults are used when omitted
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory for the per-slot thresholded diagnostic images
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let mut config = match &args.config {
        Some(path) => PipelineConfig::load(path)?,
        None => PipelineConfig::default(),
    };
    if let Some(out_dir) = args.out_dir {
        config.output_dir = out_dir;
    }

    if args.verbose {
        println!("Initializing OCR engine...");
    }
    let reader = OcrsReader::new()?;

    let pipeline = ExtractionPipeline::new(reader, config)?.with_verbose(args.verbose);

    match pipeline.locate_priority_card(&args.image_path)? {
        Some(decision) => match decision.value {
            CardValue::Numeric(v) => {
                println!("Priority target: {} (G{})", decision.slot, v);
            }
            CardValue::Unrecognized => {
                println!(
                    "No recognizable value on any card; nothing to target ({} reported)",
                    decision.slot
                );
            }
        },
        None => {
            println!("Error: Unable to load the image.");
        }
    }

    Ok(())
}
