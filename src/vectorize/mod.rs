pub mod preprocessing;
pub mod contours;
pub mod svg;
pub mod steps;

use anyhow::Result;
use image::{DynamicImage, ImageReader};
use std::path::Path;
use std::sync::Arc;

use crate::pipeline::{Pipeline, PipelineData};

/// Input used when no path is given on the command line
pub const DEFAULT_INPUT: &str = "esp32.png";

/// Gray levels at or below this are ink
pub const THRESHOLD: u8 = 127;

/// Mask value written for ink pixels
pub const MAX_VALUE: u8 = 255;

pub const FILL: &str = "black";

/// Load and decode an image, guessing the format from its content
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let img = ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(|e| anyhow::anyhow!("Failed to decode image {}: {}", path.display(), e))?;
    Ok(img)
}

/// Build the standard image-to-paths pipeline
pub fn build_standard_pipeline(verbose: bool) -> Pipeline {
    use crate::vectorize::steps::*;

    Pipeline::new()
        .with_verbose(verbose)
        .add_step(Arc::new(GrayscaleStep))
        .add_step(Arc::new(ThresholdStep {
            threshold: THRESHOLD,
            max_value: MAX_VALUE,
        }))
        .add_step(Arc::new(ContourExtractionStep))
        .add_step(Arc::new(PathEmitStep::new(FILL)))
}

/// Collect the `<path>` elements attached by the emit step, in pipeline order
pub fn collect_paths(results: &[PipelineData]) -> Vec<String> {
    results
        .iter()
        .filter_map(|item| item.get_string("svg_path"))
        .map(str::to_string)
        .collect()
}

/// Run a pipeline on an image and return its paths, one element per line
pub fn vectorize(pipeline: &Pipeline, img: DynamicImage) -> Result<String> {
    let results = pipeline.run(img)?;
    Ok(svg::join_elements(&collect_paths(&results)))
}
