use crate::pipeline::{PipelineData, PipelineStep, PipelineContext, MetadataValue};
use crate::vectorize::{preprocessing, contours, svg};
use anyhow::Result;
use image::DynamicImage;

/// Convert image to grayscale
pub struct GrayscaleStep;

impl PipelineStep for GrayscaleStep {
    fn process(&self, data: Vec<PipelineData>, _context: &PipelineContext) -> Result<Vec<PipelineData>> {
        let mut result = Vec::new();
        for item in data {
            let gray = preprocessing::to_grayscale(&item.image);
            result.push(item.with_image(DynamicImage::ImageLuma8(gray)));
        }
        Ok(result)
    }

    fn name(&self) -> &str {
        "Grayscale Conversion"
    }
}

/// Inverted binary threshold: dark ink becomes foreground
pub struct ThresholdStep {
    pub threshold: u8,
    pub max_value: u8,
}

impl PipelineStep for ThresholdStep {
    fn process(&self, data: Vec<PipelineData>, _context: &PipelineContext) -> Result<Vec<PipelineData>> {
        let mut result = Vec::new();
        for item in data {
            let gray = item.image.to_luma8();
            let mask = preprocessing::threshold_inverted(&gray, self.threshold, self.max_value);
            result.push(item.with_image(DynamicImage::ImageLuma8(mask)));
        }
        Ok(result)
    }

    fn name(&self) -> &str {
        "Threshold"
    }
}

/// Trace external contours - splits one mask into one item per outline
/// Degenerate outlines (fewer than two points) are dropped
pub struct ContourExtractionStep;

impl PipelineStep for ContourExtractionStep {
    fn process(&self, data: Vec<PipelineData>, context: &PipelineContext) -> Result<Vec<PipelineData>> {
        let mut result = Vec::new();

        for item in data {
            let mask = item.image.to_luma8();
            let traced = contours::find_external_contours(&mask);
            let total = traced.len();
            let before = result.len();

            for contour in traced {
                if contour.is_degenerate() {
                    continue;
                }
                let Some(bbox) = contour.bounding_box() else {
                    continue;
                };

                // Keep the mask under the outline so debug output shows each blob
                let cropped =
                    image::imageops::crop_imm(&mask, bbox.x, bbox.y, bbox.width, bbox.height)
                        .to_image();
                let point_count = contour.len() as i64;

                let contour_data = PipelineData::from_contour(
                    DynamicImage::ImageLuma8(cropped),
                    item.original.clone(),
                    bbox,
                    contour,
                )
                .with_metadata("point_count", MetadataValue::Int(point_count));

                result.push(contour_data);
            }

            context.log(format!(
                "  Traced {} external contours, kept {}",
                total,
                result.len() - before
            ));
        }

        Ok(result)
    }

    fn name(&self) -> &str {
        "Contour Extraction"
    }
}

/// Render each contour as an SVG `<path>` element stored under "svg_path"
pub struct PathEmitStep {
    pub fill: String,
}

impl PathEmitStep {
    pub fn new(fill: impl Into<String>) -> Self {
        Self { fill: fill.into() }
    }
}

impl PipelineStep for PathEmitStep {
    fn process(&self, data: Vec<PipelineData>, _context: &PipelineContext) -> Result<Vec<PipelineData>> {
        let mut result = Vec::new();

        for item in data {
            let contour = item.contour.as_ref()
                .ok_or_else(|| anyhow::anyhow!("Missing contour for path emission"))?;

            let element = svg::path_element(&svg::path_data(contour), &self.fill);
            result.push(item.with_metadata("svg_path", MetadataValue::String(element)));
        }

        Ok(result)
    }

    fn name(&self) -> &str {
        "Path Emission"
    }
}
