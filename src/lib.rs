pub mod models;
pub mod pipeline;
pub mod vectorize;

pub use models::{BoundingBox, Contour, Point};
pub use pipeline::{
    Pipeline, PipelineData, PipelineStep, PipelineContext,
    MetadataValue, DebugConfig
};
pub use vectorize::{build_standard_pipeline, load_image, vectorize};
