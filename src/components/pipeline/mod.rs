mod component;
mod render;
mod types;

pub use component::PipelineDiagram;
pub use render::render_pipeline;
pub use types::{NodeDescriptor, PIPELINE_NODES};
