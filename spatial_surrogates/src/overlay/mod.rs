//! Overlay engine: bounding-box-pruned spatial join dispatching to
//! polygon/line/point clipping, producing a provenance-tagged output layer.
mod engine;
mod line_clip;
mod point_clip;

pub use engine::{overlay, OverlayOptions, OverlayOutcome, PolygonClip};

/// Internal clipping routines made public for visualization, benchmarking,
/// and testing purposes.
pub mod internal {
    pub use super::line_clip::line_clip;
    pub use super::point_clip::point_clip;
}
