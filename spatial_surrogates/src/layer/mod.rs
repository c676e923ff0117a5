//! Layer model: ordered shape collections with geometry kind, bounding box,
//! attribute table, and provenance links resolved through a layer registry.
mod attr;
mod chunk;
#[allow(clippy::module_inception)]
mod layer;
mod registry;

pub use attr::{AttrField, AttrType, AttrValue, AttributeTable};
pub use chunk::ChunkCursor;
pub use layer::{GeometryKind, Layer, LayerShape, Provenance};
pub use registry::{LayerId, LayerRegistry};
