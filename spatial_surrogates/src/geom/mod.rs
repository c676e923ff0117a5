//! Shape model: vertex rings, ring sets with hole flags, and bounding boxes.
mod bbox;
mod multi_shape;
mod ring;

pub use bbox::BoundingBox;
pub use multi_shape::MultiShape;
pub use ring::Ring;
