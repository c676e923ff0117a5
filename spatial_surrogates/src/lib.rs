//! Geometry-level overlay engine for computing spatial surrogates.
//!
//! A *weight/data* layer (points, lines, or polygons carrying attribute
//! values) is overlaid onto a *reference* polygon layer (typically a
//! modeling grid or administrative boundary set). Every pair of
//! intersecting shapes produces a clipped geometry plus a provenance link
//! back to both source shapes, so their attributes can be combined (area-
//! or length-weighted) into an allocation factor per reference cell.
//!
//! The crate covers the overlay/geometry core:
//!
//! * segment-intersection and point-in-polygon primitives, signed area and
//!   flat/great-circle length ([`crate::core::math`])
//! * the shape model: rings, ring sets with hole flags, bounding boxes
//!   ([`geom`])
//! * layers, attribute tables, provenance, and the registry arena owning
//!   every layer of a run ([`layer`])
//! * the bounding-box-pruned overlay join with polygon/line/point dispatch
//!   ([`overlay`])
//! * the attribute weight-filter mini-language ([`filter`])
//! * centroid and bounding-box derived layers ([`derived`])
//!
//! Vector file I/O, raster access, projection math, and final reporting are
//! collaborator concerns outside this crate; the seams they plug into are
//! [`overlay::PolygonClip`], [`projection::PointProjection`], and the layer
//! constructors.

pub mod core;
pub mod derived;
mod error;
pub mod filter;
pub mod geom;
pub mod layer;
pub mod overlay;
pub mod projection;

pub use error::{AttributeError, Error, GeometryError, ParseError, Result};

pub use crate::geom::{BoundingBox, MultiShape, Ring};
pub use crate::layer::{GeometryKind, Layer, LayerId, LayerRegistry, Provenance};
pub use crate::overlay::{overlay, OverlayOptions, OverlayOutcome, PolygonClip};
