use crate::error::AttributeError;
use crate::geom::{BoundingBox, MultiShape};
use crate::layer::{AttrValue, AttributeTable, LayerId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Closed set of geometry kinds a layer can hold.
///
/// The overlay dispatcher matches exhaustively on this, so adding or
/// removing a kind is a compile-time-checked change.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GeometryKind {
    Point,
    Line,
    Polygon,
}

/// Back-reference from a derived (clipped) shape to the indices of its two
/// source shapes.
///
/// Purely a lookup key for attribute resolution; the parent layers
/// themselves are identified by the derived layer's
/// [parents](Layer::parents) and owned by the
/// [LayerRegistry](crate::layer::LayerRegistry).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Provenance {
    /// Shape index into the weight/data parent layer.
    pub weight: usize,
    /// Shape index into the reference parent layer.
    pub reference: usize,
}

impl Provenance {
    #[inline]
    pub fn new(weight: usize, reference: usize) -> Self {
        Self { weight, reference }
    }
}

/// One layer entry: a shape and its optional provenance.
#[derive(Debug, Clone)]
pub struct LayerShape {
    pub geometry: MultiShape,
    pub provenance: Option<Provenance>,
}

/// An ordered collection of shapes with a geometry kind, bounding box,
/// optional attribute table, and optional parent-layer references.
///
/// A layer exclusively owns its shapes, bounding box, and attribute table.
/// It is read-only after construction except for one-time attribute
/// attachment. Parent references are registry indices set only for layers
/// produced by the overlay engine or the derived-geometry helpers; the
/// registry owning every layer of a run keeps them from dangling.
#[derive(Debug, Clone)]
pub struct Layer {
    kind: GeometryKind,
    shapes: Vec<LayerShape>,
    bounding_box: Option<BoundingBox>,
    attributes: Option<AttributeTable>,
    parents: Option<(LayerId, LayerId)>,
}

impl Layer {
    /// Create a new empty layer of the given kind.
    pub fn new(kind: GeometryKind) -> Self {
        Self {
            kind,
            shapes: Vec::new(),
            bounding_box: None,
            attributes: None,
            parents: None,
        }
    }

    /// Create a layer from a shape sequence (no provenance), computing the
    /// bounding box.
    pub fn from_shapes<I>(kind: GeometryKind, shapes: I) -> Self
    where
        I: IntoIterator<Item = MultiShape>,
    {
        let mut layer = Self::new(kind);
        for shape in shapes {
            layer.push_shape(shape, None);
        }
        layer
    }

    /// Append a shape, growing the layer bounding box incrementally.
    pub fn push_shape(&mut self, geometry: MultiShape, provenance: Option<Provenance>) {
        if let Some(shape_bb) = geometry.bounding_box() {
            self.bounding_box = Some(match self.bounding_box {
                Some(bb) => bb.union(&shape_bb),
                None => shape_bb,
            });
        }
        self.shapes.push(LayerShape {
            geometry,
            provenance,
        });
    }

    /// Recompute the bounding box bottom-up from the shapes.
    pub fn recompute_bounding_box(&mut self) {
        self.bounding_box = self
            .shapes
            .iter()
            .filter_map(|s| s.geometry.bounding_box())
            .reduce(|a, b| a.union(&b));
    }

    #[inline]
    pub fn kind(&self) -> GeometryKind {
        self.kind
    }

    #[inline]
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shape geometry at `index`, or `None` when out of bounds.
    #[inline]
    pub fn shape(&self, index: usize) -> Option<&MultiShape> {
        self.shapes.get(index).map(|s| &s.geometry)
    }

    /// Provenance of the shape at `index` (None for layers not produced by
    /// the overlay engine or derived helpers).
    #[inline]
    pub fn provenance(&self, index: usize) -> Option<Provenance> {
        self.shapes.get(index).and_then(|s| s.provenance)
    }

    /// Iterate over the layer entries.
    #[inline]
    pub fn shapes(&self) -> impl Iterator<Item = &LayerShape> {
        self.shapes.iter()
    }

    #[inline]
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.bounding_box
    }

    /// Parent layer ids for derived layers.
    #[inline]
    pub fn parents(&self) -> Option<(LayerId, LayerId)> {
        self.parents
    }

    pub(crate) fn set_parents(&mut self, weight: LayerId, reference: LayerId) {
        self.parents = Some((weight, reference));
    }

    /// Attach the attribute table once.
    ///
    /// The table's row count must equal the shape count; re-attachment is an
    /// error. Layers with no attribute source attach
    /// [AttributeTable::empty] (see [Layer::attach_empty]).
    pub fn attach(&mut self, table: AttributeTable) -> Result<(), AttributeError> {
        if self.attributes.is_some() {
            return Err(AttributeError::AlreadyAttached);
        }
        if table.row_count() != self.shapes.len() {
            return Err(AttributeError::RowCountMismatch {
                expected: self.shapes.len(),
                actual: table.row_count(),
            });
        }
        self.attributes = Some(table);
        Ok(())
    }

    /// Attach a zero-column table, the legal "no attribute source" case
    /// (e.g. pure reference grids).
    pub fn attach_empty(&mut self) -> Result<(), AttributeError> {
        self.attach(AttributeTable::empty(self.shapes.len()))
    }

    #[inline]
    pub fn attributes(&self) -> Option<&AttributeTable> {
        self.attributes.as_ref()
    }

    /// Attribute value at `(row, col)`, or `None` when no table is attached
    /// or either index is out of bounds.
    pub fn attribute(&self, row: usize, col: usize) -> Option<&AttrValue> {
        self.attributes.as_ref().and_then(|t| t.value(row, col))
    }
}
