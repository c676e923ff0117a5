use crate::layer::{AttrValue, Layer};

/// Handle to a layer owned by a [LayerRegistry].
///
/// Ids are only minted by [LayerRegistry::insert] and are stable for the
/// lifetime of the registry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(usize);

impl LayerId {
    /// Position of the layer within its registry.
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Arena owning every layer of one overlay run.
///
/// Derived layers reference their parents by [LayerId], so a derived layer
/// cannot outlive or dangle relative to its parents: the registry owns them
/// all and attribute lookups resolve through it.
#[derive(Debug, Default)]
pub struct LayerRegistry {
    layers: Vec<Layer>,
}

impl LayerRegistry {
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Take ownership of a layer, returning its handle.
    pub fn insert(&mut self, layer: Layer) -> LayerId {
        let id = LayerId(self.layers.len());
        self.layers.push(layer);
        id
    }

    /// Get the layer for `id`. Returns `None` if the id belongs to another
    /// registry with more layers.
    #[inline]
    pub fn get(&self, id: LayerId) -> Option<&Layer> {
        self.layers.get(id.0)
    }

    /// Same as [LayerRegistry::get] but panics on an unknown id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not minted by this registry.
    #[inline]
    pub fn layer(&self, id: LayerId) -> &Layer {
        &self.layers[id.0]
    }

    #[inline]
    pub fn get_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.layers.get_mut(id.0)
    }

    /// Same as [LayerRegistry::get_mut] but panics on an unknown id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not minted by this registry.
    #[inline]
    pub fn layer_mut(&mut self, id: LayerId) -> &mut Layer {
        &mut self.layers[id.0]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Iterate over `(id, layer)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (LayerId, &Layer)> {
        self.layers.iter().enumerate().map(|(i, l)| (LayerId(i), l))
    }

    /// Attribute of the weight-side source shape behind a derived shape.
    ///
    /// Resolves the derived shape's provenance through the layer's weight
    /// parent. Returns `None` when the layer has no parents, the shape no
    /// provenance, or the parent no such attribute.
    pub fn weight_attribute(&self, id: LayerId, shape: usize, col: usize) -> Option<&AttrValue> {
        let layer = self.get(id)?;
        let provenance = layer.provenance(shape)?;
        let (weight_parent, _) = layer.parents()?;
        self.get(weight_parent)?.attribute(provenance.weight, col)
    }

    /// Attribute of the reference-side source shape behind a derived shape.
    ///
    /// Mirror of [LayerRegistry::weight_attribute] for the reference parent.
    pub fn reference_attribute(&self, id: LayerId, shape: usize, col: usize) -> Option<&AttrValue> {
        let layer = self.get(id)?;
        let provenance = layer.provenance(shape)?;
        let (_, reference_parent) = layer.parents()?;
        self.get(reference_parent)?
            .attribute(provenance.reference, col)
    }
}
