//! Error types for the spatial surrogates core.
//!
//! Every fallible core operation returns a typed error value. "No overlap
//! between layers" is a normal overlay outcome, not an error, and is
//! reported through [`OverlayOutcome::matched`](crate::overlay::OverlayOutcome).

use crate::layer::GeometryKind;
use thiserror::Error;

/// Result type alias using the crate-level [Error].
pub type Result<T> = std::result::Result<T, Error>;

/// Top level error type wrapping the per-area error enums.
#[derive(Debug, Error)]
pub enum Error {
    /// Weight filter specification failed to parse or validate.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Geometry precondition violated.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Attribute table or schema fault.
    #[error(transparent)]
    Attribute(#[from] AttributeError),
}

/// Weight filter DSL parse and validation errors.
///
/// The parser aborts at the first failure; there is no partial or recovered
/// state. Variants carry the offending attribute name where one exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A directive appeared with no attribute block open, or an
    /// `ATTRIBUTE_NAME` line had an empty right hand side.
    #[error("filter spec is missing an attribute name")]
    MissingAttributeName,

    /// The same attribute name opened more than one block.
    #[error("duplicate attribute name '{name}' in filter spec")]
    DuplicateAttributeName { name: String },

    /// More than one `ATTRIBUTE_TYPE` line in a block.
    #[error("multiple ATTRIBUTE_TYPE lines for attribute '{name}'")]
    MultipleAttributeType { name: String },

    /// A block closed without an `ATTRIBUTE_TYPE` line.
    #[error("attribute '{name}' has no ATTRIBUTE_TYPE line")]
    MissingAttributeType { name: String },

    /// `ATTRIBUTE_TYPE` right hand side was not `DISCRETE` or `CONTINUOUS`.
    #[error("attribute '{name}' has unrecognized type '{value}'")]
    InvalidAttributeType { name: String, value: String },

    /// More than one `INCLUDE_VALUES` line in a block.
    #[error("multiple INCLUDE_VALUES lines for attribute '{name}'")]
    MultipleIncludeValues { name: String },

    /// More than one `EXCLUDE_VALUES` line in a block.
    #[error("multiple EXCLUDE_VALUES lines for attribute '{name}'")]
    MultipleExcludeValues { name: String },

    /// A block closed with neither include nor exclude values.
    #[error("attribute '{name}' has neither INCLUDE_VALUES nor EXCLUDE_VALUES")]
    MissingIncludeExclude { name: String },

    /// A line whose keyword is none of the four recognized directives.
    #[error("unrecognized keyword '{keyword}' in filter spec")]
    UnknownKeyword { keyword: String },

    /// A continuous predicate that is not one of `<v`, `<=v`, `>v`, `>=v`,
    /// `a-b`.
    #[error("attribute '{name}' has invalid range predicate '{text}'")]
    InvalidRange { name: String, text: String },

    /// A discrete pattern the regex engine rejected.
    #[error("attribute '{name}' has invalid pattern '{pattern}': {message}")]
    InvalidPattern {
        name: String,
        pattern: String,
        message: String,
    },

    /// Two include ranges for the same attribute overlap.
    #[error("attribute '{name}' has overlapping include ranges")]
    IncludeOverlap { name: String },

    /// Two exclude ranges for the same attribute overlap.
    #[error("attribute '{name}' has overlapping exclude ranges")]
    ExcludeOverlap { name: String },
}

/// Geometry precondition and classification errors.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// The reference side of an overlay must be polygon geometry.
    #[error("reference layer must have polygon geometry, got {kind:?}")]
    UnsupportedGeometry { kind: GeometryKind },

    /// A weight point coincides exactly with a reference polygon vertex.
    ///
    /// The overlay engine reports this as a warning and excludes the point;
    /// the typed form exists for callers clipping single pairs that want to
    /// surface the ambiguity instead.
    #[error("point ({x}, {y}) coincides with a reference polygon vertex")]
    AmbiguousPointOnVertex { x: f64, y: f64 },
}

/// Attribute table and schema errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeError {
    /// The layer already has an attribute table attached.
    #[error("layer already has an attribute table attached")]
    AlreadyAttached,

    /// Attribute row count does not match the layer's shape count.
    #[error("attribute table has {actual} rows but layer has {expected} shapes")]
    RowCountMismatch { expected: usize, actual: usize },

    /// A row's value count does not match the schema's field count.
    #[error("attribute row {row} has {actual} values but schema has {expected} fields")]
    FieldCountMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Two schema fields share a name.
    #[error("duplicate attribute field name '{name}'")]
    DuplicateField { name: String },

    /// A filter references an attribute the layer does not carry.
    #[error("filter references unknown attribute '{name}'")]
    UnknownField { name: String },
}
