use crate::error::AttributeError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Attribute column type.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AttrType {
    Integer,
    Double,
    String,
}

/// One attribute cell value.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Integer(i64),
    Double(f64),
    String(String),
}

impl AttrValue {
    /// The column type this value belongs to.
    pub fn attr_type(&self) -> AttrType {
        match self {
            AttrValue::Integer(_) => AttrType::Integer,
            AttrValue::Double(_) => AttrType::Double,
            AttrValue::String(_) => AttrType::String,
        }
    }

    /// Numeric view of the value for continuous filtering: integers widen,
    /// strings parse, unparseable strings yield `None`.
    pub fn numeric_value(&self) -> Option<f64> {
        match self {
            AttrValue::Integer(i) => Some(*i as f64),
            AttrValue::Double(v) => Some(*v),
            AttrValue::String(s) => s.trim().parse().ok(),
        }
    }

    /// Canonical string form used for discrete pattern matching (patterns
    /// are matched against the upper-cased form of this).
    pub fn to_field_string(&self) -> String {
        match self {
            AttrValue::Integer(i) => i.to_string(),
            AttrValue::Double(v) => v.to_string(),
            AttrValue::String(s) => s.trim().to_string(),
        }
    }
}

/// One attribute column: name and type.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrField {
    pub name: String,
    pub ty: AttrType,
}

impl AttrField {
    #[inline]
    pub fn new(name: impl Into<String>, ty: AttrType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Column schema plus row-major value matrix.
///
/// Created once per layer and never resized after attachment. Field names
/// are unique (case-insensitively) and looked up case-insensitively, the way
/// attribute-file field names behave.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeTable {
    fields: Vec<AttrField>,
    rows: Vec<Vec<AttrValue>>,
}

impl AttributeTable {
    /// Build a table, validating that field names are unique and every row
    /// matches the schema width.
    pub fn new(fields: Vec<AttrField>, rows: Vec<Vec<AttrValue>>) -> Result<Self, AttributeError> {
        for (i, field) in fields.iter().enumerate() {
            let duplicate = fields[..i]
                .iter()
                .any(|f| f.name.eq_ignore_ascii_case(&field.name));
            if duplicate {
                return Err(AttributeError::DuplicateField {
                    name: field.name.clone(),
                });
            }
        }

        for (row, values) in rows.iter().enumerate() {
            if values.len() != fields.len() {
                return Err(AttributeError::FieldCountMismatch {
                    row,
                    expected: fields.len(),
                    actual: values.len(),
                });
            }
        }

        Ok(Self { fields, rows })
    }

    /// The zero-column table for layers with no attribute source (e.g. pure
    /// reference grids); `row_count` empty rows keep the row/shape pairing.
    pub fn empty(row_count: usize) -> Self {
        Self {
            fields: Vec::new(),
            rows: vec![Vec::new(); row_count],
        }
    }

    #[inline]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn fields(&self) -> &[AttrField] {
        &self.fields
    }

    /// Case-insensitive column lookup.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields
            .iter()
            .position(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// Value at `(row, col)`, or `None` when either index is out of bounds.
    pub fn value(&self, row: usize, col: usize) -> Option<&AttrValue> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    #[inline]
    pub fn row(&self, row: usize) -> Option<&[AttrValue]> {
        self.rows.get(row).map(|r| r.as_slice())
    }

    /// Copy of the schema with only the given rows, in the order given.
    ///
    /// Out-of-bounds indices are skipped.
    pub fn subset<I>(&self, keep: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        Self {
            fields: self.fields.clone(),
            rows: keep
                .into_iter()
                .filter_map(|i| self.rows.get(i).cloned())
                .collect(),
        }
    }
}
