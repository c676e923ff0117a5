use crate::error::ParseError;
use regex::RegexBuilder;

/// Whether an attribute is filtered on string patterns or numeric ranges.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AttributeKind {
    /// String-valued attribute filtered by patterns.
    Discrete,
    /// Numeric-valued attribute filtered by ranges.
    Continuous,
}

/// The five continuous predicate forms.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RangeOp {
    /// `<v`: value strictly below the right operand.
    Less,
    /// `<=v`.
    LessEqual,
    /// `>v`: value strictly above the left operand.
    Greater,
    /// `>=v`.
    GreaterEqual,
    /// `a-b`: value within the closed interval.
    Between,
}

/// One continuous range predicate.
///
/// The left/right operands default to [RangePredicate::OPEN_LEFT] /
/// [RangePredicate::OPEN_RIGHT] for the single-sided forms, so every
/// predicate carries a full interval for overlap checking.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RangePredicate {
    pub op: RangeOp,
    pub left: f64,
    pub right: f64,
}

impl RangePredicate {
    /// Default left operand for predicates with no lower bound.
    pub const OPEN_LEFT: f64 = -1e20;
    /// Default right operand for predicates with no upper bound.
    pub const OPEN_RIGHT: f64 = 1e20;

    /// Whether `value` satisfies the predicate.
    pub fn matches(&self, value: f64) -> bool {
        match self.op {
            RangeOp::Less => value < self.right,
            RangeOp::LessEqual => value <= self.right,
            RangeOp::Greater => value > self.left,
            RangeOp::GreaterEqual => value >= self.left,
            RangeOp::Between => value >= self.left && value <= self.right,
        }
    }

    /// Interval overlap test: `min(a2, b2) >= max(a1, b1)`.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.right.min(other.right) >= self.left.max(other.left)
    }
}

/// One discrete pattern, kept with its compiled case-insensitive regex.
///
/// Patterns match the whole upper-cased field value (anchored), so `49.*`
/// matches any value starting with `49` and `49` matches only `49`.
#[derive(Debug, Clone)]
pub struct DiscretePattern {
    pattern: String,
    regex: regex::Regex,
}

impl DiscretePattern {
    pub(crate) fn compile(attr_name: &str, pattern: &str) -> Result<Self, ParseError> {
        let regex = RegexBuilder::new(&format!("^(?:{})$", pattern))
            .case_insensitive(true)
            .build()
            .map_err(|e| ParseError::InvalidPattern {
                name: attr_name.to_string(),
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// The pattern text as written in the filter spec.
    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whole-value match against an (upper-cased) field value.
    #[inline]
    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

/// An ordered include or exclude predicate list.
#[derive(Debug, Clone)]
pub enum FilterList {
    Discrete(Vec<DiscretePattern>),
    Continuous(Vec<RangePredicate>),
}

impl FilterList {
    /// An empty list is legal: empty include means "include all", empty
    /// exclude means "exclude none".
    pub fn is_empty(&self) -> bool {
        match self {
            FilterList::Discrete(patterns) => patterns.is_empty(),
            FilterList::Continuous(ranges) => ranges.is_empty(),
        }
    }
}

/// Filter settings for one attribute: kind plus optional ordered include and
/// exclude predicate lists (at least one of the two is present).
#[derive(Debug, Clone)]
pub struct AttributeFilter {
    /// Attribute name, upper-cased at parse time.
    pub name: String,
    pub kind: AttributeKind,
    pub include: Option<FilterList>,
    pub exclude: Option<FilterList>,
}

/// A parsed and validated weight filter specification.
///
/// Obtained from [FilterSpec::parse]; a record passes the filter when every
/// attribute named here matches (attributes the specification does not name
/// always pass through).
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    filters: Vec<AttributeFilter>,
}

impl FilterSpec {
    /// Parses filter text, aborting on the first validation failure.
    ///
    /// See the module docs for the grammar. The empty text parses to the
    /// empty specification, which filters nothing.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        super::parse::parse_filter_spec(text)
    }

    pub(crate) fn from_filters(filters: Vec<AttributeFilter>) -> Self {
        Self { filters }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    #[inline]
    pub fn filters(&self) -> &[AttributeFilter] {
        &self.filters
    }

    /// Case-insensitive lookup of the filter for an attribute name.
    pub fn get(&self, name: &str) -> Option<&AttributeFilter> {
        self.filters
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
    }
}
