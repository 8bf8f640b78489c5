//! Schema property metadata attached to generated classes.
//!
//! This is the view the schema compiler exposes per property: the public
//! accessor name, cardinality, the "required" flag and the facets of the
//! underlying simple type.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Facet names understood by the validation pass.
pub mod facet {
    pub const MIN_LENGTH: &str = "minLength";
    pub const MAX_LENGTH: &str = "maxLength";
    pub const PATTERN: &str = "pattern";
    pub const MIN_INCLUSIVE: &str = "minInclusive";
    pub const MAX_INCLUSIVE: &str = "maxInclusive";
    pub const MIN_EXCLUSIVE: &str = "minExclusive";
    pub const MAX_EXCLUSIVE: &str = "maxExclusive";
    pub const TOTAL_DIGITS: &str = "totalDigits";
    pub const FRACTION_DIGITS: &str = "fractionDigits";
}

/// Upper occurrence bound of an element particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaxOccurs {
    #[default]
    One,
    Bounded(u32),
    Unbounded,
}

impl MaxOccurs {
    /// Numeric bound, `None` when unbounded.
    pub fn bound(&self) -> Option<u32> {
        match self {
            MaxOccurs::One => Some(1),
            MaxOccurs::Bounded(n) => Some(*n),
            MaxOccurs::Unbounded => None,
        }
    }
}

/// A simple type with its facet literals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimpleTypeInfo {
    /// Qualified schema name, informational only.
    #[serde(default)]
    pub name: Option<String>,

    /// Facet name to literal value.
    #[serde(default)]
    pub facets: BTreeMap<String, String>,
}

impl SimpleTypeInfo {
    pub fn with_facet(mut self, name: &str, value: impl Into<String>) -> Self {
        self.facets.insert(name.to_string(), value.into());
        self
    }

    /// Raw facet literal.
    pub fn facet(&self, name: &str) -> Option<&str> {
        self.facets.get(name).map(String::as_str)
    }

    /// Facet literal parsed as a Java `int`; unparseable or out of range
    /// literals count as absent.
    pub fn int_facet(&self, name: &str) -> Option<i32> {
        self.facet(name).and_then(|v| v.trim().parse().ok())
    }
}

/// The term of an element particle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "term", rename_all = "snake_case")]
pub enum ParticleTerm {
    /// An element declaration (local or referenced). `simple_type` is the
    /// element's simple type, or the simple base of its complex type.
    Element {
        #[serde(default)]
        simple_type: Option<SimpleTypeInfo>,
    },

    /// A nested sequence/choice/all group.
    ModelGroup,

    /// Anything the compiler could not express as the above.
    Unsupported { description: String },
}

/// What kind of schema construct a property came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PropertyKind {
    /// `xs:element`
    Element {
        #[serde(default = "default_min_occurs")]
        min_occurs: u32,
        #[serde(default)]
        max_occurs: MaxOccurs,
        #[serde(default)]
        required: bool,
        term: ParticleTerm,
    },

    /// `xs:attribute`
    Attribute {
        #[serde(default)]
        required: bool,
        #[serde(default)]
        simple_type: Option<SimpleTypeInfo>,
    },

    /// Simple content of a restriction.
    Value {
        #[serde(default)]
        simple_type: Option<SimpleTypeInfo>,
    },

    /// Element reference / wildcard content.
    Reference,
}

fn default_min_occurs() -> u32 {
    1
}

/// One schema property of a generated class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyInfo {
    /// Name of the backing field.
    pub name: String,

    /// Public base name used for accessors (`Name` for `getName`).
    pub public_name: String,

    #[serde(flatten)]
    pub kind: PropertyKind,
}

impl PropertyInfo {
    pub fn new(name: impl Into<String>, public_name: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            name: name.into(),
            public_name: public_name.into(),
            kind,
        }
    }
}
