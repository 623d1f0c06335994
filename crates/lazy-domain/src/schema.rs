//! Schema module - declarative attribute layout of the string resource

/// Identifier attribute
pub const ATTR_ID: &str = "id";
/// Change label attribute
pub const ATTR_LAST_UPDATED: &str = "last_updated";
/// Derived value attribute
pub const ATTR_RESULT: &str = "result";
/// Baseline input attribute
pub const ATTR_INITIALLY: &str = "initially";
/// Override input attribute
pub const ATTR_EXPLICITLY: &str = "explicitly";

/// Who sets an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeMode {
    /// Set by the resource, never by configuration
    Computed,

    /// May be supplied by configuration
    Optional,
}

/// Value type of an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// Opaque identifier
    Identifier,

    /// Timestamp label
    TimestampLabel,

    /// Always-present string
    String,

    /// String that may be absent
    OptionalString,
}

impl AttributeMode {
    /// Get the mode name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeMode::Computed => "computed",
            AttributeMode::Optional => "optional",
        }
    }
}

/// One attribute of a resource schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name as the host addresses it
    pub name: &'static str,

    /// Who sets it
    pub mode: AttributeMode,

    /// Its value type
    pub kind: AttributeKind,
}

impl Attribute {
    const fn new(name: &'static str, mode: AttributeMode, kind: AttributeKind) -> Self {
        Self { name, mode, kind }
    }
}

/// Attribute layout of a resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSchema {
    attributes: Vec<Attribute>,
}

impl ResourceSchema {
    /// Schema of the lazy string resource
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_domain::{AttributeMode, ResourceSchema};
    ///
    /// let schema = ResourceSchema::lazy_string();
    /// let result = schema.attribute("result").unwrap();
    /// assert_eq!(result.mode, AttributeMode::Computed);
    /// ```
    pub fn lazy_string() -> Self {
        use AttributeMode::{Computed, Optional};

        Self {
            attributes: vec![
                Attribute::new(ATTR_ID, Computed, AttributeKind::Identifier),
                Attribute::new(ATTR_LAST_UPDATED, Computed, AttributeKind::TimestampLabel),
                Attribute::new(ATTR_RESULT, Computed, AttributeKind::String),
                Attribute::new(ATTR_INITIALLY, Optional, AttributeKind::OptionalString),
                Attribute::new(ATTR_EXPLICITLY, Optional, AttributeKind::OptionalString),
            ],
        }
    }

    /// All attributes in declaration order
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Look up an attribute by name
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }
}
