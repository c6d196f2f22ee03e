use serde::{Deserialize, Serialize};

/// Structural description of a value's shape
///
/// A strictly nested tree: every node is exactly one of a named scalar, a
/// homogeneous list, or a map keyed by a simple name. `Unknown` stands in for
/// a descriptor that arrived with no variant populated; it renders as `?`
/// instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeDescriptor {
    /// Scalar or named type, e.g. `string` or another resource id
    Simple { name: String },

    /// Homogeneous ordered collection
    List { element: Box<TypeDescriptor> },

    /// Map with a simple key name and an arbitrary value type
    Map {
        key_name: String,
        value: Box<TypeDescriptor>,
    },

    /// No variant was populated in the source data
    #[default]
    Unknown,
}

impl TypeDescriptor {
    /// Create a simple (named) type
    pub fn simple(name: impl Into<String>) -> Self {
        TypeDescriptor::Simple { name: name.into() }
    }

    /// Create a list of `element`
    pub fn list(element: TypeDescriptor) -> Self {
        TypeDescriptor::List {
            element: Box::new(element),
        }
    }

    /// Create a map from `key_name` to `value`
    pub fn map(key_name: impl Into<String>, value: TypeDescriptor) -> Self {
        TypeDescriptor::Map {
            key_name: key_name.into(),
            value: Box::new(value),
        }
    }

    /// Check if this descriptor carries no shape information
    pub fn is_unknown(&self) -> bool {
        matches!(self, TypeDescriptor::Unknown)
    }

    /// Nesting depth of the tree (a simple type has depth 1, `Unknown` has depth 0)
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut node = self;
        loop {
            match node {
                TypeDescriptor::Simple { .. } => return depth + 1,
                TypeDescriptor::Unknown => return depth,
                TypeDescriptor::List { element } => node = element,
                TypeDescriptor::Map { value, .. } => node = value,
            }
            depth += 1;
        }
    }
}
