use serde::{Deserialize, Serialize};

use super::type_descriptor::TypeDescriptor;

/// A named, typed parameter of an initializer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    /// Parameter name
    pub id: String,

    /// Parameter type
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
}

impl Argument {
    /// Create a new argument
    pub fn new(id: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self { id: id.into(), ty }
    }
}

/// A typed field of a resource
///
/// `is_new` is derived by the diff engine and is never part of the input.
/// It is excluded from equality, so two fields compare equal regardless of
/// how a previous diff annotated them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    /// Field name, unique within its resource
    pub id: String,

    /// Field type
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,

    /// Documentation lines attached to the field
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,

    /// Whether the field is new relative to the predecessor snapshot
    #[serde(default)]
    pub is_new: bool,
}

impl Field {
    /// Create a new field with no comments and no annotation
    pub fn new(id: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            id: id.into(),
            ty,
            comments: Vec::new(),
            is_new: false,
        }
    }

    /// Attach documentation lines
    pub fn with_comments(mut self, comments: Vec<String>) -> Self {
        self.comments = comments;
        self
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.ty == other.ty && self.comments == other.comments
    }
}

impl Eq for Field {}

/// A constructor-like signature attached to a resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Initializer {
    /// Ordered parameters
    pub args: Vec<Argument>,
}

impl Initializer {
    /// Create an initializer from its ordered arguments
    pub fn new(args: Vec<Argument>) -> Self {
        Self { args }
    }
}

/// Marks a resource that behaves as a list of the named element type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResourceMarker {
    pub element_type_name: String,
}

/// A named entity in the catalog
///
/// Like [`Field`], the derived `is_new` flag does not take part in equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// Resource id, unique within a snapshot
    pub id: String,

    /// Optional one-line description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Fields in declaration order (may be empty)
    #[serde(default)]
    pub fields: Vec<Field>,

    /// Initializers in declaration order (may be empty; only the first is displayed)
    #[serde(default)]
    pub initializers: Vec<Initializer>,

    /// Present when the resource itself is a list of another type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_marker: Option<ListResourceMarker>,

    /// Whether the resource is new relative to the predecessor snapshot
    #[serde(default)]
    pub is_new: bool,
}

impl Resource {
    /// Create an empty resource with the given id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            fields: Vec::new(),
            initializers: Vec::new(),
            list_marker: None,
            is_new: false,
        }
    }

    /// Set the description
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append a field
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Append an initializer
    pub fn with_initializer(mut self, init: Initializer) -> Self {
        self.initializers.push(init);
        self
    }

    /// Mark the resource as a list of `element_type_name`
    pub fn with_list_marker(mut self, element_type_name: impl Into<String>) -> Self {
        self.list_marker = Some(ListResourceMarker {
            element_type_name: element_type_name.into(),
        });
        self
    }

    /// Look up a field by id
    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// The initializer used for display, if any
    pub fn primary_initializer(&self) -> Option<&Initializer> {
        self.initializers.first()
    }

    /// Number of initializers beyond the first (ignored for display)
    pub fn ignored_initializer_count(&self) -> usize {
        self.initializers.len().saturating_sub(1)
    }
}

impl PartialEq for Resource {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.title == other.title
            && self.fields == other.fields
            && self.initializers == other.initializers
            && self.list_marker == other.list_marker
    }
}

impl Eq for Resource {}
