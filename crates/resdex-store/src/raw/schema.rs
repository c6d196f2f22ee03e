//! Raw snapshot schema
//!
//! Mirrors the schema AST emitted by the resource-definition compiler.
//! Unknown keys are rejected everywhere.

use serde::{Deserialize, Serialize};

/// One version of the catalog as found on disk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSnapshot {
    /// Optional self-declared version; must match the catalog key when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub resources: Vec<RawResource>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawResource {
    #[serde(default)]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Set when the resource is a list of another resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_type: Option<RawListResource>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<RawBody>,
}

/// `{ "type": { "type": "T" } }`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawListResource {
    #[serde(rename = "type")]
    pub ty: RawTypeName,
}

/// `{ "type": "T" }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawTypeName {
    #[serde(rename = "type", default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawBody {
    #[serde(default)]
    pub fields: Vec<RawBodyEntry>,
}

/// A body entry: either a field or an initializer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawBodyEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic_field: Option<RawBasicField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub init: Option<RawInit>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawBasicField {
    #[serde(default)]
    pub id: String,

    #[serde(rename = "type", default)]
    pub ty: RawType,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawInit {
    #[serde(default)]
    pub args: Vec<RawArg>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawArg {
    #[serde(default)]
    pub id: String,

    #[serde(rename = "type", default)]
    pub ty: RawType,
}

/// Type descriptor with three optional variant keys.
///
/// Exactly one should be populated. None populated means the type is
/// unknown; more than one is rejected during conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simple_type: Option<RawTypeName>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_type: Option<Box<RawListOf>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_type: Option<Box<RawMap>>,
}

/// `{ "type": RawType }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawListOf {
    #[serde(rename = "type", default)]
    pub ty: RawType,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawMap {
    #[serde(default)]
    pub key: RawTypeName,

    #[serde(default)]
    pub value: RawType,
}
