//! Validation and conversion of raw snapshots into the schema model
//!
//! Every check reports the document path of the offending node, rooted at
//! the version key (e.g. `v2.resources[3].body.fields[1].basic_field.type`).

use std::collections::HashSet;

use resdex_core::errors::ResdexError;
use resdex_core::format::is_safe_page_id;
use resdex_core::model::{Argument, Field, Initializer, Resource, Snapshot, TypeDescriptor};

use crate::raw::schema::{RawBodyEntry, RawResource, RawSnapshot, RawType};

type Result<T> = std::result::Result<T, ResdexError>;

/// Validate a raw snapshot and convert it for storage under `version`.
///
/// # Errors
///
/// - `InvalidCatalog` if the snapshot declares a different version, or a body
///   entry is empty or holds both a field and an initializer
/// - `MissingId` for an empty resource, field or argument id
/// - `UnsafeResourceId` for a resource id with a path separator or `..`
/// - `DuplicateResourceId` / `DuplicateFieldId` for repeated ids
/// - `AmbiguousType` for a type with more than one variant populated
pub fn convert_snapshot(version: &str, raw: RawSnapshot) -> Result<Snapshot> {
    if let Some(declared) = &raw.version {
        if declared != version {
            return Err(ResdexError::InvalidCatalog {
                reason: format!(
                    "snapshot declares version {} but is stored under {}",
                    declared, version
                ),
            });
        }
    }

    let mut seen = HashSet::new();
    let mut resources = Vec::with_capacity(raw.resources.len());
    for (i, raw_resource) in raw.resources.into_iter().enumerate() {
        let path = format!("{}.resources[{}]", version, i);
        let resource = convert_resource(raw_resource, &path)?;
        if !seen.insert(resource.id.clone()) {
            return Err(ResdexError::DuplicateResourceId {
                version: version.to_string(),
                resource_id: resource.id,
            });
        }
        resources.push(resource);
    }

    Ok(Snapshot::new(version, resources))
}

fn convert_resource(raw: RawResource, path: &str) -> Result<Resource> {
    if raw.id.trim().is_empty() {
        return Err(ResdexError::MissingId {
            path: format!("{}.id", path),
        });
    }

    if !is_safe_page_id(&raw.id) {
        return Err(ResdexError::UnsafeResourceId {
            path: format!("{}.id", path),
            resource_id: raw.id,
        });
    }

    let mut resource = Resource::new(raw.id);
    resource.title = raw.title.filter(|t| !t.is_empty());
    if let Some(list) = raw.list_type {
        resource = resource.with_list_marker(list.ty.name);
    }

    let entries = raw.body.map(|b| b.fields).unwrap_or_default();
    let mut field_ids = HashSet::new();
    for (i, entry) in entries.into_iter().enumerate() {
        let entry_path = format!("{}.body.fields[{}]", path, i);
        match entry {
            RawBodyEntry {
                basic_field: Some(field),
                init: None,
            } => {
                if field.id.trim().is_empty() {
                    return Err(ResdexError::MissingId {
                        path: format!("{}.basic_field.id", entry_path),
                    });
                }
                let ty = convert_type(&field.ty, &format!("{}.basic_field.type", entry_path))?;
                if !field_ids.insert(field.id.clone()) {
                    return Err(ResdexError::DuplicateFieldId {
                        resource_id: resource.id.clone(),
                        field_id: field.id,
                    });
                }
                resource
                    .fields
                    .push(Field::new(field.id, ty).with_comments(field.comments));
            }
            RawBodyEntry {
                basic_field: None,
                init: Some(init),
            } => {
                let mut args = Vec::with_capacity(init.args.len());
                for (j, arg) in init.args.into_iter().enumerate() {
                    let arg_path = format!("{}.init.args[{}]", entry_path, j);
                    if arg.id.trim().is_empty() {
                        return Err(ResdexError::MissingId {
                            path: format!("{}.id", arg_path),
                        });
                    }
                    let ty = convert_type(&arg.ty, &format!("{}.type", arg_path))?;
                    args.push(Argument::new(arg.id, ty));
                }
                resource.initializers.push(Initializer::new(args));
            }
            RawBodyEntry {
                basic_field: Some(_),
                init: Some(_),
            } => {
                return Err(ResdexError::InvalidCatalog {
                    reason: format!("{} holds both basic_field and init", entry_path),
                });
            }
            RawBodyEntry {
                basic_field: None,
                init: None,
            } => {
                return Err(ResdexError::InvalidCatalog {
                    reason: format!("{} holds neither basic_field nor init", entry_path),
                });
            }
        }
    }

    Ok(resource)
}

/// Convert a raw type descriptor.
///
/// No variant populated (or an empty simple name) yields `Unknown`.
///
/// # Errors
///
/// Returns `AmbiguousType` naming every populated variant when more than one
/// is set, at any nesting level.
pub fn convert_type(raw: &RawType, path: &str) -> Result<TypeDescriptor> {
    let populated: Vec<String> = [
        ("simple_type", raw.simple_type.is_some()),
        ("list_type", raw.list_type.is_some()),
        ("map_type", raw.map_type.is_some()),
    ]
    .iter()
    .filter(|(_, set)| *set)
    .map(|(name, _)| name.to_string())
    .collect();

    if populated.len() > 1 {
        return Err(ResdexError::AmbiguousType {
            path: path.to_string(),
            variants: populated,
        });
    }

    match (&raw.simple_type, &raw.list_type, &raw.map_type) {
        (Some(simple), _, _) if !simple.name.is_empty() => {
            Ok(TypeDescriptor::simple(simple.name.clone()))
        }
        (_, Some(list), _) => Ok(TypeDescriptor::list(convert_type(
            &list.ty,
            &format!("{}.list_type.type", path),
        )?)),
        (_, _, Some(map)) => Ok(TypeDescriptor::map(
            map.key.name.clone(),
            convert_type(&map.value, &format!("{}.map_type.value", path))?,
        )),
        _ => Ok(TypeDescriptor::Unknown),
    }
}
