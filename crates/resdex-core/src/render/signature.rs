use std::collections::HashSet;

use serde::Serialize;

use crate::format::{format, format_linked};
use crate::log_anomaly;
use crate::model::{Resource, TypeDescriptor};

/// Display-ready view of one resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedResource {
    pub id: String,
    pub title: Option<String>,
    pub is_new: bool,
    /// `(arg type, ...)` of the first initializer; `None` when there is none
    pub init_signature: Option<String>,
    /// `[]T` when the resource is a list resource
    pub list_type: Option<String>,
    pub fields: Vec<RenderedField>,
    /// Initializers beyond the first, which are not displayed
    pub ignored_initializers: usize,
}

/// Display-ready view of one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedField {
    pub id: String,
    pub ty: String,
    pub comments: Vec<String>,
    pub is_new: bool,
}

/// Render the constructor signature of a resource.
///
/// Uses the first initializer only: `(id type, id type)`. Returns `None`
/// for a resource with no initializer. Extra initializers are logged as an
/// anomaly and otherwise ignored.
pub fn render_init_signature(resource: &Resource) -> Option<String> {
    init_signature_with(resource, &format)
}

/// Render a resource with canonical type strings
pub fn render_resource(resource: &Resource) -> RenderedResource {
    render_resource_with(resource, &format)
}

/// Render a resource with Markdown-linked type strings
pub fn render_resource_linked(
    resource: &Resource,
    known_resources: &HashSet<String>,
) -> RenderedResource {
    render_resource_with(resource, &|t: &TypeDescriptor| {
        format_linked(t, known_resources)
    })
}

fn init_signature_with(
    resource: &Resource,
    render_type: &dyn Fn(&TypeDescriptor) -> String,
) -> Option<String> {
    let init = resource.primary_initializer()?;

    let ignored = resource.ignored_initializer_count();
    if ignored > 0 {
        log_anomaly!(
            "render_init_signature",
            resource_id = resource.id.as_str(),
            ignored_initializers = ignored as u64
        );
    }

    let args = init
        .args
        .iter()
        .map(|arg| format!("{} {}", arg.id, render_type(&arg.ty)))
        .collect::<Vec<_>>()
        .join(", ");
    Some(format!("({})", args))
}

fn render_resource_with(
    resource: &Resource,
    render_type: &dyn Fn(&TypeDescriptor) -> String,
) -> RenderedResource {
    let fields = resource
        .fields
        .iter()
        .map(|f| RenderedField {
            id: f.id.clone(),
            ty: render_type(&f.ty),
            comments: super::sanitize_comments(&f.comments),
            is_new: f.is_new,
        })
        .collect();

    let list_type = resource.list_marker.as_ref().map(|m| {
        render_type(&TypeDescriptor::list(TypeDescriptor::simple(
            m.element_type_name.clone(),
        )))
    });

    RenderedResource {
        id: resource.id.clone(),
        title: resource.title.clone(),
        is_new: resource.is_new,
        init_signature: init_signature_with(resource, render_type),
        list_type,
        fields,
        ignored_initializers: resource.ignored_initializer_count(),
    }
}
