//! Markdown page for a single resource.

use std::collections::HashSet;

use crate::model::Resource;
use crate::render::signature::{render_resource, render_resource_linked, RenderedResource};
use crate::render::{sanitize_comments, trim_colon, RenderOptions};

/// Render the documentation page of one resource.
///
/// `known_resources` holds the ids of every resource in the same snapshot;
/// with `options.link_resources` set, field and argument types naming one of
/// them link to its page.
pub fn render_resource_page(
    resource: &Resource,
    known_resources: &HashSet<String>,
    options: &RenderOptions,
) -> String {
    let rendered = if options.link_resources {
        render_resource_linked(resource, known_resources)
    } else {
        render_resource(resource)
    };
    page_markdown(&rendered)
}

fn page_markdown(r: &RenderedResource) -> String {
    let mut out = String::new();
    let description = r
        .title
        .as_ref()
        .map(|t| sanitize_comments(std::slice::from_ref(t)).join(" "))
        .filter(|t| !t.is_empty());

    // Front matter
    out.push_str("---\n");
    out.push_str(&format!("title: {}\n", r.id));
    out.push_str(&format!("id: {}\n", r.id));
    out.push_str(&format!("sidebar_label: {}\n", r.id));
    if let Some(desc) = &description {
        out.push_str(&format!("description: {}\n", trim_colon(desc)));
    }
    out.push_str("---\n\n");

    out.push_str(&format!("# {}\n\n", r.id));
    if r.is_new {
        out.push_str("*new*\n\n");
    }

    if let Some(desc) = &description {
        out.push_str("**Description**\n\n");
        out.push_str(desc);
        out.push_str("\n\n");
    }

    if let Some(sig) = &r.init_signature {
        out.push_str("**Init**\n\n");
        out.push_str(&format!("{}{}\n\n", r.id, sig));
    }

    if let Some(list_type) = &r.list_type {
        out.push_str("**List**\n\n");
        out.push_str(list_type);
        out.push_str("\n\n");
    }

    // List resources may have no fields at all
    if !r.fields.is_empty() {
        out.push_str("**Fields**\n\n");
        out.push_str("| ID | Type | Description |\n");
        out.push_str("|---|---|---|\n");
        for field in &r.fields {
            let id = if field.is_new {
                format!("{} *new*", field.id)
            } else {
                field.id.clone()
            };
            out.push_str(&format!(
                "| {} | {} | {} |\n",
                escape_cell(&id),
                escape_cell(&field.ty),
                escape_cell(&field.comments.join(", "))
            ));
        }
        out.push('\n');
    }

    out
}

fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|")
}
