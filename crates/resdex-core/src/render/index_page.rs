//! Version index page.

use crate::format::resource_page_ref;
use crate::model::Snapshot;
use crate::render::{sanitize_comments, trim_colon, RenderOptions};

/// Render the index page of a snapshot: front matter, heading and one table
/// row per resource, linking to its page.
pub fn render_index(snapshot: &Snapshot, options: &RenderOptions) -> String {
    let mut out = String::new();

    out.push_str("---\n");
    out.push_str(&format!("title: {} Resource Pack\n", options.pack_name));
    out.push_str(&format!("id: {}-pack\n", page_id(&options.pack_name)));
    out.push_str(&format!("sidebar_label: {} Resource Pack\n", options.pack_name));
    if !options.description.is_empty() {
        out.push_str(&format!("description: {}\n", trim_colon(&options.description)));
    }
    out.push_str("---\n\n");

    out.push_str(&format!(
        "# {} Resource Pack Reference ({})\n\n",
        options.pack_name, snapshot.version
    ));

    if snapshot.resources.is_empty() {
        out.push_str("_This version has no resources._\n");
        return out;
    }

    out.push_str("In this pack:\n\n");
    out.push_str("| ID | Description |\n");
    out.push_str("|---|---|\n");
    for resource in &snapshot.resources {
        let mut link = format!("[{}]({})", resource.id, resource_page_ref(&resource.id));
        if resource.is_new {
            link.push_str(" *new*");
        }
        let description = resource
            .title
            .as_ref()
            .map(|t| sanitize_comments(std::slice::from_ref(t)).join(" "))
            .unwrap_or_default();
        out.push_str(&format!("| {} | {} |\n", link, description.replace('|', "\\|")));
    }
    out.push('\n');

    out
}

fn page_id(pack_name: &str) -> String {
    pack_name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Resource;

    #[test]
    fn test_index_lists_resources_with_links() {
        let mut snapshot = Snapshot::new(
            "v2",
            vec![
                Resource::new("file").with_title("Files on disk"),
                Resource::new("User"),
            ],
        );
        // "User" sorts before "file"
        snapshot.resources[1].is_new = true;

        let out = render_index(&snapshot, &RenderOptions::default());
        assert!(out.contains("# Resource Resource Pack Reference (v2)"));
        assert!(out.contains("| [User](user.md) |  |\n"));
        assert!(out.contains("| [file](file.md) *new* | Files on disk |\n"));
    }

    #[test]
    fn test_index_front_matter() {
        let options = RenderOptions {
            pack_name: "Core OS".to_string(),
            description: "Docs: core".to_string(),
            link_resources: true,
        };
        let out = render_index(&Snapshot::new("v1", vec![]), &options);
        assert!(out.contains("id: core-os-pack\n"));
        assert!(out.contains("description: Docs core\n"));
        assert!(out.contains("_This version has no resources._"));
    }
}
