//! Human-readable summary renderer for diffs.

use crate::diff::model::{DiffClassification, DiffSummary};

/// Render a Markdown summary of a [`DiffSummary`].
///
/// Informational only; the structured summary is the source of truth.
pub fn render_human_summary(summary: &DiffSummary) -> String {
    let mut out = String::new();

    // Header
    match &summary.previous_version {
        Some(prev) => out.push_str(&format!(
            "## Changes in {} (since {})\n\n",
            summary.version, prev
        )),
        None => out.push_str(&format!("## Changes in {}\n\n", summary.version)),
    }

    let class_label = match summary.classification {
        DiffClassification::Initial => "Initial",
        DiffClassification::Unchanged => "Unchanged",
        DiffClassification::Changed => "Changed",
    };
    out.push_str(&format!(
        "**Classification**: {class_label}  \n**Resources**: {} ({} new)  \n**Fields**: {} ({} new on existing resources)\n\n",
        summary.resource_count,
        summary.new_resources.len(),
        summary.field_count,
        summary.new_field_count(),
    ));

    match summary.classification {
        DiffClassification::Initial => {
            out.push_str("_Oldest version: every resource and field is new._\n");
        }
        DiffClassification::Unchanged => {
            out.push_str("_No new resources or fields._\n");
        }
        DiffClassification::Changed => {
            if !summary.new_resources.is_empty() {
                out.push_str("### New Resources\n\n");
                for id in &summary.new_resources {
                    out.push_str(&format!("- `{}`\n", id));
                }
                out.push('\n');
            }

            if !summary.new_fields.is_empty() {
                out.push_str("### New Fields\n\n");
                for (resource_id, fields) in &summary.new_fields {
                    let list = fields
                        .iter()
                        .map(|f| format!("`{}`", f))
                        .collect::<Vec<_>>()
                        .join(", ");
                    out.push_str(&format!("- `{}`: {}\n", resource_id, list));
                }
                out.push('\n');
            }
        }
    }

    if !summary.initializer_anomalies.is_empty() {
        out.push_str("\n### Initializer Anomalies\n\n");
        for anomaly in &summary.initializer_anomalies {
            out.push_str(&format!(
                "- `{}`: {} initializers ({} ignored)\n",
                anomaly.resource_id,
                anomaly.initializer_count,
                anomaly.initializer_count.saturating_sub(1)
            ));
        }
    }

    out
}
