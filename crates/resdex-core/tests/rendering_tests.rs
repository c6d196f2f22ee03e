#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::os_pack;
use resdex_core::errors::{ExError, ExErrorKind, ResdexError};
use resdex_core::model::{Argument, Field, Initializer, Resource, Snapshot, TypeDescriptor};
use resdex_core::render::{
    render_init_signature, render_resource, render_snapshot_pages, RenderOptions,
};
use resdex_core::view::View;

#[test]
fn test_init_signature_examples() {
    let none = Resource::new("asset");
    assert_eq!(render_init_signature(&none), None);

    let two_args = Resource::new("file").with_initializer(Initializer::new(vec![
        Argument::new("path", TypeDescriptor::simple("string")),
        Argument::new(
            "tags",
            TypeDescriptor::list(TypeDescriptor::simple("string")),
        ),
    ]));
    assert_eq!(
        render_init_signature(&two_args).as_deref(),
        Some("(path string, tags []string)")
    );
}

#[test]
fn test_unknown_field_type_renders_marker() {
    let r = Resource::new("blob").with_field(Field::new("data", TypeDescriptor::Unknown));
    let rendered = render_resource(&r);
    assert_eq!(rendered.fields[0].ty, "?");
}

#[test]
fn test_view_pages_for_latest_version() {
    let repo = os_pack();
    let view = View::select(&repo, None).unwrap();
    let pages = view.pages(&RenderOptions::default()).unwrap();

    let names: Vec<&str> = pages.iter().map(|p| p.file_name.as_str()).collect();
    assert_eq!(names, vec!["README.md", "file.md", "user.md", "users.md"]);

    let index = &pages[0].content;
    assert!(index.contains("| [users](users.md) *new* |"));
    assert!(index.contains("| [file](file.md) |"));

    let user = &pages[2].content;
    assert!(user.contains("**Init**\n\nuser(name string)\n"));
    assert!(user.contains("| uid *new* | int |"));
    assert!(user.contains("| name | string |"));

    let users = &pages[3].content;
    assert!(users.contains("# users\n\n*new*\n"));
    assert!(users.contains("**List**\n\n&#91;&#93;[user](user.md)\n"));
}

#[test]
fn test_oldest_version_pages_mark_everything_new() {
    let repo = os_pack();
    let view = View::select(&repo, Some("v1")).unwrap();
    let pages = view.pages(&RenderOptions::default()).unwrap();

    assert_eq!(pages.len(), 2);
    assert!(pages[0].content.contains("| [file](file.md) *new* |"));
    assert!(pages[1].content.contains("| path *new* | string |"));
}

#[test]
fn test_pages_reject_path_escaping_id() {
    let snapshot = Snapshot::new(
        "v1",
        vec![Resource::new("file"), Resource::new("../../escape")],
    );

    let err = render_snapshot_pages(&snapshot, &RenderOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        ResdexError::UnsafeResourceId { ref resource_id, .. } if resource_id == "../../escape"
    ));
    assert_eq!(ExError::from(err).kind(), ExErrorKind::InvalidInput);

    let absolute = Snapshot::new("v1", vec![Resource::new("/tmp/abs")]);
    assert!(render_snapshot_pages(&absolute, &RenderOptions::default()).is_err());
}

#[test]
fn test_pages_reject_case_insensitive_collision() {
    let snapshot = Snapshot::new("v1", vec![Resource::new("User"), Resource::new("user")]);

    let err = render_snapshot_pages(&snapshot, &RenderOptions::default()).unwrap_err();
    assert_eq!(
        err,
        ResdexError::PageNameCollision {
            version: "v1".to_string(),
            file_name: "user.md".to_string(),
            resource_ids: vec!["User".to_string(), "user".to_string()],
        }
    );
    assert_eq!(ExError::from(err).kind(), ExErrorKind::DuplicateId);
}

#[test]
fn test_page_names_are_unique() {
    let repo = os_pack();
    let view = View::select(&repo, None).unwrap();
    let pages = view.pages(&RenderOptions::default()).unwrap();

    let mut names: Vec<String> = pages.iter().map(|p| p.file_name.to_lowercase()).collect();
    let total = names.len();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), total);
    assert!(pages.iter().all(|p| !p.file_name.contains('/')));
}
