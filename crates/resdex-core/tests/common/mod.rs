use resdex_core::model::{Argument, Field, Initializer, Resource, Snapshot, TypeDescriptor};
use resdex_core::SnapshotCollection;

/// A `string`-typed field
#[allow(dead_code)]
pub fn string_field(id: &str) -> Field {
    Field::new(id, TypeDescriptor::simple("string"))
}

/// Resource with the given `string` fields
#[allow(dead_code)]
pub fn resource(id: &str, fields: &[&str]) -> Resource {
    fields
        .iter()
        .fold(Resource::new(id), |r, f| r.with_field(string_field(f)))
}

/// Snapshot built from `(resource id, field ids)` pairs
#[allow(dead_code)]
pub fn snapshot(version: &str, resources: &[(&str, &[&str])]) -> Snapshot {
    Snapshot::new(
        version,
        resources
            .iter()
            .map(|(id, fields)| resource(id, fields))
            .collect(),
    )
}

/// Three versions of a small OS pack:
/// - v1: `file{path}`
/// - v2: `file{path, mode}`, `user{name}`
/// - v3: `file{path, mode}`, `user{name, uid}`, `users` list of `user`
#[allow(dead_code)]
pub fn os_pack() -> SnapshotCollection {
    let v1 = snapshot("v1", &[("file", &["path"])]);
    let v2 = snapshot("v2", &[("file", &["path", "mode"]), ("user", &["name"])]);
    let mut v3 = snapshot("v3", &[("file", &["path", "mode"]), ("user", &["name"])]);
    if let Some(user) = v3.resources.iter_mut().find(|r| r.id == "user") {
        user.fields
            .push(Field::new("uid", TypeDescriptor::simple("int")));
        user.initializers.push(Initializer::new(vec![Argument::new(
            "name",
            TypeDescriptor::simple("string"),
        )]));
    }
    v3.resources.push(Resource::new("users").with_list_marker("user"));

    SnapshotCollection::from_entries(vec![
        ("v1".to_string(), v1),
        ("v2".to_string(), v2),
        ("v3".to_string(), v3),
    ])
    .expect("fixture catalog is valid")
}
