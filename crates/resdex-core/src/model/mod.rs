pub mod resource;
pub mod snapshot;
pub mod type_descriptor;

pub use resource::{Argument, Field, Initializer, ListResourceMarker, Resource};
pub use snapshot::Snapshot;
pub use type_descriptor::TypeDescriptor;
