//! Domain Entities

mod target;

pub use target::{built_file_name, TargetDescriptor, BUILT_PREFIX};
