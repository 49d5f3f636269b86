//! Target List Loading

mod toml_targets;

pub use toml_targets::{
    bundle_list, TargetList, TargetListWarning, TomlTargetLoader, DEFAULT_TARGET_GROUP,
};
