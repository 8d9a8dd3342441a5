//! Descriptor nodes shared by the django2gorm pipeline.
//!
//! The source side (`Model`, `Field`) describes what was recognized in a
//! Django models.py file; the target side (`GoModel`, `GoField`) describes
//! the GORM structs to be emitted. Both are plain data, built once per
//! conversion run and discarded afterwards.

pub mod naming;
pub mod node;
pub mod report;
pub mod types;

/// Go type emitted when a field constructor is not recognized.
pub const PLACEHOLDER_GO_TYPE: &str = "interface{}";

/// Related-model name emitted when a relation's first argument cannot be read.
pub const PLACEHOLDER_TARGET: &str = "Unresolved";

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        PLACEHOLDER_GO_TYPE, PLACEHOLDER_TARGET, naming,
        node::*,
        report::{ErrorRecord, Report},
        types::{RelationKind, RelationTarget, ScalarKind},
    };
    pub use serde::Serialize;
}
