//! objkit Core - Stateless helpers for plain attribute records
//!
//! This crate provides the structural value utility:
//! - A `Value` model for records (scalars, dates, sequences, mappings, callables)
//! - Copying with well-defined sharing depth
//! - Deep equality (strict or loose), optionally scoped to named attributes
//! - Structural diffs between mappings
//! - Attribute helpers: privatising, type filtering, discovery, extraction,
//!   deep removal and flattening
//!
//! Every operation is a pure function; nothing is cached or shared between calls.

pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;

#[doc(hidden)]
pub use objkit_core_types;

// Re-export commonly used types
pub use diff::{get_object_diff, DiffEntry, DiffKind, ObjectDiff, PathSegment};
pub use errors::{ExError, ExErrorKind, ObjKitError, Result};
pub use model::{Callable, CompareOptions, Map, PrivateAttrsOptions, Value};
pub use objkit_core_types::ValueKind;
pub use ops::{
    are_equal, attr_names, attr_string, copy_object, copy_objects, copy_value,
    create_private_attributes, find_attr, flat_object, has_attrs_only, parse_string,
    remove_attrs_by_type, remove_deep_attrs, value_by_index,
};
