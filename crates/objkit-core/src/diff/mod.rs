//! Structural diff between attribute mappings.
//!
//! ```
//! use objkit_core::diff::get_object_diff;
//! use objkit_core::{CompareOptions, Value};
//! use serde_json::json;
//!
//! let lhs = Value::from(json!({"a": 1, "b": "2"}));
//! let rhs = Value::from(json!({"a": 1, "b": "3"}));
//! let diff = get_object_diff(lhs.as_object(), rhs.as_object(), &CompareOptions::default());
//! assert_eq!(diff.map(|d| d.len()), Some(1));
//! ```
//!
//! ## Ordering
//!
//! Entries come out in traversal order (lhs attributes first, then
//! attributes only present in rhs). That order is not part of the contract;
//! callers that need a stable comparison sort by [`DiffEntry::path_string`]
//! or use [`model::sort_entries`].

pub mod engine;
pub mod model;

pub use engine::{diff_values, get_object_diff};
pub use model::{sort_entries, DiffEntry, DiffKind, ObjectDiff, PathSegment};
