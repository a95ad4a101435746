//! Option records for the comparison and attribute helpers.
//!
//! Defaults are fixed `Default` values. Partial records coming from
//! configuration (JSON, or anything serde can turn into JSON) are merged
//! over those defaults with `from_partial`.

use crate::errors::{ObjKitError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Options for `are_equal` and `get_object_diff`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CompareOptions {
    /// Type-sensitive (`===`) instead of coercive (`==`) scalar equality
    pub strict: bool,
    /// When non-empty, only these top-level attributes are considered, in order
    pub attr_names: Vec<String>,
}

impl CompareOptions {
    /// Merge a partial record over the defaults
    ///
    /// `null` yields the defaults.
    ///
    /// # Errors
    ///
    /// * `InvalidOptions` - If `partial` is not an object or a field has the wrong type
    pub fn from_partial(partial: serde_json::Value) -> Result<Self> {
        merge_with_defaults(partial)
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_attr_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attr_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Whether comparison is scoped to `attr_names`
    pub fn is_restricted(&self) -> bool {
        !self.attr_names.is_empty()
    }
}

/// Options for `create_private_attributes`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PrivateAttrsOptions {
    /// Prefix callable-valued attributes too
    pub include_function: bool,
}

impl PrivateAttrsOptions {
    /// Merge a partial record over the defaults
    ///
    /// # Errors
    ///
    /// * `InvalidOptions` - If `partial` is not an object or a field has the wrong type
    pub fn from_partial(partial: serde_json::Value) -> Result<Self> {
        merge_with_defaults(partial)
    }

    pub fn with_include_function(mut self, include_function: bool) -> Self {
        self.include_function = include_function;
        self
    }
}

fn merge_with_defaults<T>(partial: serde_json::Value) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    match partial {
        serde_json::Value::Null => Ok(T::default()),
        serde_json::Value::Object(_) => {
            serde_json::from_value(partial).map_err(|e| ObjKitError::InvalidOptions {
                reason: e.to_string(),
            })
        }
        other => Err(ObjKitError::InvalidOptions {
            reason: format!("expected an options object, got {}", other),
        }),
    }
}
