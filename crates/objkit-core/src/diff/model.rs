//! Diff output types.

use crate::model::Value;
use serde::Serialize;
use std::fmt;

/// Outcome of a diff: `None` when nothing differs, never an empty vector
pub type ObjectDiff = Option<Vec<DiffEntry>>;

/// One step in the path to a differing value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Attribute name in a mapping
    Key(String),
    /// Position in a sequence
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "{}", index),
        }
    }
}

/// What changed at a path
///
/// Serialized with the single-letter kind tags used by common JSON diff
/// tools (`E`, `N`, `D`, `A`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum DiffKind {
    /// Value present on both sides but unequal
    #[serde(rename = "E")]
    Edit { lhs: Value, rhs: Value },
    /// Value only present on the right
    #[serde(rename = "N")]
    New { rhs: Value },
    /// Value only present on the left
    #[serde(rename = "D")]
    Deleted { lhs: Value },
    /// Element added or removed at `index` of the sequence at the entry path
    #[serde(rename = "A")]
    Array { index: usize, item: Box<DiffKind> },
}

impl DiffKind {
    /// Single-letter tag
    pub fn code(&self) -> char {
        match self {
            DiffKind::Edit { .. } => 'E',
            DiffKind::New { .. } => 'N',
            DiffKind::Deleted { .. } => 'D',
            DiffKind::Array { .. } => 'A',
        }
    }
}

/// A single structural difference
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffEntry {
    pub path: Vec<PathSegment>,
    #[serde(flatten)]
    pub kind: DiffKind,
}

impl DiffEntry {
    pub fn new(path: Vec<PathSegment>, kind: DiffKind) -> Self {
        Self { path, kind }
    }

    /// Path segments joined with `.`
    pub fn path_string(&self) -> String {
        self.path
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }

    /// First path segment, i.e. the top-level attribute this entry belongs to
    pub fn root_attr(&self) -> Option<&str> {
        match self.path.first() {
            Some(PathSegment::Key(key)) => Some(key),
            _ => None,
        }
    }
}

/// Sort entries by path string, then by array index
pub fn sort_entries(entries: &mut [DiffEntry]) {
    entries.sort_by(|a, b| {
        a.path_string()
            .cmp(&b.path_string())
            .then_with(|| array_index(a).cmp(&array_index(b)))
    });
}

fn array_index(entry: &DiffEntry) -> Option<usize> {
    match entry.kind {
        DiffKind::Array { index, .. } => Some(index),
        _ => None,
    }
}
