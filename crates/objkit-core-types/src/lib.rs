//! Core types shared across objkit facilities
//!
//! This crate provides the vocabulary used by both the value utilities and
//! the logging facility:
//!
//! - **Value kinds**: the closed `ValueKind` tag set used for type-based filtering
//! - **Schema constants**: Canonical field keys and event names

pub mod kind;
pub mod schema;

pub use kind::{ParseValueKindError, ValueKind};
