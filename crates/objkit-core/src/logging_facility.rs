//! Structured logging facility for objkit
//!
//! This module provides:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! The library never installs a subscriber on its own; hosts that want output
//! call `init` once at startup.
//!
//! # Usage
//!
//! ```rust
//! use objkit_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```
//!
//! # Logging Macros
//!
//! - `log_op_start!(op, ...)` - Log operation start
//! - `log_op_end!(op, duration_ms = ...)` - Log operation end
//! - `log_op_error!(op, err, duration_ms = ...)` - Log operation error
//!
//! Boundary operations (`get_object_diff`, `remove_attrs_by_type`) own these
//! events. Inner helpers only emit `tracing::debug!`.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
