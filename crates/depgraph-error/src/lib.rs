//! # depgraph-error
//!
//! Unified error handling for depgraph.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: Know what error occurred (e.g., ScanFailed, ConfigInvalid)
//! - **ErrorStatus**: Decide how to handle it (Permanent, Temporary)
//! - **Error Context**: Assist in locating the cause with rich context
//! - **Error Source**: Wrap underlying errors without leaking raw types
//!
//! ## Usage
//!
//! ```rust
//! use depgraph_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::ScanFailed, "unreadable source text")
//!         .with_operation("pipeline::read_sources")
//!         .with_context("file", "pkg/mod.py"))
//! }
//! ```
//!
//! ## Principles
//!
//! - All fallible functions return `Result<T, depgraph_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - Same error handled once, subsequent ops only append context

mod error;
mod kind;
mod status;

pub use error::Error;
pub use kind::ErrorKind;
pub use status::ErrorStatus;

/// Result type alias using the depgraph Error
pub type Result<T> = std::result::Result<T, Error>;
