//! # depchart-error
//!
//! Unified error handling for depchart.
//!
//! - **ErrorKind**: what went wrong (e.g., ConfigInvalid, GraphInvalid)
//! - **Error Context**: where it went wrong, as operation plus key/value pairs
//! - **Error Source**: the underlying error, wrapped without leaking its type
//!
//! ## Usage
//!
//! ```rust
//! use depchart_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::GraphInvalid, "unknown dependency")
//!         .with_operation("manifest::load")
//!         .with_context("file", "contracts/A.sol")
//!         .with_context("dependency", "contracts/Missing.sol"))
//! }
//! ```
//!
//! Nothing here is retried: every command regenerates its output from scratch,
//! so an error is reported once and the run stops.

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using depchart Error
pub type Result<T> = std::result::Result<T, Error>;
