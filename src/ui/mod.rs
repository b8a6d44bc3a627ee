//! ui
//!
//! User-facing output utilities.
//!
//! # Modules
//!
//! - [`output`] - Verbosity-gated progress and error printing
//!
//! # Design
//!
//! The manifest itself goes to stdout; everything else (progress,
//! warnings, errors) goes to stderr through this module so output can be
//! piped straight into a Gopkg.toml.

pub mod output;
