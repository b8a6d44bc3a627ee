//! godep2dep - Convert a Godeps.json lock file into a dep manifest
//!
//! godep2dep is a single-binary, one-shot batch converter. It reads the
//! flat Godeps.json lock file Kubernetes publishes per release branch
//! (every imported sub-package pinned to a commit revision), groups those
//! entries by the repository that owns them, and emits a dep manifest
//! (`Gopkg.toml` `override` or `constraint` list) that pins each
//! repository exactly once.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses flags, drives the pipeline)
//! - [`core`] - Domain logic: path classification and aggregation
//! - [`source`] - Input acquisition (stdin, file, or HTTP fetch) and parsing
//! - [`manifest`] - Output projection and TOML/YAML rendering
//! - [`ui`] - Verbosity-gated stderr output
//!
//! # Correctness Invariants
//!
//! - Every emitted record names a repository root, never a sub-package
//! - Every emitted record carries exactly one of branch or revision
//! - Two differing revisions for one repository abort the run
//! - Output records are sorted by repository key, so runs are reproducible

pub mod cli;
pub mod core;
pub mod manifest;
pub mod source;
pub mod ui;
