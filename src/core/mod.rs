//! core
//!
//! Core domain logic for godep2dep: classify import paths to repository
//! roots and fold the flat lock file into one pin per repository.
//!
//! # Modules
//!
//! - [`types`] - Strong types: RawDependency, RepoKey, PinState
//! - [`classify`] - Import-path to repository-root classification
//! - [`aggregate`] - Deduplicating, conflict-checked aggregation fold
//!
//! # Design Principles
//!
//! - Input acquisition and serialization live elsewhere; the aggregation
//!   fold only reports progress through [`crate::ui::output`]
//! - Host knowledge is an ordered rule table, not a general parser
//! - First write wins; conflicting revisions are fatal, never merged

pub mod aggregate;
pub mod classify;
pub mod types;
