//! core::aggregate
//!
//! Fold the flat dependency list into a deduplicated, conflict-checked
//! table of repository pins.
//!
//! # Semantics
//!
//! The table is seeded with the predeclared platform entries before the
//! fold begins, so seed precedence and input deduplication share one rule:
//! first write wins. An incoming record whose key is already present is
//! skipped, except that two different revisions claiming the same key are
//! a fatal conflict (the manifest cannot express two pins for one
//! repository). Branch-pinned entries are never compared against incoming
//! revisions at all; a branch and a revision are not comparable.

use std::collections::HashMap;

use thiserror::Error;

use super::classify::{classify, ClassifyError};
use super::types::{PinState, RawDependency, RepoKey};
use crate::ui::output::{self, Verbosity};

/// Mapping from repository root to its pin. Unordered during
/// construction; the manifest layer sorts keys at emission time.
pub type DepTable = HashMap<RepoKey, PinState>;

/// Errors from dependency aggregation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregateError {
    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error(
        "revisions don't match for key {key}: existing {existing}, new {incoming}"
    )]
    RevisionConflict {
        key: RepoKey,
        existing: String,
        incoming: String,
    },
}

/// The predeclared pins for the Kubernetes platform sub-libraries.
///
/// These repositories move together with the main Kubernetes tree, so they
/// are pinned by release branch rather than by the revisions the lock file
/// happens to list for them.
pub fn predeclared_deps(kube_branch: &str, client_go_branch: &str) -> DepTable {
    let kube = [
        "k8s.io/api",
        "k8s.io/apiextensions-apiserver",
        "k8s.io/apimachinery",
        "k8s.io/apiserver",
        "k8s.io/code-generator",
    ];

    let mut table: DepTable = kube
        .into_iter()
        .map(|name| (RepoKey::new(name), PinState::branch(kube_branch)))
        .collect();
    table.insert(
        RepoKey::new("k8s.io/client-go"),
        PinState::branch(client_go_branch),
    );
    table
}

/// Fold the input records into `table`, classifying each import path and
/// merging entries that share a repository root.
///
/// # Errors
///
/// Fails on the first unclassifiable import path, or on the first pair of
/// differing revisions claiming the same repository.
pub fn aggregate(
    mut table: DepTable,
    deps: &[RawDependency],
    verbosity: Verbosity,
) -> Result<DepTable, AggregateError> {
    for dep in deps {
        let key = classify(&dep.import_path)?;

        if let Some(existing) = table.get(&key) {
            output::debug(
                format!(
                    "already there: import key {} with import path {}",
                    key, dep.import_path
                ),
                verbosity,
            );
            if let Some(existing_rev) = existing.revision_id() {
                if existing_rev != dep.rev {
                    return Err(AggregateError::RevisionConflict {
                        key,
                        existing: existing_rev.to_string(),
                        incoming: dep.rev.clone(),
                    });
                }
            }
            continue;
        }

        output::debug(
            format!("adding: import key {} for import path {}", key, dep.import_path),
            verbosity,
        );
        table.insert(key, PinState::revision(&dep.rev));
    }
    Ok(table)
}
