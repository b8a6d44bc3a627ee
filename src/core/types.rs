//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`RawDependency`] - One import-path/revision record from the lock file
//! - [`RepoKey`] - Canonical repository-root prefix of an import path
//! - [`PinState`] - A pin to either a branch or a commit revision
//!
//! # Validation
//!
//! [`PinState`] is only constructible through [`PinState::branch`] and
//! [`PinState::revision`], so an entry with neither field set cannot be
//! produced by library code. The emission path still checks for it and
//! treats it as an internal invariant violation.

use serde::Deserialize;

/// One record of the flat input lock file: a deep import path pinned to a
/// commit revision.
///
/// Field names follow the Godeps.json wire format.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawDependency {
    /// Slash-delimited import path, possibly nested arbitrarily deep
    /// beneath its repository root.
    #[serde(rename = "ImportPath")]
    pub import_path: String,

    /// Pinned commit revision.
    #[serde(rename = "Rev")]
    pub rev: String,
}

/// The shortest prefix of an import path that identifies the repository
/// containing it, e.g. `github.com/org/repo`.
///
/// Keys are derived by [`crate::core::classify::classify`] and never parsed
/// back apart; ordering is plain byte order so manifest output is stable.
///
/// # Example
///
/// ```
/// use godep2dep::core::types::RepoKey;
///
/// let key = RepoKey::new("k8s.io/apimachinery");
/// assert_eq!(key.as_str(), "k8s.io/apimachinery");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RepoKey(String);

impl RepoKey {
    /// Create a repository key from an already-derived prefix.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the key, yielding the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for RepoKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A pin fixing a repository to either a named branch or an immutable
/// commit revision. Exactly one of the two is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinState {
    branch: Option<String>,
    revision: Option<String>,
}

impl PinState {
    /// Pin to a named branch.
    pub fn branch(name: impl Into<String>) -> Self {
        Self {
            branch: Some(name.into()),
            revision: None,
        }
    }

    /// Pin to a commit revision.
    pub fn revision(rev: impl Into<String>) -> Self {
        Self {
            branch: None,
            revision: Some(rev.into()),
        }
    }

    /// The branch name, if this is a branch pin.
    pub fn branch_name(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    /// The revision, if this is a revision pin.
    pub fn revision_id(&self) -> Option<&str> {
        self.revision.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repo_key_orders_bytewise() {
        let mut keys = vec![
            RepoKey::new("k8s.io/client-go"),
            RepoKey::new("github.com/spf13/pflag"),
            RepoKey::new("k8s.io/api"),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                RepoKey::new("github.com/spf13/pflag"),
                RepoKey::new("k8s.io/api"),
                RepoKey::new("k8s.io/client-go"),
            ]
        );
    }

    #[test]
    fn pin_state_is_exclusive() {
        let b = PinState::branch("release-1.12");
        assert_eq!(b.branch_name(), Some("release-1.12"));
        assert_eq!(b.revision_id(), None);

        let r = PinState::revision("abc123");
        assert_eq!(r.branch_name(), None);
        assert_eq!(r.revision_id(), Some("abc123"));
    }

    #[test]
    fn raw_dependency_parses_godeps_field_names() {
        let d: RawDependency =
            serde_json::from_str(r#"{"ImportPath":"k8s.io/klog","Rev":"abc123","Comment":"v1"}"#)
                .unwrap();
        assert_eq!(d.import_path, "k8s.io/klog");
        assert_eq!(d.rev, "abc123");
    }
}
