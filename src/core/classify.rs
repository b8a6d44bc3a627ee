//! core::classify
//!
//! Import-path classification: map a deep import path to the repository
//! root that owns it.
//!
//! # Design
//!
//! The downstream manifest pins at repository granularity while the input
//! lock file lists every imported sub-package, so the classifier has to
//! recover the repository boundary from an arbitrary import path. There is
//! no general way to do this; instead a finite, ordered list of host rules
//! picks how many leading path segments form the root:
//!
//! - `github.com`, `bitbucket.org`, `gonum.org` and `golang.org/x` use a
//!   flat `host/org/repo` layout, so the first three segments.
//! - `gopkg.in` encodes a major version in the repository segment
//!   (`gopkg.in/pkg.v3` or `gopkg.in/user/pkg.v3`); the segment carrying
//!   the `.vN` suffix decides between two and three.
//! - `go4.org` is itself a repository, one segment.
//! - Anything else defaults to `host/repo`, two segments.
//!
//! Supporting a new forge means adding a rule, not generalizing the parser.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::types::RepoKey;

/// Trailing major-version suffix used by gopkg.in, e.g. `.v3`, `.v2.1`.
static VERSION_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.v\d+(\.\d+){0,2}$").expect("version suffix regex is valid"));

/// Errors from import-path classification.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("unsupported import path syntax: {0}")]
    UnsupportedSyntax(String),
}

/// Derive the repository-root key for an import path.
///
/// Splits the path on `/`, inspects at most the first four segments, and
/// joins the host-rule-selected prefix back together.
///
/// # Errors
///
/// Returns [`ClassifyError::UnsupportedSyntax`] when the path is empty or
/// contains an empty segment, has fewer segments than its host rule
/// requires, or uses a gopkg.in layout without a version suffix.
///
/// # Example
///
/// ```
/// use godep2dep::core::classify::classify;
///
/// let key = classify("k8s.io/kube-openapi/pkg/util/proto/validation").unwrap();
/// assert_eq!(key.as_str(), "k8s.io/kube-openapi");
/// ```
pub fn classify(import_path: &str) -> Result<RepoKey, ClassifyError> {
    // Only the first three segments ever contribute to the key; the fourth
    // slot soaks up the remainder of deep paths.
    let parts: Vec<&str> = import_path.splitn(4, '/').collect();
    let unsupported = || ClassifyError::UnsupportedSyntax(import_path.to_string());

    // Well-formed import paths have no empty segments; a leading, trailing,
    // or doubled slash would otherwise survive into the joined key.
    if import_path.is_empty()
        || import_path.starts_with('/')
        || import_path.ends_with('/')
        || import_path.contains("//")
    {
        return Err(unsupported());
    }

    let segment = |i: usize| parts.get(i).copied();

    let n = match parts[0] {
        "github.com" | "bitbucket.org" | "gonum.org" => 3,
        "golang.org" if segment(1) == Some("x") => 3,
        "gopkg.in" => {
            // gopkg.in/pkg.v3/... vs gopkg.in/user/pkg.v3/...
            if segment(1).is_some_and(|s| VERSION_SUFFIX.is_match(s)) {
                2
            } else if segment(2).is_some_and(|s| VERSION_SUFFIX.is_match(s)) {
                3
            } else {
                return Err(unsupported());
            }
        }
        "go4.org" => 1,
        _ => 2,
    };

    if parts.len() < n {
        return Err(unsupported());
    }

    Ok(RepoKey::new(parts[..n].join("/")))
}
