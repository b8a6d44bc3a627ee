//! manifest
//!
//! Projection of the aggregated pin table into the generated dep manifest.
//!
//! # Output Shape
//!
//! The manifest is a single top-level list, `override` or `constraint`
//! depending on how the downstream dep invocation will consume it, whose
//! records carry a repository name plus exactly one of `branch` or
//! `revision`. Records are sorted by name so output is reproducible.
//!
//! The rendered document is prefixed with two fixed comment lines marking
//! it as generated.

use serde::Serialize;
use thiserror::Error;

use crate::core::aggregate::DepTable;
use crate::core::types::RepoKey;

/// Comment lines prepended to every rendered manifest.
const BOILERPLATE: &str = "# Overrides below have been generated using godep2dep\n\
                           # Do not edit manually\n";

/// Errors from manifest assembly and serialization.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// An aggregated entry carried neither a branch nor a revision. This
    /// is a logic defect in the aggregation fold, not a user error.
    #[error("internal error: entry {0} has neither branch nor revision")]
    MissingPin(RepoKey),

    #[error("failed to serialize manifest to TOML: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("failed to serialize manifest to YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

/// Which top-level list the manifest exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// `[[override]]` entries, for the consuming project's own manifest.
    Override,
    /// `[[constraint]]` entries, for a library's manifest.
    Constraint,
}

/// Serialization format of the rendered manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Yaml,
}

/// One serializable manifest record: a repository pinned to a branch or a
/// revision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
}

/// The manifest document. Exactly one of the two lists is populated,
/// matching the requested [`RecordKind`].
#[derive(Debug, Serialize)]
struct DepManifest {
    #[serde(rename = "override", skip_serializing_if = "Vec::is_empty")]
    overrides: Vec<OutputRecord>,
    #[serde(rename = "constraint", skip_serializing_if = "Vec::is_empty")]
    constraints: Vec<OutputRecord>,
}

/// Project the aggregated table into records sorted by repository key.
///
/// # Errors
///
/// Returns [`ManifestError::MissingPin`] if an entry reaches emission with
/// neither side of its pin set; correct aggregation never produces one.
pub fn records(table: &DepTable) -> Result<Vec<OutputRecord>, ManifestError> {
    let mut keys: Vec<&RepoKey> = table.keys().collect();
    keys.sort();

    keys.into_iter()
        .map(|key| {
            let pin = &table[key];
            if let Some(branch) = pin.branch_name() {
                Ok(OutputRecord {
                    name: key.to_string(),
                    branch: Some(branch.to_string()),
                    revision: None,
                })
            } else if let Some(revision) = pin.revision_id() {
                Ok(OutputRecord {
                    name: key.to_string(),
                    branch: None,
                    revision: Some(revision.to_string()),
                })
            } else {
                Err(ManifestError::MissingPin(key.clone()))
            }
        })
        .collect()
}

/// Render the full manifest document, boilerplate comment included.
pub fn render(
    table: &DepTable,
    kind: RecordKind,
    format: Format,
) -> Result<String, ManifestError> {
    let records = records(table)?;
    let manifest = match kind {
        RecordKind::Override => DepManifest {
            overrides: records,
            constraints: Vec::new(),
        },
        RecordKind::Constraint => DepManifest {
            overrides: Vec::new(),
            constraints: records,
        },
    };

    let body = match format {
        Format::Toml => toml::to_string(&manifest)?,
        Format::Yaml => serde_yaml_ng::to_string(&manifest)?,
    };
    Ok(format!("{}\n{}", BOILERPLATE, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::PinState;

    fn table(entries: &[(&str, PinState)]) -> DepTable {
        entries
            .iter()
            .map(|(key, pin)| (RepoKey::new(*key), pin.clone()))
            .collect()
    }

    #[test]
    fn records_are_sorted_by_key() {
        let t = table(&[
            ("k8s.io/klog", PinState::revision("abc")),
            ("github.com/spf13/pflag", PinState::revision("def")),
            ("k8s.io/api", PinState::branch("release-1.12")),
        ]);
        let names: Vec<String> = records(&t).unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec!["github.com/spf13/pflag", "k8s.io/api", "k8s.io/klog"]
        );
    }

    #[test]
    fn branch_is_selected_over_unset_revision() {
        let t = table(&[("k8s.io/api", PinState::branch("release-1.12"))]);
        let recs = records(&t).unwrap();
        assert_eq!(recs[0].branch.as_deref(), Some("release-1.12"));
        assert_eq!(recs[0].revision, None);
    }

    #[test]
    fn toml_output_has_boilerplate_and_override_tables() {
        let t = table(&[
            ("k8s.io/klog", PinState::revision("abc123")),
            ("k8s.io/api", PinState::branch("release-1.12")),
        ]);
        let out = render(&t, RecordKind::Override, Format::Toml).unwrap();

        assert!(out.starts_with(
            "# Overrides below have been generated using godep2dep\n# Do not edit manually\n"
        ));
        assert!(out.contains("[[override]]"));
        assert!(out.contains("name = \"k8s.io/api\""));
        assert!(out.contains("branch = \"release-1.12\""));
        assert!(out.contains("revision = \"abc123\""));
        // Unset halves of a pin never appear.
        assert!(!out.contains("revision = \"\""));
        assert!(!out.contains("constraint"));
    }

    #[test]
    fn constraint_kind_renames_the_list() {
        let t = table(&[("k8s.io/klog", PinState::revision("abc123"))]);
        let out = render(&t, RecordKind::Constraint, Format::Toml).unwrap();
        assert!(out.contains("[[constraint]]"));
        assert!(!out.contains("[[override]]"));
    }

    #[test]
    fn yaml_output_lists_records_in_order() {
        let t = table(&[
            ("k8s.io/klog", PinState::revision("abc123")),
            ("k8s.io/api", PinState::branch("release-1.12")),
        ]);
        let out = render(&t, RecordKind::Override, Format::Yaml).unwrap();

        assert!(out.starts_with("# Overrides below have been generated"));
        assert!(out.contains("override:"));
        let api = out.find("k8s.io/api").unwrap();
        let klog = out.find("k8s.io/klog").unwrap();
        assert!(api < klog);
    }
}
