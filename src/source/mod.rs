//! source
//!
//! Input acquisition and parsing for the Godeps lock file.
//!
//! # Location Resolution
//!
//! A location string is resolved in order:
//! 1. The literal `-` reads standard input
//! 2. A path to an existing local file is read from disk
//! 3. A string that parses as a URL is fetched over HTTP(S); a non-success
//!    status is fatal and the error carries the response body
//! 4. Anything else is an unusable location
//!
//! Fetches are never retried; this is a one-shot batch tool.

use std::io::Read;
use std::path::Path;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;

use crate::core::types::RawDependency;

/// Errors from acquiring or parsing the input document.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("unable to get any content using location {0}: it is not a file or usable URI")]
    Unusable(String),

    #[error("failed to read from location {location}: {source}")]
    Io {
        location: String,
        source: std::io::Error,
    },

    #[error("failed to fetch {location}: {source}")]
    Request {
        location: String,
        source: reqwest::Error,
    },

    #[error("failed to retrieve data from location {location}: {body}")]
    Fetch { location: String, body: String },

    #[error("unable to parse {location}: {source}")]
    Parse {
        location: String,
        source: serde_json::Error,
    },
}

/// The parsed Godeps.json document. Only the dependency list is
/// interesting; other fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Godeps {
    #[serde(rename = "Deps")]
    pub deps: Vec<RawDependency>,
}

/// Load and parse the Godeps document from a location string.
///
/// # Errors
///
/// Any read, fetch, or parse failure is fatal; see [`SourceError`].
pub async fn load(location: &str) -> Result<Godeps, SourceError> {
    let data = fetch_bytes(location).await?;
    parse(location, &data)
}

/// Parse raw bytes into a [`Godeps`] document.
fn parse(location: &str, data: &[u8]) -> Result<Godeps, SourceError> {
    serde_json::from_slice(data).map_err(|source| SourceError::Parse {
        location: location.to_string(),
        source,
    })
}

/// Fetch raw bytes from a location string, per the resolution order in the
/// module docs.
async fn fetch_bytes(location: &str) -> Result<Vec<u8>, SourceError> {
    let io_err = |source| SourceError::Io {
        location: location.to_string(),
        source,
    };

    // "-" refers to the stdin stream.
    if location.trim() == "-" {
        let mut data = Vec::new();
        std::io::stdin().read_to_end(&mut data).map_err(io_err)?;
        return Ok(data);
    }

    if Path::new(location).exists() {
        return std::fs::read(location).map_err(io_err);
    }

    // Url::parse rejects scheme-less strings, so bare paths that don't
    // exist on disk fall through to Unusable rather than being fetched.
    if let Ok(url) = Url::parse(location) {
        let response = reqwest::get(url)
            .await
            .map_err(|source| SourceError::Request {
                location: location.to_string(),
                source,
            })?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| SourceError::Request {
                location: location.to_string(),
                source,
            })?;
        if !status.is_success() {
            return Err(SourceError::Fetch {
                location: location.to_string(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }
        return Ok(body.to_vec());
    }

    Err(SourceError::Unusable(location.to_string()))
}

/// Characters percent-encoded when a string is used as a single URL path
/// segment: everything except unreserved characters and the reserved
/// characters RFC 3986 allows inside a segment (`$&+:=@`).
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b':')
    .remove(b'=')
    .remove(b'@');

/// The default Godeps.json location for a Kubernetes release branch.
pub fn default_location(kube_branch: &str) -> String {
    format!(
        "https://raw.githubusercontent.com/kubernetes/kubernetes/{}/Godeps/Godeps.json",
        utf8_percent_encode(kube_branch, PATH_SEGMENT)
    )
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = r#"{
        "ImportPath": "k8s.io/kubernetes",
        "GoVersion": "go1.10",
        "Deps": [
            {"ImportPath": "k8s.io/klog", "Rev": "abc123"},
            {"ImportPath": "github.com/spf13/pflag", "Rev": "def456", "Comment": "v1.0.1"}
        ]
    }"#;

    #[test]
    fn parses_godeps_document() {
        let g = parse("test", SAMPLE.as_bytes()).unwrap();
        assert_eq!(g.deps.len(), 2);
        assert_eq!(g.deps[0].import_path, "k8s.io/klog");
        assert_eq!(g.deps[1].rev, "def456");
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = parse("test", b"{not json").unwrap_err();
        assert!(matches!(err, SourceError::Parse { .. }));
        assert!(err.to_string().contains("unable to parse test"));
    }

    #[tokio::test]
    async fn loads_from_local_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let g = load(file.path().to_str().unwrap()).await.unwrap();
        assert_eq!(g.deps.len(), 2);
    }

    #[tokio::test]
    async fn nonexistent_non_uri_location_is_unusable() {
        let err = load("no/such/file.json").await.unwrap_err();
        assert!(matches!(err, SourceError::Unusable(_)));
    }

    #[test]
    fn default_location_embeds_the_branch() {
        assert_eq!(
            default_location("release-1.12"),
            "https://raw.githubusercontent.com/kubernetes/kubernetes/release-1.12/Godeps/Godeps.json"
        );
    }

    #[test]
    fn default_location_escapes_the_branch() {
        assert_eq!(
            default_location("weird branch"),
            "https://raw.githubusercontent.com/kubernetes/kubernetes/weird%20branch/Godeps/Godeps.json"
        );
        assert_eq!(
            default_location("branch/slash"),
            "https://raw.githubusercontent.com/kubernetes/kubernetes/branch%2Fslash/Godeps/Godeps.json"
        );
    }

    #[test]
    fn default_location_keeps_segment_safe_reserved_characters() {
        // `+` and friends are valid inside a path segment and stay literal.
        assert_eq!(
            default_location("release+hotfix"),
            "https://raw.githubusercontent.com/kubernetes/kubernetes/release+hotfix/Godeps/Godeps.json"
        );
        assert_eq!(
            default_location("v1:x=y@z"),
            "https://raw.githubusercontent.com/kubernetes/kubernetes/v1:x=y@z/Godeps/Godeps.json"
        );
    }
}
