//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Flags
//!
//! All flags have defaults, so a bare `godep2dep` run converts the
//! Godeps.json published for the default Kubernetes release branch:
//! - `--kube-branch <name>`: Kubernetes release branch to convert for
//! - `--client-go-branch <name>`: matching kubernetes/client-go branch
//! - `--godep <location>`: where to read Godeps.json from
//! - `--kind`, `--format`: shape of the emitted manifest
//! - `--quiet` / `-q`, `--debug`: verbosity

use clap::{Parser, ValueEnum};

use crate::manifest;

/// Default Kubernetes release branch.
pub const DEFAULT_KUBE_BRANCH: &str = "release-1.12";

/// Default kubernetes/client-go release branch.
pub const DEFAULT_CLIENT_GO_BRANCH: &str = "release-9.0";

/// godep2dep - Convert a Godeps.json lock file into a dep manifest
#[derive(Parser, Debug)]
#[command(name = "godep2dep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Kubernetes version based on their official tag names, e.g. release-1.12
    #[arg(long, default_value = DEFAULT_KUBE_BRANCH)]
    pub kube_branch: String,

    /// The kubernetes/client-go branch to be used, e.g. release-9.0
    #[arg(long, default_value = DEFAULT_CLIENT_GO_BRANCH)]
    pub client_go_branch: String,

    /// Location of the Godeps.json file: "-" for stdin, a local file path,
    /// or a URI. If not specified, a reasonable default is used based on
    /// the Kubernetes branch, e.g.
    /// https://raw.githubusercontent.com/kubernetes/kubernetes/release-1.12/Godeps/Godeps.json
    #[arg(long)]
    pub godep: Option<String>,

    /// Which top-level manifest list to emit
    #[arg(long, value_enum, default_value_t = Kind::Override)]
    pub kind: Kind,

    /// Serialization format of the emitted manifest
    #[arg(long, value_enum, default_value_t = Format::Toml)]
    pub format: Format,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// CLI-facing names for [`manifest::RecordKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    Override,
    Constraint,
}

impl From<Kind> for manifest::RecordKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Override => manifest::RecordKind::Override,
            Kind::Constraint => manifest::RecordKind::Constraint,
        }
    }
}

/// CLI-facing names for [`manifest::Format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Toml,
    Yaml,
}

impl From<Format> for manifest::Format {
    fn from(format: Format) -> Self {
        match format {
            Format::Toml => manifest::Format::Toml,
            Format::Yaml => manifest::Format::Yaml,
        }
    }
}
