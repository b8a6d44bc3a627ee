//! cli
//!
//! Command-line interface layer for godep2dep.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments
//! - Wire flags into the load -> aggregate -> render pipeline
//! - Does NOT contain conversion logic itself
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap, resolves the input
//! location, and drives [`crate::source`], [`crate::core`], and
//! [`crate::manifest`] in sequence. The network fetch is the only async
//! step; it runs to completion on a locally built tokio runtime so the
//! rest of the pipeline stays synchronous.

pub mod args;

pub use args::Cli;

use anyhow::Result;

use crate::core::aggregate;
use crate::manifest;
use crate::source;
use crate::ui::output::{self, Verbosity};

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);

    // In case the Godeps.json location is not specified, use a constructed
    // default location based on the Kubernetes branch.
    let location = cli
        .godep
        .clone()
        .unwrap_or_else(|| source::default_location(&cli.kube_branch));
    output::debug(format!("loading {}", location), verbosity);

    let rt = tokio::runtime::Runtime::new()?;
    let godeps = rt.block_on(source::load(&location))?;
    output::print(
        format!("loaded {} dependencies from {}", godeps.deps.len(), location),
        verbosity,
    );

    let seed = aggregate::predeclared_deps(&cli.kube_branch, &cli.client_go_branch);
    let table = aggregate::aggregate(seed, &godeps.deps, verbosity)?;

    let rendered = manifest::render(&table, cli.kind.into(), cli.format.into())?;
    print!("{}", rendered);
    Ok(())
}
