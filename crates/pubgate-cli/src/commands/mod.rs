//! Command dispatch and handler modules.

mod env;
mod plan;
mod pom;
mod publish;
mod status;

use std::collections::BTreeMap;
use std::future::Future;

use miette::Result;

use pubgate_core::properties::parse_override;
use pubgate_core::workspace::Workspace;
use pubgate_core::WORKSPACE_MANIFEST;
use pubgate_util::errors::PubgateError;
use pubgate_util::fs::find_ancestor_with;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let workspace = load_workspace(&cli.properties)?;
    match cli.command {
        Command::Publish { module, dry_run } => {
            publish::exec(&workspace, module.as_deref(), dry_run)
        }
        Command::Pom { module, output } => {
            pom::exec(&workspace, module.as_deref(), output.as_deref())
        }
        Command::Status { module } => status::exec(&workspace, module.as_deref()),
        Command::Plan { format } => plan::exec(&workspace, format),
        Command::Env { reveal } => env::exec(&workspace, reveal),
    }
}

/// Find `Pubgate.toml` from the current directory upwards and load the
/// workspace with the `-P` overrides applied.
fn load_workspace(properties: &[String]) -> Result<Workspace> {
    let cwd = std::env::current_dir().map_err(PubgateError::Io)?;
    let root = find_ancestor_with(&cwd, WORKSPACE_MANIFEST).ok_or_else(|| {
        PubgateError::Manifest {
            message: format!(
                "Could not find {WORKSPACE_MANIFEST} in this directory or any parent"
            ),
        }
    })?;

    tracing::debug!("workspace root: {}", root.display());

    let overrides = properties
        .iter()
        .map(String::as_str)
        .map(parse_override)
        .collect::<Result<BTreeMap<_, _>>>()?;
    Workspace::load(&root, &overrides)
}

fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let rt = tokio::runtime::Runtime::new().map_err(|e| PubgateError::Generic {
        message: format!("Failed to start async runtime: {e}"),
    })?;
    Ok(rt.block_on(future))
}
