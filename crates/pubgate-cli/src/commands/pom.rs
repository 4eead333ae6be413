//! Handler for `pubgate pom`.

use std::path::Path;

use miette::Result;

use pubgate_core::config::Environment;
use pubgate_core::workspace::Workspace;
use pubgate_ops::ops_pom::generate_poms;
use pubgate_util::progress::{status, status_info};

pub fn exec(workspace: &Workspace, module: Option<&str>, output: Option<&Path>) -> Result<()> {
    let env = Environment::from_process();
    let generated = generate_poms(workspace, &env, module, output)?;

    if generated.is_empty() {
        status_info("Nothing", "no publications to render");
        return Ok(());
    }
    for pom in &generated {
        status(
            "Generated",
            &format!("{} ({}) -> {}", pom.project, pom.publication, pom.path.display()),
        );
    }
    Ok(())
}
