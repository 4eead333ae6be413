//! Handler for `pubgate status`.

use console::style;
use miette::Result;

use pubgate_core::config::Environment;
use pubgate_core::workspace::Workspace;
use pubgate_ops::ops_status::status;

pub fn exec(workspace: &Workspace, module: Option<&str>) -> Result<()> {
    let env = Environment::from_process();
    let entries = super::block_on(status(workspace, &env, module))??;

    if entries.is_empty() {
        println!("No publications configured.");
        return Ok(());
    }
    for entry in &entries {
        let state = if entry.published {
            style("published").green()
        } else {
            style("pending").yellow()
        };
        println!("{:<10} {}  ({})", state, entry.coordinates, entry.task);
    }
    Ok(())
}
