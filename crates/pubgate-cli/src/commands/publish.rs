//! Handler for `pubgate publish`.

use miette::Result;

use pubgate_core::config::Environment;
use pubgate_core::workspace::Workspace;
use pubgate_ops::ops_publish::{publish, PublishOptions, TaskOutcome};
use pubgate_util::progress::status;

pub fn exec(workspace: &Workspace, module: Option<&str>, dry_run: bool) -> Result<()> {
    let env = Environment::from_process();
    let options = PublishOptions {
        dry_run,
        ..PublishOptions::default()
    };

    let results = super::block_on(publish(workspace, &env, module, options))??;

    let published = results
        .iter()
        .filter(|r| matches!(r.outcome, TaskOutcome::Published { .. }))
        .count();
    let skipped = results
        .iter()
        .filter(|r| r.outcome == TaskOutcome::Skipped)
        .count();

    if !results.is_empty() {
        let verb = if dry_run { "Checked" } else { "Finished" };
        status(
            verb,
            &format!(
                "{} task(s): {published} published, {skipped} already up to date",
                results.len()
            ),
        );
    }
    Ok(())
}
