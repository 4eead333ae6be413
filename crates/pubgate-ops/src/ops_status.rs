//! Operation: report which publications already exist remotely.

use pubgate_core::config::Environment;
use pubgate_core::publication::Coordinates;
use pubgate_core::workspace::Workspace;
use pubgate_maven::gate::check_published;
use pubgate_maven::http::build_client;

use crate::ops_configure::configure_workspace;
use crate::task::publish_tasks;

#[derive(Debug, Clone)]
pub struct StatusEntry {
    pub task: String,
    pub coordinates: Coordinates,
    pub published: bool,
}

/// Run only the existence check for every selected publication.
///
/// Network failures always propagate here, whatever the gate policy.
pub async fn status(
    workspace: &Workspace,
    env: &Environment,
    only: Option<&str>,
) -> miette::Result<Vec<StatusEntry>> {
    let projects = configure_workspace(workspace, env, only)?;
    let tasks = publish_tasks(&projects, &workspace.manifest.repository)?;
    let client = build_client()?;

    let mut entries = Vec::with_capacity(tasks.len());
    for task in tasks {
        let coords = task.publication.coordinates()?;
        let published = check_published(&client, &coords, &task.repository).await?;
        entries.push(StatusEntry {
            task: task.name,
            coordinates: coords,
            published,
        });
    }
    Ok(entries)
}
