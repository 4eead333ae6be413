//! Operation: run the gated publish tasks.

use reqwest::Client;

use pubgate_core::config::Environment;
use pubgate_core::publication::Coordinates;
use pubgate_core::workspace::Workspace;
use pubgate_maven::gate::PublishGate;
use pubgate_maven::http::build_client;
use pubgate_maven::pom::render_pom;
use pubgate_maven::publish::{publish_files, RetryPolicy, UploadFile};
use pubgate_util::progress::{spinner, status, status_info, status_warn};

use crate::ops_configure::configure_workspace;
use crate::task::{publish_tasks, PublishTask};

/// Options for [`publish`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PublishOptions {
    /// Run the gate and report, but upload nothing.
    pub dry_run: bool,
    pub retry: RetryPolicy,
}

/// What happened to a single task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    /// The version already exists remotely.
    Skipped,
    /// Uploaded `files` files (sidecars included).
    Published { files: usize },
    /// Dry run: would have uploaded `files` primary files (POM included).
    WouldPublish { files: usize },
}

#[derive(Debug, Clone)]
pub struct TaskResult {
    pub task: String,
    pub coordinates: Coordinates,
    pub outcome: TaskOutcome,
}

/// Configure the selected members and run their publish tasks in order.
///
/// The first failing task aborts the run.
pub async fn publish(
    workspace: &Workspace,
    env: &Environment,
    only: Option<&str>,
    options: PublishOptions,
) -> miette::Result<Vec<TaskResult>> {
    let projects = configure_workspace(workspace, env, only)?;
    let tasks = publish_tasks(&projects, &workspace.manifest.repository)?;
    if tasks.is_empty() {
        status_info("Nothing", "no publications to publish");
        return Ok(Vec::new());
    }

    let client = build_client()?;
    let gate = PublishGate::new(workspace.manifest.gate.on_error);

    let mut results = Vec::with_capacity(tasks.len());
    for task in &tasks {
        results.push(run_task(&client, &gate, task, options).await?);
    }
    Ok(results)
}

/// Evaluate the gate for one task and upload unless it says skip.
pub async fn run_task(
    client: &Client,
    gate: &PublishGate,
    task: &PublishTask,
    options: PublishOptions,
) -> miette::Result<TaskResult> {
    let publication = &task.publication;
    let coords = publication.coordinates()?;

    let sp = spinner(&format!("Checking {coords} on {}...", task.repository.name));
    let skip = gate.should_skip_publish(client, &coords, &task.repository).await;
    sp.finish_and_clear();

    let outcome = if skip? {
        status_info("Skipping", &format!("{} ({coords} already published)", task.name));
        TaskOutcome::Skipped
    } else {
        let pom_xml = render_pom(publication, &coords)?;
        let artifacts = publication
            .artifacts()
            .iter()
            .map(|a| UploadFile::from_artifact(a, &coords))
            .collect::<miette::Result<Vec<_>>>()?;

        if options.dry_run {
            let files = artifacts.len() + 1;
            status_info("Would publish", &format!("{coords} ({files} files)"));
            TaskOutcome::WouldPublish { files }
        } else {
            if !task.repository.has_auth() {
                status_warn(
                    "Warning",
                    &format!("no credentials for repository '{}'", task.repository.name),
                );
            }
            status("Publishing", &format!("{coords} to {}", task.repository.name));
            let report = publish_files(
                client,
                &task.repository,
                &coords,
                artifacts,
                pom_xml,
                options.retry,
            )
            .await?;
            TaskOutcome::Published {
                files: report.uploaded.len(),
            }
        }
    };

    Ok(TaskResult {
        task: task.name.clone(),
        coordinates: coords,
        outcome,
    })
}
