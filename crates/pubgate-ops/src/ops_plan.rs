//! Operation: describe what `publish` would do, without touching the network.

use serde::Serialize;

use pubgate_core::config::Environment;
use pubgate_core::project::ProjectShape;
use pubgate_core::workspace::Workspace;
use pubgate_util::errors::PubgateError;

use crate::ops_configure::configure_workspace;
use crate::task::task_name;

#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub repository: PlannedRepository,
    pub projects: Vec<PlannedProject>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlannedRepository {
    pub name: String,
    pub url: String,
    pub on_error: pubgate_core::manifest::OnNetworkError,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlannedProject {
    pub name: String,
    pub shape: ProjectShape,
    /// Publication wiring belongs to another plugin.
    pub deferred: bool,
    pub publications: Vec<PlannedPublication>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlannedPublication {
    pub name: String,
    pub task: String,
    /// `None` when `GROUP` or `VERSION_NAME` is missing.
    pub coordinates: Option<String>,
    pub component: Option<String>,
    pub artifacts: Vec<String>,
}

/// Build the plan for the whole workspace.
pub fn plan(workspace: &Workspace, env: &Environment) -> miette::Result<Plan> {
    let section = &workspace.manifest.repository;
    let repository = PlannedRepository {
        name: section.name.clone(),
        url: section.base_url()?,
        on_error: workspace.manifest.gate.on_error,
    };

    let projects = configure_workspace(workspace, env, None)?
        .into_iter()
        .map(|project| PlannedProject {
            deferred: project.shape.is_deferred(),
            publications: project
                .publications
                .iter()
                .map(|publication| {
                    let coords = publication.coordinates().ok();
                    PlannedPublication {
                        name: publication.name.clone(),
                        task: task_name(&publication.name, &section.name),
                        component: publication.component.as_ref().map(|c| c.name.clone()),
                        artifacts: publication
                            .artifacts()
                            .iter()
                            .map(|a| match &coords {
                                Some(c) => a.remote_name(c.artifact_id(), c.version()),
                                None => a.file.display().to_string(),
                            })
                            .collect(),
                        coordinates: coords.map(|c| c.to_string()),
                    }
                })
                .collect(),
            name: project.name,
            shape: project.shape,
        })
        .collect();

    Ok(Plan {
        repository,
        projects,
    })
}

impl Plan {
    pub fn to_json(&self) -> miette::Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            PubgateError::Generic {
                message: format!("Failed to serialize plan: {e}"),
            }
            .into()
        })
    }
}
