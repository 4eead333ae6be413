//! Operation: turn workspace members into configured Maven publications.

use pubgate_core::config::{Environment, PublishConfig};
use pubgate_core::project::{Project, ProjectShape};
use pubgate_core::publication::{declare_publications, Publication};
use pubgate_core::workspace::Workspace;

/// A project after publishing has been configured for it.
#[derive(Debug, Clone)]
pub struct ConfiguredProject {
    pub name: String,
    pub shape: ProjectShape,
    pub config: PublishConfig,
    pub publications: Vec<Publication>,
}

/// Configure publishing for one project.
///
/// Applies the publishing conventions, declares publications from the
/// project's shape, evaluates the project, finalizes each publication and
/// copies coordinates and POM fields onto it.
pub fn configure_project(project: &Project, env: &Environment) -> miette::Result<ConfiguredProject> {
    let mut project = project.clone();
    project.apply_publishing_conventions();

    let shape = project.shape();
    let config = PublishConfig::resolve(&project.properties, env);
    let name = project.name.clone();

    let pending = declare_publications(&project)?;
    let evaluated = project.evaluate();

    let mut publications = Vec::with_capacity(pending.len());
    for declared in pending {
        let mut publication = declared.finalize(&evaluated)?;
        publication.apply_pom_defaults(
            config.group.as_deref(),
            config.version.as_deref(),
            &config.pom,
        );
        publications.push(publication);
    }

    tracing::debug!(
        project = %name,
        %shape,
        publications = publications.len(),
        "publishing configured"
    );
    Ok(ConfiguredProject {
        name,
        shape,
        config,
        publications,
    })
}

/// Configure every selected member of the workspace.
pub fn configure_workspace(
    workspace: &Workspace,
    env: &Environment,
    only: Option<&str>,
) -> miette::Result<Vec<ConfiguredProject>> {
    workspace
        .select(only)?
        .into_iter()
        .map(|project| configure_project(project, env))
        .collect()
}
