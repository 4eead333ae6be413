//! Publish tasks: one per (publication, repository) pair.

use pubgate_core::manifest::RepositorySection;
use pubgate_core::publication::{capitalize, Publication};
use pubgate_maven::repository::MavenRepository;

use crate::ops_configure::ConfiguredProject;

/// Uploads one publication to one repository, subject to the publish gate.
#[derive(Debug, Clone)]
pub struct PublishTask {
    pub name: String,
    pub project: String,
    pub publication: Publication,
    pub repository: MavenRepository,
}

/// `publishDefaultPublicationToGitHubRepository`
pub fn task_name(publication: &str, repository: &str) -> String {
    format!(
        "publish{}PublicationTo{}Repository",
        capitalize(publication),
        capitalize(repository)
    )
}

/// Build the publish tasks for every publication of every configured project.
///
/// Each project gets its own repository descriptor because credentials are
/// resolved per project.
pub fn publish_tasks(
    projects: &[ConfiguredProject],
    section: &RepositorySection,
) -> miette::Result<Vec<PublishTask>> {
    let mut tasks = Vec::new();
    for project in projects {
        let repository = MavenRepository::from_section(section, project.config.credentials.clone())?;
        for publication in &project.publications {
            tasks.push(PublishTask {
                name: task_name(&publication.name, &repository.name),
                project: project.name.clone(),
                publication: publication.clone(),
                repository: repository.clone(),
            });
        }
    }
    Ok(tasks)
}
