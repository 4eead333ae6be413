//! Operation: render publication POMs to disk.

use std::path::{Path, PathBuf};

use pubgate_core::config::Environment;
use pubgate_core::workspace::Workspace;
use pubgate_maven::pom::render_pom;
use pubgate_util::errors::PubgateError;
use pubgate_util::fs::write_creating_dirs;

use crate::ops_configure::configure_workspace;

/// A rendered POM and where it was written.
#[derive(Debug, Clone)]
pub struct GeneratedPom {
    pub project: String,
    pub publication: String,
    pub path: PathBuf,
    pub xml: String,
}

/// Default location of a rendered POM inside a member directory:
/// `build/publications/<publication>/pom-default.xml`.
pub fn default_pom_path(member_dir: &Path, publication: &str) -> PathBuf {
    member_dir
        .join("build")
        .join("publications")
        .join(publication)
        .join("pom-default.xml")
}

/// Render every selected publication's POM.
///
/// With `output_dir` set, POMs are written there as
/// `{artifactId}-{version}.pom`; otherwise to [`default_pom_path`].
pub fn generate_poms(
    workspace: &Workspace,
    env: &Environment,
    only: Option<&str>,
    output_dir: Option<&Path>,
) -> miette::Result<Vec<GeneratedPom>> {
    let projects = configure_workspace(workspace, env, only)?;
    let members = workspace.select(only)?;

    let mut generated = Vec::new();
    for (project, member) in projects.iter().zip(members) {
        for publication in &project.publications {
            let coords = publication.coordinates()?;
            let xml = render_pom(publication, &coords)?;
            let path = match output_dir {
                Some(dir) => dir.join(pubgate_maven::repository::pom_file_name(&coords)),
                None => default_pom_path(&member.dir, &publication.name),
            };
            write_creating_dirs(&path, xml.as_bytes()).map_err(PubgateError::Io)?;
            tracing::debug!("wrote {}", path.display());
            generated.push(GeneratedPom {
                project: project.name.clone(),
                publication: publication.name.clone(),
                path,
                xml,
            });
        }
    }
    Ok(generated)
}
