use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use pubgate_util::errors::PubgateError;
use pubgate_util::fs::dir_name;

use crate::manifest::{ModuleManifest, WorkspaceManifest};
use crate::project::Project;
use crate::properties::{load_properties_file, ProjectProperties};
use crate::{MODULE_MANIFEST, PROPERTIES_FILE, WORKSPACE_MANIFEST};

/// A pubgate workspace: the root manifest plus its member projects.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root_dir: PathBuf,
    pub manifest: WorkspaceManifest,
    pub members: Vec<Project>,
}

impl Workspace {
    /// Load `Pubgate.toml` in `root_dir` and every listed member.
    ///
    /// Each member sees the root `gradle.properties`, shadowed by its own
    /// `gradle.properties`, shadowed by `overrides`.
    pub fn load(root_dir: &Path, overrides: &BTreeMap<String, String>) -> miette::Result<Self> {
        let manifest = WorkspaceManifest::from_path(&root_dir.join(WORKSPACE_MANIFEST))?;
        let root_props = load_properties_file(&root_dir.join(PROPERTIES_FILE))?;

        let mut members = Vec::with_capacity(manifest.workspace.members.len());
        for member in &manifest.workspace.members {
            let dir = root_dir.join(member);
            if !dir.is_dir() {
                return Err(PubgateError::Manifest {
                    message: format!("Workspace member '{member}' is not a directory"),
                }
                .into());
            }
            let module = ModuleManifest::from_path_or_default(&dir.join(MODULE_MANIFEST))?;
            let properties = ProjectProperties::new()
                .with_layer(root_props.clone())
                .with_layer(load_properties_file(&dir.join(PROPERTIES_FILE))?)
                .with_layer(overrides.clone());
            let default_name = dir_name(&dir).unwrap_or_else(|| member.clone());
            members.push(Project::from_manifest(&default_name, &dir, &module, properties));
        }

        tracing::debug!(
            root = %root_dir.display(),
            members = members.len(),
            "workspace loaded"
        );
        Ok(Self {
            root_dir: root_dir.to_path_buf(),
            manifest,
            members,
        })
    }

    /// Members selected by name, or all members when `only` is `None`.
    pub fn select(&self, only: Option<&str>) -> miette::Result<Vec<&Project>> {
        match only {
            None => Ok(self.members.iter().collect()),
            Some(name) => self
                .members
                .iter()
                .find(|p| p.name == name)
                .map(|p| vec![p])
                .ok_or_else(|| {
                    PubgateError::Manifest {
                        message: format!("No workspace member named '{name}'"),
                    }
                    .into()
                }),
        }
    }
}
