use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use pubgate_util::errors::PubgateError;

/// Host of GitHub Packages' Maven registry.
pub const GITHUB_PACKAGES_URL: &str = "https://maven.pkg.github.com";

/// The parsed representation of a `Pubgate.toml` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceManifest {
    #[serde(default)]
    pub workspace: WorkspaceSection,

    pub repository: RepositorySection,

    #[serde(default)]
    pub gate: GateSection,
}

/// Member list from the `[workspace]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkspaceSection {
    #[serde(default)]
    pub members: Vec<String>,
}

/// The remote Maven repository publications go to, from `[repository]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySection {
    #[serde(default = "default_repository_name")]
    pub name: String,
    /// Full base URL of the repository.
    #[serde(default)]
    pub url: Option<String>,
    /// `owner/repo` shorthand for GitHub Packages.
    #[serde(default)]
    pub github: Option<String>,
}

fn default_repository_name() -> String {
    "GitHub".to_string()
}

impl RepositorySection {
    /// Base URL without a trailing slash. `url` wins over `github`.
    pub fn base_url(&self) -> miette::Result<String> {
        match (&self.url, &self.github) {
            (Some(url), _) => Ok(url.trim_end_matches('/').to_string()),
            (None, Some(slug)) => Ok(format!(
                "{GITHUB_PACKAGES_URL}/{}",
                slug.trim_matches('/')
            )),
            (None, None) => Err(PubgateError::Manifest {
                message: "[repository] needs either `url` or `github = \"owner/repo\"`"
                    .to_string(),
            }
            .into()),
        }
    }
}

/// Publish gate behaviour from `[gate]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GateSection {
    #[serde(default, rename = "on-error")]
    pub on_error: OnNetworkError,
}

/// What the publish gate does when the existence check cannot reach the
/// repository.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OnNetworkError {
    /// Abort the publish task with the network error.
    #[default]
    Fail,
    /// Treat the artifact as not yet published and let the upload run.
    Publish,
}

/// The parsed representation of a member's `Module.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModuleManifest {
    #[serde(default)]
    pub module: ModuleSection,

    #[serde(default)]
    pub components: BTreeMap<String, ComponentEntry>,
}

/// Identity and applied plugins from `[module]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModuleSection {
    /// Project name; defaults to the member directory name.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub plugins: Vec<String>,
}

/// A software component (`[components.<name>]`) a module produces.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComponentEntry {
    #[serde(default)]
    pub packaging: Option<String>,
    #[serde(default)]
    pub artifacts: Vec<ArtifactEntry>,
}

/// An artifact file, either a bare path or a detailed specification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArtifactEntry {
    Path(String),
    Detailed {
        path: String,
        #[serde(default)]
        classifier: Option<String>,
        #[serde(default)]
        extension: Option<String>,
    },
}

impl ArtifactEntry {
    pub fn path(&self) -> &str {
        match self {
            ArtifactEntry::Path(p) => p,
            ArtifactEntry::Detailed { path, .. } => path,
        }
    }
}

impl WorkspaceManifest {
    /// Load and parse a `Pubgate.toml` file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = read_manifest(path)?;
        Self::parse_toml(&content)
    }

    /// Parse a `Pubgate.toml` from a string.
    pub fn parse_toml(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            PubgateError::Manifest {
                message: format!("Failed to parse Pubgate.toml: {e}"),
            }
            .into()
        })
    }
}

impl ModuleManifest {
    /// Load a `Module.toml`, or an empty manifest when the file is absent.
    ///
    /// A member without a manifest is still a project: one with no plugins
    /// and no components.
    pub fn from_path_or_default(path: &Path) -> miette::Result<Self> {
        if !path.is_file() {
            tracing::debug!("no module manifest at {}", path.display());
            return Ok(Self::default());
        }
        let content = read_manifest(path)?;
        Self::parse_toml(&content)
    }

    /// Parse a `Module.toml` from a string.
    pub fn parse_toml(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            PubgateError::Manifest {
                message: format!("Failed to parse Module.toml: {e}"),
            }
            .into()
        })
    }
}

fn read_manifest(path: &Path) -> miette::Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        PubgateError::Manifest {
            message: format!("Failed to read {}: {e}", path.display()),
        }
        .into()
    })
}
