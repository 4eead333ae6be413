//! Maven publications and how they are derived from a project's shape.
//!
//! Construction is two-phase. [`declare_publications`] runs during
//! configuration and returns [`PendingPublication`]s; each one is turned into
//! a [`Publication`] by [`PendingPublication::finalize`] once the project has
//! been evaluated. `finalize` consumes the pending value, so it runs exactly
//! once per publication.

use std::fmt;

use serde::Serialize;

use pubgate_util::errors::PubgateError;

use crate::config::{keys, PomFields};
use crate::project::{
    Artifact, Component, EvaluatedProject, Project, ProjectShape, JAVA_EXTENSION,
    RELEASE_VARIANT,
};

/// Name of the publication pubgate creates.
pub const DEFAULT_PUBLICATION: &str = "default";

/// Fully-populated Maven coordinates. Every part is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Coordinates {
    group_id: String,
    artifact_id: String,
    version: String,
}

impl Coordinates {
    pub fn new(group_id: &str, artifact_id: &str, version: &str) -> miette::Result<Self> {
        for (label, value) in [
            ("groupId", group_id),
            ("artifactId", artifact_id),
            ("version", version),
        ] {
            if value.trim().is_empty() {
                return Err(PubgateError::Config {
                    message: format!("Maven {label} must not be empty"),
                }
                .into());
            }
        }
        Ok(Self {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            version: version.to_string(),
        })
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// `<scm>` block of a POM.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PomScm {
    pub url: Option<String>,
    pub connection: Option<String>,
    pub developer_connection: Option<String>,
}

/// `<license>` entry of a POM.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PomLicense {
    pub name: Option<String>,
}

/// `<developer>` entry of a POM.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PomDeveloper {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// Descriptive metadata rendered into the publication's POM.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PomDocument {
    pub name: Option<String>,
    pub packaging: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub scm: PomScm,
    pub licenses: Vec<PomLicense>,
    pub developers: Vec<PomDeveloper>,
}

/// Where a publication's artifacts come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicationSource {
    /// No artifacts; something else must attach them.
    Empty,
    /// A component that already existed during configuration.
    Component(Component),
    /// A component looked up only after the project is evaluated.
    AfterEvaluate(String),
}

/// A publication declared during configuration, not yet usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingPublication {
    pub name: String,
    pub artifact_id: String,
    pub source: PublicationSource,
}

impl PendingPublication {
    /// Resolve deferred inputs against the evaluated project.
    pub fn finalize(self, evaluated: &EvaluatedProject) -> miette::Result<Publication> {
        let component = match self.source {
            PublicationSource::Empty => None,
            PublicationSource::Component(c) => Some(c),
            PublicationSource::AfterEvaluate(name) => Some(
                evaluated
                    .component(&name)
                    .cloned()
                    .ok_or_else(|| missing_component(evaluated.name(), &name))?,
            ),
        };
        let pom = PomDocument {
            packaging: component.as_ref().and_then(|c| c.packaging.clone()),
            ..PomDocument::default()
        };
        Ok(Publication {
            name: self.name,
            group_id: None,
            artifact_id: self.artifact_id,
            version: None,
            component,
            pom,
        })
    }
}

fn missing_component(project: &str, component: &str) -> PubgateError {
    PubgateError::Config {
        message: format!(
            "Project '{project}' has no '{component}' component; declare [components.{component}] in its Module.toml"
        ),
    }
}

/// Declare the publications for `project` according to its shape.
///
/// Returns an empty list for shapes whose plugins own publication wiring.
/// Android libraries get a publication whose component is resolved after
/// evaluation; JVM libraries resolve theirs immediately.
pub fn declare_publications(project: &Project) -> miette::Result<Vec<PendingPublication>> {
    let shape = project.shape();
    let source = match shape {
        ProjectShape::Composite | ProjectShape::MarketplacePlugin | ProjectShape::PluginAuthoring => {
            tracing::debug!(project = %project.name, %shape, "publication wiring deferred to plugin");
            return Ok(Vec::new());
        }
        ProjectShape::PlatformLibrary => {
            PublicationSource::AfterEvaluate(RELEASE_VARIANT.to_string())
        }
        ProjectShape::GenericLibrary => PublicationSource::Component(
            project
                .component(JAVA_EXTENSION)
                .cloned()
                .ok_or_else(|| missing_component(&project.name, JAVA_EXTENSION))?,
        ),
        ProjectShape::Unrecognized => PublicationSource::Empty,
    };
    tracing::debug!(project = %project.name, %shape, "declaring default publication");
    Ok(vec![PendingPublication {
        name: DEFAULT_PUBLICATION.to_string(),
        artifact_id: project.name.clone(),
        source,
    }])
}

/// A Maven publication ready to be rendered and uploaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Publication {
    pub name: String,
    pub group_id: Option<String>,
    pub artifact_id: String,
    pub version: Option<String>,
    pub component: Option<Component>,
    pub pom: PomDocument,
}

impl Publication {
    /// Copy group, version and the POM fields onto this publication.
    ///
    /// `packaging` is only overwritten when the property is set, so a
    /// packaging established by the component survives.
    pub fn apply_pom_defaults(&mut self, group: Option<&str>, version: Option<&str>, fields: &PomFields) {
        self.group_id = group.map(str::to_string);
        self.version = version.map(str::to_string);

        let pom = &mut self.pom;
        pom.name = fields.name.clone();
        if let Some(packaging) = &fields.packaging {
            pom.packaging = Some(packaging.clone());
        }
        pom.description = fields.description.clone();
        pom.url = fields.url.clone();
        pom.scm = PomScm {
            url: fields.scm_url.clone(),
            connection: fields.scm_connection.clone(),
            developer_connection: fields.scm_developer_connection.clone(),
        };
        pom.licenses = vec![PomLicense {
            name: fields.licence_name.clone(),
        }];
        pom.developers = vec![PomDeveloper {
            id: fields.developer_id.clone(),
            name: fields.developer_name.clone(),
        }];
    }

    /// Validated coordinates, or a configuration error naming the missing
    /// property.
    pub fn coordinates(&self) -> miette::Result<Coordinates> {
        let group = self.group_id.as_deref().ok_or_else(|| missing_property(keys::GROUP))?;
        let version = self
            .version
            .as_deref()
            .ok_or_else(|| missing_property(keys::VERSION_NAME))?;
        Coordinates::new(group, &self.artifact_id, version)
    }

    pub fn artifacts(&self) -> &[Artifact] {
        self.component
            .as_ref()
            .map(|c| c.artifacts.as_slice())
            .unwrap_or(&[])
    }

    /// `Default` for the `default` publication, as used in task names.
    pub fn capitalized_name(&self) -> String {
        capitalize(&self.name)
    }
}

fn missing_property(key: &str) -> PubgateError {
    PubgateError::Config {
        message: format!("{key} is not set; cannot build Maven coordinates"),
    }
}

/// Uppercase the first character, as used in task names.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
