//! Maven repository abstraction: URL layout and credentials.

use pubgate_core::config::Credentials;
use pubgate_core::manifest::RepositorySection;
use pubgate_core::publication::Coordinates;

/// A configured remote Maven repository with its credentials.
#[derive(Debug, Clone)]
pub struct MavenRepository {
    pub name: String,
    pub url: String,
    pub credentials: Credentials,
}

impl MavenRepository {
    pub fn new(name: &str, url: &str, credentials: Credentials) -> Self {
        Self {
            name: name.to_string(),
            url: url.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    /// Build the repository from the workspace `[repository]` section and
    /// the credentials resolved for one project.
    pub fn from_section(
        section: &RepositorySection,
        credentials: Credentials,
    ) -> miette::Result<Self> {
        Ok(Self::new(&section.name, &section.base_url()?, credentials))
    }

    /// Standard Maven layout path for a given coordinate.
    ///
    /// `com.apollographql:apollo-api:4.0.0` becomes
    /// `com/apollographql/apollo-api/4.0.0`
    pub fn coordinate_path(coords: &Coordinates) -> String {
        format!(
            "{}/{}/{}",
            coords.group_id().replace('.', "/"),
            coords.artifact_id(),
            coords.version()
        )
    }

    /// Full URL to a specific file within the version directory.
    pub fn file_url(&self, coords: &Coordinates, filename: &str) -> String {
        format!("{}/{}/{}", self.url, Self::coordinate_path(coords), filename)
    }

    /// URL to the POM file for a given coordinate.
    pub fn pom_url(&self, coords: &Coordinates) -> String {
        self.file_url(coords, &pom_file_name(coords))
    }

    /// Whether this repository has any credential configured.
    pub fn has_auth(&self) -> bool {
        self.credentials.username.is_some() || self.credentials.password.is_some()
    }
}

/// `{artifactId}-{version}.pom`
pub fn pom_file_name(coords: &Coordinates) -> String {
    format!("{}-{}.pom", coords.artifact_id(), coords.version())
}
