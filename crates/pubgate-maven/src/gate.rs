//! Publish gate: skip uploading a version the repository already has.
//!
//! The check is a single authenticated GET of the version's POM. Any 2xx
//! response means the version exists and the publish task is skipped; every
//! other status lets the task run. The gate never retries.

use reqwest::Client;

use pubgate_core::manifest::OnNetworkError;
use pubgate_core::publication::Coordinates;
use pubgate_util::errors::PubgateError;

use crate::auth;
use crate::repository::MavenRepository;

/// Whether an HTTP status from the POM check means "already published".
pub fn status_indicates_published(status: u16) -> bool {
    (200..=299).contains(&status)
}

/// Decides whether a publish task for some coordinates should be skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct PublishGate {
    on_error: OnNetworkError,
}

impl PublishGate {
    pub fn new(on_error: OnNetworkError) -> Self {
        Self { on_error }
    }

    /// `true` when the repository already serves the POM for `coords`.
    ///
    /// Transport failures (DNS, refused connection, timeout) are returned as
    /// errors under [`OnNetworkError::Fail`]. Under
    /// [`OnNetworkError::Publish`] they are logged and the task proceeds.
    pub async fn should_skip_publish(
        &self,
        client: &Client,
        coords: &Coordinates,
        repo: &MavenRepository,
    ) -> miette::Result<bool> {
        match check_published(client, coords, repo).await {
            Ok(published) => Ok(published),
            Err(e) if self.on_error == OnNetworkError::Publish => {
                tracing::warn!("existence check for {coords} failed, publishing anyway: {e}");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}

/// Issue the GET for the POM of `coords` and classify the status code.
pub async fn check_published(
    client: &Client,
    coords: &Coordinates,
    repo: &MavenRepository,
) -> miette::Result<bool> {
    let url = repo.pom_url(coords);
    if repo.credentials.bearer_token().is_none() {
        tracing::debug!("no token configured for repository '{}'", repo.name);
    }

    let req = auth::apply_bearer(client.get(&url), repo);
    let resp = req.send().await.map_err(|e| PubgateError::Network {
        message: format!("Existence check for {coords} at {url} failed: {e}"),
    })?;

    let status = resp.status().as_u16();
    let published = status_indicates_published(status);
    tracing::debug!(%coords, status, published, "existence check");
    Ok(published)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range_is_published() {
        for status in [200, 201, 204, 250, 299] {
            assert!(status_indicates_published(status), "{status}");
        }
    }

    #[test]
    fn everything_else_is_not_published() {
        for status in [100, 101, 199, 300, 301, 304, 399, 401, 403, 404, 410, 500, 503, 599] {
            assert!(!status_indicates_published(status), "{status}");
        }
    }
}
