//! Uploading a publication's files to a Maven repository.

use std::path::Path;
use std::time::Duration;

use reqwest::Client;

use pubgate_core::project::Artifact;
use pubgate_core::publication::Coordinates;
use pubgate_util::errors::PubgateError;
use pubgate_util::hash::ChecksumAlgorithm;

use crate::auth;
use crate::http::{MAX_RETRIES, RETRY_DELAY};
use crate::repository::{pom_file_name, MavenRepository};

/// How often, and how patiently, a failed PUT is retried.
///
/// A `max_attempts` of zero still sends the request once.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_RETRIES,
            delay: RETRY_DELAY,
        }
    }
}

/// A file to be placed in the version directory.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub remote_name: String,
    pub data: Vec<u8>,
}

impl UploadFile {
    /// Read a component artifact from disk under its Maven file name.
    pub fn from_artifact(artifact: &Artifact, coords: &Coordinates) -> miette::Result<Self> {
        let data = read_artifact(&artifact.file)?;
        Ok(Self {
            remote_name: artifact.remote_name(coords.artifact_id(), coords.version()),
            data,
        })
    }
}

fn read_artifact(path: &Path) -> miette::Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| {
        PubgateError::Publish {
            message: format!(
                "Cannot read artifact {}: {e} (was the project built?)",
                path.display()
            ),
        }
        .into()
    })
}

/// What an upload did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadReport {
    /// Remote file names uploaded, sidecars included, in order.
    pub uploaded: Vec<String>,
}

/// Upload every artifact, then the POM, each followed by its checksum
/// sidecars.
///
/// The POM is uploaded last; its presence marks the version as published
/// for the publish gate.
pub async fn publish_files(
    client: &Client,
    repo: &MavenRepository,
    coords: &Coordinates,
    artifacts: Vec<UploadFile>,
    pom_xml: String,
    retry: RetryPolicy,
) -> miette::Result<UploadReport> {
    let mut report = UploadReport::default();
    let pom = UploadFile {
        remote_name: pom_file_name(coords),
        data: pom_xml.into_bytes(),
    };

    for file in artifacts.iter().chain(std::iter::once(&pom)) {
        upload_with_checksums(client, repo, coords, file, retry, &mut report).await?;
    }
    tracing::info!(%coords, files = report.uploaded.len(), "publication uploaded");
    Ok(report)
}

async fn upload_with_checksums(
    client: &Client,
    repo: &MavenRepository,
    coords: &Coordinates,
    file: &UploadFile,
    retry: RetryPolicy,
    report: &mut UploadReport,
) -> miette::Result<()> {
    let url = repo.file_url(coords, &file.remote_name);
    put_bytes(client, repo, &url, &file.data, retry).await?;
    report.uploaded.push(file.remote_name.clone());

    for algo in ChecksumAlgorithm::ALL {
        let sidecar = format!("{}.{}", file.remote_name, algo.extension());
        let digest = algo.digest_hex(&file.data);
        put_bytes(client, repo, &format!("{url}.{}", algo.extension()), digest.as_bytes(), retry)
            .await?;
        report.uploaded.push(sidecar);
    }
    Ok(())
}

/// PUT `data` to `url` with upload authentication, retrying 5xx responses,
/// timeouts and connection failures.
pub async fn put_bytes(
    client: &Client,
    repo: &MavenRepository,
    url: &str,
    data: &[u8],
    retry: RetryPolicy,
) -> miette::Result<()> {
    let attempts = retry.max_attempts.max(1);
    let mut last_err = String::new();

    for attempt in 0..attempts {
        if attempt > 0 {
            tokio::time::sleep(retry.delay * attempt).await;
        }

        let req = auth::apply_auth(client.put(url), repo).body(data.to_vec());

        match req.send().await {
            Ok(resp) => {
                let status = resp.status();
                if status.is_success() {
                    tracing::debug!("uploaded {url} ({} bytes)", data.len());
                    return Ok(());
                }
                if status.is_server_error() {
                    last_err = format!("HTTP {status}");
                    tracing::debug!("attempt {} for {url} failed: {last_err}", attempt + 1);
                    continue;
                }
                return Err(PubgateError::Publish {
                    message: format!("HTTP {status} uploading {url}"),
                }
                .into());
            }
            Err(e) if e.is_timeout() || e.is_connect() => {
                last_err = format!("{e}");
                continue;
            }
            Err(e) => {
                return Err(PubgateError::Network {
                    message: format!("Upload to {url} failed: {e}"),
                }
                .into());
            }
        }
    }

    Err(PubgateError::Publish {
        message: format!(
            "Failed after {attempts} attempts for {url}: {last_err}"
        ),
    }
    .into())
}
