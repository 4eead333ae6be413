//! Shared HTTP client construction.

use std::time::Duration;

use reqwest::redirect::Policy;
use reqwest::Client;

use pubgate_util::errors::PubgateError;

pub(crate) const MAX_RETRIES: u32 = 3;
pub(crate) const RETRY_DELAY: Duration = Duration::from_secs(2);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Build the reqwest client used for gate checks and uploads.
///
/// Redirects are not followed: the gate classifies the status of the POM
/// URL itself, so a 3xx must not turn into the 2xx of its target.
pub fn build_client() -> miette::Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .redirect(Policy::none())
        .user_agent(concat!("pubgate/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| {
            PubgateError::Network {
                message: format!("Failed to create HTTP client: {e}"),
            }
            .into()
        })
}
