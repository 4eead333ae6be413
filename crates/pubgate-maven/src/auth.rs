//! Repository authentication.
//!
//! Uploads use HTTP basic auth with the resolved username and password, the
//! way Maven repositories expect. The publish gate sends the token as a
//! bearer credential. Credential values are only exposed here, at the point
//! the header is built.

use reqwest::RequestBuilder;

use crate::repository::MavenRepository;

/// Apply upload authentication to a request if the repository has credentials.
pub fn apply_auth(request: RequestBuilder, repo: &MavenRepository) -> RequestBuilder {
    let creds = &repo.credentials;
    match (&creds.username, &creds.password) {
        (Some(user), Some(pass)) => request.basic_auth(user, Some(pass.expose())),
        (Some(user), None) => request.basic_auth(user, None::<&str>),
        (None, Some(token)) => request.bearer_auth(token.expose()),
        (None, None) => request,
    }
}

/// Apply `Authorization: Bearer <token>` if a token is configured.
pub fn apply_bearer(request: RequestBuilder, repo: &MavenRepository) -> RequestBuilder {
    match repo.credentials.bearer_token() {
        Some(token) => request.bearer_auth(token.expose()),
        None => request,
    }
}
