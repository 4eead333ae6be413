//! Publish configuration resolved once from project properties and the
//! process environment.
//!
//! Everything downstream (POM population, the publish gate, uploads) takes a
//! [`PublishConfig`] instead of querying properties or env vars on its own.

use std::collections::BTreeMap;

use pubgate_util::secret::Secret;

use crate::properties::ProjectProperties;

/// Property keys read from `gradle.properties` / `-P` overrides.
pub mod keys {
    pub const GPR_USER: &str = "gpr.user";
    pub const GPR_KEY: &str = "gpr.key";
    pub const GROUP: &str = "GROUP";
    pub const VERSION_NAME: &str = "VERSION_NAME";
    pub const POM_NAME: &str = "POM_NAME";
    pub const POM_PACKAGING: &str = "POM_PACKAGING";
    pub const POM_DESCRIPTION: &str = "POM_DESCRIPTION";
    pub const POM_URL: &str = "POM_URL";
    pub const POM_SCM_URL: &str = "POM_SCM_URL";
    pub const POM_SCM_CONNECTION: &str = "POM_SCM_CONNECTION";
    pub const POM_SCM_DEV_CONNECTION: &str = "POM_SCM_DEV_CONNECTION";
    pub const POM_LICENCE_NAME: &str = "POM_LICENCE_NAME";
    pub const POM_DEVELOPER_ID: &str = "POM_DEVELOPER_ID";
    pub const POM_DEVELOPER_NAME: &str = "POM_DEVELOPER_NAME";
}

/// Environment variable consulted when `gpr.user` is not set.
pub const ENV_USERNAME: &str = "USERNAME";

/// Environment variable consulted when `gpr.key` is not set.
pub const ENV_TOKEN: &str = "TOKEN";

/// Snapshot of environment variables.
///
/// Taken once at startup so resolution is deterministic and tests can supply
/// their own values without touching the real process environment.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    /// Capture the current process environment.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self { vars }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }
}

/// Repository credentials: username plus password/token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: Option<String>,
    pub password: Option<Secret>,
}

impl Credentials {
    /// `gpr.user` / `gpr.key` first, then `USERNAME` / `TOKEN`.
    ///
    /// Missing values stay `None`; absence is never an error here.
    pub fn resolve(props: &ProjectProperties, env: &Environment) -> Self {
        let username = props
            .find(keys::GPR_USER)
            .or_else(|| env.get(ENV_USERNAME))
            .map(str::to_string);
        let password = props
            .find(keys::GPR_KEY)
            .or_else(|| env.get(ENV_TOKEN))
            .map(Secret::from);
        Self { username, password }
    }

    /// The token sent as `Authorization: Bearer` by the publish gate.
    pub fn bearer_token(&self) -> Option<&Secret> {
        self.password.as_ref()
    }
}

/// POM fields copied verbatim from project properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PomFields {
    pub name: Option<String>,
    pub packaging: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub scm_url: Option<String>,
    pub scm_connection: Option<String>,
    pub scm_developer_connection: Option<String>,
    pub licence_name: Option<String>,
    pub developer_id: Option<String>,
    pub developer_name: Option<String>,
}

impl PomFields {
    pub fn resolve(props: &ProjectProperties) -> Self {
        Self {
            name: props.find_owned(keys::POM_NAME),
            packaging: props.find_owned(keys::POM_PACKAGING),
            description: props.find_owned(keys::POM_DESCRIPTION),
            url: props.find_owned(keys::POM_URL),
            scm_url: props.find_owned(keys::POM_SCM_URL),
            scm_connection: props.find_owned(keys::POM_SCM_CONNECTION),
            scm_developer_connection: props.find_owned(keys::POM_SCM_DEV_CONNECTION),
            licence_name: props.find_owned(keys::POM_LICENCE_NAME),
            developer_id: props.find_owned(keys::POM_DEVELOPER_ID),
            developer_name: props.find_owned(keys::POM_DEVELOPER_NAME),
        }
    }
}

/// Everything one project needs to configure and publish its publications.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishConfig {
    pub group: Option<String>,
    pub version: Option<String>,
    pub pom: PomFields,
    pub credentials: Credentials,
}

impl PublishConfig {
    pub fn resolve(props: &ProjectProperties, env: &Environment) -> Self {
        let config = Self {
            group: props.find_owned(keys::GROUP),
            version: props.find_owned(keys::VERSION_NAME),
            pom: PomFields::resolve(props),
            credentials: Credentials::resolve(props, env),
        };
        tracing::debug!(
            group = ?config.group,
            version = ?config.version,
            has_username = config.credentials.username.is_some(),
            has_token = config.credentials.password.is_some(),
            "resolved publish configuration"
        );
        config
    }
}
