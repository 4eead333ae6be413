use std::collections::BTreeMap;

use pubgate_core::config::{Credentials, Environment, PomFields, PublishConfig};
use pubgate_core::properties::ProjectProperties;

fn props(pairs: &[(&str, &str)]) -> ProjectProperties {
    ProjectProperties::new().with_layer(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

fn env(pairs: &[(&str, &str)]) -> Environment {
    Environment::from_map(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<BTreeMap<_, _>>(),
    )
}

#[test]
fn test_properties_take_precedence_over_env() {
    let creds = Credentials::resolve(
        &props(&[("gpr.user", "prop-user"), ("gpr.key", "prop-key")]),
        &env(&[("USERNAME", "env-user"), ("TOKEN", "env-token")]),
    );
    assert_eq!(creds.username.as_deref(), Some("prop-user"));
    assert_eq!(creds.password.as_ref().map(|s| s.expose()), Some("prop-key"));
}

#[test]
fn test_env_used_when_properties_absent() {
    let creds = Credentials::resolve(
        &props(&[]),
        &env(&[("USERNAME", "env-user"), ("TOKEN", "env-token")]),
    );
    assert_eq!(creds.username.as_deref(), Some("env-user"));
    assert_eq!(creds.bearer_token().map(|s| s.expose()), Some("env-token"));
}

#[test]
fn test_mixed_sources_resolve_independently() {
    let creds = Credentials::resolve(
        &props(&[("gpr.key", "prop-key")]),
        &env(&[("USERNAME", "env-user"), ("TOKEN", "env-token")]),
    );
    assert_eq!(creds.username.as_deref(), Some("env-user"));
    assert_eq!(creds.password.as_ref().map(|s| s.expose()), Some("prop-key"));
}

#[test]
fn test_missing_credentials_are_none() {
    let creds = Credentials::resolve(&props(&[]), &env(&[]));
    assert!(creds.username.is_none());
    assert!(creds.password.is_none());
    assert!(creds.bearer_token().is_none());
}

#[test]
fn test_credentials_debug_masks_token() {
    let creds = Credentials::resolve(&props(&[("gpr.key", "ghp_supersecret")]), &env(&[]));
    assert!(!format!("{creds:?}").contains("ghp_supersecret"));
}

#[test]
fn test_pom_fields_copied_from_properties() {
    let fields = PomFields::resolve(&props(&[
        ("POM_NAME", "Apollo API"),
        ("POM_DESCRIPTION", "GraphQL client"),
        ("POM_URL", "https://github.com/clebrain/apollo-kotlin"),
        ("POM_SCM_URL", "https://github.com/clebrain/apollo-kotlin"),
        ("POM_SCM_CONNECTION", "scm:git:git://github.com/clebrain/apollo-kotlin.git"),
        ("POM_SCM_DEV_CONNECTION", "scm:git:ssh://git@github.com/clebrain/apollo-kotlin.git"),
        ("POM_LICENCE_NAME", "MIT License"),
        ("POM_DEVELOPER_ID", "clebrain"),
        ("POM_DEVELOPER_NAME", "Clebrain"),
    ]));
    assert_eq!(fields.name.as_deref(), Some("Apollo API"));
    assert_eq!(fields.description.as_deref(), Some("GraphQL client"));
    assert_eq!(fields.licence_name.as_deref(), Some("MIT License"));
    assert_eq!(fields.developer_id.as_deref(), Some("clebrain"));
    assert_eq!(
        fields.scm_developer_connection.as_deref(),
        Some("scm:git:ssh://git@github.com/clebrain/apollo-kotlin.git")
    );
    assert!(fields.packaging.is_none());
}

#[test]
fn test_publish_config_missing_properties_resolve_to_none() {
    let config = PublishConfig::resolve(&props(&[]), &env(&[]));
    assert!(config.group.is_none());
    assert!(config.version.is_none());
    assert_eq!(config.pom, PomFields::default());
}

#[test]
fn test_publish_config_reads_group_and_version() {
    let config = PublishConfig::resolve(
        &props(&[("GROUP", "com.apollographql"), ("VERSION_NAME", "4.0.0")]),
        &env(&[]),
    );
    assert_eq!(config.group.as_deref(), Some("com.apollographql"));
    assert_eq!(config.version.as_deref(), Some("4.0.0"));
}
