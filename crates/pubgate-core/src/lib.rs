//! Core data types for pubgate.
//!
//! This crate models a multi-module build as pubgate sees it: the workspace
//! and module manifests, layered project properties, the publish
//! configuration resolved from them, the shape of each project, and the
//! Maven publications derived from that shape.
//!
//! This crate is intentionally free of async code and network I/O.

/// File name of the workspace manifest.
pub const WORKSPACE_MANIFEST: &str = "Pubgate.toml";

/// File name of a member module's manifest.
pub const MODULE_MANIFEST: &str = "Module.toml";

/// File name of the per-directory project properties.
pub const PROPERTIES_FILE: &str = "gradle.properties";

pub mod config;
pub mod manifest;
pub mod project;
pub mod properties;
pub mod publication;
pub mod workspace;
