//! A project (workspace member) in its two lifecycle phases.
//!
//! A [`Project`] is what exists while the build is being configured: its
//! name, applied plugins, the extensions those plugins register, and the
//! components available so far. [`Project::evaluate`] moves it into the
//! [`EvaluatedProject`] phase, where components that only exist once the
//! whole project is configured (Android variant components) appear.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::manifest::{ArtifactEntry, ComponentEntry, ModuleManifest};
use crate::properties::ProjectProperties;

/// Plugin ids pubgate understands.
pub mod plugin_ids {
    pub const MAVEN_PUBLISH: &str = "maven-publish";
    pub const KOTLIN_MULTIPLATFORM: &str = "org.jetbrains.kotlin.multiplatform";
    pub const PLUGIN_PUBLISH: &str = "com.gradle.plugin-publish";
    pub const JAVA_GRADLE_PLUGIN: &str = "java-gradle-plugin";
    pub const ANDROID_LIBRARY: &str = "com.android.library";
    pub const ANDROID_APPLICATION: &str = "com.android.application";
    pub const JAVA: &str = "java";
    pub const JAVA_LIBRARY: &str = "java-library";
    pub const KOTLIN_JVM: &str = "org.jetbrains.kotlin.jvm";
}

/// Extension registered by the Android plugins.
pub const ANDROID_EXTENSION: &str = "android";

/// Extension registered by the JVM plugins.
pub const JAVA_EXTENSION: &str = "java";

/// The single Android variant pubgate publishes.
pub const RELEASE_VARIANT: &str = "release";

/// Extensions a plugin registers when applied.
fn extensions_for(plugin: &str) -> &'static [&'static str] {
    use plugin_ids::*;
    match plugin {
        ANDROID_LIBRARY | ANDROID_APPLICATION => &[ANDROID_EXTENSION],
        JAVA | JAVA_LIBRARY | KOTLIN_JVM | JAVA_GRADLE_PLUGIN => &[JAVA_EXTENSION],
        _ => &[],
    }
}

/// How a project's publications get built, decided once per project.
///
/// Variants are ordered by priority: the first condition that holds wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectShape {
    /// Kotlin Multiplatform wires its own publications.
    Composite,
    /// The plugin-portal publishing plugin wires its own publications.
    MarketplacePlugin,
    /// `java-gradle-plugin` wires its own publications.
    PluginAuthoring,
    /// Android library: publish the `release` component after evaluation.
    PlatformLibrary,
    /// JVM library: publish the `java` component.
    GenericLibrary,
    /// Nothing recognised: coordinates-only publication.
    Unrecognized,
}

impl ProjectShape {
    pub fn inspect(project: &Project) -> Self {
        use plugin_ids::*;
        if project.has_plugin(KOTLIN_MULTIPLATFORM) {
            ProjectShape::Composite
        } else if project.has_plugin(PLUGIN_PUBLISH) {
            ProjectShape::MarketplacePlugin
        } else if project.has_plugin(JAVA_GRADLE_PLUGIN) {
            ProjectShape::PluginAuthoring
        } else if project.has_extension(ANDROID_EXTENSION) {
            ProjectShape::PlatformLibrary
        } else if project.has_extension(JAVA_EXTENSION) {
            ProjectShape::GenericLibrary
        } else {
            ProjectShape::Unrecognized
        }
    }

    /// Whether another plugin owns publication wiring for this shape.
    pub fn is_deferred(self) -> bool {
        matches!(
            self,
            ProjectShape::Composite | ProjectShape::MarketplacePlugin | ProjectShape::PluginAuthoring
        )
    }
}

impl fmt::Display for ProjectShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProjectShape::Composite => "multiplatform",
            ProjectShape::MarketplacePlugin => "plugin-portal",
            ProjectShape::PluginAuthoring => "gradle-plugin",
            ProjectShape::PlatformLibrary => "android-library",
            ProjectShape::GenericLibrary => "jvm-library",
            ProjectShape::Unrecognized => "unrecognized",
        };
        f.write_str(s)
    }
}

/// A file belonging to a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub file: PathBuf,
    pub classifier: Option<String>,
    pub extension: String,
}

impl Artifact {
    /// Remote file name: `{artifactId}-{version}[-{classifier}].{ext}`.
    pub fn remote_name(&self, artifact_id: &str, version: &str) -> String {
        match &self.classifier {
            Some(c) => format!("{artifact_id}-{version}-{c}.{}", self.extension),
            None => format!("{artifact_id}-{version}.{}", self.extension),
        }
    }

    fn from_entry(module_dir: &Path, entry: &ArtifactEntry) -> Self {
        let file = module_dir.join(entry.path());
        let inferred_ext = file
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_else(|| "jar".to_string());
        match entry {
            ArtifactEntry::Path(_) => Self {
                file,
                classifier: None,
                extension: inferred_ext,
            },
            ArtifactEntry::Detailed {
                classifier,
                extension,
                ..
            } => Self {
                file,
                classifier: classifier.clone(),
                extension: extension.clone().unwrap_or(inferred_ext),
            },
        }
    }
}

/// A named bundle of artifacts a project produces (`java`, `release`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Component {
    pub name: String,
    pub packaging: Option<String>,
    pub artifacts: Vec<Artifact>,
}

impl Component {
    pub fn from_entry(name: &str, module_dir: &Path, entry: &ComponentEntry) -> Self {
        let artifacts: Vec<Artifact> = entry
            .artifacts
            .iter()
            .map(|a| Artifact::from_entry(module_dir, a))
            .collect();
        let packaging = entry.packaging.clone().or_else(|| {
            artifacts
                .iter()
                .find(|a| a.classifier.is_none())
                .map(|a| a.extension.clone())
        });
        Self {
            name: name.to_string(),
            packaging,
            artifacts,
        }
    }
}

/// A workspace member during configuration.
#[derive(Debug, Clone)]
pub struct Project {
    pub name: String,
    pub dir: PathBuf,
    pub properties: ProjectProperties,
    plugins: BTreeSet<String>,
    extensions: BTreeSet<String>,
    components: BTreeMap<String, Component>,
    publishing_variants: BTreeSet<String>,
}

impl Project {
    pub fn new(name: &str, dir: &Path, properties: ProjectProperties) -> Self {
        Self {
            name: name.to_string(),
            dir: dir.to_path_buf(),
            properties,
            plugins: BTreeSet::new(),
            extensions: BTreeSet::new(),
            components: BTreeMap::new(),
            publishing_variants: BTreeSet::new(),
        }
    }

    /// Build a project from its `Module.toml`, applying the listed plugins
    /// and declaring its components. Artifact paths resolve against `dir`.
    pub fn from_manifest(
        default_name: &str,
        dir: &Path,
        manifest: &ModuleManifest,
        properties: ProjectProperties,
    ) -> Self {
        let name = manifest.module.name.as_deref().unwrap_or(default_name);
        let mut project = Self::new(name, dir, properties);
        for plugin in &manifest.module.plugins {
            project.apply_plugin(plugin);
        }
        for (component_name, entry) in &manifest.components {
            project.add_component(Component::from_entry(component_name, dir, entry));
        }
        project
    }

    /// Apply a plugin by id, registering the extensions it brings.
    pub fn apply_plugin(&mut self, id: &str) {
        if self.plugins.insert(id.to_string()) {
            tracing::trace!(project = %self.name, plugin = id, "applied plugin");
            for ext in extensions_for(id) {
                self.extensions.insert((*ext).to_string());
            }
        }
    }

    pub fn has_plugin(&self, id: &str) -> bool {
        self.plugins.contains(id)
    }

    pub fn has_extension(&self, name: &str) -> bool {
        self.extensions.contains(name)
    }

    pub fn add_component(&mut self, component: Component) {
        self.components.insert(component.name.clone(), component);
    }

    /// Mark an Android variant as published; only registered variants get a
    /// component after evaluation.
    pub fn register_publishing_variant(&mut self, variant: &str) {
        self.publishing_variants.insert(variant.to_string());
    }

    /// Apply `maven-publish` and, for Android libraries, register `release`
    /// as the single publishing variant.
    pub fn apply_publishing_conventions(&mut self) {
        self.apply_plugin(plugin_ids::MAVEN_PUBLISH);
        if self.has_plugin(plugin_ids::ANDROID_LIBRARY) {
            self.register_publishing_variant(RELEASE_VARIANT);
        }
    }

    pub fn shape(&self) -> ProjectShape {
        ProjectShape::inspect(self)
    }

    /// Components available during configuration.
    ///
    /// Android components are variant outputs and do not exist yet.
    pub fn component(&self, name: &str) -> Option<&Component> {
        if self.has_extension(ANDROID_EXTENSION) {
            return None;
        }
        self.components.get(name)
    }

    /// Finish configuration. Android projects expose one component per
    /// registered publishing variant; other projects keep what they had.
    pub fn evaluate(self) -> EvaluatedProject {
        let components = if self.has_extension(ANDROID_EXTENSION) {
            self.components
                .iter()
                .filter(|(name, _)| self.publishing_variants.contains(*name))
                .map(|(name, c)| (name.clone(), c.clone()))
                .collect()
        } else {
            self.components.clone()
        };
        tracing::debug!(
            project = %self.name,
            components = ?components.keys().collect::<Vec<_>>(),
            "project evaluated"
        );
        EvaluatedProject {
            project: self,
            components,
        }
    }
}

/// A project after configuration has finished.
#[derive(Debug, Clone)]
pub struct EvaluatedProject {
    project: Project,
    components: BTreeMap<String, Component>,
}

impl EvaluatedProject {
    pub fn name(&self) -> &str {
        &self.project.name
    }

    pub fn component(&self, name: &str) -> Option<&Component> {
        self.components.get(name)
    }
}
