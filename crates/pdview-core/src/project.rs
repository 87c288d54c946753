//! Project domain types and project file loading.
//!
//! A [`Project`] mirrors a project graph node: a `name` plus a `data` record
//! holding the project root, optional type, optional tags and the named
//! target configurations. Target configurations are opaque JSON values and
//! keep the order in which the document declared them.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Opaque configuration of a single target (passed through verbatim)
pub type TargetConfiguration = Value;

/// Target name → configuration, in document order
pub type Targets = serde_json::Map<String, TargetConfiguration>;

/// Provenance mapping: property key → contributing file paths
pub type SourceMap = HashMap<String, Vec<String>>;

/// A project graph node
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Project {
    pub name: String,

    /// Node kind in the project graph (`app`, `lib`, `e2e`)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,

    pub data: ProjectData,
}

/// Configuration record of a project
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectData {
    pub root: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Targets>,

    /// Remaining fields (`sourceRoot`, `implicitDependencies`, ...)
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Project {
    pub fn new(name: impl Into<String>, data: ProjectData) -> Self {
        Self {
            name: name.into(),
            node_type: None,
            data,
        }
    }

    /// Parse a project document.
    ///
    /// Accepts either a project graph node (`{ "name", "data": { ... } }`) or
    /// a bare project configuration with `name` at the top level. A bare
    /// configuration without `root` gets `default_root`.
    pub fn from_json_str(content: &str, default_root: &str) -> serde_json::Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(value, default_root)
    }

    fn from_value(value: Value, default_root: &str) -> serde_json::Result<Self> {
        let is_node = value.get("data").map(Value::is_object).unwrap_or(false);
        if is_node {
            return serde_json::from_value(value);
        }

        let mut fields = match value {
            Value::Object(fields) => fields,
            _ => {
                return Err(serde::de::Error::custom(
                    "project document must be a JSON object",
                ))
            }
        };

        let name = match fields.remove("name") {
            Some(Value::String(name)) => name,
            Some(_) => return Err(serde::de::Error::custom("`name` must be a string")),
            None => return Err(serde::de::Error::missing_field("name")),
        };
        let node_type = match fields.remove("type") {
            Some(Value::String(kind)) => Some(kind),
            _ => None,
        };
        fields
            .entry("root")
            .or_insert_with(|| Value::String(default_root.to_string()));

        let data: ProjectData = serde_json::from_value(Value::Object(fields))?;
        Ok(Self {
            name,
            node_type,
            data,
        })
    }
}

impl ProjectData {
    /// Target names in document order
    pub fn target_names(&self) -> Vec<String> {
        self.targets
            .as_ref()
            .map(|targets| targets.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn target(&self, name: &str) -> Option<&TargetConfiguration> {
        self.targets.as_ref().and_then(|targets| targets.get(name))
    }

    /// Human-facing project type: first character uppercased, rest unchanged.
    ///
    /// `None` when the project declares no type (or an empty one).
    pub fn display_type(&self) -> Option<String> {
        self.project_type.as_deref().and_then(capitalize_first)
    }
}

/// Uppercase the first character of `s`, leaving the remainder untouched
pub fn capitalize_first(s: &str) -> Option<String> {
    let mut chars = s.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}

/// Load a project document from disk
pub fn load_project(path: &Path) -> Result<Project> {
    if !path.exists() {
        return Err(Error::project_not_found(path));
    }

    let content = std::fs::read_to_string(path)?;
    let default_root = default_root_for(path);

    let project = Project::from_json_str(&content, &default_root)
        .map_err(|e| Error::project_parse(path, e.to_string()))?;

    tracing::debug!(
        "Loaded project '{}' with {} target(s) from {}",
        project.name,
        project.data.targets.as_ref().map(|t| t.len()).unwrap_or(0),
        path.display()
    );

    Ok(project)
}

/// Load a source map document (`{ "key": ["file", ...] }`) from disk
pub fn load_source_map(path: &Path) -> Result<SourceMap> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| Error::source_map_parse(path, e.to_string()))
}

/// Root reported for bare configurations: the directory holding the file
fn default_root_for(path: &Path) -> String {
    path.parent()
        .map(|p| p.display().to_string())
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| ".".to_string())
}
