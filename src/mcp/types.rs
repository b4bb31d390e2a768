use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::{Config, DisplayMode};

// ============================================================
// Parameter Types
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path of the project root (where .keylensrc.json lives)
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupKeyParams {
    /// Absolute path of the project root (where .keylensrc.json lives)
    pub project_root_path: String,
    /// Dotted translation key, e.g. ERROR.NOT_FOUND
    pub key: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateTextParams {
    /// Absolute path of the project root (where .keylensrc.json lives)
    pub project_root_path: String,
    /// Source text to annotate
    pub text: String,
    /// Display mode for the rendered output (default: configured mode)
    pub mode: Option<DisplayMode>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateFileParams {
    /// Absolute path of the project root (where .keylensrc.json lives)
    pub project_root_path: String,
    /// File to annotate, absolute or relative to the project root
    pub file_path: String,
    /// Display mode for the rendered output (default: configured mode)
    pub mode: Option<DisplayMode>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub project_root: String,
    pub config: ConfigValues,
    pub store: StoreStatus,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub translation_file: String,
    pub display_mode: DisplayMode,
    pub strict_quotes: bool,
    pub includes: Vec<String>,
    pub ignores: Vec<String>,
    pub extensions: Vec<String>,
}

impl From<Config> for ConfigValues {
    fn from(c: Config) -> Self {
        Self {
            translation_file: c.translation_file,
            display_mode: c.display_mode,
            strict_quotes: c.strict_quotes,
            includes: c.includes,
            ignores: c.ignores,
            extensions: c.extensions,
        }
    }
}

/// State of the translation table loaded for a project
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoreStatus {
    /// False when the translation file was missing, unreadable or invalid
    pub loaded: bool,
    pub source: Option<String>,
    pub key_count: usize,
}

// ============================================================
// Lookup Types (lookup_key)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    pub key: String,
    pub found: bool,
    pub value: Option<String>,
}

// ============================================================
// Annotation Types (annotate_text, annotate_file)
// ============================================================

/// A single resolved key literal
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationItem {
    pub key: String,
    /// Byte offset of the opening quote
    pub start: usize,
    /// Byte offset just past the closing quote
    pub end: usize,
    /// 1-based line of the opening quote
    pub line: usize,
    /// 1-based column (in characters) of the opening quote
    pub column: usize,
    pub value: String,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateResult {
    pub mode: DisplayMode,
    pub total_count: usize,
    pub items: Vec<AnnotationItem>,
    /// Annotations rendered the way the CLI prints them
    pub rendered: String,
}
