use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use clap::ValueEnum;
use glob::Pattern;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::QuoteStyle;

pub const CONFIG_FILE_NAME: &str = ".keylensrc.json";

/// Which presentation receives resolved annotations.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Value shown after the key literal, at the end of its line.
    #[default]
    After,
    /// Value shown when pointing at the key literal.
    Hover,
    /// Value shown as a lens line above the key literal.
    Codelens,
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DisplayMode::After => "after",
            DisplayMode::Hover => "hover",
            DisplayMode::Codelens => "codelens",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Path to the translation JSON, absolute or relative to the project root.
    #[serde(default)]
    pub translation_file: String,
    #[serde(default)]
    pub display_mode: DisplayMode,
    /// Require the closing quote of a key literal to match the opening one.
    #[serde(default)]
    pub strict_quotes: bool,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_ignores() -> Vec<String> {
    ["**/node_modules/**", "**/target/**", "**/.git/**"]
        .map(String::from)
        .to_vec()
}

fn default_extensions() -> Vec<String> {
    [
        "ts", "tsx", "js", "jsx", "mjs", "cjs", "vue", "svelte", "html", "py", "rs", "go", "java",
        "kt", "swift", "dart", "cs", "php", "rb",
    ]
    .map(String::from)
    .to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translation_file: String::new(),
            display_mode: DisplayMode::default(),
            strict_quotes: false,
            includes: Vec::new(),
            ignores: default_ignores(),
            extensions: default_extensions(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob patterns in `ignores` or `includes` are invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Patterns without wildcards are literal directory paths.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        Ok(())
    }

    pub fn quote_style(&self) -> QuoteStyle {
        if self.strict_quotes {
            QuoteStyle::Matched
        } else {
            QuoteStyle::Loose
        }
    }

    /// Absolute path of the translation file, or `None` when none is configured.
    pub fn translation_path(&self, project_root: &Path) -> Option<PathBuf> {
        if self.translation_file.is_empty() {
            return None;
        }
        let path = Path::new(&self.translation_file);
        if path.is_absolute() {
            Some(path.to_path_buf())
        } else {
            Some(project_root.join(path))
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory holding the config file, or the start directory.
    pub project_root: PathBuf,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let project_root = path
                .parent()
                .map_or_else(|| start_dir.to_path_buf(), Path::to_path_buf);
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                project_root,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            project_root: start_dir.to_path_buf(),
        }),
    }
}
