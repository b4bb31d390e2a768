use std::{
    borrow::Cow,
    fs, io,
    path::{Path, PathBuf},
};

use log::{error, info};
use serde_json::Value;
use thiserror::Error;

use super::table::{Lookup, TranslationTable};

/// Why a translation file could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Translation file path is not defined in settings.")]
    ConfigMissing,
    #[error("Translation file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Failed to read translation file {}: {source}", .path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse translation file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Translation table loaded once per session and shared read-only by every scan.
#[derive(Debug, Clone, Default)]
pub struct TranslationStore {
    table: TranslationTable,
    source: Option<PathBuf>,
}

impl TranslationStore {
    pub fn new(table: TranslationTable) -> Self {
        Self {
            table,
            source: None,
        }
    }

    /// Load the translation file at `path`.
    ///
    /// Never fails: any problem is logged and the store comes back empty, so
    /// every lookup is a miss.
    pub fn load(path: Option<&Path>) -> Self {
        match Self::try_load(path) {
            Ok(store) => store,
            Err(err) => {
                error!("{}", err);
                Self::default()
            }
        }
    }

    /// Load the translation file at `path`, reporting why it failed.
    pub fn try_load(path: Option<&Path>) -> Result<Self, LoadError> {
        let path = match path {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => return Err(LoadError::ConfigMissing),
        };

        if !path.is_file() {
            return Err(LoadError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|source| LoadError::FileUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let value: Value = serde_json::from_str(&content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self {
            table: TranslationTable::from_value(value),
            source: Some(path.to_path_buf()),
        };
        info!(
            "Loaded translations from: {} ({} keys)",
            path.display(),
            store.len()
        );
        Ok(store)
    }

    /// Build a store from an in-memory JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(content)?;
        Ok(Self::new(TranslationTable::from_value(value)))
    }

    /// Path the table was loaded from, if it came from a file.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    /// Number of string values in the table.
    pub fn len(&self) -> usize {
        self.table.leaf_count()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Walk `key` and return the raw lookup variant.
    pub fn resolve_path(&self, key: &str) -> Lookup<'_> {
        self.table.lookup(key)
    }

    /// Resolve `key` to its display text. `None` means there is nothing to show.
    pub fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        self.resolve_path(key).display_text()
    }
}
