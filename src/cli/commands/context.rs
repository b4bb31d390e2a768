use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};
use log::{debug, info};

use crate::{
    cli::args::CommonArgs,
    config::{Config, DisplayMode, load_config},
    core::{Annotator, TranslationStore},
};

/// Configuration and translation table for one CLI run.
///
/// Built once per command: the table is loaded here and every file of the run
/// is annotated against the same store.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--mode codelens`)
/// 2. `.keylensrc.json` config file
/// 3. Built-in defaults
pub struct AnnotationContext {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    pub project_root: PathBuf,
    /// Directory the command was started from; relative CLI paths resolve here.
    pub working_dir: PathBuf,
    pub store: TranslationStore,
}

impl AnnotationContext {
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let working_dir = env::current_dir().context("Failed to get current directory")?;
        Self::with_working_dir(args, working_dir)
    }

    pub fn with_working_dir(args: &CommonArgs, working_dir: PathBuf) -> Result<Self> {
        let loaded = load_config(&working_dir)?;
        if loaded.from_file {
            info!("Using config from {}", loaded.project_root.display());
        } else {
            debug!("No config file found, using defaults");
        }

        let mut config = loaded.config;
        if let Some(path) = &args.translation_file {
            // CLI paths are relative to where the command runs, not the project root.
            config.translation_file = working_dir.join(path).to_string_lossy().into_owned();
        }
        if let Some(mode) = args.mode {
            config.display_mode = mode;
        }
        if args.strict_quotes {
            config.strict_quotes = true;
        }

        let store = TranslationStore::load(config.translation_path(&loaded.project_root).as_deref());

        Ok(Self {
            config,
            from_file: loaded.from_file,
            project_root: loaded.project_root,
            working_dir,
            store,
        })
    }

    pub fn annotator(&self) -> Annotator<'_> {
        Annotator::new(&self.store).with_quote_style(self.config.quote_style())
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.config.display_mode
    }

    /// Resolve a CLI path argument against the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        self.working_dir.join(path)
    }

    /// Path as shown to the user: relative to the working directory when possible.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.working_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned()
    }
}
