use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::{info, warn};
use rayon::prelude::*;

use super::super::{
    args::AnnotateCommand,
    exit_status::ExitStatus,
    report::{print_summary, render_document},
};
use super::context::AnnotationContext;
use crate::core::{
    ResolvedAnnotation,
    file_scanner::{ScanOptions, scan_files},
};

/// Rendered output of one file.
struct FileOutput {
    rendered: Vec<u8>,
    annotation_count: usize,
}

pub fn annotate(cmd: AnnotateCommand) -> Result<ExitStatus> {
    let ctx = AnnotationContext::new(&cmd.common)?;

    let explicit: Vec<PathBuf> = cmd.paths.iter().map(|p| ctx.resolve_path(p)).collect();
    let options = ScanOptions {
        root: &ctx.project_root,
        includes: &ctx.config.includes,
        ignores: &ctx.config.ignores,
        extensions: &ctx.config.extensions,
    };
    let scan = scan_files(&options, &explicit);
    if scan.skipped_count > 0 {
        warn!("Skipped {} unreadable paths", scan.skipped_count);
    }

    if scan.files.is_empty() {
        println!("No files to annotate.");
        return Ok(ExitStatus::Success);
    }

    let outputs: Vec<Option<FileOutput>> = scan
        .files
        .par_iter()
        .map(|path| {
            let is_explicit = explicit.iter().any(|p| p == path);
            annotate_file(&ctx, path, is_explicit)
        })
        .collect::<Result<_>>()?;

    let mut stdout = io::stdout().lock();
    let mut annotation_count = 0;
    let mut file_count = 0;
    for output in outputs.into_iter().flatten() {
        stdout.write_all(&output.rendered)?;
        annotation_count += output.annotation_count;
        file_count += 1;
    }
    drop(stdout);

    info!(
        "Annotated {} files with {} translation keys",
        file_count, annotation_count
    );
    print_summary(annotation_count, file_count);
    Ok(ExitStatus::Success)
}

/// Annotate one file. Files given on the command line must be readable;
/// files found by walking directories are skipped when they are not.
fn annotate_file(
    ctx: &AnnotationContext,
    path: &Path,
    is_explicit: bool,
) -> Result<Option<FileOutput>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if !is_explicit => {
            warn!("Skipping {}: {}", path.display(), e);
            return Ok(None);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read file: {}", path.display()));
        }
    };

    let annotations: Vec<ResolvedAnnotation> = ctx.annotator().resolve(&text).collect();
    let mut rendered = Vec::new();
    render_document(
        &mut rendered,
        &ctx.display_path(path),
        &text,
        &annotations,
        ctx.display_mode(),
    )?;

    Ok(Some(FileOutput {
        rendered,
        annotation_count: annotations.len(),
    }))
}
