use std::fs;

use anyhow::{Context, Result, bail};

use super::super::{args::HoverCommand, exit_status::ExitStatus, report::hover_text};
use super::context::AnnotationContext;
use crate::core::LineIndex;

pub fn hover(cmd: HoverCommand) -> Result<ExitStatus> {
    let ctx = AnnotationContext::new(&cmd.common)?;
    let path = ctx.resolve_path(&cmd.file);
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let index = LineIndex::new(&text);
    let Some(offset) = index.offset(cmd.line, cmd.column) else {
        bail!(
            "Position {}:{} is outside of {}",
            cmd.line,
            cmd.column,
            ctx.display_path(&path)
        );
    };

    match ctx.annotator().hover_at(&text, offset) {
        Some(annotation) => {
            println!("{}", hover_text(&annotation.value));
            Ok(ExitStatus::Success)
        }
        None => {
            eprintln!(
                "No translation at {}:{}:{}",
                ctx.display_path(&path),
                cmd.line,
                cmd.column
            );
            Ok(ExitStatus::Failure)
        }
    }
}
