//! Helper functions for MCP server operations.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde::Serialize;

use super::types::{AnnotateResult, AnnotationItem};
use crate::{
    cli::{commands::AnnotationContext, report::render_to_string},
    config::DisplayMode,
    core::{LineIndex, ResolvedAnnotation},
};

/// Serialize a tool result as pretty JSON text content.
pub fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

/// Resolve every key literal of `text` and package the result for a tool response.
pub fn annotate_text(
    ctx: &AnnotationContext,
    label: &str,
    text: &str,
    mode: DisplayMode,
) -> AnnotateResult {
    let annotations: Vec<ResolvedAnnotation> = ctx.annotator().resolve(text).collect();
    let index = LineIndex::new(text);

    let items = annotations
        .iter()
        .map(|a| {
            let position = index.position(a.occurrence.start);
            AnnotationItem {
                key: a.occurrence.key.to_string(),
                start: a.occurrence.start,
                end: a.occurrence.end,
                line: position.line,
                column: position.column,
                value: a.value.clone(),
            }
        })
        .collect::<Vec<_>>();

    AnnotateResult {
        mode,
        total_count: items.len(),
        rendered: render_to_string(label, text, &annotations, mode),
        items,
    }
}
