//! Terminal rendering of resolved annotations.
//!
//! Each display mode has its own layout:
//!
//! - `after`: annotated source lines with `→ value` appended
//! - `codelens`: a lens line with the values above each annotated source line
//! - `hover`: one hover card per annotation
//!
//! Only lines carrying at least one annotation are printed.

use std::{
    collections::BTreeMap,
    io::{self, Write},
};

use colored::Colorize;
use unicode_width::UnicodeWidthChar;

use crate::{
    config::DisplayMode,
    core::{LineIndex, Position, ResolvedAnnotation},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Marker placed before an inline value.
pub const ARROW: &str = "\u{2192}"; // →

/// Separator between lens titles sharing a line.
const LENS_SEPARATOR: &str = " | ";

/// Markdown shown for a key when hovering it.
pub fn hover_text(value: &str) -> String {
    format!("**Translation:** {}", value)
}

/// Annotations of one line, in source order.
struct AnnotatedLine<'a, 't> {
    line: usize,
    source: &'t str,
    /// Text between the line start and the first key literal.
    prefix: &'t str,
    items: Vec<(Position, &'a ResolvedAnnotation<'t>)>,
}

fn group_by_line<'a, 't>(
    text: &'t str,
    annotations: &'a [ResolvedAnnotation<'t>],
) -> Vec<AnnotatedLine<'a, 't>> {
    let index = LineIndex::new(text);
    let mut lines: BTreeMap<usize, Vec<(Position, &'a ResolvedAnnotation<'t>)>> = BTreeMap::new();
    for annotation in annotations {
        let position = index.position(annotation.occurrence.start);
        lines.entry(position.line).or_default().push((position, annotation));
    }

    lines
        .into_iter()
        .map(|(line, items)| {
            let source = index.line_text(line).unwrap_or("");
            let line_start = index.offset(line, 1).unwrap_or(0);
            let first_start = items
                .first()
                .map_or(line_start, |(_, a)| a.occurrence.start);
            let prefix = text.get(line_start..first_start).unwrap_or("");
            AnnotatedLine {
                line,
                source,
                prefix,
                items,
            }
        })
        .collect()
}

/// Render the annotations of one document in the given display mode.
pub fn render_document<W: Write>(
    writer: &mut W,
    path: &str,
    text: &str,
    annotations: &[ResolvedAnnotation],
    mode: DisplayMode,
) -> io::Result<()> {
    if annotations.is_empty() {
        return Ok(());
    }

    let lines = group_by_line(text, annotations);
    match mode {
        DisplayMode::After => render_after(writer, path, &lines),
        DisplayMode::Codelens => render_codelens(writer, path, &lines),
        DisplayMode::Hover => render_hover(writer, path, &lines),
    }
}

/// Render into a string, for hosts that do not write to a terminal.
pub fn render_to_string(
    path: &str,
    text: &str,
    annotations: &[ResolvedAnnotation],
    mode: DisplayMode,
) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = render_document(&mut buffer, path, text, annotations, mode);
    String::from_utf8_lossy(&buffer).into_owned()
}

fn line_number_width(lines: &[AnnotatedLine]) -> usize {
    lines.last().map_or(1, |l| l.line.to_string().len())
}

fn render_after<W: Write>(writer: &mut W, path: &str, lines: &[AnnotatedLine]) -> io::Result<()> {
    let width = line_number_width(lines);
    writeln!(writer, "{}", path.bold())?;
    for line in lines {
        let values = line
            .items
            .iter()
            .map(|(_, a)| format!("{} {}", ARROW, a.value))
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(
            writer,
            "{:>width$} {} {}  {}",
            line.line,
            "|".blue(),
            line.source,
            values.dimmed(),
            width = width
        )?;
    }
    Ok(())
}

fn render_codelens<W: Write>(
    writer: &mut W,
    path: &str,
    lines: &[AnnotatedLine],
) -> io::Result<()> {
    let width = line_number_width(lines);
    writeln!(writer, "{}", path.bold())?;
    for line in lines {
        let titles = line
            .items
            .iter()
            .map(|(_, a)| a.value.as_str())
            .collect::<Vec<_>>()
            .join(LENS_SEPARATOR);
        writeln!(
            writer,
            "{:>width$} {} {}{}",
            "",
            "|".blue(),
            lens_indent(line.prefix),
            titles.dimmed(),
            width = width
        )?;
        writeln!(
            writer,
            "{:>width$} {} {}",
            line.line,
            "|".blue(),
            line.source,
            width = width
        )?;
    }
    Ok(())
}

fn render_hover<W: Write>(writer: &mut W, path: &str, lines: &[AnnotatedLine]) -> io::Result<()> {
    for (position, annotation) in lines.iter().flat_map(|l| l.items.iter()) {
        writeln!(
            writer,
            "{}:{}:{} {}",
            path,
            position.line,
            position.column,
            annotation.occurrence.key.bold()
        )?;
        writeln!(writer, "  {}", hover_text(&annotation.value))?;
    }
    Ok(())
}

/// Whitespace as wide as `prefix` on screen. Tabs are kept so the lens lines
/// up under tab-indented code.
fn lens_indent(prefix: &str) -> String {
    prefix
        .chars()
        .map(|c| match c {
            '\t' => "\t".to_string(),
            c => " ".repeat(c.width().unwrap_or(0)),
        })
        .collect()
}

/// Print the closing summary line.
pub fn print_summary(annotation_count: usize, file_count: usize) {
    print_summary_to(annotation_count, file_count, &mut io::stdout().lock());
}

pub fn print_summary_to<W: Write>(annotation_count: usize, file_count: usize, writer: &mut W) {
    let msg = format!(
        "Resolved {} {} in {} {}",
        annotation_count,
        plural(annotation_count, "key", "keys"),
        file_count,
        plural(file_count, "file", "files"),
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
