use crate::checker::tokenizer::Span;
use crate::checker::{Misspelling, Report};
use crate::error::Result;
use colored::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Bytes of surrounding text shown on either side of a misspelled word
const CONTEXT_RADIUS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonError<'a> {
    word: &'a str,
    line: usize,
    column: usize,
    start: usize,
    end: usize,
    context: String,
    suggestions: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    file: &'a str,
    total_errors: usize,
    errors: Vec<JsonError<'a>>,
}

/// 1-based line and column of a byte offset; the column counts characters
pub fn locate(source: &str, offset: usize) -> (usize, usize) {
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = source[line_start..offset].chars().count() + 1;
    (line, column)
}

/// Bounds of the surrounding text shown for a span, kept within its line
fn context_bounds(source: &str, span: Span) -> (usize, usize, usize, usize) {
    let line_start = source[..span.start].rfind('\n').map_or(0, |i| i + 1);
    let line_end = source[span.end..]
        .find('\n')
        .map_or(source.len(), |i| span.end + i);
    let line_end = if source[..line_end].ends_with('\r') && line_end > span.end {
        line_end - 1
    } else {
        line_end
    };

    let mut start = span.start.saturating_sub(CONTEXT_RADIUS).max(line_start);
    while !source.is_char_boundary(start) {
        start += 1;
    }
    let mut end = (span.end + CONTEXT_RADIUS).min(line_end);
    while !source.is_char_boundary(end) {
        end -= 1;
    }

    (line_start, start, end, line_end)
}

/// The text around a span with `...` where it was cut
pub fn context(source: &str, span: Span, colored_output: bool) -> String {
    let (line_start, start, end, line_end) = context_bounds(source, span);
    let word = &source[span.start..span.end];

    let word = if colored_output {
        word.red().bold().to_string()
    } else {
        word.to_string()
    };

    format!(
        "{}{}{}{}{}",
        if start > line_start { "..." } else { "" },
        &source[start..span.start],
        word,
        &source[span.end..end],
        if end < line_end { "..." } else { "" },
    )
}

fn capped_suggestions(misspelling: &Misspelling, max_suggestions: usize) -> Vec<&str> {
    misspelling
        .suggestions
        .iter()
        .take(max_suggestions)
        .map(String::as_str)
        .collect()
}

pub fn render_text(
    name: &str,
    report: &Report,
    colored_output: bool,
    max_suggestions: usize,
) -> String {
    let mut out = String::new();
    if report.is_clean() {
        return out;
    }

    if colored_output {
        out.push_str(&format!("\n{}\n", name.bold().underline()));
    } else {
        out.push_str(&format!("\n{}\n", name));
    }

    for misspelling in &report.misspellings {
        let token = &misspelling.token;
        let (line, column) = locate(&report.source, token.span.start);
        let line_info = format!("{}:{}", line, column);
        let context = context(&report.source, token.span, colored_output);
        let suggestions = capped_suggestions(misspelling, max_suggestions);

        if colored_output {
            out.push_str(&format!(
                "  {} {} {}\n",
                line_info.blue().bold(),
                token.content.red().bold(),
                context
            ));
            let suggestions = suggestions
                .iter()
                .map(|s| s.green().to_string())
                .collect::<Vec<_>>()
                .join(&", ".dimmed().to_string());
            out.push_str(&format!("    {} {}\n", "→".dimmed(), suggestions));
        } else {
            out.push_str(&format!("  {} {} {}\n", line_info, token.content, context));
            out.push_str(&format!("    → {}\n", suggestions.join(", ")));
        }
    }

    out
}

pub fn render_json(name: &str, report: &Report, max_suggestions: usize) -> Result<String> {
    let errors = report
        .misspellings
        .iter()
        .map(|m| {
            let (line, column) = locate(&report.source, m.token.span.start);
            JsonError {
                word: &m.token.content,
                line,
                column,
                start: m.token.span.start,
                end: m.token.span.end,
                context: context(&report.source, m.token.span, false),
                suggestions: capped_suggestions(m, max_suggestions),
            }
        })
        .collect();

    let output = JsonOutput {
        file: name,
        total_errors: report.error_count(),
        errors,
    };

    Ok(serde_json::to_string_pretty(&output)?)
}

pub fn print_errors(
    name: &str,
    report: &Report,
    colored_output: bool,
    format: OutputFormat,
    max_suggestions: usize,
) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_text(name, report, colored_output, max_suggestions)),
        OutputFormat::Json => println!("{}", render_json(name, report, max_suggestions)?),
    }
    Ok(())
}

pub fn print_check_summary(total_errors: usize, file_count: usize, colored: bool) {
    println!();
    if total_errors == 0 {
        if colored {
            println!("{}", "✓ No spelling errors found!".green().bold());
        } else {
            println!("✓ No spelling errors found!");
        }
    } else {
        let error_word = if total_errors == 1 { "error" } else { "errors" };
        let file_word = if file_count == 1 { "file" } else { "files" };
        if colored {
            println!(
                "{} {} {} found in {} {}",
                "✗".red().bold(),
                total_errors.to_string().red().bold(),
                error_word,
                file_count,
                file_word
            );
        } else {
            println!(
                "✗ {} {} found in {} {}",
                total_errors, error_word, file_count, file_word
            );
        }
    }
}
