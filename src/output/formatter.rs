use chrono::SecondsFormat;
use serde::Serialize;

use super::timestamps::{DisplayZone, format_date, format_time};
use crate::models::{MatchType, OutputFormat, SearchResult, SourceType};

pub const NO_RESULTS: &str = "No results found.";

const DESCRIPTION_PREVIEW_CHARS: usize = 100;

const UNKNOWN_PROJECT: &str = "Unknown";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Zone for dates and times; `None` uses the system's local time
    pub time_zone: Option<DisplayZone>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonResult<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    source: SourceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    project: Option<&'a str>,
    timestamp: String,
    score: f64,
    match_type: MatchType,
}

/// Render results as text
///
/// An empty result list renders as "No results found." in every format, JSON included.
pub fn format_results(
    results: &[SearchResult<'_>],
    format: OutputFormat,
    options: &FormatOptions,
) -> String {
    if results.is_empty() {
        return NO_RESULTS.to_string();
    }

    match format {
        OutputFormat::Json => format_json(results),
        OutputFormat::Timeline => format_timeline(results, options),
        OutputFormat::Grouped => format_grouped(results, options),
    }
}

fn format_json(results: &[SearchResult<'_>]) -> String {
    let rows: Vec<JsonResult<'_>> = results
        .iter()
        .map(|result| JsonResult {
            title: &result.item.title,
            description: result.item.description.as_deref(),
            source: result.item.source,
            project: result.item.project.as_deref(),
            timestamp: result.item.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            score: result.score,
            match_type: result.match_type,
        })
        .collect();

    // Only strings, numbers, and unit enums: serialization can't fail
    serde_json::to_string_pretty(&rows).expect("search results serialize to JSON")
}

fn format_timeline(results: &[SearchResult<'_>], options: &FormatOptions) -> String {
    let count = results.len();
    let noun = if count == 1 { "result" } else { "results" };
    let mut lines = vec![format!("Found {} {}:", count, noun), String::new()];

    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }

        let item = result.item;
        let mut header = format!(
            "{} {}",
            format_date(&item.timestamp, options.time_zone),
            format_time(&item.timestamp, options.time_zone)
        );
        if let Some(project) = &item.project {
            header.push_str(&format!(" [{}]", project));
        }
        header.push_str(&format!(" ({})", item.source));

        lines.push(header);
        lines.push(format!("  {}", item.title));
        if let Some(description) = &item.description {
            lines.push(format!("  {}", truncate(description, DESCRIPTION_PREVIEW_CHARS)));
        }
    }

    lines.join("\n")
}

fn format_grouped(results: &[SearchResult<'_>], options: &FormatOptions) -> String {
    // Groups keep the order in which their first result appears
    let mut groups: Vec<(&str, Vec<&SearchResult<'_>>)> = Vec::new();
    for result in results {
        let project = result.item.project.as_deref().unwrap_or(UNKNOWN_PROJECT);
        match groups.iter().position(|(name, _)| *name == project) {
            Some(idx) => groups[idx].1.push(result),
            None => groups.push((project, vec![result])),
        }
    }

    let mut sections = Vec::with_capacity(groups.len());
    for (project, members) in groups {
        let mut lines = vec![format!("## {}", project)];
        for result in members {
            let item = result.item;
            lines.push(format!(
                "[{}] ({}) {}",
                format_date(&item.timestamp, options.time_zone),
                item.source,
                item.title
            ));
        }
        sections.push(lines.join("\n"));
    }

    sections.join("\n\n")
}

/// First `max_chars` characters, with "..." appended if anything was cut
fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}
