//! Source extraction for feature lists.
//! Supports: TXT, MD, CSV, JSON, PDF, DOCX
//!
//! Every format is reduced to newline-separated feature text that the
//! categorizer parser understands.

use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{info, warn};

use crate::categorizer::Priority;
use crate::error::{AppError, AppResult};

/// Header cells that mark the first CSV row as a header
const CSV_HEADERS: &[&str] = &["feature", "features", "name", "title"];

/// Extract feature text from file data based on file extension
pub fn extract_feature_text(file_name: &str, file_data: &[u8]) -> AppResult<String> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    info!("Extracting feature text from: {} (type: {})", file_name, extension);

    match extension.as_str() {
        "txt" => Ok(String::from_utf8(file_data.to_vec())?),
        "md" | "markdown" => Ok(markdown_to_lines(&String::from_utf8(file_data.to_vec())?)),
        "csv" => Ok(csv_first_column(&String::from_utf8(file_data.to_vec())?)),
        "json" => json_to_lines(file_data),
        "pdf" => extract_pdf_text(file_data),
        "docx" => extract_docx_text(file_data),
        _ => Err(AppError::Validation(format!(
            "Unsupported file extension: {}",
            extension
        ))),
    }
}

/// Read a feature source from a file, or stdin when `path` is `None` or `-`.
///
/// Inputs larger than `max_bytes` are rejected before extraction.
pub fn read_source(path: Option<&Path>, max_bytes: u64) -> AppResult<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            let size = fs::metadata(path)?.len();
            if size > max_bytes {
                return Err(AppError::Validation(format!(
                    "{} is {} bytes, limit is {}",
                    path.display(),
                    size,
                    max_bytes
                )));
            }
            let data = fs::read(path)?;
            let file_name = path.to_string_lossy();
            extract_feature_text(&file_name, &data)
        }
        _ => read_limited(std::io::stdin().lock(), max_bytes),
    }
}

/// Read UTF-8 text from a reader, failing if it exceeds `max_bytes`
pub fn read_limited<R: Read>(reader: R, max_bytes: u64) -> AppResult<String> {
    let mut data = Vec::new();
    reader.take(max_bytes.saturating_add(1)).read_to_end(&mut data)?;

    if data.len() as u64 > max_bytes {
        return Err(AppError::Validation(format!(
            "Input exceeds limit of {} bytes",
            max_bytes
        )));
    }

    Ok(String::from_utf8(data)?)
}

// ATX heading: one to six `#` then whitespace or end of line.
static MARKDOWN_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#{1,6}(\s|$)").expect("Invalid regex: markdown heading pattern")
});

/// Drop headings and strip list markers and task boxes
fn markdown_to_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !MARKDOWN_HEADING.is_match(line))
        .map(strip_list_marker)
        .map(strip_task_box)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn strip_list_marker(line: &str) -> &str {
    for marker in ["- ", "* ", "+ "] {
        if let Some(rest) = line.strip_prefix(marker) {
            return rest.trim_start();
        }
    }

    // Ordered list: "1. item" or "1) item"
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let rest = &line[digits..];
        if let Some(rest) = rest.strip_prefix(". ").or_else(|| rest.strip_prefix(") ")) {
            return rest.trim_start();
        }
    }

    line
}

fn strip_task_box(line: &str) -> &str {
    for task_box in ["[ ] ", "[x] ", "[X] "] {
        if let Some(rest) = line.strip_prefix(task_box) {
            return rest.trim_start();
        }
    }
    line
}

/// First cell of a CSV row, honouring a quoted cell with `""` escapes
fn first_csv_field(row: &str) -> String {
    let row = row.trim();
    let Some(quoted) = row.strip_prefix('"') else {
        return row.split(',').next().unwrap_or("").trim().to_string();
    };

    let mut field = String::new();
    let mut chars = quoted.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '"' {
            if chars.peek() == Some(&'"') {
                field.push('"');
                chars.next();
            } else {
                break;
            }
        } else {
            field.push(c);
        }
    }
    field.trim().to_string()
}

fn csv_first_column(text: &str) -> String {
    let mut cells: Vec<String> = text
        .lines()
        .filter(|row| !row.trim().is_empty())
        .map(first_csv_field)
        .collect();

    let is_header = cells
        .first()
        .map(|cell| CSV_HEADERS.contains(&cell.to_lowercase().as_str()))
        .unwrap_or(false);
    if is_header {
        cells.remove(0);
    }

    cells
        .into_iter()
        .filter(|cell| !cell.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonEntry {
    Text(String),
    Item {
        text: String,
        #[serde(default)]
        priority: Option<String>,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonSource {
    List(Vec<JsonEntry>),
    Object { features: Vec<JsonEntry> },
}

/// Join a multi-line entry into one line so it stays one feature
fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render JSON entries as lines, re-attaching priorities as annotations
fn json_to_lines(file_data: &[u8]) -> AppResult<String> {
    let source: JsonSource = serde_json::from_slice(file_data)?;
    let entries = match source {
        JsonSource::List(entries) | JsonSource::Object { features: entries } => entries,
    };

    let lines: Vec<String> = entries
        .into_iter()
        .map(|entry| match entry {
            JsonEntry::Text(text) => single_line(&text),
            JsonEntry::Item { text, priority } => {
                let text = single_line(&text);
                match priority.as_deref().map(str::parse::<Priority>) {
                    Some(Ok(priority)) => format!("{} ({} priority)", text, priority),
                    Some(Err(e)) => {
                        warn!("Ignoring priority on '{}': {}", text, e);
                        text
                    }
                    None => text,
                }
            }
        })
        .collect();

    Ok(lines.join("\n"))
}

/// Extract text from PDF file
fn extract_pdf_text(file_data: &[u8]) -> AppResult<String> {
    info!("Extracting text from PDF...");

    match pdf_extract::extract_text_from_mem(file_data) {
        Ok(text) => {
            let cleaned = clean_extracted_text(&text);
            info!("PDF extraction successful: {} characters", cleaned.len());
            Ok(cleaned)
        }
        Err(e) => {
            warn!("PDF extraction failed: {}", e);
            Err(AppError::Validation(format!(
                "Failed to extract PDF text: {}",
                e
            )))
        }
    }
}

/// Extract text from DOCX file, one paragraph per line
fn extract_docx_text(file_data: &[u8]) -> AppResult<String> {
    info!("Extracting text from DOCX...");

    let docx = docx_rs::read_docx(file_data).map_err(|e| {
        warn!("DOCX extraction failed: {}", e);
        AppError::Validation(format!("Failed to extract DOCX text: {}", e))
    })?;

    let mut paragraphs: Vec<String> = Vec::new();
    for child in docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(para) = child {
            let para_text: String = para
                .children
                .iter()
                .filter_map(|pc| match pc {
                    docx_rs::ParagraphChild::Run(run) => Some(
                        run.children
                            .iter()
                            .filter_map(|rc| match rc {
                                docx_rs::RunChild::Text(t) => Some(t.text.as_str()),
                                _ => None,
                            })
                            .collect::<String>(),
                    ),
                    _ => None,
                })
                .collect();

            if !para_text.trim().is_empty() {
                paragraphs.push(para_text);
            }
        }
    }

    let cleaned = clean_extracted_text(&paragraphs.join("\n"));
    info!("DOCX extraction successful: {} characters", cleaned.len());
    Ok(cleaned)
}

/// Trim lines and drop blank ones
fn clean_extracted_text(text: &str) -> String {
    text.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
