// src/presentation.rs
use ccwc_domain::CountResult;
use ccwc_shared_kernel::{CcwcError, ErrorContext, Result};

use crate::options::OutputFormat;

const PROGRAM: &str = "ccwc";

pub fn render(result: &CountResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(result)),
        OutputFormat::Json => serde_json::to_string(result).context("rendering JSON output"),
    }
}

/// Every count right-aligned to the widest count plus one separator space,
/// then the source label.
fn render_table(result: &CountResult) -> String {
    let counts: Vec<String> = result.values().iter().map(usize::to_string).collect();
    let width = counts.iter().map(String::len).max().unwrap_or(0) + 1;

    let mut line: String = counts.iter().map(|c| format!("{c:>width$}")).collect();
    if let Some(label) = &result.source {
        line.push(' ');
        line.push_str(label);
    }
    line
}

/// One-line message for stderr.
pub fn error_message(err: &CcwcError) -> String {
    match err.not_found_path() {
        Some(path) => format!("{PROGRAM}: '{}': No such file or directory", path.display()),
        None => format!("{PROGRAM}: {err}"),
    }
}
