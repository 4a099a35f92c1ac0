use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ConvertError;
use crate::report::report_model::ReportSummary;
use crate::report::writer::{WriteMode, write_csv_file};
use crate::results::transform::json_to_rows;

// ============================================================================
// convert
// ============================================================================

/// What a successful conversion did, for the completion message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertReport {
    pub output: PathBuf,
    pub mode: WriteMode,
    /// Data rows the writer actually emitted
    pub rows_written: usize,
    pub summary: ReportSummary,
}

/// Convert `input` into rows and write them to `output`.
///
/// The input is fully transformed before the output is touched, so a
/// failed conversion leaves the report file as it was.
pub fn cmd_convert(input: &str, output: &str) -> Result<ConvertReport, ConvertError> {
    let input_path = Path::new(input);
    let output_path = Path::new(output);

    info!(input, output, "converting test results");
    let rows = json_to_rows(input_path)?;
    let summary = ReportSummary::from_rows(&rows);
    info!(
        total = summary.total,
        passed = summary.passed,
        failed = summary.failed,
        not_applicable = summary.not_applicable,
        "flattened test results"
    );

    let outcome = write_csv_file(&rows, output_path)?;

    Ok(ConvertReport {
        output: output_path.to_path_buf(),
        mode: outcome.mode,
        rows_written: outcome.rows_written,
        summary,
    })
}

/// Require the `-i` flag.
pub fn require_input(input: Option<&str>) -> Result<&str, ConvertError> {
    input.ok_or_else(|| ConvertError::Argument("Input json file must be specified!".to_string()))
}

/// One-line completion message printed on success.
pub fn format_completion(report: &ConvertReport) -> String {
    let verb = match report.mode {
        WriteMode::Created => "Wrote",
        WriteMode::Appended => "Appended",
    };
    format!(
        "{} {} rows ({} passed, {} failed, {} n/a) to {}",
        verb,
        report.rows_written,
        report.summary.passed,
        report.summary.failed,
        report.summary.not_applicable,
        report.output.display()
    )
}
