use std::path::Path;

use tracing::debug;

use crate::error::ConvertError;
use crate::report::report_model::ReportRow;
use crate::results::results_model::{FileResult, ResultDocument};

/// Length of the extension dropped from a test file name (".js").
const EXTENSION_LEN: usize = 3;

// ============================================================================
// Loading
// ============================================================================

/// Read and parse a result document from disk.
pub fn load_document(path: &Path) -> Result<ResultDocument, ConvertError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?;
    parse_document(&content, &path.display().to_string())
}

/// Parse a result document from JSON text. `origin` names the source in
/// error messages.
pub fn parse_document(content: &str, origin: &str) -> Result<ResultDocument, ConvertError> {
    serde_json::from_str(content).map_err(|source| ConvertError::MalformedInput {
        context: origin.to_string(),
        source,
    })
}

// ============================================================================
// Flattening
// ============================================================================

/// Load a result file and flatten it into report rows (no header).
pub fn json_to_rows(path: &Path) -> Result<Vec<ReportRow>, ConvertError> {
    let document = load_document(path)?;
    if document.test_results.is_empty() {
        return Err(ConvertError::EmptyResults {
            path: path.to_path_buf(),
        });
    }
    build_rows(&document)
}

/// Flatten every case of every file into rows, preserving document order.
///
/// Any malformed case aborts the whole conversion.
pub fn build_rows(document: &ResultDocument) -> Result<Vec<ReportRow>, ConvertError> {
    let mut rows = Vec::new();
    for (file_index, file) in document.test_results.iter().enumerate() {
        rows.extend(file_rows(file, file_index)?);
    }
    Ok(rows)
}

fn file_rows(file: &FileResult, file_index: usize) -> Result<Vec<ReportRow>, ConvertError> {
    let file_path = file
        .test_file_path
        .as_deref()
        .ok_or_else(|| ConvertError::missing("testFilePath", format!("testResults[{}]", file_index)))?;
    let cases = file
        .test_results
        .as_ref()
        .ok_or_else(|| ConvertError::missing("testResults", file_path.to_string()))?;

    let stem = case_stem(file_path);
    debug!(file = file_path, stem = %stem, cases = cases.len(), "flattening file result");

    cases
        .iter()
        .enumerate()
        .map(|(index, case)| -> Result<ReportRow, ConvertError> {
            let context = || format!("{} case #{}", file_path, index);
            let feature = case
                .feature()
                .ok_or_else(|| ConvertError::missing("ancestorTitles", context()))?;
            let title = case
                .title
                .as_deref()
                .ok_or_else(|| ConvertError::missing("title", context()))?;
            Ok(ReportRow::for_case(
                feature,
                &case_id(&stem, index),
                title,
                case.case_status(),
            ))
        })
        .collect()
}

// ============================================================================
// Naming helpers
// ============================================================================

/// File name of `test_file_path` with its 3-character extension dropped.
///
/// Both `/` and `\` count as separators so Windows runner output works too.
/// Names of 3 characters or fewer yield an empty stem.
pub fn case_stem(test_file_path: &str) -> String {
    let file_name = test_file_path
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(test_file_path);
    let keep = file_name.chars().count().saturating_sub(EXTENSION_LEN);
    file_name.chars().take(keep).collect()
}

/// `<stem>-<index>` with the index zero-padded to two digits.
pub fn case_id(stem: &str, index: usize) -> String {
    format!("{}-{:02}", stem, index)
}
