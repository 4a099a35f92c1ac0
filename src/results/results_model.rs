use serde::Deserialize;

/// Root of a Jest `--json` result document. Only the fields the report
/// needs are modelled; everything else in the file is ignored.
///
/// `testResults` is required: a document without it fails to deserialize
/// and is reported as malformed input.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ResultDocument {
    #[serde(rename = "testResults")]
    pub test_results: Vec<FileResult>,
}

/// Results for a single test file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FileResult {
    /// Absolute path of the test file as reported by the runner
    #[serde(rename = "testFilePath", default)]
    pub test_file_path: Option<String>,

    /// Individual cases, in the order the runner reported them
    #[serde(rename = "testResults", default)]
    pub test_results: Option<Vec<CaseResult>>,
}

/// One test case inside a file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CaseResult {
    /// Enclosing `describe` titles, outermost first
    #[serde(rename = "ancestorTitles", default)]
    pub ancestor_titles: Vec<String>,

    #[serde(default)]
    pub title: Option<String>,

    /// Raw status label (`passed`, `failed`, `pending`, `todo`, ...)
    #[serde(default)]
    pub status: Option<String>,
}

impl CaseResult {
    /// Outermost ancestor title, used as the report's Feature column.
    pub fn feature(&self) -> Option<&str> {
        self.ancestor_titles.first().map(String::as_str)
    }

    pub fn case_status(&self) -> CaseStatus {
        self.status
            .as_deref()
            .map(CaseStatus::from_label)
            .unwrap_or(CaseStatus::Other)
    }
}

/// Outcome of a case as far as the report is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseStatus {
    Passed,
    Failed,
    /// Pending, skipped, todo, disabled or anything unrecognised
    Other,
}

impl CaseStatus {
    pub fn from_label(label: &str) -> Self {
        match label {
            "passed" => CaseStatus::Passed,
            "failed" => CaseStatus::Failed,
            _ => CaseStatus::Other,
        }
    }
}
