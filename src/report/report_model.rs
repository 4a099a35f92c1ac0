use crate::results::results_model::CaseStatus;

// ============================================================================
// Column schema — shared with other report producers, so fixed
// ============================================================================

pub const COLUMNS: [&str; 15] = [
    "Feature",
    "Case Id",
    "Test Case",
    "Pass",
    "Fail",
    "N/A",
    "Measured",
    "Comment",
    "Measurement Name",
    "Value",
    "Unit",
    "Target",
    "Failure",
    "Execution",
    "Suite Name",
];

pub const COLUMN_COUNT: usize = COLUMNS.len();

const FEATURE: usize = 0;
const CASE_ID: usize = 1;
const TEST_CASE: usize = 2;
const PASS: usize = 3;
const FAIL: usize = 4;
const NOT_APPLICABLE: usize = 5;
const EXECUTION: usize = COLUMN_COUNT - 2;
const SUITE_NAME: usize = COLUMN_COUNT - 1;

const MARK: &str = "1";

// ============================================================================
// Report row
// ============================================================================

/// One record of the output table. Always exactly `COLUMN_COUNT` fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    fields: [String; COLUMN_COUNT],
}

impl ReportRow {
    /// The header record.
    pub fn header() -> Self {
        Self {
            fields: COLUMNS.map(str::to_string),
        }
    }

    /// Build a data row for one test case.
    ///
    /// Exactly one of Pass / Fail / N/A is marked, and the trailing
    /// Execution / Suite Name columns are always `auto` / `test`.
    pub fn for_case(feature: &str, case_id: &str, title: &str, status: CaseStatus) -> Self {
        let mut fields: [String; COLUMN_COUNT] = Default::default();
        fields[FEATURE] = feature.to_string();
        fields[CASE_ID] = case_id.to_string();
        fields[TEST_CASE] = title.to_string();

        let status_column = match status {
            CaseStatus::Passed => PASS,
            CaseStatus::Failed => FAIL,
            CaseStatus::Other => NOT_APPLICABLE,
        };
        fields[status_column] = MARK.to_string();

        fields[EXECUTION] = "auto".to_string();
        fields[SUITE_NAME] = "test".to_string();

        Self { fields }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn feature(&self) -> &str {
        &self.fields[FEATURE]
    }

    pub fn case_id(&self) -> &str {
        &self.fields[CASE_ID]
    }

    pub fn test_case(&self) -> &str {
        &self.fields[TEST_CASE]
    }

    /// Status recovered from the Pass / Fail / N/A marks.
    pub fn status(&self) -> CaseStatus {
        if self.fields[PASS] == MARK {
            CaseStatus::Passed
        } else if self.fields[FAIL] == MARK {
            CaseStatus::Failed
        } else {
            CaseStatus::Other
        }
    }
}

// ============================================================================
// Summary — counts for the completion message
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub not_applicable: usize,
}

impl ReportSummary {
    /// Tally a set of data rows (header excluded).
    pub fn from_rows(rows: &[ReportRow]) -> Self {
        let mut summary = Self {
            total: rows.len(),
            ..Self::default()
        };
        for row in rows {
            match row.status() {
                CaseStatus::Passed => summary.passed += 1,
                CaseStatus::Failed => summary.failed += 1,
                CaseStatus::Other => summary.not_applicable += 1,
            }
        }
        summary
    }
}
