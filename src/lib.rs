//! Convert a Jest `--json` result file into a fixed-schema CSV test report.
//!
//! The pipeline is two plain functions joined by a `Vec<ReportRow>`:
//! [`results::transform::json_to_rows`] flattens the document, and
//! [`report::writer::write_csv_file`] creates or appends to the report.

pub mod cli;
pub mod error;
pub mod report;
pub mod results;
pub mod trace;
