use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::info;

use crate::error::ConvertError;
use crate::report::report_model::ReportRow;

// ============================================================================
// CSV writer — creates or appends to a report file
// ============================================================================

pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Whether a write started a new report or extended an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Created,
    Appended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOutcome {
    pub mode: WriteMode,
    /// Data rows written, header excluded
    pub rows_written: usize,
}

/// Write `rows` to `path`.
///
/// A new file gets the header record first; an existing file is opened for
/// append and only receives data rows. Every call starts with a UTF-8 BOM,
/// appends included.
pub fn write_csv_file(rows: &[ReportRow], path: &Path) -> Result<WriteOutcome, ConvertError> {
    let mode = if path.exists() {
        WriteMode::Appended
    } else {
        WriteMode::Created
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ConvertError::io(path, e))?;
    file.write_all(UTF8_BOM)
        .map_err(|e| ConvertError::io(path, e))?;

    let csv_err = |source: csv::Error| ConvertError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .from_writer(file);

    if mode == WriteMode::Created {
        writer
            .write_record(ReportRow::header().fields())
            .map_err(csv_err)?;
    }
    for row in rows {
        writer.write_record(row.fields()).map_err(csv_err)?;
    }
    writer.flush().map_err(|e| ConvertError::io(path, e))?;

    info!(path = %path.display(), ?mode, rows = rows.len(), "report written");

    Ok(WriteOutcome {
        mode,
        rows_written: rows.len(),
    })
}
