use std::path::{Path, PathBuf};

/// Two Login cases in one file: one passed, one failed.
pub const LOGIN_JSON: &str = r#"{"testResults":[{"testFilePath":"/a/b/foo.js","testResults":[{"ancestorTitles":["Login"],"title":"succeeds","status":"passed"},{"ancestorTitles":["Login"],"title":"rejects bad pw","status":"failed"}]}]}"#;

/// Three files, five cases, every status flavour.
pub const MULTI_FILE_JSON: &str = r#"{
  "numTotalTests": 5,
  "success": false,
  "testResults": [
    {
      "testFilePath": "/repo/src/__tests__/login.js",
      "status": "failed",
      "testResults": [
        { "ancestorTitles": ["Login", "form"], "title": "renders", "status": "passed", "duration": 12 },
        { "ancestorTitles": ["Login"], "title": "rejects bad pw", "status": "failed" },
        { "ancestorTitles": ["Login"], "title": "remembers me", "status": "pending" }
      ]
    },
    {
      "testFilePath": "/repo/src/__tests__/cart.js",
      "testResults": [
        { "ancestorTitles": ["Cart"], "title": "adds item", "status": "todo" }
      ]
    },
    {
      "testFilePath": "/repo/src/__tests__/search.js",
      "testResults": [
        { "ancestorTitles": ["Search"], "title": "finds results", "status": "passed" }
      ]
    }
  ]
}"#;

pub const HEADER_LINE: &str = "Feature,Case Id,Test Case,Pass,Fail,N/A,Measured,Comment,Measurement Name,Value,Unit,Target,Failure,Execution,Suite Name";

pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Read a report back as records, ignoring the BOM each write prepends.
pub fn read_records(path: &Path) -> Vec<Vec<String>> {
    let content = std::fs::read_to_string(path).unwrap().replace('\u{feff}', "");
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(content.as_bytes());
    reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect()
}

pub fn count_header_records(records: &[Vec<String>]) -> usize {
    records.iter().filter(|r| r[0] == "Feature").count()
}
