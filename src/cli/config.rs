use std::ffi::OsString;

use clap::Parser;
use serde::Deserialize;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "json2csv",
    version,
    about = "Convert a Jest result json into a CSV test report",
    override_usage = "json2csv -i test-results.json [-o test-results.csv]"
)]
pub struct Cli {
    /// Input test results json path
    #[arg(short, long)]
    pub input: Option<String>,

    /// The output csv path parsed from input json (optional)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to config file (default: json2csv.yaml in current dir)
    #[arg(long)]
    pub config: Option<String>,
}

/// Append `--help` when the program was started with no arguments, so a
/// bare invocation prints usage and exits successfully.
pub fn with_help_fallback<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() <= 1 {
        if args.is_empty() {
            args.push(OsString::from("json2csv"));
        }
        args.push(OsString::from("--help"));
    }
    args
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

pub const DEFAULT_CONFIG_PATH: &str = "json2csv.yaml";

/// Optional YAML config file: `json2csv.yaml`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Report path used when `-o` is not given
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogConfig {
    /// Filter directive used when neither `-v` nor `RUST_LOG` is set
    pub level: Option<String>,
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
///
/// Runs before the log subscriber exists, so problems go straight to stderr.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_PATH);
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
            eprintln!("Warning: ignoring malformed config file '{}': {}", config_path, e);
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Output path resolution: CLI > config > derived from input
// ============================================================================

/// Derive a report path by replacing the first `json` in the input path
/// with `csv`. This is a plain substring replace, not an extension rename.
pub fn derive_output_path(input: &str) -> String {
    input.replacen("json", "csv", 1)
}

pub fn resolve_output_path(input: &str, cli_output: Option<&str>, config: &AppConfig) -> String {
    cli_output
        .or(config.output.path.as_deref())
        .map(str::to_string)
        .unwrap_or_else(|| derive_output_path(input))
}
