use clap::Parser;
use json2csv::cli::commands::{cmd_convert, format_completion, require_input};
use json2csv::cli::config::{AppConfig, Cli, load_config, resolve_output_path, with_help_fallback};
use json2csv::error::ConvertError;
use json2csv::trace::logger::init_tracing;

fn main() {
    let cli = Cli::parse_from(with_help_fallback(std::env::args_os()));
    let config = load_config(cli.config.as_deref());
    init_tracing(cli.verbose, config.log.level.as_deref());

    if let Err(e) = run(&cli, &config) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
    println!("Done!");
}

fn run(cli: &Cli, config: &AppConfig) -> Result<(), ConvertError> {
    let input = require_input(cli.input.as_deref())?;
    let output = resolve_output_path(input, cli.output.as_deref(), config);
    let report = cmd_convert(input, &output)?;
    println!("{}", format_completion(&report));
    Ok(())
}
