use anyhow::Result;
use clap::Parser;
use statelint::analysis::analyze_machine;
use statelint::cli::{Cli, Commands, FailLevel, OutputFormat};
use statelint::config::MachineDocument;
use statelint::core::findings::Severity;
use statelint::io::{create_writer, read_file, render_report, write_file, OutputWriter};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            format,
            output,
            machine_version,
        } => handle_analyze(path, format, output, machine_version),
        Commands::Validate { path, fail_on } => handle_validate(path, fail_on),
    }
}

fn load_document(path: &Path) -> Result<MachineDocument> {
    let raw = read_file(path)?;
    Ok(MachineDocument::from_json(&raw)?)
}

fn handle_analyze(
    path: PathBuf,
    format: OutputFormat,
    output: Option<PathBuf>,
    machine_version: Option<u32>,
) -> Result<()> {
    let document = load_document(&path)?;
    let mut settings = document.settings();
    if let Some(version) = machine_version {
        settings.version = version;
    }

    let report = analyze_machine(&document.machine, &settings)?;
    match output {
        Some(path) => {
            let rendered = render_report(&report, format.into())?;
            write_file(&path, &rendered)?;
        }
        None => create_writer(format.into()).write_report(&report)?,
    }
    Ok(())
}

fn handle_validate(path: PathBuf, fail_on: FailLevel) -> Result<()> {
    let document = load_document(&path)?;
    let report = analyze_machine(&document.machine, &document.settings())?;

    let gate: Severity = fail_on.into();
    let failing = report.count_at_or_above(gate);
    if failing > 0 {
        eprintln!(
            "{} finding(s) at or above the gate in {}",
            failing,
            path.display()
        );
        std::process::exit(1);
    }
    println!(
        "OK: {} states analyzed, no gated findings",
        report.states_analyzed
    );
    Ok(())
}
