use crate::core::findings::{AnalysisReport, Severity};
use colored::*;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        if report.is_clean() {
            writeln!(
                self.writer,
                "{} ({} states analyzed)",
                "No eventless-transition loops detected".green(),
                report.states_analyzed
            )?;
            return Ok(());
        }

        for finding in &report.findings {
            write!(
                self.writer,
                "{} {} [always:{}]",
                severity_tag(finding.severity),
                finding.state_path.bold(),
                finding.position
            )?;
            if let Some(target) = &finding.target {
                write!(self.writer, " (target: {})", target)?;
            }
            writeln!(self.writer, " {}", finding.message())?;
        }
        writeln!(
            self.writer,
            "\n{} finding(s) across {} state(s)",
            report.findings.len(),
            report.states_analyzed
        )?;
        Ok(())
    }
}

fn severity_tag(severity: Severity) -> ColoredString {
    match severity {
        Severity::Warning => "WARNING".yellow(),
        Severity::Major => "MAJOR".red(),
        Severity::Critical => "CRITICAL".red().bold(),
    }
}

pub fn create_writer(format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(std::io::stdout())),
    }
}

/// Render a report to a string in the requested format.
pub fn render_report(report: &AnalysisReport, format: OutputFormat) -> anyhow::Result<String> {
    let mut buffer = Vec::new();
    match format {
        OutputFormat::Json => JsonWriter::new(&mut buffer).write_report(report)?,
        OutputFormat::Terminal => TerminalWriter::new(&mut buffer).write_report(report)?,
    }
    Ok(String::from_utf8(buffer)?)
}
