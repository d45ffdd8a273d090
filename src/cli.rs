use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::findings::Severity;
use crate::io::output;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}

impl From<OutputFormat> for output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => output::OutputFormat::Terminal,
            OutputFormat::Json => output::OutputFormat::Json,
        }
    }
}

/// Minimum severity that fails `validate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FailLevel {
    Warning,
    Major,
    Critical,
}

impl From<FailLevel> for Severity {
    fn from(level: FailLevel) -> Self {
        match level {
            FailLevel::Warning => Severity::Warning,
            FailLevel::Major => Severity::Major,
            FailLevel::Critical => Severity::Critical,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "statelint")]
#[command(about = "Eventless-transition loop analyzer for state machine configurations", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a machine-model document and report findings
    Analyze {
        /// Path to the machine-model document (JSON)
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override the document's declared machine version
        #[arg(long = "machine-version")]
        machine_version: Option<u32>,
    },

    /// Analyze and exit non-zero when gated findings are present
    Validate {
        /// Path to the machine-model document (JSON)
        path: PathBuf,

        /// Minimum severity that fails validation
        #[arg(long = "fail-on", value_enum, default_value = "major")]
        fail_on: FailLevel,
    },
}
