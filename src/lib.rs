// Export modules for library usage
pub mod analysis;
pub mod cli;
pub mod config;
pub mod core;
pub mod io;

// Re-export commonly used types
pub use crate::core::{
    ActionRef, AlwaysSlot, AnalysisReport, Error, Finding, FindingKind, Guard, ParamShape, Result,
    Severity, StateNode, TransitionCandidate,
};

pub use crate::analysis::{
    analyze_machine, classify_automatic_transitions, guard_ignores_context, may_assign_context,
    resolves_to_owner,
};

pub use crate::config::{AnalysisSettings, GuardDialect, MachineDocument};

pub use crate::io::output::{create_writer, render_report, OutputFormat, OutputWriter};
