pub mod errors;
pub mod findings;
pub mod machine;

pub use errors::{Error, Result};
pub use findings::{AnalysisReport, Finding, FindingKind, Severity};
pub use machine::{ActionRef, AlwaysSlot, Guard, ParamShape, StateNode, TransitionCandidate};
