//! Guard evidence: can a guard be proven independent of machine context.

use crate::config::GuardDialect;
use crate::core::machine::{Guard, ParamShape};

/// True only when the guard provably never reads the machine context.
///
/// Named and opaque guards are assumed to legitimately gate the transition
/// and are never flagged. For inline guards the declared parameter shape is
/// the evidence. Under the positional dialect the context arrives as the
/// first parameter, so only a parameterless guard is context-free. Under
/// the destructured dialect the context is reachable only through a
/// `context` field of the single object parameter, so a guard whose
/// parameter is absent, not destructured, or destructured without binding
/// `context` never reads it.
pub fn guard_ignores_context(guard: &Guard, dialect: GuardDialect) -> bool {
    let params = match guard {
        Guard::Inline { params } => params,
        Guard::Named { .. } | Guard::Opaque => return false,
    };
    match dialect {
        GuardDialect::Positional => matches!(params, ParamShape::None),
        GuardDialect::Destructured => match params {
            ParamShape::Destructured { fields } => !fields.iter().any(|field| field == "context"),
            ParamShape::None | ParamShape::Positional { .. } => true,
        },
    }
}
