//! Context-mutation evidence for action lists.

use crate::core::machine::ActionRef;

/// True when the action list may update the machine context.
///
/// A recognized assign call is definite evidence. A named or referenced
/// action cannot be resolved to its implementation, so it is optimistically
/// assumed capable of updating context: a loop is never reported as
/// guaranteed while such an action could prevent it. Only an empty list, or
/// a list of inline opaque values, provably never updates context.
pub fn may_assign_context(actions: &[ActionRef]) -> bool {
    actions
        .iter()
        .any(|action| matches!(action, ActionRef::Assign | ActionRef::Named { .. }))
}
