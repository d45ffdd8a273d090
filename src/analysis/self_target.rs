//! Self-target resolution for transition candidates.

use crate::core::machine::{StateNode, TransitionCandidate};

/// True when the candidate's declared target refers to its owning state.
///
/// Absolute `#id` targets denote a node directly: the portion of the target
/// before the first `.` is compared against the owner's declared id, and a
/// state without an id never matches. Any other target is compared verbatim
/// against the owner's local name, so a dotted relative path such as `a.b`
/// does not match a state named `a`. Malformed or unresolvable targets
/// never match.
pub fn resolves_to_owner(candidate: &TransitionCandidate, owner: &StateNode) -> bool {
    match candidate.target.as_deref() {
        None => false,
        Some(target) if target.starts_with('#') => {
            let head = target.split_once('.').map_or(target, |(head, _)| head);
            owner.id.as_deref() == Some(head)
        }
        Some(target) => target == owner.name,
    }
}
