//! Loop and deadness classification of one state's automatic-transition
//! chain.
//!
//! Mirrors the runtime semantics of eventless transitions: candidates are
//! evaluated in declared order and the first whose guard passes (or that
//! has no guard) fires. Each candidate is classified independently and at
//! most one finding is emitted per candidate. The analysis is local to the
//! owning state and assumes the state is re-entered; it performs no
//! cross-state reachability.

use crate::analysis::guard_evidence::guard_ignores_context;
use crate::analysis::mutation::may_assign_context;
use crate::analysis::self_target::resolves_to_owner;
use crate::config::GuardDialect;
use crate::core::findings::{Finding, FindingKind};
use crate::core::machine::{StateNode, TransitionCandidate};

/// Classify the automatic-transition sequence of `state`.
///
/// `state_path` is the dotted path of the owning state from the machine
/// root; it is carried into each finding unchanged.
pub fn classify_automatic_transitions(
    state: &StateNode,
    state_path: &str,
    dialect: GuardDialect,
) -> Vec<Finding> {
    state
        .automatic_transitions()
        .iter()
        .enumerate()
        .filter_map(|(position, candidate)| {
            classify_candidate(candidate, position, state, dialect)
                .map(|kind| Finding::new(state_path, position, kind, candidate.target.clone()))
        })
        .collect()
}

/// Decision table for one candidate.
///
/// Branches partition on target presence, self-resolution and guard
/// presence. Wherever both apply, the context-mutation check runs before
/// the guard-evidence check.
fn classify_candidate(
    candidate: &TransitionCandidate,
    position: usize,
    owner: &StateNode,
    dialect: GuardDialect,
) -> Option<FindingKind> {
    let first = position == 0;
    let may_assign = may_assign_context(&candidate.actions);

    // No target: taking the candidate stays in the state.
    if candidate.target.is_none() {
        return match &candidate.guard {
            None if first => Some(FindingKind::EmptyAlwaysTransition),
            // Context changes each cycle; an earlier candidate may fire later.
            None if may_assign => None,
            None if candidate.actions.is_empty() => {
                Some(FindingKind::EmptyAlwaysTransitionNotFirst)
            }
            None => Some(FindingKind::NoTargetActionsNeverAssign),
            Some(_) if !may_assign => Some(FindingKind::GuardedNoTargetNoAssign),
            Some(guard) if first && guard_ignores_context(guard, dialect) => {
                Some(FindingKind::FirstGuardedNoTargetGuardIgnoresContext)
            }
            Some(_) => None,
        };
    }

    // A target that leaves the state terminates the chain.
    if !resolves_to_owner(candidate, owner) {
        return None;
    }

    match &candidate.guard {
        None if first => Some(FindingKind::UnconditionalSelfTransitionFirst),
        // Every future evaluation of the chain is identical once reached.
        None if !may_assign => Some(FindingKind::UnconditionalSelfTransitionNoAssign),
        None => None,
        Some(_) if !may_assign => Some(FindingKind::ConditionalSelfTransitionNoAssign),
        Some(guard) if first && guard_ignores_context(guard, dialect) => {
            Some(FindingKind::FirstConditionalSelfTransitionGuardIgnoresContext)
        }
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::machine::{ActionRef, Guard, ParamShape};

    const DIALECT: GuardDialect = GuardDialect::Positional;

    fn context_free_guard() -> Guard {
        Guard::Inline {
            params: ParamShape::None,
        }
    }

    fn context_reading_guard() -> Guard {
        Guard::Inline {
            params: ParamShape::Positional { count: 1 },
        }
    }

    fn kinds(state: &StateNode) -> Vec<(usize, FindingKind)> {
        classify_automatic_transitions(state, &state.name, DIALECT)
            .into_iter()
            .map(|f| (f.position, f.kind))
            .collect()
    }

    #[test]
    fn test_single_empty_candidate_is_a_guaranteed_loop() {
        let state = StateNode::new("deciding").with_always(vec![TransitionCandidate::default()]);
        assert_eq!(kinds(&state), vec![(0, FindingKind::EmptyAlwaysTransition)]);
    }

    #[test]
    fn test_transition_leaving_the_state_is_clean() {
        let state =
            StateNode::new("deciding").with_always(vec![TransitionCandidate::to_target("idle")]);
        assert!(kinds(&state).is_empty());
    }

    #[test]
    fn test_empty_candidates_after_the_first() {
        // [{}, {target: idle}, {}, {actions: () => {}}]
        let state = StateNode::new("deciding").with_always(vec![
            TransitionCandidate::default(),
            TransitionCandidate::to_target("idle"),
            TransitionCandidate::default(),
            TransitionCandidate::default().with_actions(vec![ActionRef::Opaque]),
        ]);
        assert_eq!(
            kinds(&state),
            vec![
                (0, FindingKind::EmptyAlwaysTransition),
                (2, FindingKind::EmptyAlwaysTransitionNotFirst),
                (3, FindingKind::NoTargetActionsNeverAssign),
            ]
        );
    }

    #[test]
    fn test_assign_action_suppresses_non_first_empty_finding() {
        let state = StateNode::new("deciding").with_always(vec![
            TransitionCandidate::to_target("idle").with_guard(context_reading_guard()),
            TransitionCandidate::default().with_actions(vec![ActionRef::Assign]),
        ]);
        assert!(kinds(&state).is_empty());
    }

    #[test]
    fn test_named_action_suppresses_non_first_empty_finding() {
        let state = StateNode::new("deciding").with_always(vec![
            TransitionCandidate::to_target("idle").with_guard(context_reading_guard()),
            TransitionCandidate::default().with_actions(vec![ActionRef::Named {
                name: "maybeAssigns".to_string(),
            }]),
        ]);
        assert!(kinds(&state).is_empty());
    }

    #[test]
    fn test_self_transition_chain() {
        // On a state with an id, mirror the classic authoring mistakes:
        // [{target: self}, {target: self}, {target: #id, actions: opaque},
        //  {guard, target: self}, {guard, target: self, actions: assign}]
        let state = StateNode::new("deciding").with_id("#foo").with_always(vec![
            TransitionCandidate::to_target("deciding"),
            TransitionCandidate::to_target("deciding"),
            TransitionCandidate::to_target("#foo").with_actions(vec![ActionRef::Opaque]),
            TransitionCandidate::to_target("deciding").with_guard(context_reading_guard()),
            TransitionCandidate::to_target("deciding")
                .with_guard(context_reading_guard())
                .with_actions(vec![ActionRef::Assign]),
        ]);
        assert_eq!(
            kinds(&state),
            vec![
                (0, FindingKind::UnconditionalSelfTransitionFirst),
                (1, FindingKind::UnconditionalSelfTransitionNoAssign),
                (2, FindingKind::UnconditionalSelfTransitionNoAssign),
                (3, FindingKind::ConditionalSelfTransitionNoAssign),
            ]
        );
    }

    #[test]
    fn test_unconditional_self_transition_with_assign_after_exit_candidate() {
        let state = StateNode::new("deciding").with_always(vec![
            TransitionCandidate::to_target("idle").with_guard(context_reading_guard()),
            TransitionCandidate::to_target("deciding").with_actions(vec![ActionRef::Assign]),
        ]);
        assert!(kinds(&state).is_empty());
    }

    #[test]
    fn test_first_conditional_self_transition_with_invariant_guard() {
        let state = StateNode::new("deciding").with_always(vec![TransitionCandidate::to_target(
            "deciding",
        )
        .with_guard(context_free_guard())
        .with_actions(vec![ActionRef::Assign])]);
        assert_eq!(
            kinds(&state),
            vec![(
                0,
                FindingKind::FirstConditionalSelfTransitionGuardIgnoresContext
            )]
        );
    }

    #[test]
    fn test_conditional_self_transition_with_context_guard_and_assign_is_clean() {
        let state = StateNode::new("deciding").with_always(vec![TransitionCandidate::to_target(
            "deciding",
        )
        .with_guard(context_reading_guard())
        .with_actions(vec![ActionRef::Assign])]);
        assert!(kinds(&state).is_empty());
    }

    #[test]
    fn test_guarded_self_transition_without_actions_reports_no_assign_first() {
        // The mutation check runs before the guard-evidence check, so a
        // context-free guard on an action-less self-transition still
        // reports the missing assign.
        let state = StateNode::new("deciding").with_always(vec![
            TransitionCandidate::to_target("deciding").with_guard(context_free_guard()),
            TransitionCandidate::default(),
        ]);
        assert_eq!(
            kinds(&state),
            vec![
                (0, FindingKind::ConditionalSelfTransitionNoAssign),
                (1, FindingKind::EmptyAlwaysTransitionNotFirst),
            ]
        );
    }

    #[test]
    fn test_guarded_no_target_candidates() {
        // [{guard ignoring context, actions: assign}, {guard, actions: opaque}]
        let state = StateNode::new("deciding").with_always(vec![
            TransitionCandidate::default()
                .with_guard(context_free_guard())
                .with_actions(vec![ActionRef::Assign]),
            TransitionCandidate::default()
                .with_guard(context_reading_guard())
                .with_actions(vec![ActionRef::Opaque]),
        ]);
        assert_eq!(
            kinds(&state),
            vec![
                (0, FindingKind::FirstGuardedNoTargetGuardIgnoresContext),
                (1, FindingKind::GuardedNoTargetNoAssign),
            ]
        );
    }

    #[test]
    fn test_guarded_no_target_with_assign_and_context_guard_is_clean() {
        let state = StateNode::new("deciding").with_always(vec![TransitionCandidate::default()
            .with_guard(context_reading_guard())
            .with_actions(vec![ActionRef::Assign])]);
        assert!(kinds(&state).is_empty());
    }

    #[test]
    fn test_non_first_guarded_no_target_with_invariant_guard_and_assign_is_clean() {
        // Guard evidence is only decisive at position 0.
        let state = StateNode::new("deciding").with_always(vec![
            TransitionCandidate::to_target("idle").with_guard(context_reading_guard()),
            TransitionCandidate::default()
                .with_guard(context_free_guard())
                .with_actions(vec![ActionRef::Assign]),
        ]);
        assert!(kinds(&state).is_empty());
    }

    #[test]
    fn test_named_guard_is_trusted() {
        let state = StateNode::new("deciding").with_always(vec![TransitionCandidate::default()
            .with_guard(Guard::Named {
                name: "hasRetriesLeft".to_string(),
            })
            .with_actions(vec![ActionRef::Assign])]);
        assert!(kinds(&state).is_empty());
    }

    #[test]
    fn test_findings_carry_declared_target() {
        let state =
            StateNode::new("deciding").with_always(vec![TransitionCandidate::to_target("deciding")]);
        let findings = classify_automatic_transitions(&state, "deciding", DIALECT);
        assert_eq!(findings[0].target.as_deref(), Some("deciding"));
    }

    #[test]
    fn test_destructured_dialect_guard_evidence() {
        let ignoring = Guard::Inline {
            params: ParamShape::Destructured {
                fields: vec!["event".to_string()],
            },
        };
        let reading = Guard::Inline {
            params: ParamShape::Destructured {
                fields: vec!["context".to_string()],
            },
        };
        let state = |guard: Guard| {
            StateNode::new("deciding").with_always(vec![TransitionCandidate::default()
                .with_guard(guard)
                .with_actions(vec![ActionRef::Assign])])
        };

        let findings = classify_automatic_transitions(
            &state(ignoring),
            "deciding",
            GuardDialect::Destructured,
        );
        assert_eq!(
            findings[0].kind,
            FindingKind::FirstGuardedNoTargetGuardIgnoresContext
        );

        let findings = classify_automatic_transitions(
            &state(reading),
            "deciding",
            GuardDialect::Destructured,
        );
        assert!(findings.is_empty());
    }
}
