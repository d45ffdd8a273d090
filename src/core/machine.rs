//! Abstract machine-configuration model consumed by the analyzer.
//!
//! A config-tree loader produces these shapes from whatever concrete syntax
//! the host configuration uses; the analyzer never sees that syntax. The
//! tree is immutable for the lifetime of an analysis pass.

use serde::{Deserialize, Serialize};

/// Declared parameter shape of an inline guard function.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "camelCase")]
pub enum ParamShape {
    /// No declared parameters.
    None,
    /// Plain positional identifiers.
    Positional { count: usize },
    /// A single object pattern binding the listed field names.
    Destructured { fields: Vec<String> },
}

/// A boolean predicate gating a transition candidate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Guard {
    /// String reference to a guard implementation registered elsewhere.
    Named { name: String },
    /// Function value declared inline in the configuration.
    Inline { params: ParamShape },
    /// Call expression or other value the analyzer cannot see into.
    Opaque,
}

/// One action attached to a transition candidate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ActionRef {
    /// Recognized call to the canonical context-update constructor.
    Assign,
    /// String name or identifier reference resolved elsewhere.
    Named { name: String },
    /// Function literal or other value; not assumed to touch context.
    Opaque,
}

/// One entry in a state's automatic-transition sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionCandidate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guard: Option<Guard>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<ActionRef>,
}

impl TransitionCandidate {
    /// Candidate with a declared target and nothing else.
    pub fn to_target(target: impl Into<String>) -> Self {
        Self {
            target: Some(target.into()),
            ..Self::default()
        }
    }

    pub fn with_guard(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    pub fn with_actions(mut self, actions: Vec<ActionRef>) -> Self {
        self.actions = actions;
        self
    }

    pub fn has_target(&self) -> bool {
        self.target.is_some()
    }

    pub fn has_guard(&self) -> bool {
        self.guard.is_some()
    }
}

/// The automatic-transition slot as declared: a bare candidate or a list.
///
/// Both forms are legal in the host dialect; `candidates` presents them
/// uniformly as an ordered sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AlwaysSlot {
    Single(TransitionCandidate),
    List(Vec<TransitionCandidate>),
}

impl AlwaysSlot {
    pub fn candidates(&self) -> &[TransitionCandidate] {
        match self {
            AlwaysSlot::Single(candidate) => std::slice::from_ref(candidate),
            AlwaysSlot::List(candidates) => candidates,
        }
    }
}

/// One node in the state tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateNode {
    /// Local identifier, unique among siblings.
    pub name: String,
    /// Optional globally-addressable identifier, stored verbatim as the
    /// configuration declares it (including the leading `#`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The eventless-transition slot, evaluated on state entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub always: Option<AlwaysSlot>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub states: Vec<StateNode>,
}

impl StateNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            always: None,
            states: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_always(mut self, candidates: Vec<TransitionCandidate>) -> Self {
        self.always = Some(AlwaysSlot::List(candidates));
        self
    }

    pub fn with_states(mut self, states: Vec<StateNode>) -> Self {
        self.states = states;
        self
    }

    /// The normalized automatic-transition sequence (length >= 0).
    pub fn automatic_transitions(&self) -> &[TransitionCandidate] {
        self.always
            .as_ref()
            .map(AlwaysSlot::candidates)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_slot_normalizes_to_empty_sequence() {
        let state = StateNode::new("idle");
        assert!(state.automatic_transitions().is_empty());
    }

    #[test]
    fn test_bare_candidate_normalizes_to_singleton_sequence() {
        let mut state = StateNode::new("idle");
        state.always = Some(AlwaysSlot::Single(TransitionCandidate::to_target("busy")));
        let candidates = state.automatic_transitions();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].target.as_deref(), Some("busy"));
    }

    #[test]
    fn test_list_slot_preserves_declared_order() {
        let state = StateNode::new("idle").with_always(vec![
            TransitionCandidate::to_target("a"),
            TransitionCandidate::to_target("b"),
        ]);
        let targets: Vec<_> = state
            .automatic_transitions()
            .iter()
            .map(|c| c.target.as_deref().unwrap())
            .collect();
        assert_eq!(targets, vec!["a", "b"]);
    }

    #[test]
    fn test_deserialize_bare_candidate_slot() {
        let json = r#"{"name": "idle", "always": {"target": "busy"}}"#;
        let state: StateNode = serde_json::from_str(json).unwrap();
        assert_eq!(state.automatic_transitions().len(), 1);
    }

    #[test]
    fn test_deserialize_empty_candidate() {
        let json = r#"{"name": "idle", "always": [{}]}"#;
        let state: StateNode = serde_json::from_str(json).unwrap();
        let candidates = state.automatic_transitions();
        assert_eq!(candidates.len(), 1);
        assert!(!candidates[0].has_target());
        assert!(!candidates[0].has_guard());
        assert!(candidates[0].actions.is_empty());
    }

    #[test]
    fn test_deserialize_guard_and_action_shapes() {
        let json = r#"
            {
                "name": "deciding",
                "always": [
                    {
                        "target": "deciding",
                        "guard": {"kind": "inline", "params": {"shape": "destructured", "fields": ["context"]}},
                        "actions": [{"kind": "assign"}, {"kind": "named", "name": "notify"}]
                    }
                ]
            }
        "#;
        let state: StateNode = serde_json::from_str(json).unwrap();
        let candidate = &state.automatic_transitions()[0];
        assert_eq!(
            candidate.guard,
            Some(Guard::Inline {
                params: ParamShape::Destructured {
                    fields: vec!["context".to_string()]
                }
            })
        );
        assert_eq!(
            candidate.actions,
            vec![
                ActionRef::Assign,
                ActionRef::Named {
                    name: "notify".to_string()
                }
            ]
        );
    }
}
