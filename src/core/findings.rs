//! Findings emitted by the transition classifier and their aggregation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Severity tiers for findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    /// Useless or dead candidate; loops only in combination with others.
    Warning,
    /// Loops once reached, or gated by a guard whose result can never change.
    Major,
    /// Guaranteed infinite loop on state entry.
    Critical,
}

/// Classification categories for automatic-transition candidates.
///
/// Each category names the structural evidence that triggered it; at most
/// one is emitted per candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FindingKind {
    /// First candidate with no target and no guard: fires immediately,
    /// targets nothing, changes nothing.
    EmptyAlwaysTransition,
    /// Non-first candidate with no target, no guard and no actions.
    EmptyAlwaysTransitionNotFirst,
    /// Non-first candidate with no target, no guard, and actions that
    /// provably never update context.
    NoTargetActionsNeverAssign,
    /// First candidate is an unguarded self-transition.
    UnconditionalSelfTransitionFirst,
    /// Later unguarded self-transition whose actions never update context.
    UnconditionalSelfTransitionNoAssign,
    /// Guarded self-transition whose actions never update context.
    ConditionalSelfTransitionNoAssign,
    /// First guarded self-transition whose guard provably ignores context.
    FirstConditionalSelfTransitionGuardIgnoresContext,
    /// Guarded no-target candidate whose actions never update context.
    GuardedNoTargetNoAssign,
    /// First guarded no-target candidate whose guard provably ignores
    /// context.
    FirstGuardedNoTargetGuardIgnoresContext,
}

impl FindingKind {
    pub fn severity(&self) -> Severity {
        match self {
            FindingKind::EmptyAlwaysTransition | FindingKind::UnconditionalSelfTransitionFirst => {
                Severity::Critical
            }
            FindingKind::UnconditionalSelfTransitionNoAssign
            | FindingKind::ConditionalSelfTransitionNoAssign
            | FindingKind::FirstConditionalSelfTransitionGuardIgnoresContext
            | FindingKind::GuardedNoTargetNoAssign
            | FindingKind::FirstGuardedNoTargetGuardIgnoresContext => Severity::Major,
            FindingKind::EmptyAlwaysTransitionNotFirst
            | FindingKind::NoTargetActionsNeverAssign => Severity::Warning,
        }
    }

    /// Human-readable diagnostic for this category.
    pub fn message(&self) -> &'static str {
        match self {
            FindingKind::EmptyAlwaysTransition => {
                "Eventless transition cannot have no target and no guard. \
                 This will result in an infinite loop error."
            }
            FindingKind::EmptyAlwaysTransitionNotFirst => {
                "Eventless transition with no target, no guard and no actions is useless. \
                 If reached, it will result in an infinite loop error."
            }
            FindingKind::NoTargetActionsNeverAssign => {
                "Eventless transition with no target has actions which never update \
                 the context. If reached, it will result in an infinite loop error."
            }
            FindingKind::UnconditionalSelfTransitionFirst => {
                "Eventless transition cannot target its own state node unconditionally. \
                 This will result in an infinite loop error."
            }
            FindingKind::UnconditionalSelfTransitionNoAssign => {
                "Unconditional eventless self-transition never updates the context. \
                 If reached, it will result in an infinite loop error."
            }
            FindingKind::ConditionalSelfTransitionNoAssign => {
                "Conditional eventless self-transition never updates the context. \
                 It is either never taken or results in an infinite loop error."
            }
            FindingKind::FirstConditionalSelfTransitionGuardIgnoresContext => {
                "The guard of this eventless self-transition never reads the context, \
                 so its result can never change between evaluations. The transition \
                 is either dead or loops forever."
            }
            FindingKind::GuardedNoTargetNoAssign => {
                "Guarded eventless transition with no target never updates the context. \
                 It is either never taken or results in an infinite loop error."
            }
            FindingKind::FirstGuardedNoTargetGuardIgnoresContext => {
                "The guard of this eventless transition never reads the context, \
                 so its result can never change between evaluations. The transition \
                 is either dead or loops forever."
            }
        }
    }
}

/// One classification emitted for a transition candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    /// Dotted path of the owning state from the machine root.
    pub state_path: String,
    /// Candidate index within the normalized automatic-transition sequence.
    pub position: usize,
    pub kind: FindingKind,
    pub severity: Severity,
    /// Declared target of the candidate, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl Finding {
    pub fn new(
        state_path: impl Into<String>,
        position: usize,
        kind: FindingKind,
        target: Option<String>,
    ) -> Self {
        Self {
            state_path: state_path.into(),
            position,
            kind,
            severity: kind.severity(),
            target,
        }
    }

    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}

/// Aggregated result of analyzing one machine tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Findings in document order (state position, then candidate position).
    pub findings: Vec<Finding>,
    pub states_analyzed: usize,
}

impl AnalysisReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn max_severity(&self) -> Option<Severity> {
        self.findings.iter().map(|f| f.severity).max()
    }

    pub fn count_at_or_above(&self, min: Severity) -> usize {
        self.findings.iter().filter(|f| f.severity >= min).count()
    }

    pub fn group_by_state(&self) -> HashMap<&str, Vec<&Finding>> {
        self.findings.iter().fold(HashMap::new(), |mut acc, f| {
            acc.entry(f.state_path.as_str()).or_default().push(f);
            acc
        })
    }
}
