//! Machine analysis: walk the state tree and classify every
//! automatic-transition chain.

pub mod guard_evidence;
pub mod mutation;
pub mod self_target;
pub mod transitions;

pub use guard_evidence::guard_ignores_context;
pub use mutation::may_assign_context;
pub use self_target::resolves_to_owner;
pub use transitions::classify_automatic_transitions;

use crate::config::AnalysisSettings;
use crate::core::errors::Result;
use crate::core::findings::AnalysisReport;
use crate::core::machine::StateNode;
use rayon::prelude::*;

/// Analyze every state of a machine tree.
///
/// Each state's automatic-transition sequence is classified independently,
/// so disjoint states run in parallel; the report lists findings in
/// document order regardless. Analyzing the same tree twice yields
/// identical reports.
pub fn analyze_machine(root: &StateNode, settings: &AnalysisSettings) -> Result<AnalysisReport> {
    let dialect = settings.dialect()?;
    let states = collect_states(root);
    log::debug!(
        "analyzing {} states (machine version {})",
        states.len(),
        settings.version
    );

    let findings = states
        .par_iter()
        .map(|(path, state)| classify_automatic_transitions(state, path, dialect))
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect();

    Ok(AnalysisReport {
        findings,
        states_analyzed: states.len(),
    })
}

/// Depth-first collection of every state with its dotted path from the root.
fn collect_states(root: &StateNode) -> Vec<(String, &StateNode)> {
    let mut states = Vec::new();
    push_states(root, None, &mut states);
    states
}

fn push_states<'a>(
    state: &'a StateNode,
    parent: Option<&str>,
    out: &mut Vec<(String, &'a StateNode)>,
) {
    let path = match parent {
        Some(parent) => format!("{}.{}", parent, state.name),
        None => state.name.clone(),
    };
    out.push((path.clone(), state));
    for child in &state.states {
        push_states(child, Some(&path), out);
    }
}
