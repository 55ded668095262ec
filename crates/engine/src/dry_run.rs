// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The dry-run planner (§4.5): a topological enumeration of a step and its
//! transitive dependencies, each annotated with whether `result()` would
//! read it from cache *at the time the plan was produced*.

use crate::dependencies::direct_dependencies_of_kwargs;
use detstep_core::{StepCache, StepLike};
use std::collections::HashSet;
use std::sync::Arc;

/// One entry in a dry-run plan: a step and whether executing the plan
/// in order would read it from cache rather than run it.
pub struct PlanEntry {
    pub step: Arc<dyn StepLike>,
    pub will_read_from_cache: bool,
}

/// Direct dependencies of a step, per §4.2 (stopping at `Deferred`
/// boundaries — the planner walks the graph one `Step` at a time and
/// doesn't need to cross them; see `crate::dependencies` for the query
/// that does).
fn direct_dependencies(step: &Arc<dyn StepLike>) -> Vec<Arc<dyn StepLike>> {
    direct_dependencies_of_kwargs(step.kwargs())
}

pub fn plan(roots: &[Arc<dyn StepLike>], cache: &dyn StepCache) -> Vec<PlanEntry> {
    let mut stack: Vec<Arc<dyn StepLike>> = roots.iter().rev().cloned().collect();
    let mut seen: HashSet<String> = HashSet::new();
    let mut emitted: HashSet<String> = HashSet::new();
    let mut result = Vec::new();

    while let Some(step) = stack.pop() {
        let id = step.unique_id().to_string();
        if seen.contains(&id) {
            continue;
        }
        let unseen_deps: Vec<Arc<dyn StepLike>> = direct_dependencies(&step)
            .into_iter()
            .filter(|d| !seen.contains(d.unique_id()))
            .collect();

        if unseen_deps.is_empty() {
            let will_read_from_cache = cache.contains(&id) || emitted.contains(&id);
            result.push(PlanEntry {
                step: step.clone(),
                will_read_from_cache,
            });
            emitted.insert(id.clone());
            seen.insert(id);
        } else {
            stack.push(step.clone());
            for dep in unseen_deps.into_iter().rev() {
                stack.push(dep);
            }
        }
    }

    result
}

#[cfg(test)]
#[path = "dry_run_tests.rs"]
mod tests;
