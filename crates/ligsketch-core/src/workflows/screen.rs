use crate::core::chem::descriptors::MolecularDescriptors;
use crate::engine::affinity::models::{BindingMode, ReceptorTarget};
use crate::engine::affinity::scorer::score;
use crate::engine::progress::{Progress, ProgressReporter};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// One ligand to screen.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScreenEntry {
    pub name: String,
    pub formula: String,
}

/// A scored screening entry. `rank` is 1-based, most favorable first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenHit {
    pub rank: usize,
    pub name: String,
    pub formula: String,
    pub affinity: f64,
    pub confidence: u8,
    pub binding_mode: BindingMode,
    pub interactions: usize,
}

/// Scores every entry against `target` in parallel and ranks by affinity.
///
/// Ties keep input order, so the ranking is the same for any thread count.
#[instrument(skip_all, name = "screen_workflow")]
pub fn run(
    entries: &[ScreenEntry],
    target: &ReceptorTarget,
    reporter: &ProgressReporter,
) -> Vec<ScreenHit> {
    info!(entries = entries.len(), target = %target, "Starting screen.");
    reporter.report(Progress::BatchStart {
        total: entries.len() as u64,
    });

    let mut hits: Vec<ScreenHit> = entries
        .par_iter()
        .map(|entry| {
            let descriptors = MolecularDescriptors::from_formula(&entry.formula);
            let result = score(&entry.formula, &descriptors, target);
            reporter.report(Progress::EntryScored);
            ScreenHit {
                rank: 0,
                name: entry.name.clone(),
                formula: entry.formula.clone(),
                affinity: result.affinity,
                confidence: result.confidence,
                binding_mode: result.binding_mode,
                interactions: result.interactions.len(),
            }
        })
        .collect();

    hits.sort_by(|a, b| a.affinity.total_cmp(&b.affinity));
    for (i, hit) in hits.iter_mut().enumerate() {
        hit.rank = i + 1;
    }

    reporter.report(Progress::BatchFinish);
    if let Some(best) = hits.first() {
        info!(name = %best.name, affinity = best.affinity, "Screen complete.");
    }
    hits
}
