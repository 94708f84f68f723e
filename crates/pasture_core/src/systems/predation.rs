//! Batched predation: every predator gets at most one meal per tick and
//! every prey is eaten at most once.

use crate::agent::AgentLogic;
use crate::grid::ResourceGrid;
use crate::spatial_hash::SpatialHash;
use pasture_data::{Agent, Position};
use rand::Rng;

pub struct PredationContext<'a, R> {
    pub predators: &'a mut [Agent],
    pub prey: &'a mut Vec<Agent>,
    pub grid: &'a ResourceGrid,
    pub index: &'a mut SpatialHash,
    pub energy_gain: i64,
    pub rng: &'a mut R,
}

/// Lets each predator, in order, eat one unclaimed prey sharing its grid
/// cell, chosen uniformly. Claimed prey are removed in a single pass once
/// all predators have had their turn. Returns the number of prey eaten.
pub fn resolve_predation<R: Rng>(ctx: PredationContext<'_, R>) -> u64 {
    let positions: Vec<Position> = ctx.prey.iter().map(|p| p.position).collect();
    ctx.index.build(&positions, ctx.grid);

    let mut claimed = vec![false; ctx.prey.len()];
    let mut candidates: Vec<usize> = Vec::new();
    let mut eaten = 0;

    for wolf in ctx.predators.iter_mut() {
        let (i, j) = ctx.grid.cell_index_of(wolf.position);
        candidates.clear();
        candidates.extend(
            ctx.index
                .query_cell(i, j)
                .iter()
                .copied()
                .filter(|&k| !claimed[k]),
        );
        if candidates.is_empty() {
            continue;
        }
        let victim = candidates[ctx.rng.gen_range(0..candidates.len())];
        claimed[victim] = true;
        wolf.gain_energy(ctx.energy_gain);
        eaten += 1;
    }

    if eaten > 0 {
        let mut k = 0;
        ctx.prey.retain(|_| {
            let keep = !claimed[k];
            k += 1;
            keep
        });
    }
    ctx.index.clear();
    tracing::trace!(eaten, "Predation resolved");
    eaten
}
