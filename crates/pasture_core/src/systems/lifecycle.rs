//! End-of-tick starvation cull and reproduction.

use crate::agent::{random_position, AgentLogic};
use pasture_data::Agent;
use rand::Rng;

/// Removes every agent whose energy went negative. Returns how many died.
pub fn cull_starved(agents: &mut Vec<Agent>) -> u64 {
    let before = agents.len();
    agents.retain(|a| !a.is_starved());
    (before - agents.len()) as u64
}

/// Gives each agent alive at the start of the call one chance to reproduce.
///
/// A successful parent splits its energy with a child placed uniformly at
/// random in the world. Children are appended after the loop, so they never
/// reproduce in the tick they are born. Returns the number of births.
pub fn reproduce<R: Rng>(agents: &mut Vec<Agent>, chance: f64, extent: f64, rng: &mut R) -> u64 {
    let mut newborns = Vec::new();
    for parent in agents.iter_mut() {
        if rng.gen_bool(chance) {
            let position = random_position(rng, extent);
            newborns.push(parent.split_offspring(position, rng));
        }
    }
    let born = newborns.len() as u64;
    agents.extend(newborns);
    born
}
