use num::clamp;
use super::Kind;
use crate::component::{Clock, Params};

/// Pheromone tree node. The stored pheromone is only guaranteed current as
/// of `evap_seen`/`restart_seen`; every read goes through the closed-form
/// catch-up so a full-colony evaporation event costs O(1) total.
#[derive(Clone, Debug)]
pub struct TrailNode {
    pub parent: Option<usize>,
    pub kind: Kind,
    pheromone: f64,
    heuristic: f64,
    evap_seen: usize,
    restart_seen: usize,
}

impl TrailNode {
    pub fn new(kind: Kind, heuristic: f64, params: &Params, clock: &Clock) -> Self {
        TrailNode {
            parent: None,
            kind,
            pheromone: params.trail_restart,
            heuristic,
            evap_seen: clock.evap_times,
            restart_seen: clock.restart_times,
        }
    }
    pub fn heuristic(&self) -> f64 {
        self.heuristic
    }
    /// The value an eager schedule would hold right now, without mutating.
    /// A pending restart rewinds to the restart trail before decaying.
    pub fn peek_pheromone(&self, params: &Params, clock: &Clock) -> f64 {
        let (pheromone, evap_seen) = match self.restart_seen == clock.restart_times {
            true => (self.pheromone, self.evap_seen),
            false => (params.trail_restart, 0),
        };
        let elapsed = clock.evap_times - evap_seen;
        match elapsed {
            0 => pheromone,
            k => f64::max(pheromone * params.one_minus_rho.powi(k as i32), params.trail_min),
        }
    }
    /// Catches the stored value up to the clock and returns it.
    pub fn refresh(&mut self, params: &Params, clock: &Clock) -> f64 {
        self.pheromone = self.peek_pheromone(params, clock);
        self.evap_seen = clock.evap_times;
        self.restart_seen = clock.restart_times;
        self.pheromone
    }
    /// Evaporate-then-deposit, clamped into the trail bounds.
    pub fn reinforce(&mut self, deposit: f64, params: &Params, clock: &Clock) {
        let pheromone = self.refresh(params, clock) + deposit;
        self.pheromone = clamp(pheromone, params.trail_min, params.trail_max);
    }
    /// Aggregate attractiveness of the subtree rooted here. Ancestors absorb
    /// every deposit below them, so no descendant scan is needed.
    pub fn score(&mut self, params: &Params, clock: &Clock) -> f64 {
        let pheromone = self.refresh(params, clock);
        pheromone.powf(params.alpha) * self.heuristic.powf(params.beta)
    }
}
