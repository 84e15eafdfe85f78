//! Agent population: random placement and infection seeding.

use crate::model::{Agent, Status};
use anyhow::{Result, bail};
use rand::prelude::*;
use rand_distr::Uniform;

/// Compartment tally over a whole population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCounts {
    pub susceptible: usize,
    pub infected: usize,
    pub recovered: usize,
}

/// The full set of agents in a simulation run.
///
/// Invariant: an agent's id equals its index in the underlying vector.
/// The size is fixed at construction and mutable access is slice-level
/// only, so the invariant cannot be broken after `generate`. The engine
/// relies on it to resolve spatial-query results back to agents in O(1).
pub struct Population {
    agents: Vec<Agent>,
}

impl Population {
    /// Generate `size` susceptible agents placed uniformly at random in
    /// the unit square, with ids `0..size` in order.
    pub fn generate(size: usize, rng: &mut impl Rng) -> Result<Self> {
        if size == 0 {
            bail!("population size must be positive");
        }

        let coord_dist = Uniform::new(0.0, 1.0)?;
        let mut agents = Vec::with_capacity(size);
        for id in 0..size {
            let position = [coord_dist.sample(rng), coord_dist.sample(rng)];
            agents.push(Agent::new(id, position));
        }

        Ok(Self { agents })
    }

    /// Infect `count` distinct agents chosen uniformly at random.
    ///
    /// Sampling without replacement is done with a partial Fisher-Yates
    /// shuffle over the dense id range: after `count` swap steps the
    /// first `count` slots hold a uniform sample of distinct ids.
    pub fn seed_infections(&mut self, count: usize, rng: &mut impl Rng) -> Result<()> {
        let size = self.agents.len();
        if count > size {
            bail!("cannot seed {count} infections in a population of {size} agents");
        }

        let mut ids: Vec<usize> = (0..size).collect();
        for slot in 0..count {
            let pick = rng.random_range(slot..size);
            ids.swap(slot, pick);
        }
        for &id in &ids[..count] {
            self.agents[id].infect();
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agents_mut(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    /// Infect the agent with the given id.
    pub fn infect(&mut self, id: usize) {
        self.agents[id].infect();
    }

    /// Tally the three compartments in a single pass.
    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts {
            susceptible: 0,
            infected: 0,
            recovered: 0,
        };
        for agent in &self.agents {
            match agent.status() {
                Status::Susceptible => counts.susceptible += 1,
                Status::Infected => counts.infected += 1,
                Status::Recovered => counts.recovered += 1,
            }
        }
        counts
    }
}
