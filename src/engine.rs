//! Simulation engine: the per-day epidemic step and the day loop.

use crate::config::Config;
use crate::model::{DayRecord, INITIAL_INFECTIONS, Status};
use crate::population::Population;
use crate::spatial::SpatialIndex;
use anyhow::{Context, Result};
use rand::prelude::*;
use rand_chacha::ChaCha12Rng;
use rand_distr::Bernoulli;
use std::collections::HashSet;

/// Simulation engine.
///
/// Holds the configuration, the agent population, and the random number
/// generator, and provides methods to run the epidemic day by day.
pub struct Engine {
    cfg: Config,
    population: Population,
    rng: ChaCha12Rng,
}

impl Engine {
    /// Create a new `Engine` with a freshly generated and seeded population.
    ///
    /// The configuration is validated first; the random number generator
    /// uses the configured seed, or the operating system's entropy source
    /// when no seed is set.
    pub fn new(cfg: Config) -> Result<Self> {
        cfg.validate().context("failed to validate config")?;

        let mut rng = match cfg.seed {
            Some(seed) => ChaCha12Rng::seed_from_u64(seed),
            None => ChaCha12Rng::try_from_os_rng()?,
        };

        let mut population = Population::generate(cfg.population, &mut rng)
            .context("failed to generate population")?;
        population
            .seed_infections(INITIAL_INFECTIONS, &mut rng)
            .context("failed to seed infections")?;

        Ok(Self {
            cfg,
            population,
            rng,
        })
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    #[cfg(test)]
    fn with_population(cfg: Config, population: Population, rng: ChaCha12Rng) -> Self {
        Self {
            cfg,
            population,
            rng,
        }
    }

    /// Run the day loop and return the complete history of daily counts.
    ///
    /// Each day performs one [`Engine::step`] and then tallies the
    /// compartments. The loop ends early once the infection has died out,
    /// subject to the day-index guard of the early-stop rule.
    pub fn run(&mut self) -> Result<Vec<DayRecord>> {
        let mut history = Vec::with_capacity(self.cfg.days);

        for day in 0..self.cfg.days {
            self.step().context("failed to perform day step")?;

            let counts = self.population.status_counts();
            log::debug!(
                "day {day}: S={} I={} R={}",
                counts.susceptible,
                counts.infected,
                counts.recovered
            );
            history.push(DayRecord {
                day,
                susceptible: counts.susceptible,
                infected: counts.infected,
                recovered: counts.recovered,
            });

            if extinction_reached(day, counts.infected) {
                log::info!("infection died out on day {day}");
                break;
            }
        }

        Ok(history)
    }

    /// Advance the simulation by one day.
    ///
    /// Recovery runs to completion before any exposure is computed, so an
    /// agent that recovers this day never transmits this day.
    pub fn step(&mut self) -> Result<()> {
        self.recover_infected();

        let infected: Vec<usize> = self.agent_ids_with_status(Status::Infected);
        if infected.is_empty() {
            return Ok(());
        }

        self.spread_infection(&infected)
            .context("failed to spread infection")?;

        Ok(())
    }

    /// Recovery phase: advance every infected agent's countdown.
    fn recover_infected(&mut self) {
        for agent in self.population.agents_mut() {
            agent.tick_recovery();
        }
    }

    /// Exposure and application phases.
    ///
    /// Builds a spatial index over the currently susceptible agents and,
    /// for every infected agent, draws one transmission chance per
    /// susceptible neighbor within the infection radius. A susceptible
    /// agent exposed by several infected agents gets one draw per
    /// exposure but is infected at most once; membership in the
    /// newly-infected set is checked before drawing so no randomness is
    /// spent on an already-marked agent.
    fn spread_infection(&mut self, infected: &[usize]) -> Result<()> {
        let susceptible: Vec<([f64; 2], usize)> = self
            .population
            .agents()
            .iter()
            .filter(|agent| agent.status() == Status::Susceptible)
            .map(|agent| (agent.position(), agent.id()))
            .collect();
        if susceptible.is_empty() {
            return Ok(());
        }

        let index = SpatialIndex::build(&susceptible);
        let transmission = Bernoulli::new(self.cfg.infection_probability)?;

        let mut newly_infected = HashSet::new();
        for &id in infected {
            let center = self.population.agents()[id].position();
            for neighbor in index.within_radius(center, self.cfg.infection_radius) {
                if !newly_infected.contains(&neighbor) && transmission.sample(&mut self.rng) {
                    newly_infected.insert(neighbor);
                }
            }
        }

        // No status changed during the exposure loop above; apply all new
        // infections at once.
        for &id in &newly_infected {
            self.population.infect(id);
        }

        Ok(())
    }

    fn agent_ids_with_status(&self, status: Status) -> Vec<usize> {
        self.population
            .agents()
            .iter()
            .filter(|agent| agent.status() == status)
            .map(|agent| agent.id())
            .collect()
    }
}

/// Early-stop rule of the day loop.
///
/// The guard compares the day index against [`INITIAL_INFECTIONS`], so
/// days `0..=INITIAL_INFECTIONS` are never eligible even if the infected
/// count is already zero.
fn extinction_reached(day: usize, infected: usize) -> bool {
    infected == 0 && day > INITIAL_INFECTIONS
}
