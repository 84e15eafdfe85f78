//! Spatial agent-based SIR epidemic simulator.
//!
//! Agents are placed uniformly at random in the unit square and never
//! move. Each simulated day, infected agents expose the susceptible
//! agents within a fixed radius and transmit with a fixed probability;
//! infected agents recover after [`model::RECOVERY_DURATION`] days. The
//! run produces one [`model::DayRecord`] of compartment counts per day
//! until the infection dies out or the day cap is reached.

pub mod config;
pub mod engine;
pub mod model;
pub mod population;
pub mod spatial;

pub use crate::config::Config;
pub use crate::engine::Engine;
pub use crate::model::DayRecord;

use anyhow::Result;

/// Run a complete simulation and return the daily history.
pub fn run_simulation(cfg: Config) -> Result<Vec<DayRecord>> {
    let mut engine = Engine::new(cfg)?;
    engine.run()
}
