//! Simulation data types and fixed epidemic constants.

use serde::{Deserialize, Serialize};

/// Days an agent remains infectious before recovering.
pub const RECOVERY_DURATION: i32 = 14;

/// Number of agents seeded as infected before the day loop begins.
pub const INITIAL_INFECTIONS: usize = 10;

/// Epidemiological compartment of an agent.
///
/// The ordering is the transition order: transitions are monotonic,
/// `Susceptible` → `Infected` → `Recovered`, never reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Status {
    Susceptible,
    Infected,
    Recovered,
}

/// Agent of the simulation.
///
/// Each agent has a stable dense id, a fixed position in the unit square,
/// a compartment status, and a countdown to recovery that is only
/// meaningful while the agent is infected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    id: usize,
    position: [f64; 2],
    status: Status,
    infection_timer: i32,
}

impl Agent {
    /// Create a new susceptible agent at the given position.
    pub fn new(id: usize, position: [f64; 2]) -> Self {
        Self {
            id,
            position,
            status: Status::Susceptible,
            infection_timer: 0,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn position(&self) -> [f64; 2] {
        self.position
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn infection_timer(&self) -> i32 {
        self.infection_timer
    }

    /// Transition the agent to `Infected` and start the recovery countdown.
    pub fn infect(&mut self) {
        self.status = Status::Infected;
        self.infection_timer = RECOVERY_DURATION;
    }

    /// Advance the recovery countdown by one day.
    ///
    /// Does nothing unless the agent is infected. The agent recovers when
    /// the timer reaches zero or below after the decrement.
    pub fn tick_recovery(&mut self) {
        if self.status != Status::Infected {
            return;
        }
        self.infection_timer -= 1;
        if self.infection_timer <= 0 {
            self.status = Status::Recovered;
        }
    }
}

/// Compartment counts for one simulated day.
///
/// Serialized with the single-letter compartment keys consumed by
/// downstream plotting tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Zero-based day index.
    pub day: usize,

    #[serde(rename = "S")]
    pub susceptible: usize,

    #[serde(rename = "I")]
    pub infected: usize,

    #[serde(rename = "R")]
    pub recovered: usize,
}
