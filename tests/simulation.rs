use contagio::config::Config;
use contagio::engine::Engine;
use contagio::model::{INITIAL_INFECTIONS, Status};
use contagio::run_simulation;

fn config(population: usize, radius: f64, probability: f64, seed: u64) -> Config {
    Config {
        population,
        infection_radius: radius,
        infection_probability: probability,
        days: 150,
        seed: Some(seed),
    }
}

#[test]
fn compartment_counts_sum_to_population_every_day() {
    let history = run_simulation(config(200, 0.05, 0.5, 11)).unwrap();

    assert!(!history.is_empty());
    for record in &history {
        assert_eq!(record.susceptible + record.infected + record.recovered, 200);
    }
}

#[test]
fn day_indices_are_dense_from_zero() {
    let history = run_simulation(config(100, 0.05, 0.2, 5)).unwrap();

    for (idx, record) in history.iter().enumerate() {
        assert_eq!(record.day, idx);
    }
}

#[test]
fn agent_statuses_never_regress() {
    let mut engine = Engine::new(config(80, 0.2, 0.7, 29)).unwrap();
    let mut previous: Vec<Status> = engine
        .population()
        .agents()
        .iter()
        .map(|agent| agent.status())
        .collect();

    for _ in 0..40 {
        engine.step().unwrap();
        let current: Vec<Status> = engine
            .population()
            .agents()
            .iter()
            .map(|agent| agent.status())
            .collect();
        for (before, after) in previous.iter().zip(&current) {
            // Status derives Ord in transition order: S < I < R.
            assert!(before <= after);
        }
        previous = current;
    }
}

#[test]
fn zero_probability_run_only_ever_holds_the_seeded_infections() {
    let history = run_simulation(config(100, 1.5, 0.0, 3)).unwrap();

    for record in &history {
        assert!(record.infected <= INITIAL_INFECTIONS);
    }

    // The seeded agents recover together once their 14-day timers run
    // out, and day 13 is past the early-stop threshold, so the run ends
    // there.
    assert_eq!(history.len(), 14);
    let last = history.last().unwrap();
    assert_eq!(last.day, 13);
    assert_eq!(last.infected, 0);
    assert_eq!(last.recovered, INITIAL_INFECTIONS);
    assert_eq!(last.susceptible, 100 - INITIAL_INFECTIONS);
    for record in &history[..13] {
        assert_eq!(record.infected, INITIAL_INFECTIONS);
    }
}

#[test]
fn certain_transmission_over_full_square_infects_everyone_on_day_zero() {
    let history = run_simulation(config(40, 1.5, 1.0, 19)).unwrap();

    let first = &history[0];
    assert_eq!(first.susceptible, 0);
    assert_eq!(first.infected, 40);
    assert_eq!(first.recovered, 0);

    // Two recovery waves: the seeds on day 13, the day-zero wave on
    // day 14, after which the run stops.
    assert_eq!(history.len(), 15);
    assert_eq!(history[13].infected, 40 - INITIAL_INFECTIONS);
    let last = history.last().unwrap();
    assert_eq!(last.day, 14);
    assert_eq!(last.infected, 0);
    assert_eq!(last.recovered, 40);
}

#[test]
fn day_zero_counts_match_the_seeding() {
    let history = run_simulation(config(20, 0.01, 0.0, 41)).unwrap();

    let first = &history[0];
    assert_eq!(first.day, 0);
    assert_eq!(first.susceptible, 10);
    assert_eq!(first.infected, 10);
    assert_eq!(first.recovered, 0);
}

#[test]
fn identical_seeds_give_identical_histories() {
    let first = run_simulation(config(150, 0.08, 0.3, 97)).unwrap();
    let second = run_simulation(config(150, 0.08, 0.3, 97)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn invalid_parameters_fail_before_any_work() {
    assert!(run_simulation(config(0, 0.01, 0.05, 1)).is_err());
    assert!(run_simulation(config(INITIAL_INFECTIONS - 1, 0.01, 0.05, 1)).is_err());
    assert!(run_simulation(config(100, -0.01, 0.05, 1)).is_err());
    assert!(run_simulation(config(100, 0.01, 1.05, 1)).is_err());

    let mut cfg = config(100, 0.01, 0.05, 1);
    cfg.days = 0;
    assert!(run_simulation(cfg).is_err());
}
