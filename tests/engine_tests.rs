use cipherforge::mapping::Mapping;
use cipherforge::model::NgramModel;
use cipherforge::optimizer::{AcceptancePolicy, Engine, NoProgress, ProgressCallback};
use cipherforge::scorer::{NgramWeights, Scorer};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const CIPHERTEXT: &str = "Wkh txlfn eurzq ira mxpsv ryhu wkh odcb grj, \
                          dqg wkhq wkh grj fkdvhv wkh ira djdlq!";

fn reference_scorer() -> Scorer {
    Scorer::new(Arc::new(NgramModel::reference()), NgramWeights::default())
}

#[test]
fn zero_iterations_returns_the_initial_state() {
    let scorer = reference_scorer();
    let initial = Mapping::identity();
    let baseline = scorer.score(CIPHERTEXT);

    let mut engine = Engine::new(
        &scorer,
        CIPHERTEXT,
        AcceptancePolicy::Metropolis,
        1000.0,
        0.995,
        0,
        Some(1),
    );
    let outcome = engine.run(initial.clone(), &NoProgress);

    assert_eq!(outcome.iterations, 0);
    assert_eq!(outcome.mapping, initial);
    assert_eq!(outcome.plaintext, CIPHERTEXT);
    assert_eq!(outcome.score, baseline);
}

#[test]
fn greedy_never_finishes_below_its_starting_score() {
    let scorer = reference_scorer();
    let baseline = scorer.score(CIPHERTEXT);

    let mut engine = Engine::new(
        &scorer,
        CIPHERTEXT,
        AcceptancePolicy::Greedy,
        0.0,
        1.0,
        2000,
        Some(99),
    );
    let outcome = engine.run(Mapping::identity(), &NoProgress);
    assert!(outcome.score >= baseline);
}

#[test]
fn greedy_best_is_monotone_in_the_budget() {
    // With the same seed, a longer greedy run replays the shorter run's
    // proposals first, so its best can only be equal or better.
    let scorer = reference_scorer();
    let mut short = Engine::new(
        &scorer,
        CIPHERTEXT,
        AcceptancePolicy::Greedy,
        0.0,
        1.0,
        200,
        Some(5),
    );
    let mut long = Engine::new(
        &scorer,
        CIPHERTEXT,
        AcceptancePolicy::Greedy,
        0.0,
        1.0,
        1000,
        Some(5),
    );
    let short_out = short.run(Mapping::identity(), &NoProgress);
    let long_out = long.run(Mapping::identity(), &NoProgress);
    assert!(long_out.score >= short_out.score);
}

#[test]
fn annealing_best_never_drops_below_the_baseline() {
    let scorer = reference_scorer();
    let baseline = scorer.score(CIPHERTEXT);

    let mut engine = Engine::new(
        &scorer,
        CIPHERTEXT,
        AcceptancePolicy::Metropolis,
        1000.0,
        0.99,
        1500,
        Some(123),
    );
    let outcome = engine.run(Mapping::identity(), &NoProgress);
    assert!(outcome.score >= baseline);
}

#[test]
fn annealing_is_reproducible_with_a_seed() {
    let scorer = reference_scorer();
    let run = |seed| {
        let mut engine = Engine::new(
            &scorer,
            CIPHERTEXT,
            AcceptancePolicy::Metropolis,
            800.0,
            0.995,
            1000,
            Some(seed),
        );
        engine.run(Mapping::frequency_seed(CIPHERTEXT), &NoProgress)
    };
    let a = run(77);
    let b = run(77);
    let c = run(78);
    assert_eq!(a.score, b.score);
    assert_eq!(a.mapping, b.mapping);
    assert_eq!(a.plaintext, b.plaintext);
    // Different seed explores a different trajectory (overwhelmingly).
    assert!(a.mapping != c.mapping || a.score == c.score);
}

#[test]
fn annealing_stops_at_the_temperature_floor() {
    let scorer = reference_scorer();
    // 0.2 * 0.5^n drops below 0.1 after one cooling step.
    let mut engine = Engine::new(
        &scorer,
        CIPHERTEXT,
        AcceptancePolicy::Metropolis,
        0.2,
        0.5,
        100_000,
        Some(3),
    );
    let outcome = engine.run(Mapping::identity(), &NoProgress);
    assert!(outcome.iterations < 10);
}

#[test]
fn degenerate_ciphertext_runs_without_error() {
    let scorer = reference_scorer();
    for degenerate in ["", "12345 !?., \n\t"] {
        let mut engine = Engine::new(
            &scorer,
            degenerate,
            AcceptancePolicy::Metropolis,
            1000.0,
            0.995,
            500,
            Some(11),
        );
        let outcome = engine.run(Mapping::identity(), &NoProgress);
        assert_eq!(outcome.score, 0.0);
        assert_eq!(outcome.plaintext, degenerate);
    }
}

struct StopAfter {
    polls: AtomicUsize,
    limit: usize,
}

impl ProgressCallback for StopAfter {
    fn on_progress(&self, _iteration: usize, _best_score: f64) -> bool {
        self.polls.fetch_add(1, Ordering::SeqCst) < self.limit
    }
}

#[test]
fn cancellation_reports_best_so_far() {
    let scorer = reference_scorer();
    let mut engine = Engine::new(
        &scorer,
        CIPHERTEXT,
        AcceptancePolicy::Metropolis,
        1000.0,
        0.9999,
        1_000_000,
        Some(4),
    )
    .with_progress_interval(100);

    let callback = StopAfter {
        polls: AtomicUsize::new(0),
        limit: 3,
    };
    let outcome = engine.run(Mapping::identity(), &callback);

    // Cancelled on the fourth poll, i.e. at iteration 300.
    assert_eq!(outcome.iterations, 300);
    assert!(outcome.score >= 0.0);
}
