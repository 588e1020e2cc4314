//! End-to-end tests driving the search methods through the public API.

use std::sync::{Arc, Mutex};

use minima::prelude::*;

// =============================================================================
// Simplex search
// =============================================================================

#[test]
fn test_simplex_converges_on_himmelblau_from_origin() {
    let function = Himmelblau::new(2).expect("2 dimensions are supported");
    let area = Area::cube(2, -5.0, 5.0).unwrap();

    let mut method = SimplexSearch::builder()
        .tolerance(1e-9)
        .seed(42)
        .build()
        .unwrap();
    method.set_start(Point::new(vec![0.0, 0.0]));

    let run = method.minimal_with_path(&function, &area).unwrap();
    let nearest = function.closest_known_minimum(&run.best.point).unwrap();

    assert!(
        (run.best.value - nearest.value).abs() < 1e-3,
        "found value {} should be within 1e-3 of catalog value {}",
        run.best.value,
        nearest.value
    );
    assert!(run.steps > 0);
    assert!(!run.path.is_empty());
}

#[test]
fn test_simplex_minimal_and_minimal_with_path_agree() {
    let function = StyblinskiTang::new(2).unwrap();
    let area = Area::cube(2, -5.0, 5.0).unwrap();

    let mut method = SimplexSearch::builder().tolerance(1e-8).build().unwrap();
    method.set_start(Point::new(vec![0.0, 0.0]));

    let bare = method.minimal(&function, &area).unwrap();
    let with_path = method.minimal_with_path(&function, &area).unwrap();
    assert_eq!(bare, with_path.best);
}

#[test]
fn test_simplex_approaches_styblinski_tang_minimum() {
    let function = StyblinskiTang::new(2).unwrap();
    let area = Area::cube(2, -5.0, 5.0).unwrap();

    let mut method = SimplexSearch::builder().tolerance(1e-9).build().unwrap();
    method.set_start(Point::new(vec![-4.0, -4.0]));

    let best = method.minimal(&function, &area).unwrap();
    let nearest = function.closest_known_minimum(&best.point).unwrap();
    assert!((best.value - nearest.value).abs() < 1e-3);
    assert!(best.point.distance_to(&nearest.point).unwrap() < 0.01);
}

// =============================================================================
// Stochastic walk
// =============================================================================

#[test]
fn test_stochastic_walk_step_bounds() {
    let function = Himmelblau::new(2).unwrap();
    let area = Area::cube(2, -5.0, 5.0).unwrap();
    let method = StochasticWalk::builder()
        .min_iterations(100)
        .max_iterations(10_000)
        .tolerance(1e-5)
        .seed(42)
        .build()
        .unwrap();

    for seed in 0..20 {
        method.reseed(seed);
        let run = method.minimal_with_path(&function, &area).unwrap();
        assert!(
            (100..=9_999).contains(&run.steps),
            "seed {seed}: {} steps outside [100, 9999]",
            run.steps
        );
    }
}

#[test]
fn test_stochastic_walk_improves_on_first_incumbent() {
    let function = Rastrigin::new(3).unwrap();
    let area = Area::cube(3, -5.12, 5.12).unwrap();
    let method = StochasticWalk::with_seed(7);

    let run = method.minimal_with_path(&function, &area).unwrap();
    assert!(run.best.value <= function.evaluate(&run.path[0]).unwrap());
    assert_eq!(run.path.last(), Some(&run.best.point));
}

// =============================================================================
// Reproducibility
// =============================================================================

#[test]
fn test_reseeded_runs_are_bit_identical() {
    let function = Himmelblau::new(2).unwrap();
    let area = Area::cube(2, -5.0, 5.0).unwrap();

    let mut method = StochasticWalk::with_seed(1234);
    method.set_start(Point::new(vec![0.5, 0.5]));

    method.reseed(1234);
    let first = method.minimal(&function, &area).unwrap();
    method.reseed(1234);
    let second = method.minimal(&function, &area).unwrap();

    assert_eq!(first.point, second.point);
    assert_eq!(first.value.to_bits(), second.value.to_bits());
}

#[test]
fn test_methods_are_interchangeable_behind_the_trait() {
    let function = Himmelblau::new(2).unwrap();
    let area = Area::cube(2, -5.0, 5.0).unwrap();

    let methods: Vec<Box<dyn SearchMethod>> = vec![
        Box::new(SimplexSearch::with_seed(42)),
        Box::new(StochasticWalk::with_seed(42)),
    ];

    for method in &methods {
        let run = method.minimal_with_path(&function, &area).unwrap();
        assert!(run.best.value.is_finite(), "{} diverged", method.name());
        assert!(run.steps > 0);
    }
}

// =============================================================================
// Tracing
// =============================================================================

struct CollectingTracer {
    messages: Mutex<Vec<String>>,
}

impl Tracer for CollectingTracer {
    fn info(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_owned());
    }
}

#[test]
fn test_tracer_receives_progress_messages() {
    let function = Himmelblau::new(2).unwrap();
    let area = Area::cube(2, -5.0, 5.0).unwrap();
    let tracer = Arc::new(CollectingTracer {
        messages: Mutex::new(Vec::new()),
    });

    let mut method = StochasticWalk::with_seed(3);
    method.set_tracer(tracer.clone());
    method.minimal(&function, &area).unwrap();

    let messages = tracer.messages.lock().unwrap();
    assert!(!messages.is_empty());
    assert!(messages.iter().any(|m| m.starts_with("exiting")));
}
