use nichega::cone::{volume, ConeConfig, ConeGa, ConeState, Objective, ObjectiveState};
use nichega::ga::Bounds;
use nichega::random::create_rng;
use nichega::GaError;
use proptest::prelude::*;

#[test]
fn reference_cone_passes_unmodified() {
    assert!((volume(5.0, 10.0) - 261.80).abs() < 0.01);
    let ga = ConeGa::new(ConeConfig::default()).unwrap();
    let mut rng = create_rng(42);
    assert_eq!(
        ga.repairer().repair(5.0, 10.0, None, &mut rng),
        Ok((5.0, 10.0))
    );
}

#[test]
fn full_run_stays_feasible_and_improves() {
    let config = ConeConfig::default().with_max_iter(500).with_seed(42);
    let result = ConeGa::new(config).unwrap().run().unwrap();

    for cell in &result.population {
        assert!(volume(cell.x, cell.y) > 200.0);
    }
    for cell in &result.best_gene_list {
        assert!(volume(cell.x, cell.y) > 200.0);
        assert!(result.best.fitness >= cell.fitness);
    }
    assert!(result.report().to_string().contains("All best volume"));
}

#[test]
fn objective_switching_sequence() {
    let mut state = ObjectiveState::new(10);
    let mut value = 0.0;
    state.observe(value);

    let mut feed = |state: &mut ObjectiveState, n: usize| {
        for _ in 0..n {
            value -= 1.0;
            state.observe(value);
        }
    };

    feed(&mut state, 11);
    assert_eq!(state.objective(), Objective::BaseArea);
    feed(&mut state, 11);
    assert_eq!(state.objective(), Objective::SurfaceArea);
    feed(&mut state, 11);
    assert_eq!(state.objective(), Objective::BaseArea);
}

#[test]
fn unreachable_volume_is_rejected_up_front() {
    let config = ConeConfig::default().with_bounds(Bounds::new(0.0, 2.0), Bounds::new(0.0, 2.0));
    assert!(matches!(ConeGa::new(config), Err(GaError::InvalidConfig(_))));
}

#[test]
fn exhausted_repair_budget_fails_the_run() {
    // Feasible only in a thin corner of the box; one resample per repair
    // cannot reliably reach it.
    let config = ConeConfig::default()
        .with_bounds(Bounds::new(0.0, 10.0), Bounds::new(0.0, 20.0))
        .with_min_volume(2090.0)
        .with_max_repair_attempts(1)
        .with_population_size(200)
        .with_seed(42);
    let ga = ConeGa::new(config).unwrap();
    let mut rng = create_rng(42);
    assert!(matches!(
        ga.initialize(&mut rng),
        Err(GaError::ConstraintInfeasible { attempts: 1, .. })
    ));
}

#[test]
fn first_generation_repairs_by_resampling() {
    let ga = ConeGa::new(ConeConfig::default()).unwrap();
    let mut rng = create_rng(5);
    let mut state = ConeState::new(10);
    assert!(state.tracker.known_best().is_none());
    let pop = ga.initialize(&mut rng).unwrap();
    let next = ga.step(&pop, &mut state, &mut rng).unwrap();
    assert!(state.tracker.known_best().is_some());
    assert!(next.iter().all(|c| volume(c.x, c.y) > 200.0));
}

proptest! {
    #[test]
    fn initial_population_is_feasible_and_bounded(seed in any::<u64>()) {
        let ga = ConeGa::new(ConeConfig::default().with_population_size(20)).unwrap();
        let mut rng = create_rng(seed);
        for cell in ga.initialize(&mut rng).unwrap() {
            prop_assert!((0.0..=10.0).contains(&cell.x));
            prop_assert!((0.0..=20.0).contains(&cell.y));
            prop_assert!(volume(cell.x, cell.y) > 200.0);
        }
    }
}
