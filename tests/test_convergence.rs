//! Seeded end-to-end convergence runs for every engine. The assertions
//! are statistical by nature, so each one takes the best of a few seeded
//! runs instead of pinning a single stochastic trajectory.

use evolab::algorithm::params::{
    AlgorithmParams, AnnealingParams, BeeColonyParams, DeStrategy,
    DifferentialEvolutionParams, EsScheme, EvolutionStrategyParams, GeneticParams,
    ParticleSwarmParams, SelectionMethod,
};
use evolab::algorithm::{create, Algorithm, AlgorithmId};
use evolab::problem::benchmarks::ProblemId;
use evolab::problem::Problem;

/// Runs the engine to convergence for each seed and returns the best raw
/// objective value reached over all of them.
fn best_raw_over_seeds(
    id: AlgorithmId,
    make_params: impl Fn(u64) -> AlgorithmParams,
    seeds: &[u64],
) -> f64 {
    seeds
        .iter()
        .map(|&seed| {
            let problem = Problem::benchmark(ProblemId::Sphere, 2);
            let mut engine = create(id, problem, Some(make_params(seed))).unwrap();
            engine.run().unwrap();
            engine.best_raw().unwrap()
        })
        .fold(f64::INFINITY, f64::min)
}

#[test]
fn test_genetic_algorithm_solves_sphere() {
    // The reference scenario: Sphere 2D, population 50, 100 generations.
    let best = best_raw_over_seeds(
        AlgorithmId::Genetic,
        |seed| {
            let mut params = GeneticParams::default();
            params.common.population_size = 50;
            params.common.max_generations = 100;
            params.common.seed = Some(seed);
            AlgorithmParams::Genetic(params)
        },
        &[42, 1337, 2024],
    );
    assert!(best < 0.1, "GA best on sphere was {}", best);
}

#[test]
fn test_genetic_algorithm_selection_variants_solve_sphere() {
    for selection in [
        SelectionMethod::Tournament { size: 3 },
        SelectionMethod::RouletteWheel,
        SelectionMethod::Rank,
    ] {
        let best = best_raw_over_seeds(
            AlgorithmId::Genetic,
            |seed| {
                let mut params = GeneticParams::default();
                params.common.seed = Some(seed);
                params.selection = selection.clone();
                AlgorithmParams::Genetic(params)
            },
            &[5, 6, 7],
        );
        assert!(best < 0.5, "{:?} best on sphere was {}", selection, best);
    }
}

#[test]
fn test_evolution_strategy_solves_sphere() {
    for scheme in [EsScheme::Plus, EsScheme::Comma] {
        let best = best_raw_over_seeds(
            AlgorithmId::EvolutionStrategy,
            |seed| {
                let mut params = EvolutionStrategyParams::default();
                params.common.max_generations = 150;
                params.common.seed = Some(seed);
                params.scheme = scheme;
                AlgorithmParams::EvolutionStrategy(params)
            },
            &[8, 9, 10],
        );
        assert!(best < 0.1, "{:?} best on sphere was {}", scheme, best);
    }
}

#[test]
fn test_differential_evolution_solves_sphere() {
    let best = best_raw_over_seeds(
        AlgorithmId::DifferentialEvolution,
        |seed| {
            let mut params = DifferentialEvolutionParams::default();
            params.common.max_generations = 150;
            params.common.seed = Some(seed);
            params.strategy = DeStrategy::Rand1;
            AlgorithmParams::DifferentialEvolution(params)
        },
        &[11, 12, 13],
    );
    assert!(best < 0.1, "DE best on sphere was {}", best);
}

#[test]
fn test_particle_swarm_solves_sphere() {
    let best = best_raw_over_seeds(
        AlgorithmId::ParticleSwarm,
        |seed| {
            let mut params = ParticleSwarmParams::default();
            params.common.max_generations = 150;
            params.common.seed = Some(seed);
            AlgorithmParams::ParticleSwarm(params)
        },
        &[14, 15, 16],
    );
    assert!(best < 0.1, "PSO best on sphere was {}", best);
}

#[test]
fn test_bee_colony_solves_sphere() {
    let best = best_raw_over_seeds(
        AlgorithmId::BeeColony,
        |seed| {
            let mut params = BeeColonyParams::default();
            params.common.max_generations = 200;
            params.common.seed = Some(seed);
            AlgorithmParams::BeeColony(params)
        },
        &[17, 18, 19],
    );
    assert!(best < 0.5, "ABC best on sphere was {}", best);
}

#[test]
fn test_simulated_annealing_improves_on_sphere() {
    let best = best_raw_over_seeds(
        AlgorithmId::SimulatedAnnealing,
        |seed| {
            let mut params = AnnealingParams::default();
            params.common.max_generations = 3000;
            params.common.seed = Some(seed);
            params.initial_temperature = 10.0;
            params.cooling_rate = 0.995;
            AlgorithmParams::Annealing(params)
        },
        &[20, 21, 22],
    );
    // Single-point search on a 2D sphere: the best-so-far should land
    // well inside the unit basin.
    assert!(best < 1.0, "SA best on sphere was {}", best);
}

#[test]
fn test_run_reports_convergence_for_budgeted_engines() {
    for id in [
        AlgorithmId::Genetic,
        AlgorithmId::ParticleSwarm,
        AlgorithmId::BeeColony,
        AlgorithmId::SimulatedAnnealing,
    ] {
        let problem = Problem::benchmark(ProblemId::Sphere, 2);
        let mut engine = create(id, problem, None).unwrap();
        engine.run().unwrap();
        assert!(engine.has_converged(), "{:?} did not converge", id);
    }
}

#[test]
fn test_rastrigin_end_to_end_improves() {
    // A multimodal sanity check: the engines need not solve Rastrigin,
    // but a full run must improve on the initial population's best.
    for id in AlgorithmId::ALL {
        let problem = Problem::benchmark(ProblemId::Rastrigin, 2);
        let mut params = AlgorithmParams::default_for(id);
        match &mut params {
            AlgorithmParams::Genetic(p) => p.common.seed = Some(23),
            AlgorithmParams::EvolutionStrategy(p) => p.common.seed = Some(23),
            AlgorithmParams::DifferentialEvolution(p) => p.common.seed = Some(23),
            AlgorithmParams::ParticleSwarm(p) => p.common.seed = Some(23),
            AlgorithmParams::BeeColony(p) => p.common.seed = Some(23),
            AlgorithmParams::Annealing(p) => p.common.seed = Some(23),
        }
        let mut engine = create(id, problem, Some(params)).unwrap();
        engine.initialize_population().unwrap();
        let initial = engine.best_raw().unwrap();
        engine.run().unwrap();
        let final_best = engine.best_raw().unwrap();
        assert!(
            final_best <= initial,
            "{:?} finished worse than it started",
            id
        );
    }
}
