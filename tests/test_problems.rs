use approx::assert_relative_eq;
use evolab::problem::benchmarks::ProblemId;
use evolab::problem::{Bounds, Direction, Problem};
use evolab::rng::RandomNumberGenerator;
use evolab::EvoError;

#[test]
fn test_repair_is_idempotent_for_every_benchmark() {
    let mut rng = RandomNumberGenerator::from_seed(42);
    for id in ProblemId::ALL {
        let problem = Problem::benchmark(id, 5);
        for _ in 0..20 {
            // Vectors far outside the feasible region.
            let mut v: Vec<f64> = (0..5).map(|_| rng.uniform(-1e6, 1e6)).collect();
            problem.repair(&mut v);
            let once = v.clone();
            problem.repair(&mut v);
            assert_eq!(v, once, "repair must be idempotent for {:?}", id);

            for (value, bound) in v.iter().zip(problem.bounds()) {
                assert!(bound.min <= *value && *value <= bound.max);
            }
            assert!(problem.is_in_bounds(&v));
        }
    }
}

#[test]
fn test_random_solutions_need_no_repair() {
    let mut rng = RandomNumberGenerator::from_seed(7);
    for id in ProblemId::ALL {
        let problem = Problem::benchmark(id, 4);
        for _ in 0..100 {
            let solution = problem.generate_random_solution(&mut rng);
            assert!(problem.is_in_bounds(&solution));
            let mut repaired = solution.clone();
            problem.repair(&mut repaired);
            assert_eq!(repaired, solution);
        }
    }
}

#[test]
fn test_sphere_point_values() {
    let problem = Problem::benchmark(ProblemId::Sphere, 2);
    assert_relative_eq!(problem.evaluate(&[0.0, 0.0]).unwrap(), 0.0);
    assert_relative_eq!(problem.evaluate(&[1.0, 1.0]).unwrap(), 2.0);

    // The optimum value holds at any dimension.
    for dimension in [1, 3, 10] {
        let problem = Problem::benchmark(ProblemId::Sphere, dimension);
        let origin = vec![0.0; dimension];
        assert_relative_eq!(problem.evaluate(&origin).unwrap(), 0.0);
    }
}

#[test]
fn test_rosenbrock_point_values() {
    let problem = Problem::benchmark(ProblemId::Rosenbrock, 2);
    assert_relative_eq!(problem.evaluate(&[1.0, 1.0]).unwrap(), 0.0);
    assert_relative_eq!(problem.evaluate(&[0.0, 0.0]).unwrap(), 1.0);
}

#[test]
fn test_dimension_mismatch_fails_fast() {
    let problem = Problem::benchmark(ProblemId::Rastrigin, 4);
    let result = problem.evaluate(&[0.0; 3]);
    assert!(matches!(
        result,
        Err(EvoError::DimensionMismatch {
            expected: 4,
            actual: 3
        })
    ));
}

#[test]
fn test_all_benchmarks_are_minimization_with_zero_optimum() {
    for id in ProblemId::ALL {
        let problem = Problem::benchmark(id, 3);
        assert!(problem.is_minimization());
        assert_relative_eq!(problem.optimum_value(), 0.0);
        let optimum = problem.optimum().unwrap();
        assert_relative_eq!(problem.evaluate(&optimum).unwrap(), 0.0, epsilon = 1e-10);
    }
}

#[test]
fn test_canonical_bounds() {
    let expectations = [
        (ProblemId::Sphere, -5.12, 5.12),
        (ProblemId::Rastrigin, -5.12, 5.12),
        (ProblemId::Rosenbrock, -2.048, 2.048),
        (ProblemId::Ackley, -32.768, 32.768),
        (ProblemId::Schwefel222, -10.0, 10.0),
        (ProblemId::Schwefel12, -100.0, 100.0),
        (ProblemId::Step, -100.0, 100.0),
    ];
    for (id, min, max) in expectations {
        let problem = Problem::benchmark(id, 2);
        for bound in problem.bounds() {
            assert_relative_eq!(bound.min, min);
            assert_relative_eq!(bound.max, max);
        }
    }
}

#[test]
fn test_problem_lookup_by_string_id() {
    assert_eq!(ProblemId::from_id("sphere"), Some(ProblemId::Sphere));
    assert_eq!(ProblemId::from_id("schwefel-1.2"), Some(ProblemId::Schwefel12));
    assert!(ProblemId::from_id("griewank-prime").is_none());
}

#[test]
fn test_custom_per_dimension_bounds() {
    let bounds = vec![
        Bounds::new(-1.0, 1.0).unwrap(),
        Bounds::new(0.0, 10.0).unwrap(),
    ];
    let problem = Problem::with_bounds(
        ProblemId::Sphere.objective(),
        bounds,
        Direction::Minimize,
    )
    .unwrap();
    assert_eq!(problem.dimension(), 2);

    let mut v = vec![-5.0, 20.0];
    problem.repair(&mut v);
    assert_eq!(v, vec![-1.0, 10.0]);
}

#[test]
fn test_fitness_convention_round_trip() {
    let problem = Problem::benchmark(ProblemId::Sphere, 2);
    let raw = problem.evaluate(&[1.0, 2.0]).unwrap();
    let fitness = problem.fitness(&[1.0, 2.0]).unwrap();
    assert_relative_eq!(fitness, -raw);
    assert_relative_eq!(problem.raw_from_fitness(fitness), raw);
}
