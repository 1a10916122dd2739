//! Property tests for the tour model and the GA operators.

use proptest::prelude::*;
use std::collections::HashSet;
use tsp_ga::ga::operators::{order_crossover, order_crossover_with_cuts, swap_mutation};
use tsp_ga::ga::{GaConfig, GeneticAlgorithm};
use tsp_ga::random::create_rng;
use tsp_ga::tsp::{CityRegistry, Point, Population, Tour};

fn registry_strategy(max_cities: usize) -> impl Strategy<Value = CityRegistry> {
    prop::collection::vec((0.0f64..200.0, 0.0f64..200.0), 1..=max_cities)
        .prop_map(|coords| {
            coords
                .into_iter()
                .map(|(x, y)| Point::new(x, y))
                .collect::<CityRegistry>()
        })
}

fn is_valid_permutation(tour: &Tour<'_>) -> bool {
    let Ok(cities) = tour.cities() else {
        return false;
    };
    let n = tour.registry().len();
    let set: HashSet<usize> = cities.iter().copied().collect();
    cities.len() == n && set.len() == n && cities.iter().all(|&c| c < n)
}

proptest! {
    #[test]
    fn random_permutation_is_valid(registry in registry_strategy(40), seed in any::<u64>()) {
        let tour = Tour::random(&registry, &mut create_rng(seed));
        prop_assert!(is_valid_permutation(&tour));
    }

    #[test]
    fn crossover_yields_permutation(registry in registry_strategy(40), seed in any::<u64>()) {
        let mut rng = create_rng(seed);
        let p1 = Tour::random(&registry, &mut rng);
        let p2 = Tour::random(&registry, &mut rng);
        let child = order_crossover(&p1, &p2, &mut rng).unwrap();
        prop_assert!(is_valid_permutation(&child));
    }

    #[test]
    fn crossover_with_equal_cuts_is_parent2(
        registry in registry_strategy(30),
        seed in any::<u64>(),
        cut in any::<prop::sample::Index>(),
    ) {
        let mut rng = create_rng(seed);
        let p1 = Tour::random(&registry, &mut rng);
        let p2 = Tour::random(&registry, &mut rng);
        let cut = cut.index(registry.len());
        let child = order_crossover_with_cuts(&p1, &p2, cut, cut).unwrap();
        prop_assert_eq!(child.cities().unwrap(), p2.cities().unwrap());
    }

    #[test]
    fn mutation_preserves_permutation(
        registry in registry_strategy(40),
        seed in any::<u64>(),
        rate in 0.0f64..=1.0,
    ) {
        let mut rng = create_rng(seed);
        let mut tour = Tour::random(&registry, &mut rng);
        swap_mutation(&mut tour, rate, &mut rng).unwrap();
        prop_assert!(is_valid_permutation(&tour));
    }

    #[test]
    fn length_invariant_under_rotation_and_reversal(
        registry in registry_strategy(30),
        seed in any::<u64>(),
        shift in any::<prop::sample::Index>(),
    ) {
        let tour = Tour::random(&registry, &mut create_rng(seed));
        let cities = tour.cities().unwrap();
        let length = tour.length().unwrap();

        let mut rotated = cities.clone();
        rotated.rotate_left(shift.index(cities.len()));
        let rotated = Tour::from_cities(&registry, rotated).unwrap();
        prop_assert!((rotated.length().unwrap() - length).abs() <= 1e-9 * length.max(1.0));

        let mut reversed = cities;
        reversed.reverse();
        let reversed = Tour::from_cities(&registry, reversed).unwrap();
        prop_assert!((reversed.length().unwrap() - length).abs() <= 1e-9 * length.max(1.0));
    }

    #[test]
    fn fitness_is_reciprocal_length(registry in registry_strategy(30), seed in any::<u64>()) {
        let tour = Tour::random(&registry, &mut create_rng(seed));
        let length = tour.length().unwrap();
        prop_assume!(length > 0.0);
        prop_assert_eq!(tour.fitness().unwrap(), 1.0 / length);
    }

    #[test]
    fn single_tour_population_returns_it(registry in registry_strategy(20), seed in any::<u64>()) {
        let tour = Tour::random(&registry, &mut create_rng(seed));
        prop_assume!(tour.length().unwrap() > 0.0);
        let mut population = Population::empty(&registry, 1);
        population.save(0, tour.clone()).unwrap();
        prop_assert_eq!(population.get_fittest().unwrap(), &tour);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn elitism_best_fitness_never_decreases(
        coords in prop::collection::vec((0u32..200, 0u32..200), 5..=25),
        seed in any::<u64>(),
    ) {
        let registry: CityRegistry = coords
            .into_iter()
            .map(|(x, y)| Point::new(x as f64, y as f64))
            .collect();
        let mut rng = create_rng(seed);
        let mut population = Population::random(&registry, 20, &mut rng);
        prop_assume!(population.get_fittest().is_ok());

        let config = GaConfig::default().with_mutation_rate(0.1);
        let engine = GeneticAlgorithm::new(&registry, &config).unwrap();
        let mut best = population.get_fittest().unwrap().fitness().unwrap();
        for _ in 0..15 {
            population = engine.evolve_population(&population, &mut rng).unwrap();
            let current = population.get_fittest().unwrap().fitness().unwrap();
            prop_assert!(current >= best);
            best = current;
        }
    }
}

#[test]
fn square_perimeter_is_optimal() {
    let registry: CityRegistry = [(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]
        .into_iter()
        .map(|(x, y)| Point::new(x, y))
        .collect();

    let mut population = Population::empty(&registry, 1);
    population
        .save(0, Tour::from_cities(&registry, vec![0, 1, 2, 3]).unwrap())
        .unwrap();
    let fittest = population.get_fittest().unwrap();
    assert!((fittest.length().unwrap() - 40.0).abs() < 1e-12);

    // Every ordering of the four corners is at least as long.
    for a in 0..4 {
        for b in 0..4 {
            for c in 0..4 {
                for d in 0..4 {
                    let order = vec![a, b, c, d];
                    let distinct: HashSet<usize> = order.iter().copied().collect();
                    if distinct.len() < 4 {
                        continue;
                    }
                    let tour = Tour::from_cities(&registry, order).unwrap();
                    assert!(tour.length().unwrap() >= 40.0 - 1e-12);
                }
            }
        }
    }
}
