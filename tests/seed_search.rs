//! End-to-end behaviour of the engine on the inverse-hash search.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_evolve::evolve::{
    EvolveConfig, EvolveRunner, FirstParent, Phenotype, Population, Silent,
};
use u_evolve::seed::{java_hash, BestFitnessReporter, SeedGenotype, SinglePointSplice};
use u_evolve::EvolveError;

fn seeds(values: &[&str]) -> Vec<Phenotype<SeedGenotype>> {
    values
        .iter()
        .map(|v| Phenotype::from(SeedGenotype::from_bytes(v.as_bytes()).unwrap()))
        .collect()
}

fn values(inds: &[Phenotype<SeedGenotype>]) -> Vec<String> {
    inds.iter().map(|p| p.genotype().to_string()).collect()
}

// ---- Selection ----

#[test]
fn get_best_follows_first_match_replacement() {
    // Target 100; 'n'=110, 'i'=105, 'e'=101, 'g'=103, 'f'=102
    // gives distances [10, 5, 1, 3, 2].
    let pop = Population::from_individuals(seeds(&["n", "i", "e", "g", "f"]), 100, FirstParent).unwrap();
    assert_eq!(values(&pop.get_best(2)), vec!["e", "f"]);

    // Distances [3, 10, 2]: the displaced entry is the fitter 'g'.
    let pop = Population::from_individuals(seeds(&["g", "n", "f"]), 100, FirstParent).unwrap();
    assert_eq!(values(&pop.get_best(2)), vec!["n", "f"]);
}

// ---- Elitism ----

#[test]
fn elites_survive_verbatim() {
    let mut rng = StdRng::seed_from_u64(21);
    let mut pop: Population<SeedGenotype> = Population::new(40, 1_000_000, &mut rng).unwrap();

    for _ in 0..25 {
        let elites = pop.get_best(6);
        pop.do_gen(6, &mut rng).unwrap();

        let next = pop.individuals();
        for elite in &elites {
            let survivor = next
                .iter()
                .find(|p| *p == elite)
                .expect("elite missing from next generation");
            assert_eq!(survivor.genotype().hash_code(), elite.genotype().hash_code());
        }
        assert_eq!(&next[34..], elites.as_slice());
    }
}

#[test]
fn best_distance_never_worsens() {
    let mut reporter = BestFitnessReporter::new();
    let mut rng = StdRng::seed_from_u64(8);
    let mut pop: Population<SeedGenotype> = Population::new(60, -77_000, &mut rng).unwrap();
    pop.run_for_generations(50, 5, &mut rng, &mut reporter).unwrap();

    for pair in reporter.history().windows(2) {
        assert!(pair[1] <= pair[0], "best distance grew: {pair:?}");
    }
}

// ---- Termination ----

#[test]
fn reaches_achievable_target_before_cap() {
    let target = java_hash(b"A");
    for seed in [1u64, 2, 3] {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut pop: Population<SeedGenotype> = Population::new(1000, target, &mut rng).unwrap();
        let outcome = pop.run_for_generations(500, 100, &mut rng, &mut Silent).unwrap();

        assert!(outcome.optimal, "seed {seed}: no optimum in 500 generations");
        assert!(outcome.generations < 500);
        assert_eq!(pop.best().genotype().hash_code(), target);
    }
}

#[test]
fn runner_reports_every_generation() {
    let config = EvolveConfig::new(30, 4).with_max_generations(12).with_seed(99);
    let mut generations = Vec::new();
    let mut observer = |g: u64, inds: &[Phenotype<SeedGenotype>], _: i32| {
        assert_eq!(inds.len(), 30);
        generations.push(g);
    };

    let result =
        EvolveRunner::run::<SeedGenotype, _>(&config, i32::MAX, &mut observer).unwrap();

    let expected: Vec<u64> = (0..=result.generations).collect();
    assert_eq!(generations, expected);
    assert!(result.generations <= 12);
}

#[test]
fn splice_policy_plugs_into_the_runner() {
    let config = EvolveConfig::new(50, 5).with_max_generations(20).with_seed(5);
    let result = EvolveRunner::run_with_cancel::<SeedGenotype, _, _>(
        &config,
        java_hash(b"Hi"),
        SinglePointSplice,
        &mut Silent,
        None,
    )
    .unwrap();

    assert!(result.generations <= 20);
    assert!((1..=39).contains(&result.best.genotype().len()));
}

// ---- Preconditions ----

#[test]
fn breed_count_equal_to_population_is_rejected() {
    let config = EvolveConfig::new(10, 10).with_seed(1);
    let err = EvolveRunner::run::<SeedGenotype, _>(&config, 0, &mut Silent).unwrap_err();
    assert!(matches!(err, EvolveError::InvalidConfig(_)));
}

#[test]
fn breed_count_below_two_is_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut pop: Population<SeedGenotype> = Population::new(10, 0, &mut rng).unwrap();
    let before = pop.individuals().to_vec();

    assert!(pop.run(1, &mut rng, &mut Silent).is_err());
    assert!(pop.run_for_generations(5, 0, &mut rng, &mut Silent).is_err());
    assert_eq!(pop.individuals(), before.as_slice());
}

// ---- Properties ----

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn population_size_is_invariant(
        count in 3usize..60,
        breed_frac in 0.0f64..1.0,
        target in any::<i32>(),
        seed in any::<u64>(),
    ) {
        let breed_count = 2 + ((count - 3) as f64 * breed_frac) as usize;
        prop_assume!(breed_count < count);

        let mut rng = StdRng::seed_from_u64(seed);
        let mut pop: Population<SeedGenotype> = Population::new(count, target, &mut rng).unwrap();
        let mut sizes = Vec::new();
        let mut observer = |_: u64, inds: &[Phenotype<SeedGenotype>], _: i32| sizes.push(inds.len());

        pop.run_for_generations(5, breed_count, &mut rng, &mut observer).unwrap();

        prop_assert!(sizes.iter().all(|&n| n == count));
        prop_assert_eq!(pop.count(), count);
        for ind in pop.individuals() {
            let g = ind.genotype();
            prop_assert!((1..=39).contains(&g.len()));
            prop_assert_eq!(g.hash_code(), java_hash(g.as_bytes()));
        }
    }
}
