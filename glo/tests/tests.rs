#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::BufReader;
    use std::path::Path;

    use float_cmp::approx_eq;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand::prelude::SmallRng;
    use test_case::test_case;

    use glo::config::GLOConfig;
    use clap::Parser;

    use glo::io;
    use glo::io::cli::Cli;
    use glo::io::output::GLOOutput;
    use glo::opt::crossover::crossover;
    use glo::opt::mutation::Mutator;
    use glo::opt::population::Population;
    use glo::samplers::uniform_placement_sampler::place_random;
    use glo::{GLOError, GLOptimizer, init_rng, optimize};
    use roomplan::InvalidInput;
    use roomplan::entities::{FurnitureSpec, Instance, RoomBounds, Rotation};
    use roomplan::eval::Evaluator;
    use roomplan::io::import::import_instance;
    use roomplan::util::assertions;

    fn init_test_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .is_test(true)
            .try_init();
    }

    fn bedroom() -> (Vec<FurnitureSpec>, RoomBounds) {
        let furniture = vec![
            FurnitureSpec::try_new("bed", 6.5, 5.0).unwrap(),
            FurnitureSpec::try_new("chair", 2.5, 2.5).unwrap(),
        ];
        (furniture, RoomBounds::try_new(12.0, 10.0).unwrap())
    }

    fn bedroom_instance() -> Instance {
        let (furniture, room) = bedroom();
        Instance::new(room, furniture).unwrap()
    }

    #[test_case(0)]
    #[test_case(1)]
    #[test_case(1234)]
    fn random_placements_stay_in_sampling_range(seed: u64) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let furniture = vec![
            FurnitureSpec::try_new("bed", 6.5, 5.0).unwrap(),
            FurnitureSpec::try_new("sofa", 14.0, 3.0).unwrap(),
            FurnitureSpec::try_new("wardrobe", 4.0, 10.0).unwrap(),
        ];
        let instance = Instance::new(RoomBounds::try_new(12.0, 10.0).unwrap(), furniture).unwrap();

        for _ in 0..200 {
            let layout = place_random(&instance, &mut rng);
            assert!(assertions::layout_matches_instance(&layout, &instance));
            assert!(assertions::layout_within_sampling_range(&layout, &instance));
            for pf in &layout {
                let max_x = f64::max(0.1, 12.0 - pf.length());
                let max_y = f64::max(0.1, 10.0 - pf.width());
                assert!(pf.x >= 0.0 && pf.x <= max_x);
                assert!(pf.y >= 0.0 && pf.y <= max_y);
                assert!([0, 90, 180, 270].contains(&pf.rotation.degrees()));
            }
        }
    }

    #[test]
    fn all_rotations_are_sampled() {
        let mut rng = SmallRng::seed_from_u64(0);
        let instance = bedroom_instance();
        let rotations = (0..200)
            .flat_map(|_| place_random(&instance, &mut rng).placements().to_vec())
            .map(|pf| pf.rotation)
            .unique()
            .count();
        assert_eq!(rotations, Rotation::ALL.len());
    }

    #[test]
    fn crossover_with_itself_is_identity() {
        let mut rng = SmallRng::seed_from_u64(3);
        let instance = bedroom_instance();
        for _ in 0..20 {
            let parent = place_random(&instance, &mut rng);
            assert_eq!(crossover(&parent, &parent, &mut rng), parent);
        }
    }

    #[test]
    fn crossover_copies_every_position_from_a_parent() {
        let mut rng = SmallRng::seed_from_u64(5);
        let instance = bedroom_instance();
        let lhs = place_random(&instance, &mut rng);
        let rhs = place_random(&instance, &mut rng);
        let child = crossover(&lhs, &rhs, &mut rng);

        assert_eq!(child.len(), lhs.len());
        for (i, pf) in child.iter().enumerate() {
            assert!(*pf == lhs[i] || *pf == rhs[i]);
        }
    }

    #[test]
    fn mutation_with_zero_rate_is_identity() {
        let mut rng = SmallRng::seed_from_u64(11);
        let instance = bedroom_instance();
        let mutator = Mutator::new(0.0, 0.5).unwrap();
        for _ in 0..20 {
            let layout = place_random(&instance, &mut rng);
            assert_eq!(mutator.mutate(&layout, instance.room(), &mut rng), layout);
        }
    }

    #[test]
    fn mutation_keeps_rotation_and_sampling_range() {
        let mut rng = SmallRng::seed_from_u64(13);
        let instance = bedroom_instance();
        let mutator = Mutator::new(1.0, 3.0).unwrap();
        let layout = place_random(&instance, &mut rng);
        let mut mutated = layout.clone();
        for _ in 0..100 {
            mutated = mutator.mutate(&mutated, instance.room(), &mut rng);
            assert!(assertions::layout_within_sampling_range(&mutated, &instance));
            for (before, after) in layout.iter().zip(mutated.iter()) {
                assert_eq!(before.rotation, after.rotation);
                assert_eq!(before.spec, after.spec);
            }
        }
        assert_ne!(mutated, layout);
    }

    #[test_case(-0.1, 0.5; "negative rate")]
    #[test_case(1.5, 0.5; "rate above one")]
    #[test_case(0.3, -1.0; "negative std dev")]
    #[test_case(0.3, f64::NAN; "nan std dev")]
    fn invalid_mutator_is_rejected(rate: f64, std_dev: f64) {
        assert!(Mutator::new(rate, std_dev).is_err());
    }

    #[test]
    fn ranked_population_is_sorted_best_first() {
        let mut rng = SmallRng::seed_from_u64(17);
        let instance = bedroom_instance();
        let population = Population::random(&instance, 30, &mut rng);
        let ranked = population.rank(&instance, &Evaluator::default());

        assert_eq!(ranked.len(), 30);
        assert!(
            ranked
                .scored_layouts()
                .windows(2)
                .all(|w| w[0].fitness >= w[1].fitness)
        );
        assert_eq!(ranked.best().fitness, ranked.scored_layouts()[0].fitness);
        assert_eq!(ranked.elites(6).count(), 6);
        assert_eq!(ranked.parent_pool(15).len(), 15);
    }

    #[test_case(0; "seed 0")]
    #[test_case(42; "seed 42")]
    fn bedroom_layout_is_feasible(seed: u64) {
        init_test_logger();
        let (furniture, room) = bedroom();
        let solution = optimize(furniture, room, 20, 20, SmallRng::seed_from_u64(seed)).unwrap();

        assert_eq!(solution.layout.len(), 2);
        assert_eq!(solution.layout[0].name(), "bed");
        assert_eq!(solution.layout[1].name(), "chair");
        assert_eq!(solution.breakdown.overlapping_pairs, 0);
        assert_eq!(solution.breakdown.out_of_bounds, 0);
        assert!(solution.fitness().value() > 100.0);
        assert_eq!(solution.n_evaluations, 20 * 21);
    }

    #[test]
    fn oversized_piece_uses_the_range_floor() {
        init_test_logger();
        let sofa = FurnitureSpec::try_new("sofa", 8.0, 3.0).unwrap();
        let room = RoomBounds::try_new(3.0, 3.0).unwrap();
        let solution = optimize(vec![sofa], room, 20, 20, SmallRng::seed_from_u64(0)).unwrap();

        let placed = &solution.layout[0];
        assert!((0.0..=0.1).contains(&placed.x));
        assert!((0.0..=0.1).contains(&placed.y));
        assert_eq!(solution.breakdown.out_of_bounds, 1);
        // out of bounds penalty, offset by the two wall bonuses
        assert!(approx_eq!(f64, solution.fitness().value(), 85.0));
    }

    #[test]
    fn nothing_to_place_is_reported() {
        let (_, room) = bedroom();
        let result = optimize(vec![], room, 20, 20, SmallRng::seed_from_u64(0));
        assert!(matches!(
            result,
            Err(GLOError::InvalidInput(InvalidInput::NothingToPlace))
        ));
    }

    #[test]
    fn empty_population_is_rejected() {
        let (furniture, room) = bedroom();
        let result = optimize(furniture, room, 0, 20, SmallRng::seed_from_u64(0));
        assert!(matches!(
            result,
            Err(GLOError::InvalidInput(InvalidInput::PopulationSize(0)))
        ));
    }

    #[test]
    fn zero_generations_returns_best_initial_layout() {
        let (furniture, room) = bedroom();
        let solution = optimize(furniture, room, 10, 0, SmallRng::seed_from_u64(0)).unwrap();
        assert_eq!(solution.generations, 0);
        assert_eq!(solution.n_evaluations, 10);
        assert_eq!(solution.layout.len(), 2);
    }

    #[test_case(1)]
    #[test_case(2)]
    #[test_case(3)]
    #[test_case(4)]
    fn tiny_populations_still_evolve(pop_size: usize) {
        let (furniture, room) = bedroom();
        let solution = optimize(furniture, room, pop_size, 10, SmallRng::seed_from_u64(0)).unwrap();
        assert_eq!(solution.layout.len(), 2);
        assert!(solution.fitness().value() >= 0.0);
        // every generation is refilled to full size, even when no two parents can be drawn
        assert_eq!(solution.n_evaluations, pop_size * (10 + 1));
        assert!(assertions::layout_within_sampling_range(
            &solution.layout,
            &bedroom_instance()
        ));
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let run = |seed| {
            let (furniture, room) = bedroom();
            optimize(furniture, room, 30, 15, SmallRng::seed_from_u64(seed)).unwrap()
        };
        let first = run(7);
        let second = run(7);
        assert_eq!(first.layout, second.layout);
        assert_eq!(first.fitness(), second.fitness());
    }

    #[test]
    fn best_fitness_never_decreases_with_more_generations() {
        // elitism carries the best layout over, so extending a run can only help
        let instance = bedroom_instance();
        let mut config = GLOConfig {
            pop_size: 20,
            ..GLOConfig::default()
        };

        let mut best = 0.0;
        for generations in [0, 5, 10, 20] {
            config.generations = generations;
            let mut optimizer =
                GLOptimizer::new(instance.clone(), config, SmallRng::seed_from_u64(9)).unwrap();
            let fitness = optimizer.solve().fitness().value();
            assert!(fitness >= best);
            best = fitness;
        }
    }

    #[test]
    fn default_config_is_valid() {
        let config = GLOConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.n_elites(), 10);
        assert_eq!(
            GLOConfig {
                pop_size: 4,
                ..config
            }
            .n_elites(),
            1
        );
    }

    #[test_case(GLOConfig { pop_size: 0, ..GLOConfig::default() }; "no population")]
    #[test_case(GLOConfig { crossover_rate: 1.2, ..GLOConfig::default() }; "crossover rate")]
    #[test_case(GLOConfig { mutation_rate: -0.3, ..GLOConfig::default() }; "mutation rate")]
    #[test_case(GLOConfig { mutation_std_dev: f64::INFINITY, ..GLOConfig::default() }; "mutation std dev")]
    fn invalid_config_is_rejected(config: GLOConfig) {
        assert!(config.validate().is_err());
        assert!(GLOptimizer::new(bedroom_instance(), config, SmallRng::seed_from_u64(0)).is_err());
    }

    #[test]
    fn config_file_parses() {
        let file = File::open(Path::new("../assets/config_glo.json")).unwrap();
        let config: GLOConfig = serde_json::from_reader(BufReader::new(file)).unwrap();
        assert_eq!(config.prng_seed, Some(42));
        assert_eq!(config.pop_size, 80);
        assert_eq!(config.fitness, roomplan::eval::FitnessConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn command_line_overrides_the_config() {
        let args = Cli::try_parse_from([
            "glo",
            "--input-file",
            "../assets/bedroom.json",
            "--solution-folder",
            "solutions",
            "--pop-size",
            "12",
            "-g",
            "3",
        ])
        .unwrap();
        let config = args.apply_overrides(GLOConfig::default());

        assert_eq!(config.pop_size, 12);
        assert_eq!(config.generations, 3);
        assert_eq!(config.prng_seed, GLOConfig::default().prng_seed);
        assert_eq!(args.log_level, log::LevelFilter::Info);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn command_line_without_overrides_keeps_the_config() {
        let args = Cli::try_parse_from(["glo", "-i", "in.json", "-s", "out", "--seed", "5"]).unwrap();
        let config = GLOConfig {
            pop_size: 7,
            ..GLOConfig::default()
        };
        assert_eq!(
            args.apply_overrides(config),
            GLOConfig {
                prng_seed: Some(5),
                ..config
            }
        );
    }

    #[test]
    fn entropy_seeded_rng_is_available() {
        assert!(init_rng(None).is_ok());
    }

    #[test_case("../assets/bedroom.json"; "bedroom")]
    #[test_case("../assets/narrow_room.json"; "narrow_room")]
    #[test_case("../assets/living_room.json"; "living_room")]
    #[test_case("../assets/studio.json"; "studio")]
    fn test_instance(instance_path: &str) {
        init_test_logger();
        let ext_instance = io::read_instance(Path::new(instance_path)).unwrap();
        let instance = import_instance(&ext_instance).unwrap();

        let config = GLOConfig {
            generations: 25,
            ..GLOConfig::default()
        };
        let rng = init_rng(config.prng_seed).unwrap();

        let mut optimizer = GLOptimizer::new(instance.clone(), config, rng).unwrap();
        let solution = optimizer.solve();

        assert!(assertions::layout_matches_instance(&solution.layout, &instance));
        assert!(assertions::layout_within_sampling_range(&solution.layout, &instance));
        assert!(solution.fitness().value() >= 0.0);

        let output = GLOOutput::new(ext_instance, &solution, config);
        assert_eq!(output.solution.layout.len(), instance.n_pieces());
        assert_eq!(output.solution.score, solution.fitness().value());
        assert_eq!(output.run.n_evaluations, 50 * 26);
    }
}
