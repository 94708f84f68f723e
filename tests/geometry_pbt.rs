use pasture_core::agent::AgentLogic;
use pasture_core::grid::ResourceGrid;
use pasture_core::torus::{wrap, wrapped_delta};
use pasture_data::{Agent, Position, Species};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

prop_compose! {
    fn arb_extent()(extent in 1.0f64..2000.0) -> f64 {
        extent
    }
}

prop_compose! {
    fn arb_coordinate()(v in -5000.0f64..5000.0) -> f64 {
        v
    }
}

fn ring_gap(a: f64, b: f64, extent: f64) -> f64 {
    let d = (a - b).rem_euclid(extent);
    d.min(extent - d)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn test_wrapped_delta_is_shortest(a in arb_coordinate(), b in arb_coordinate(), extent in arb_extent()) {
        let d = wrapped_delta(a, b, extent);
        let tol = 1e-9 * (1.0 + a.abs() + b.abs());
        prop_assert!(d.abs() <= extent / 2.0 + tol);
        prop_assert!(ring_gap(a + d, b, extent) <= tol);
    }

    #[test]
    fn test_wrap_lands_in_range(v in arb_coordinate(), extent in arb_extent()) {
        let w = wrap(v, extent);
        prop_assert!((0.0..extent).contains(&w));
    }

    #[test]
    fn test_energy_split_conserves(e in 0i64..100_000, seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut parent = Agent::new(Uuid::nil(), Species::Prey, Position::new(1.0, 1.0), e);
        let child = parent.split_offspring(Position::new(2.0, 2.0), &mut rng);
        prop_assert_eq!(parent.energy, e / 2);
        prop_assert_eq!(child.energy, parent.energy);
        let lost = e - (parent.energy + child.energy);
        prop_assert!(lost == 0 || lost == 1);
        prop_assert_eq!(lost, e % 2);
    }

    #[test]
    fn test_random_moves_stay_in_world(seed in any::<u64>(), x in 0.0f64..100.0, y in 0.0f64..100.0) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut a = Agent::new(Uuid::nil(), Species::Predator, Position::new(x, y), 1);
        for _ in 0..20 {
            a.move_randomly(&mut rng, 37.0, 100.0);
            prop_assert!((0.0..100.0).contains(&a.position.x));
            prop_assert!((0.0..100.0).contains(&a.position.y));
        }
    }

    #[test]
    fn test_grid_alive_count_bounded(seed in any::<u64>(), size in 1usize..30, regrowth in 1u32..10, steps in 0usize..20) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut grid = ResourceGrid::new(size, size as f64 * 16.0, regrowth);
        grid.initialize(&mut rng, 0.5);
        for _ in 0..steps {
            grid.advance();
            prop_assert!(grid.count_alive() <= size * size);
        }
        prop_assert!(grid.cells().iter().all(|c| c.alive || c.dormant_ticks < regrowth));
    }
}
