use pasture_data::{EcoEvent, TickCounters};
use pasture_lib::model::config::AppConfig;
use pasture_lib::model::world::World;

fn seeded(seed: u64) -> AppConfig {
    let mut config = AppConfig::default();
    config.world.seed = Some(seed);
    config
}

#[test]
fn test_reset_restores_initial_state() {
    let fresh = World::new(seeded(21)).unwrap();
    let mut world = World::new(seeded(21)).unwrap();
    world.step_n(40);

    world.reset();

    assert_eq!(world.tick, 0);
    assert_eq!(world.prey(), fresh.prey());
    assert_eq!(world.predators(), fresh.predators());
    assert_eq!(world.grid().cells(), fresh.grid().cells());
    assert_eq!(world.last_snapshot(), fresh.last_snapshot());
    assert_eq!(world.pop_stats.totals, TickCounters::default());
    assert_eq!(world.events(), &[EcoEvent::Reset { tick: 40 }]);
}

#[test]
fn test_reset_replays_the_same_run() {
    let mut world = World::new(seeded(8)).unwrap();
    let first: Vec<_> = (0..30).map(|_| world.step()).collect();
    world.reset();
    let second: Vec<_> = (0..30).map(|_| world.step()).collect();
    assert_eq!(first, second);
}

#[test]
fn test_unseeded_reset_restores_sizes() {
    let mut world = World::new(AppConfig::default()).unwrap();
    world.step_n(10);
    world.reset();
    assert_eq!(world.prey().len(), 100);
    assert_eq!(world.predators().len(), 50);
    assert_eq!(world.tick, 0);
}
