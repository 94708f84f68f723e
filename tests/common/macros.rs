/// Asserts the live prey and predator counts.
#[macro_export]
macro_rules! assert_population {
    ($world:expr, $prey:expr, $predators:expr) => {
        assert_eq!(
            ($world.prey().len(), $world.predators().len()),
            ($prey, $predators),
            "Population (prey, predators) mismatch at tick {}",
            $world.tick
        );
    };
}

/// Asserts that the agent with the given id is gone from both populations.
#[macro_export]
macro_rules! assert_agent_gone {
    ($world:expr, $id:expr) => {
        let exists = $world
            .prey()
            .iter()
            .chain($world.predators())
            .any(|a| a.id == $id);
        assert!(!exists, "Agent {} should be gone but was found alive", $id);
    };
}

/// Asserts every agent sits inside `[0, world_size)` on both axes.
#[macro_export]
macro_rules! assert_all_wrapped {
    ($world:expr) => {
        let extent = $world.config.world.world_size;
        for a in $world.prey().iter().chain($world.predators()) {
            assert!(
                (0.0..extent).contains(&a.position.x) && (0.0..extent).contains(&a.position.y),
                "Agent {} at ({}, {}) outside world of size {}",
                a.id,
                a.position.x,
                a.position.y,
                extent
            );
        }
    };
}
