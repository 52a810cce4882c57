//! Headless driver
//!
//! Runs a scene at a fixed timestep and prints every resolved collision as
//! one JSON object per line.
//!
//! ```text
//! bounce-sim                     # default scene
//! bounce-sim scene.json          # scene from file
//! bounce-sim --random 42 12      # seeded random scene with 12 bodies
//! ```

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    if let Err(e) = native::run(std::env::args().skip(1).collect()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Nothing to drive without a host loop
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use bounce_sim::sim::step;
    use bounce_sim::{ArenaConfig, SceneConfig};

    type BoxError = Box<dyn std::error::Error>;

    const USAGE: &str = "usage: bounce-sim [scene.json | --random <seed> <count>]";

    fn parse_scene(args: &[String]) -> Result<SceneConfig, BoxError> {
        match args {
            [] => Ok(SceneConfig::default()),
            [flag, seed, count] if flag == "--random" => {
                let seed = seed.parse().map_err(|_| USAGE)?;
                let count = count.parse().map_err(|_| USAGE)?;
                Ok(SceneConfig::random(seed, count, ArenaConfig::default()))
            }
            [path] if !path.starts_with('-') => Ok(SceneConfig::load(path)?),
            _ => Err(USAGE.into()),
        }
    }

    pub fn run(args: Vec<String>) -> Result<(), BoxError> {
        let scene = parse_scene(&args)?;
        let mut state = scene.build()?;
        log::info!(
            "Bounce Sim starting: {} bodies, {} walls, {} steps of {:.4}s",
            state.bodies.len(),
            state.boundaries.len(),
            scene.steps,
            scene.dt
        );

        let momentum = state.total_momentum();
        let energy = state.total_kinetic_energy();
        let mut collisions = 0usize;

        for _ in 0..scene.steps {
            for event in step(&mut state, scene.dt) {
                collisions += 1;
                println!("{}", serde_json::to_string(&event)?);
            }
        }

        log::info!(
            "Finished at t={:.3}s after {} collisions",
            state.elapsed,
            collisions
        );
        log::info!(
            "Energy drift {:.3e}, momentum {:?} -> {:?}",
            state.total_kinetic_energy() - energy,
            momentum,
            state.total_momentum()
        );
        if state.has_overlap() {
            log::warn!("Bodies overlap at the end of the run");
        }
        Ok(())
    }
}
