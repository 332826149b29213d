use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_rapier2d::prelude::*;

use perihelion::config::{load_sim_config, SimConfig};
use perihelion::rendering::{
    draw_planets_system, draw_sun_system, draw_trails_system, setup_camera,
};
use perihelion::simulation::SimulationPlugin;
use perihelion::sun::spawn_sun;

/// Configure Rapier physics: disable world gravity.  The only gravity in
/// this toy is the custom sun-ward force applied per planet.
fn setup_physics_config(mut config: Query<&mut RapierConfiguration>) {
    for mut cfg in config.iter_mut() {
        cfg.gravity = Vec2::ZERO;
    }
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Perihelion".into(),
                resolution: WindowResolution::new(1000, 800),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        // Insert SimConfig with compiled defaults; load_sim_config will
        // overwrite it from assets/sim.toml (if present) in the Startup schedule.
        .insert_resource(SimConfig::default())
        // pixels_per_meter(1.0) keeps Bevy world units identical to Rapier
        // physics units; the pixel conversion happens explicitly in the
        // rendering module instead.  Larger values here shrink collider mass
        // in physics-space quadratically and make ExternalForce produce
        // runaway acceleration at the same numeric values.
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(1.0))
        .add_plugins(SimulationPlugin)
        .add_systems(
            Startup,
            (
                // Load config first so every other startup system sees the final values.
                load_sim_config,
                setup_camera.after(load_sim_config),
                spawn_sun.after(load_sim_config),
                setup_physics_config,
            ),
        )
        .add_systems(
            Update,
            (draw_trails_system, draw_planets_system, draw_sun_system),
        )
        .run();
}
