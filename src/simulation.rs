//! Simulation plugin and systems.
//!
//! One frame advances the toy exactly like the original loop: handle spawn
//! clicks, feed each planet its sun-ward force, let Rapier step the bodies,
//! record trails, then remove anything that hit the sun.  All systems run in
//! `Update` in that order; Rapier steps between frames with its default
//! scheduling.

use crate::config::SimConfig;
use crate::planet::{spawn_planet, Planet, Trail};
use crate::sun::Sun;
use bevy::input::ButtonInput;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PlanetRemoved>().add_systems(
            Update,
            (
                spawn_input_system,
                gravity_system,
                trail_system,
                collision_system,
            )
                .chain(),
        );
    }
}

/// Emitted once for every planet despawned by [`collision_system`], carrying
/// the removed entity id so external bookkeeping can clean up after it.
/// Entity ids are generational: a removed id never comes back as a live
/// planet.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanetRemoved {
    pub entity: Entity,
}

/// Handle user input: a left click spawns a planet at the cursor.
///
/// The cursor position is native screen space (pixels, top-left origin);
/// dividing by `render_scale` gives the physics position.  A degenerate
/// click — exactly on the sun's center — is logged and ignored.
pub fn spawn_input_system(
    mut commands: Commands,
    config: Res<SimConfig>,
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor_pos) = window.cursor_position() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Left) {
        let physics_pos = cursor_pos / config.render_scale;
        match spawn_planet(&mut commands, physics_pos, &config) {
            Ok(entity) => {
                info!("Planet {entity} spawned at physics {physics_pos:?}");
            }
            Err(e) => {
                warn!("{e}");
            }
        }
    }
}

/// Apply the sun's gravity to every planet as a continuous central force:
/// `F = G·M·m/d²` along the unit vector from planet to sun.
///
/// `m` is the mass Rapier derived from the planet's collider, read back via
/// `ReadMassProperties`.  Zero distance (force direction undefined) and zero
/// mass (Rapier has not populated the read-back yet) are guarded no-ops for
/// the frame; in the zero-distance case the collision pass removes the body
/// anyway.
pub fn gravity_system(
    config: Res<SimConfig>,
    sun_query: Query<&Transform, (With<Sun>, Without<Planet>)>,
    mut planets: Query<(&Transform, &ReadMassProperties, &mut ExternalForce), With<Planet>>,
) {
    let Ok(sun_transform) = sun_query.single() else {
        return;
    };
    let sun_pos = sun_transform.translation.truncate();

    for (transform, mass_props, mut ext_force) in planets.iter_mut() {
        let delta = sun_pos - transform.translation.truncate();
        let dist = delta.length();
        let mass = mass_props.mass;

        if dist <= f32::EPSILON || mass <= 0.0 {
            ext_force.force = Vec2::ZERO;
            continue;
        }

        let magnitude = config.gravity_const * config.sun_mass * mass / (dist * dist);
        ext_force.force = delta / dist * magnitude;
    }
}

/// Record each planet's current screen-space position into its trail.
pub fn trail_system(
    config: Res<SimConfig>,
    mut planets: Query<(&Transform, &mut Trail), With<Planet>>,
) {
    for (transform, mut trail) in planets.iter_mut() {
        trail.record(transform.translation.truncate() * config.render_scale);
    }
}

/// Remove planets that have hit the sun.
///
/// Two passes: mark every planet whose center is within
/// `planet.radius + sun_radius` of the sun, then despawn the marked set and
/// report each removal as a [`PlanetRemoved`] message.  Despawning releases
/// the Rapier body, the trail, and the render state together.
pub fn collision_system(
    mut commands: Commands,
    config: Res<SimConfig>,
    sun_query: Query<&Transform, (With<Sun>, Without<Planet>)>,
    planets: Query<(Entity, &Transform, &Planet)>,
    mut removals: MessageWriter<PlanetRemoved>,
) {
    let Ok(sun_transform) = sun_query.single() else {
        return;
    };
    let sun_pos = sun_transform.translation.truncate();

    let colliding: Vec<Entity> = planets
        .iter()
        .filter(|(_, transform, planet)| {
            let dist = transform.translation.truncate().distance(sun_pos);
            dist < planet.radius + config.sun_radius
        })
        .map(|(entity, _, _)| entity)
        .collect();

    for entity in colliding {
        commands.entity(entity).despawn();
        removals.write(PlanetRemoved { entity });
        info!("Planet {entity} collided with the sun and was removed");
    }
}
