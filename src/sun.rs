//! The fixed central attractor.

use crate::config::SimConfig;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

/// Marker component for the sun entity.
///
/// Exactly one sun exists for the lifetime of the app; every planet's gravity
/// and collision test runs against it.
#[derive(Component, Debug, Clone, Copy)]
pub struct Sun;

/// Startup system: spawn the sun at its configured position.
pub fn spawn_sun(mut commands: Commands, config: Res<SimConfig>) {
    let entity = spawn_sun_at(&mut commands, &config);
    info!(
        "Sun spawned at physics {:?} (entity {entity})",
        config.sun_physics_position()
    );
}

/// Create the fixed sun body: a static ball collider with zero density (its
/// gravitational mass is `config.sun_mass`, not a Rapier-derived one).
pub fn spawn_sun_at(commands: &mut Commands, config: &SimConfig) -> Entity {
    let position = config.sun_physics_position();
    commands
        .spawn((
            Transform::from_translation(position.extend(0.0)),
            GlobalTransform::default(),
            Sun,
            RigidBody::Fixed,
            Collider::ball(config.sun_radius),
            ColliderMassProperties::Density(0.0),
            Friction::coefficient(config.sun_friction),
        ))
        .id()
}
