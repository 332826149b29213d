//! Planet components and spawning.
//!
//! A planet is a dynamic Rapier ball that receives a tangential velocity for
//! a circular orbit at spawn time.  Rapier owns its position and velocity
//! from then on; this module only seeds the initial state and keeps the
//! screen-space trail bookkeeping.

use crate::config::SimConfig;
use crate::error::{SimError, SimResult};
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use std::collections::VecDeque;

/// A user-spawned orbiting body.
#[derive(Component, Debug, Clone, Copy)]
pub struct Planet {
    /// Collider radius in physics units; also the radius used in the
    /// sun-collision test.
    pub radius: f32,
}

/// Bounded FIFO history of a planet's past screen-space positions.
///
/// One entry is recorded per frame; once `capacity` entries exist the oldest
/// is evicted before the new one is kept.  The trail despawns with its
/// planet.
#[derive(Component, Debug, Clone)]
pub struct Trail {
    positions: VecDeque<Vec2>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            positions: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a screen-space position, evicting the oldest entry if the
    /// trail is at capacity.
    pub fn record(&mut self, position: Vec2) {
        if self.positions.len() >= self.capacity {
            self.positions.pop_front();
        }
        self.positions.push_back(position);
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Oldest-to-newest pass over the recorded positions.
    pub fn iter(&self) -> impl Iterator<Item = &Vec2> {
        self.positions.iter()
    }

    /// The oldest still-recorded position, if any.
    pub fn oldest(&self) -> Option<Vec2> {
        self.positions.front().copied()
    }
}

/// Velocity for a circular orbit around the sun, tangential to the
/// sun→spawn radius vector: magnitude `sqrt(G·M/d)`, direction the radius
/// vector rotated 90° (`(-dy, dx)`, normalized).
///
/// Returns `None` when the spawn point is within `min_spawn_distance` of the
/// sun's center, where the tangent direction is undefined.
pub fn initial_orbital_velocity(spawn_pos: Vec2, sun_pos: Vec2, config: &SimConfig) -> Option<Vec2> {
    let radial = spawn_pos - sun_pos;
    let distance = radial.length();
    if distance < config.min_spawn_distance {
        return None;
    }

    let speed = (config.gravity_const * config.sun_mass / distance).sqrt();
    let tangent = Vec2::new(-radial.y, radial.x) / distance;
    Some(tangent * speed)
}

/// Spawn a planet at `physics_pos` with its circular-orbit velocity.
///
/// Fails with [`SimError::DegenerateSpawn`] — creating nothing — when the
/// position coincides with the sun's center.
pub fn spawn_planet(
    commands: &mut Commands,
    physics_pos: Vec2,
    config: &SimConfig,
) -> SimResult<Entity> {
    let sun_pos = config.sun_physics_position();
    let velocity = initial_orbital_velocity(physics_pos, sun_pos, config).ok_or(
        SimError::DegenerateSpawn {
            distance: physics_pos.distance(sun_pos),
        },
    )?;

    let entity = commands
        .spawn((
            (
                Transform::from_translation(physics_pos.extend(0.1)),
                GlobalTransform::default(),
                Planet {
                    radius: config.planet_radius,
                },
                Trail::new(config.trail_capacity),
                RigidBody::Dynamic,
            ),
            (
                Collider::ball(config.planet_radius),
                ColliderMassProperties::Density(config.planet_density),
                Friction::coefficient(config.planet_friction),
                Velocity {
                    linvel: velocity,
                    angvel: 0.0,
                },
                ExternalForce::default(),
                ReadMassProperties::default(),
            ),
        ))
        .id();

    Ok(entity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SimConfig {
        SimConfig::default()
    }

    /// Reference scenario: spawn at screen (500,100) with the sun at screen
    /// (500,400) and scale 30 ⇒ physics distance 10 ⇒ speed √(0.1·1000/10) = √10.
    #[test]
    fn orbital_speed_matches_reference_scenario() {
        let config = config();
        let spawn = Vec2::new(500.0, 100.0) / config.render_scale;
        let sun = config.sun_physics_position();
        assert!((spawn.distance(sun) - 10.0).abs() < 1e-4);

        let v = initial_orbital_velocity(spawn, sun, &config).unwrap();
        assert!(
            (v.length() - 10.0_f32.sqrt()).abs() < 1e-4,
            "expected √10 ≈ 3.162, got {}",
            v.length()
        );
    }

    /// The spawn velocity is perpendicular to the sun→planet radius vector,
    /// for spawn points all around the sun.
    #[test]
    fn orbital_velocity_is_tangential() {
        let config = config();
        let sun = config.sun_physics_position();
        for (dx, dy) in [(5.0, 0.0), (0.0, -7.5), (3.0, 4.0), (-2.0, 6.0), (-1.0, -1.0)] {
            let radial = Vec2::new(dx, dy);
            let v = initial_orbital_velocity(sun + radial, sun, &config).unwrap();
            assert!(
                radial.dot(v).abs() < 1e-3,
                "velocity {v:?} not perpendicular to radius {radial:?}"
            );
        }
    }

    /// Speed depends only on distance: `sqrt(G·M/d)`.
    #[test]
    fn orbital_speed_follows_inverse_sqrt_distance() {
        let config = config();
        let sun = config.sun_physics_position();
        for d in [1.0, 2.5, 10.0, 40.0] {
            let v = initial_orbital_velocity(sun + Vec2::new(d, 0.0), sun, &config).unwrap();
            let expected = (config.gravity_const * config.sun_mass / d).sqrt();
            assert!((v.length() - expected).abs() < 1e-4);
        }
    }

    /// Two spawns at the same distance but opposite angular positions get
    /// equal speed and exactly opposite tangential direction.
    #[test]
    fn opposite_spawns_orbit_in_opposite_directions() {
        let config = config();
        let sun = config.sun_physics_position();
        let offset = Vec2::new(6.0, -8.0);

        let v1 = initial_orbital_velocity(sun + offset, sun, &config).unwrap();
        let v2 = initial_orbital_velocity(sun - offset, sun, &config).unwrap();

        assert!((v1.length() - v2.length()).abs() < 1e-5);
        assert!((v1 + v2).length() < 1e-4, "expected v2 = -v1, got {v1:?} / {v2:?}");
    }

    /// Spawning exactly on the sun's center is rejected rather than dividing
    /// by zero.
    #[test]
    fn zero_distance_spawn_is_rejected() {
        let config = config();
        let sun = config.sun_physics_position();
        assert!(initial_orbital_velocity(sun, sun, &config).is_none());
    }

    #[test]
    fn trail_never_exceeds_capacity() {
        let mut trail = Trail::new(100);
        for i in 0..150 {
            trail.record(Vec2::new(i as f32, 0.0));
            assert!(trail.len() <= 100);
        }
        assert_eq!(trail.len(), 100);
    }

    /// After 150 records into a 100-slot trail the oldest 50 entries are
    /// gone, in FIFO order: the front is record #50 and the back is #149.
    #[test]
    fn trail_evicts_oldest_entries_first() {
        let mut trail = Trail::new(100);
        for i in 0..150 {
            trail.record(Vec2::new(i as f32, 0.0));
        }
        assert_eq!(trail.oldest(), Some(Vec2::new(50.0, 0.0)));
        let entries: Vec<f32> = trail.iter().map(|p| p.x).collect();
        assert_eq!(entries.first(), Some(&50.0));
        assert_eq!(entries.last(), Some(&149.0));
        assert!(entries.windows(2).all(|w| w[1] == w[0] + 1.0));
    }
}
