//! Runtime simulation configuration loaded from `assets/sim.toml`.
//!
//! [`SimConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`].  At startup, [`load_sim_config`] reads
//! `assets/sim.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a
//! minimal TOML can override just the constants you care about.
//!
//! ## Usage in systems
//!
//! Add `config: Res<SimConfig>` to any system parameter list and read values
//! with `config.gravity_const`, `config.trail_capacity`, etc.
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `SimConfig::default()`.

use crate::constants::*;
use crate::error::{validate_gravity_const, validate_render_scale, validate_sun_mass};
use bevy::prelude::*;
use serde::Deserialize;

/// Runtime-tunable physics and rendering configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`.  Override any subset by setting the value in
/// `assets/sim.toml`.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // ── Physics: Gravity ──────────────────────────────────────────────────────
    pub gravity_const: f32,
    pub sun_mass: f32,

    // ── Coordinate Spaces ─────────────────────────────────────────────────────
    pub render_scale: f32,
    pub window_width: f32,
    pub window_height: f32,
    pub sun_screen_x: f32,
    pub sun_screen_y: f32,

    // ── Bodies ────────────────────────────────────────────────────────────────
    pub sun_radius: f32,
    pub sun_friction: f32,
    pub planet_radius: f32,
    pub planet_density: f32,
    pub planet_friction: f32,
    pub min_spawn_distance: f32,

    // ── Trails ────────────────────────────────────────────────────────────────
    pub trail_capacity: usize,

    // ── Rendering ─────────────────────────────────────────────────────────────
    pub sun_draw_radius: f32,
    pub trail_dot_radius: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity_const: GRAVITY_CONST,
            sun_mass: SUN_MASS,
            render_scale: RENDER_SCALE,
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            sun_screen_x: SUN_SCREEN_X,
            sun_screen_y: SUN_SCREEN_Y,
            sun_radius: SUN_RADIUS,
            sun_friction: SUN_FRICTION,
            planet_radius: PLANET_RADIUS,
            planet_density: PLANET_DENSITY,
            planet_friction: PLANET_FRICTION,
            min_spawn_distance: MIN_SPAWN_DISTANCE,
            trail_capacity: TRAIL_CAPACITY,
            sun_draw_radius: SUN_DRAW_RADIUS,
            trail_dot_radius: TRAIL_DOT_RADIUS,
        }
    }
}

impl SimConfig {
    /// Sun position in screen space (pixels).
    pub fn sun_screen_position(&self) -> Vec2 {
        Vec2::new(self.sun_screen_x, self.sun_screen_y)
    }

    /// Sun position in physics space.
    pub fn sun_physics_position(&self) -> Vec2 {
        self.sun_screen_position() / self.render_scale
    }

    /// Reverts any field whose loaded value is outside its safe range,
    /// reporting each reverted field.  Returns the number of reverted fields.
    pub fn sanitize(&mut self) -> usize {
        let defaults = SimConfig::default();
        let mut reverted = 0;

        if let Err(e) = validate_gravity_const(self.gravity_const) {
            eprintln!("⚠ {e}; reverting to {}", defaults.gravity_const);
            self.gravity_const = defaults.gravity_const;
            reverted += 1;
        }
        if let Err(e) = validate_sun_mass(self.sun_mass) {
            eprintln!("⚠ {e}; reverting to {}", defaults.sun_mass);
            self.sun_mass = defaults.sun_mass;
            reverted += 1;
        }
        if let Err(e) = validate_render_scale(self.render_scale) {
            eprintln!("⚠ {e}; reverting to {}", defaults.render_scale);
            self.render_scale = defaults.render_scale;
            reverted += 1;
        }

        reverted
    }
}

/// Load `assets/sim.toml` over the compiled defaults, if the file exists.
///
/// Runs in the `Startup` schedule before every system that reads the config.
pub fn load_sim_config(mut config: ResMut<SimConfig>) {
    let path = "assets/sim.toml";
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<SimConfig>(&contents) {
            Ok(mut loaded) => {
                loaded.sanitize();
                *config = loaded;
                println!("✓ Loaded sim config from {path}");
            }
            Err(e) => {
                eprintln!("⚠ Failed to parse {path}: {e}; using defaults");
            }
        },
        Err(_) => {
            // File not present — defaults are already in place; not an error.
            println!("ℹ No {path} found; using compiled defaults");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = SimConfig::default();
        assert_eq!(config.gravity_const, GRAVITY_CONST);
        assert_eq!(config.sun_mass, SUN_MASS);
        assert_eq!(config.trail_capacity, TRAIL_CAPACITY);
    }

    #[test]
    fn sun_physics_position_divides_by_scale() {
        let config = SimConfig::default();
        let pos = config.sun_physics_position();
        assert!((pos.x - 500.0 / 30.0).abs() < 1e-6);
        assert!((pos.y - 400.0 / 30.0).abs() < 1e-6);
    }

    #[test]
    fn partial_toml_keeps_defaults_for_missing_keys() {
        let loaded: SimConfig = toml::from_str("gravity_const = 0.2").unwrap();
        assert_eq!(loaded.gravity_const, 0.2);
        assert_eq!(loaded.sun_mass, SUN_MASS);
        assert_eq!(loaded.render_scale, RENDER_SCALE);
    }

    #[test]
    fn sanitize_reverts_unsafe_values() {
        let mut config = SimConfig {
            gravity_const: -1.0,
            render_scale: 0.0,
            ..Default::default()
        };
        assert_eq!(config.sanitize(), 2);
        assert_eq!(config.gravity_const, GRAVITY_CONST);
        assert_eq!(config.render_scale, RENDER_SCALE);
    }
}
