//! Centralised physics and rendering constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place without source-diving across multiple modules.
//! [`crate::config::SimConfig`] mirrors every constant and can override it
//! from `assets/sim.toml` at startup; this file remains the authoritative
//! default source.

// ── Physics: Gravity ──────────────────────────────────────────────────────────

/// Inverse-square gravity strength constant.
///
/// Higher values → stronger pull toward the sun → faster orbits.  The spawn
/// velocity scales with `sqrt(GRAVITY_CONST)`, so a circular orbit stays
/// circular at any positive value.  Zero or negative values null or invert
/// the force and are rejected by `validate_gravity_const`.
pub const GRAVITY_CONST: f32 = 0.1;

/// Gravitational mass of the sun (physics mass units).
///
/// The sun's Rapier body is `Fixed` with zero collider density; this constant
/// is the mass used in the force and orbital-speed formulas instead.
pub const SUN_MASS: f32 = 1000.0;

// ── Coordinate Spaces ─────────────────────────────────────────────────────────

/// Pixels per physics unit.
///
/// Screen positions (window pixels, origin top-left, y-down) divide by this
/// to give physics positions; physics positions multiply by it when recorded
/// into trails or drawn.  At 30.0 the 1000×800 window spans a 33.3×26.7-unit
/// physics world.
pub const RENDER_SCALE: f32 = 30.0;

/// Window width in pixels.
pub const WINDOW_WIDTH: f32 = 1000.0;

/// Window height in pixels.
pub const WINDOW_HEIGHT: f32 = 800.0;

/// Sun position in screen space (pixels) — the fixed anchor every orbit is
/// computed against.
pub const SUN_SCREEN_X: f32 = 500.0;
pub const SUN_SCREEN_Y: f32 = 400.0;

// ── Bodies ────────────────────────────────────────────────────────────────────

/// Collider radius of the sun (physics units).  Used for the collision test;
/// the drawn disc uses `SUN_DRAW_RADIUS`.
pub const SUN_RADIUS: f32 = 2.0;

/// Friction coefficient of the sun's collider.
pub const SUN_FRICTION: f32 = 0.3;

/// Collider radius of a spawned planet (physics units).
pub const PLANET_RADIUS: f32 = 1.0;

/// Collider mass density of a spawned planet.
///
/// Rapier derives the planet's mass from this (`m = ρ·π·r²` for a ball) and
/// the gravity system reads that mass back through `ReadMassProperties` —
/// density is the only mass knob.
pub const PLANET_DENSITY: f32 = 0.9;

/// Friction coefficient of a planet's collider.
pub const PLANET_FRICTION: f32 = 0.3;

/// Spawn points closer to the sun's center than this (physics units) are
/// rejected: the tangential-velocity direction is undefined at zero distance.
pub const MIN_SPAWN_DISTANCE: f32 = 1.0e-4;

// ── Trails ────────────────────────────────────────────────────────────────────

/// Maximum number of recorded positions per planet trail.
///
/// One position is recorded per frame, so at 60 fps the trail shows the last
/// ~1.7 s of motion.  The oldest entry is evicted first once full.
pub const TRAIL_CAPACITY: usize = 100;

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Radius (px) of the drawn sun disc.  At `RENDER_SCALE = 30` this happens to
/// equal the 2.0-unit collision radius exactly; the two are kept as separate
/// knobs anyway.
pub const SUN_DRAW_RADIUS: f32 = 60.0;

/// Radius (px) of each drawn trail dot.
pub const TRAIL_DOT_RADIUS: f32 = 2.0;

/// Sun color (sRGB components): yellow.
pub const SUN_COLOR: (f32, f32, f32) = (1.0, 1.0, 0.0);

/// Planet color (sRGB components): green.
pub const PLANET_COLOR: (f32, f32, f32) = (0.0, 1.0, 0.0);

/// Trail dot color (sRGB components): white.
pub const TRAIL_COLOR: (f32, f32, f32) = (1.0, 1.0, 1.0);
