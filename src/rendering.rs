//! Camera setup, coordinate-space conversions, and gizmo drawing.
//!
//! Three coordinate spaces are in play:
//! - *physics*: Rapier world units, y-down (the original screen layout
//!   divided by the render scale);
//! - *screen*: window pixels, origin top-left, y-down — the cursor's native
//!   space and the space trails are recorded in;
//! - *render*: Bevy world coordinates (origin at window center, y-up), used
//!   only at the moment of drawing.

use crate::config::SimConfig;
use crate::constants::{PLANET_COLOR, SUN_COLOR, TRAIL_COLOR};
use crate::planet::{Planet, Trail};
use crate::sun::Sun;
use bevy::prelude::*;

/// Setup camera for 2D rendering.
pub fn setup_camera(mut commands: Commands) {
    // Default Camera2d at the origin shows the full window area.
    commands.spawn(Camera2d);
}

/// Physics units → screen pixels.
#[inline]
pub fn physics_to_screen(physics_pos: Vec2, render_scale: f32) -> Vec2 {
    physics_pos * render_scale
}

/// Screen pixels → physics units.
#[inline]
pub fn screen_to_physics(screen_pos: Vec2, render_scale: f32) -> Vec2 {
    screen_pos / render_scale
}

/// Screen pixels (top-left origin, y-down) → Bevy render coordinates
/// (window-center origin, y-up).
#[inline]
pub fn screen_to_render(screen_pos: Vec2, window_width: f32, window_height: f32) -> Vec2 {
    Vec2::new(
        screen_pos.x - window_width / 2.0,
        window_height / 2.0 - screen_pos.y,
    )
}

/// Draw the sun as a filled-looking yellow gizmo disc.
pub fn draw_sun_system(
    mut gizmos: Gizmos,
    config: Res<SimConfig>,
    sun_query: Query<&Transform, With<Sun>>,
) {
    let Ok(transform) = sun_query.single() else {
        return;
    };
    let screen = physics_to_screen(transform.translation.truncate(), config.render_scale);
    let center = screen_to_render(screen, config.window_width, config.window_height);
    let (r, g, b) = SUN_COLOR;
    gizmos.circle_2d(center, config.sun_draw_radius, Color::srgb(r, g, b));
}

/// Draw each live planet as a green circle of its scaled physics radius.
pub fn draw_planets_system(
    mut gizmos: Gizmos,
    config: Res<SimConfig>,
    planets: Query<(&Transform, &Planet)>,
) {
    let (r, g, b) = PLANET_COLOR;
    let color = Color::srgb(r, g, b);
    for (transform, planet) in planets.iter() {
        let screen = physics_to_screen(transform.translation.truncate(), config.render_scale);
        let center = screen_to_render(screen, config.window_width, config.window_height);
        gizmos.circle_2d(center, planet.radius * config.render_scale, color);
    }
}

/// Draw every recorded trail position as a small white dot, oldest to
/// newest.  One read-only pass per frame; nothing is retained between
/// frames.
pub fn draw_trails_system(
    mut gizmos: Gizmos,
    config: Res<SimConfig>,
    trails: Query<&Trail, With<Planet>>,
) {
    let (r, g, b) = TRAIL_COLOR;
    let color = Color::srgb(r, g, b);
    for trail in trails.iter() {
        for screen_pos in trail.iter() {
            let center = screen_to_render(*screen_pos, config.window_width, config.window_height);
            gizmos.circle_2d(center, config.trail_dot_radius, color);
        }
    }
}
