//! Simulation-specific error types.
//!
//! Systems propagate errors through these types rather than panicking where
//! practical; a rejected spawn degrades to a logged warning instead of a
//! crash.

use std::fmt;

/// Top-level error enum for the orbit simulation.
#[derive(Debug)]
pub enum SimError {
    /// A planet spawn was requested at (numerically) zero distance from the
    /// sun's center, where the tangential orbit direction is undefined.
    DegenerateSpawn {
        /// Distance between the requested spawn point and the sun (physics units).
        distance: f32,
    },

    /// A configuration value is outside its safe operating range.
    /// Returned by the validation helpers used when loading `assets/sim.toml`.
    UnsafeConstant {
        /// Name of the offending field (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the safe range.
        safe_range: &'static str,
    },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::DegenerateSpawn { distance } => write!(
                f,
                "spawn rejected: distance {} from the sun's center leaves the \
                 orbit direction undefined",
                distance
            ),
            SimError::UnsafeConstant {
                name,
                value,
                safe_range,
            } => write!(
                f,
                "config field '{}' = {} is outside safe range {}",
                name, value, safe_range
            ),
        }
    }
}

impl std::error::Error for SimError {}

/// Convenience alias: a `Result` using `SimError` as the error type.
pub type SimResult<T> = Result<T, SimError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error if `gravity_const` would null or invert the sun's pull.
pub fn validate_gravity_const(value: f32) -> SimResult<()> {
    if value <= 0.0 || !value.is_finite() {
        Err(SimError::UnsafeConstant {
            name: "gravity_const",
            value,
            safe_range: "(0.0, ∞)",
        })
    } else {
        Ok(())
    }
}

/// Returns an error if `render_scale` is not strictly positive.
///
/// A zero scale collapses every screen position onto the sun; a negative one
/// mirrors the world through the window origin.
pub fn validate_render_scale(value: f32) -> SimResult<()> {
    if value <= 0.0 || !value.is_finite() {
        Err(SimError::UnsafeConstant {
            name: "render_scale",
            value,
            safe_range: "(0.0, ∞)",
        })
    } else {
        Ok(())
    }
}

/// Returns an error if `sun_mass` is not strictly positive.
pub fn validate_sun_mass(value: f32) -> SimResult<()> {
    if value <= 0.0 || !value.is_finite() {
        Err(SimError::UnsafeConstant {
            name: "sun_mass",
            value,
            safe_range: "(0.0, ∞)",
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_default_constants() {
        assert!(validate_gravity_const(crate::constants::GRAVITY_CONST).is_ok());
        assert!(validate_render_scale(crate::constants::RENDER_SCALE).is_ok());
        assert!(validate_sun_mass(crate::constants::SUN_MASS).is_ok());
    }

    #[test]
    fn rejects_nonpositive_gravity() {
        assert!(validate_gravity_const(0.0).is_err());
        assert!(validate_gravity_const(-0.1).is_err());
        assert!(validate_gravity_const(f32::NAN).is_err());
    }

    #[test]
    fn degenerate_spawn_message_names_the_distance() {
        let err = SimError::DegenerateSpawn { distance: 0.0 };
        assert!(err.to_string().contains("spawn rejected"));
    }
}
