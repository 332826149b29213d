//! Orbit toy simulation library
//!
//! A fixed sun attracts user-spawned planets: each click creates a dynamic
//! Rapier body with the tangential velocity for a circular orbit, leaves a
//! bounded position trail, and is removed on contact with the sun.

pub mod config;
pub mod constants;
pub mod error;
pub mod planet;
pub mod rendering;
pub mod simulation;
pub mod sun;
