//! Deterministic simulation module
//!
//! All scene logic lives here. This module must be pure and deterministic:
//! - Frame-counted time only (no wall clock)
//! - Seeded RNG only
//! - Stable insertion-order iteration
//! - No rendering or platform dependencies beyond the draw-call types

pub mod emitter;
pub mod forces;
pub mod integrate;
pub mod pool;
pub mod state;
pub mod tick;
pub mod visuals;

pub use emitter::maybe_emit;
pub use forces::net_force;
pub use integrate::{integrate, wrap_edges};
pub use pool::Pool;
pub use state::{Particle, Scene, Shape, ShapeKind, Shockwave, Viewport};
pub use tick::{advance, draw, tick};
