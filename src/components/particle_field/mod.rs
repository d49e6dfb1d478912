//! Canvas particle backdrop: drifting dots linked by faint lines, pulled
//! toward the pointer.

mod component;
mod connections;
mod listener;
mod render;
mod scheduler;
mod simulation;
mod state;
mod types;

pub use component::ParticlesBackground;
pub use connections::Connections;
pub use render::{DrawSurface, Rgba, ink, render};
pub use scheduler::{AnimationLoop, FrameScheduler, SchedulerState};
pub use state::{ParticleField, Viewport};
pub use types::{Connection, FieldConfig, Particle, Vec2};
