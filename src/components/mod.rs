//! Reusable view components.

pub mod particle_field;
pub mod theme_toggle;
