use log::debug;
use rand::Rng;

use super::connections::Connections;
use super::simulation;
use super::types::{FieldConfig, Particle, Vec2};

/// Canvas size in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

impl Viewport {
	pub fn new(width: f64, height: f64) -> Self {
		let sanitize = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
		Self {
			width: sanitize(width),
			height: sanitize(height),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.width <= 0.0 || self.height <= 0.0
	}

	pub fn center(&self) -> Vec2 {
		Vec2::new(self.width / 2.0, self.height / 2.0)
	}
}

/// Live state of one particle canvas: the particle batch, the viewport it
/// lives in and the last known pointer position.
#[derive(Clone, Debug)]
pub struct ParticleField {
	pub config: FieldConfig,
	viewport: Viewport,
	pointer: Option<Vec2>,
	particles: Vec<Particle>,
}

impl ParticleField {
	pub fn new(config: FieldConfig) -> Self {
		Self {
			config,
			viewport: Viewport::default(),
			pointer: None,
			particles: Vec::with_capacity(config.particle_count),
		}
	}

	pub fn viewport(&self) -> Viewport {
		self.viewport
	}

	pub fn pointer(&self) -> Option<Vec2> {
		self.pointer
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn particles_mut(&mut self) -> &mut [Particle] {
		&mut self.particles
	}

	pub fn is_seeded(&self) -> bool {
		!self.particles.is_empty()
	}

	/// Replace the whole batch with freshly randomized particles.
	///
	/// Returns `false` and leaves the store untouched while the viewport is
	/// empty; [`ParticleField::resize`] seeds once a real size shows up.
	pub fn initialize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
		if self.viewport.is_empty() {
			debug!("particle field has no area yet, deferring initialization");
			return false;
		}
		let (cfg, vp) = (&self.config, self.viewport);
		self.particles = (0..cfg.particle_count)
			.map(|_| Particle {
				position: Vec2::new(
					rng.r#gen::<f64>() * vp.width,
					rng.r#gen::<f64>() * vp.height,
				),
				velocity: Vec2::new(
					(rng.r#gen::<f64>() - 0.5) * cfg.speed,
					(rng.r#gen::<f64>() - 0.5) * cfg.speed,
				),
				opacity: rng.r#gen::<f64>() * cfg.particle_opacity + 0.2,
				radius: rng.r#gen::<f64>() * (cfg.max_radius - cfg.min_radius) + cfg.min_radius,
			})
			.collect();
		debug!(
			"seeded {} particles in {}x{}",
			self.particles.len(),
			vp.width,
			vp.height
		);
		true
	}

	/// Adopt a new canvas size. Particles that fall outside it get a new
	/// random coordinate on the offending axis; velocities are kept.
	///
	/// An empty size is ignored once seeded, so a collapsed container does
	/// not pile every particle onto the origin.
	pub fn resize<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
		let viewport = Viewport::new(width, height);
		if viewport.is_empty() && self.is_seeded() {
			debug!(
				"ignoring empty resize, keeping {}x{}",
				self.viewport.width, self.viewport.height
			);
			return;
		}
		self.viewport = viewport;
		if !self.is_seeded() {
			self.initialize(rng);
			return;
		}
		let vp = self.viewport;
		for p in &mut self.particles {
			if !(0.0..=vp.width).contains(&p.position.x) {
				p.position.x = rng.r#gen::<f64>() * vp.width;
			}
			if !(0.0..=vp.height).contains(&p.position.y) {
				p.position.y = rng.r#gen::<f64>() * vp.height;
			}
		}
	}

	pub fn set_pointer(&mut self, pointer: Option<Vec2>) {
		self.pointer = pointer.filter(|p| p.is_finite());
	}

	/// Advance every particle by one frame.
	pub fn step(&mut self) {
		let (cfg, vp, pointer) = (&self.config, self.viewport, self.pointer);
		for p in &mut self.particles {
			simulation::advance(p, pointer, vp, cfg);
		}
	}

	pub fn connections(&self) -> Connections<'_> {
		Connections::new(
			&self.particles,
			self.config.connection_distance,
			self.config.connection_opacity,
		)
	}
}
