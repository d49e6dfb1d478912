use std::ops::{Add, AddAssign, Mul, MulAssign, Sub};

pub const PARTICLE_COUNT: usize = 80;
pub const CONNECTION_DISTANCE: f64 = 120.0;
pub const MOUSE_INFLUENCE_DISTANCE: f64 = 150.0;
pub const PARTICLE_SPEED: f64 = 0.5;
pub const PARTICLE_OPACITY: f64 = 0.6;
pub const CONNECTION_OPACITY: f64 = 0.15;

/// A 2D vector in canvas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
	pub x: f64,
	pub y: f64,
}

impl Vec2 {
	pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn length(self) -> f64 {
		(self.x * self.x + self.y * self.y).sqrt()
	}

	pub fn distance(self, other: Self) -> f64 {
		(other - self).length()
	}

	pub fn is_finite(self) -> bool {
		self.x.is_finite() && self.y.is_finite()
	}
}

impl Add for Vec2 {
	type Output = Self;

	fn add(self, rhs: Self) -> Self {
		Self::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl AddAssign for Vec2 {
	fn add_assign(&mut self, rhs: Self) {
		self.x += rhs.x;
		self.y += rhs.y;
	}
}

impl Sub for Vec2 {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self {
		Self::new(self.x - rhs.x, self.y - rhs.y)
	}
}

impl Mul<f64> for Vec2 {
	type Output = Self;

	fn mul(self, k: f64) -> Self {
		Self::new(self.x * k, self.y * k)
	}
}

impl MulAssign<f64> for Vec2 {
	fn mul_assign(&mut self, k: f64) {
		self.x *= k;
		self.y *= k;
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
	pub position: Vec2,
	pub velocity: Vec2,
	/// Fixed at creation.
	pub opacity: f64,
	/// Fixed at creation.
	pub radius: f64,
}

/// A line between two particles closer than the connection distance.
/// Rebuilt every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
	pub a: usize,
	pub b: usize,
	pub from: Vec2,
	pub to: Vec2,
	pub opacity: f64,
}

/// Tunables for one particle field.
///
/// `Default` yields the values the site ships with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldConfig {
	pub particle_count: usize,
	pub connection_distance: f64,
	pub mouse_influence_distance: f64,
	pub speed: f64,
	pub min_radius: f64,
	pub max_radius: f64,
	/// Particle opacity is `rand * particle_opacity + 0.2`.
	pub particle_opacity: f64,
	pub connection_opacity: f64,
	pub connection_width: f64,
	pub damping: f64,
	pub mouse_attraction: f64,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			particle_count: PARTICLE_COUNT,
			connection_distance: CONNECTION_DISTANCE,
			mouse_influence_distance: MOUSE_INFLUENCE_DISTANCE,
			speed: PARTICLE_SPEED,
			min_radius: 1.0,
			max_radius: 2.0,
			particle_opacity: PARTICLE_OPACITY,
			connection_opacity: CONNECTION_OPACITY,
			connection_width: 0.5,
			damping: 0.999,
			mouse_attraction: 0.02,
		}
	}
}
