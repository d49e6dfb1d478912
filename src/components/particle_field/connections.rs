use std::iter::FusedIterator;

use super::types::{Connection, Particle};

/// Walks every unordered pair `(a, b)` with `a < b` once and yields the
/// pairs closer than `max_distance`.
///
/// Brute force over all pairs; with the particle counts used here a spatial
/// index costs more than it saves.
#[derive(Clone, Debug)]
pub struct Connections<'a> {
	particles: &'a [Particle],
	max_distance: f64,
	base_opacity: f64,
	a: usize,
	b: usize,
}

impl<'a> Connections<'a> {
	pub fn new(particles: &'a [Particle], max_distance: f64, base_opacity: f64) -> Self {
		Self {
			particles,
			max_distance,
			base_opacity,
			a: 0,
			b: 1,
		}
	}
}

impl Iterator for Connections<'_> {
	type Item = Connection;

	fn next(&mut self) -> Option<Connection> {
		let n = self.particles.len();
		while self.a + 1 < n {
			if self.b >= n {
				self.a += 1;
				self.b = self.a + 1;
				continue;
			}
			let (a, b) = (self.a, self.b);
			self.b += 1;

			let (from, to) = (self.particles[a].position, self.particles[b].position);
			let dist = from.distance(to);
			if dist < self.max_distance {
				return Some(Connection {
					a,
					b,
					from,
					to,
					opacity: (1.0 - dist / self.max_distance) * self.base_opacity,
				});
			}
		}
		None
	}
}

impl FusedIterator for Connections<'_> {}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;
	use crate::components::particle_field::state::ParticleField;
	use crate::components::particle_field::types::{FieldConfig, Vec2};

	fn at(x: f64, y: f64) -> Particle {
		Particle {
			position: Vec2::new(x, y),
			velocity: Vec2::ZERO,
			opacity: 0.5,
			radius: 1.0,
		}
	}

	#[test]
	fn threshold_is_strict() {
		let pair = [at(0.0, 0.0), at(120.0, 0.0)];
		assert_eq!(Connections::new(&pair, 120.0, 0.15).count(), 0);

		let pair = [at(0.0, 0.0), at(119.999, 0.0)];
		let links: Vec<_> = Connections::new(&pair, 120.0, 0.15).collect();
		assert_eq!(links.len(), 1);
		assert!(links[0].opacity > 0.0);
		assert!((links[0].opacity - (0.001 / 120.0) * 0.15).abs() < 1e-9);
	}

	#[test]
	fn opacity_falls_off_linearly() {
		let pair = [at(10.0, 10.0), at(10.0, 129.0)];
		let link = Connections::new(&pair, 120.0, 0.15).next();
		let link = link.expect("pair at distance 119 should connect");
		assert_eq!((link.a, link.b), (0, 1));
		assert!((link.opacity - (1.0 / 120.0) * 0.15).abs() < 1e-12);
		assert_eq!(link.from, Vec2::new(10.0, 10.0));
		assert_eq!(link.to, Vec2::new(10.0, 129.0));

		let pair = [at(5.0, 5.0), at(5.0, 5.0)];
		let link = Connections::new(&pair, 120.0, 0.15).next().unwrap();
		assert!((link.opacity - 0.15).abs() < 1e-12);
	}

	#[test]
	fn each_pair_appears_once() {
		let mut rng = StdRng::seed_from_u64(5);
		let mut field = ParticleField::new(FieldConfig::default());
		field.resize(200.0, 200.0, &mut rng);

		let mut seen = HashSet::new();
		for link in field.connections() {
			assert!(link.a < link.b);
			assert!(seen.insert((link.a, link.b)));
		}
		// Dense enough that nearly everything connects.
		assert!(!seen.is_empty());
		assert!(seen.len() <= 80 * 79 / 2);
	}

	#[test]
	fn all_close_pairs_are_found() {
		let particles: Vec<_> = (0..5).map(|i| at(i as f64 * 10.0, 0.0)).collect();
		assert_eq!(Connections::new(&particles, 120.0, 0.15).count(), 10);
	}

	#[test]
	fn degenerate_inputs_are_empty_and_fused() {
		assert_eq!(Connections::new(&[], 120.0, 0.15).count(), 0);
		let one = [at(1.0, 1.0)];
		let mut iter = Connections::new(&one, 120.0, 0.15);
		assert!(iter.next().is_none());
		assert!(iter.next().is_none());
	}
}
