use super::state::Viewport;
use super::types::{FieldConfig, Particle, Vec2};

/// One frame of motion for a single particle: pointer pull, integration,
/// wall reflection and damping. Displacement is per frame, not per second.
pub fn advance(p: &mut Particle, pointer: Option<Vec2>, viewport: Viewport, cfg: &FieldConfig) {
	if let Some(pointer) = pointer {
		let delta = pointer - p.position;
		let dist = delta.length();
		// Zero distance has no direction to pull in.
		if dist > 0.0 && dist < cfg.mouse_influence_distance {
			let force = (1.0 - dist / cfg.mouse_influence_distance) * cfg.mouse_attraction;
			p.velocity += delta * (force / dist);
		}
	}

	p.position += p.velocity;

	if p.position.x < 0.0 || p.position.x > viewport.width {
		p.velocity.x = -p.velocity.x;
		p.position.x = p.position.x.clamp(0.0, viewport.width);
	}
	if p.position.y < 0.0 || p.position.y > viewport.height {
		p.velocity.y = -p.velocity.y;
		p.position.y = p.position.y.clamp(0.0, viewport.height);
	}

	p.velocity *= cfg.damping;

	if !p.velocity.is_finite() {
		p.velocity = Vec2::ZERO;
	}
	if !p.position.is_finite() {
		p.position = viewport.center();
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;
	use crate::components::particle_field::state::ParticleField;

	const EPS: f64 = 1e-9;

	fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
		Particle {
			position: Vec2::new(x, y),
			velocity: Vec2::new(vx, vy),
			opacity: 0.5,
			radius: 1.5,
		}
	}

	#[test]
	fn right_edge_reflects_and_clamps() {
		let cfg = FieldConfig::default();
		let mut p = particle(800.0, 300.0, 0.3, 0.0);
		advance(&mut p, None, Viewport::new(800.0, 600.0), &cfg);
		assert!(p.velocity.x < 0.0);
		assert_eq!(p.position.x, 800.0);
		assert!((p.velocity.x + 0.3 * 0.999).abs() < EPS);
	}

	#[test]
	fn top_edge_reflects_and_clamps() {
		let cfg = FieldConfig::default();
		let mut p = particle(10.0, 0.1, 0.0, -0.25);
		advance(&mut p, None, Viewport::new(800.0, 600.0), &cfg);
		assert!(p.velocity.y > 0.0);
		assert_eq!(p.position.y, 0.0);
	}

	#[test]
	fn pointer_attracts_nearby_particle() {
		let cfg = FieldConfig::default();
		let mut p = particle(100.0, 100.0, 0.0, 0.0);
		advance(
			&mut p,
			Some(Vec2::new(100.0, 130.0)),
			Viewport::new(800.0, 600.0),
			&cfg,
		);
		// (1 - 30/150) * 0.02 toward the pointer, then damped.
		let impulse = (120.0 / 150.0) * 0.02;
		assert!(p.velocity.y > 0.0);
		assert!(p.velocity.x.abs() < EPS);
		assert!((p.velocity.y - impulse * 0.999).abs() < EPS);
		assert!((p.position.y - (100.0 + impulse)).abs() < EPS);
	}

	#[test]
	fn distant_pointer_has_no_effect() {
		let cfg = FieldConfig::default();
		let mut p = particle(100.0, 100.0, 0.0, 0.0);
		advance(
			&mut p,
			Some(Vec2::new(100.0, 250.0)),
			Viewport::new(800.0, 600.0),
			&cfg,
		);
		assert_eq!(p.velocity, Vec2::ZERO);
	}

	#[test]
	fn pointer_on_particle_is_skipped() {
		let cfg = FieldConfig::default();
		let mut p = particle(50.0, 50.0, 0.1, 0.1);
		advance(&mut p, Some(Vec2::new(50.0, 50.0)), Viewport::new(100.0, 100.0), &cfg);
		assert!(p.velocity.is_finite());
		assert!((p.velocity.x - 0.1 * 0.999).abs() < EPS);
	}

	#[test]
	fn damping_decays_speed_monotonically() {
		let cfg = FieldConfig::default();
		let vp = Viewport::new(10_000.0, 10_000.0);
		let mut p = particle(5_000.0, 5_000.0, 0.25, -0.2);
		let mut last = p.velocity.length();
		for _ in 0..2_000 {
			advance(&mut p, None, vp, &cfg);
			let speed = p.velocity.length();
			assert!(speed < last);
			assert!((speed - last * 0.999).abs() < EPS);
			last = speed;
		}
	}

	#[test]
	fn non_finite_state_is_reset() {
		let cfg = FieldConfig::default();
		let vp = Viewport::new(200.0, 100.0);
		let mut p = particle(f64::NAN, 20.0, f64::INFINITY, 0.0);
		advance(&mut p, None, vp, &cfg);
		assert_eq!(p.velocity, Vec2::ZERO);
		assert!(p.position.is_finite());
	}

	#[test]
	fn particles_stay_inside_viewport() {
		let mut rng = StdRng::seed_from_u64(42);
		let mut field = ParticleField::new(FieldConfig::default());
		field.resize(300.0, 200.0, &mut rng);
		for p in field.particles_mut() {
			p.velocity *= 40.0;
		}
		for frame in 0..500 {
			field.set_pointer(Some(Vec2::new((frame % 300) as f64, 100.0)));
			field.step();
			for p in field.particles() {
				assert!((0.0..=300.0).contains(&p.position.x));
				assert!((0.0..=200.0).contains(&p.position.y));
			}
		}
	}
}
