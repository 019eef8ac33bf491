//! Particle collection and seeding.

use rand::Rng;

use super::theme::FieldStyle;
use super::types::Particle;

/// Owns the live particles. Replaced wholesale on every reseed, so no
/// particle identity survives a resize.
#[derive(Clone, Debug, Default)]
pub struct ParticleStore {
	particles: Vec<Particle>,
}

impl ParticleStore {
	/// Number of particles for a viewport `width` logical pixels wide:
	/// one per `spacing` pixels, capped at the style's maximum.
	pub fn particle_count(width: f64, style: &FieldStyle) -> usize {
		let per_width = (width / style.spacing).floor();
		if per_width.is_nan() || per_width <= 0.0 {
			return 0;
		}
		(per_width as usize).min(style.max_particles)
	}

	/// Create a fresh collection scattered uniformly over `[0, width) x [0, height)`.
	pub fn seed<R: Rng>(width: f64, height: f64, style: &FieldStyle, rng: &mut R) -> Self {
		let count = Self::particle_count(width, style);
		let (w, h) = (width.max(0.0), height.max(0.0));
		let mut particles = Vec::with_capacity(count);

		for _ in 0..count {
			particles.push(Particle {
				x: rng.gen_range(0.0..1.0) * w,
				y: rng.gen_range(0.0..1.0) * h,
				vx: rng.gen_range(-style.speed..=style.speed),
				vy: rng.gen_range(-style.speed..=style.speed),
				radius: rng.gen_range(style.radius_min..=style.radius_max),
				opacity: rng.gen_range(style.opacity_min..=style.opacity_max),
			});
		}

		Self { particles }
	}

	/// Current particles, in seeding order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Mutable access for stepping in place.
	pub fn particles_mut(&mut self) -> &mut [Particle] {
		&mut self.particles
	}

	/// Number of live particles.
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// Whether no particles are live.
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	#[test]
	fn count_scales_with_width_and_caps() {
		let style = FieldStyle::default();
		assert_eq!(ParticleStore::particle_count(900.0, &style), 30);
		assert_eq!(ParticleStore::particle_count(100.0, &style), 3);
		assert_eq!(ParticleStore::particle_count(3000.0, &style), 60);
		assert_eq!(ParticleStore::particle_count(29.9, &style), 0);
		assert_eq!(ParticleStore::particle_count(-50.0, &style), 0);
		assert_eq!(ParticleStore::particle_count(f64::NAN, &style), 0);
	}

	#[test]
	fn seeded_particles_respect_ranges() {
		let style = FieldStyle::default();
		let mut rng = StdRng::seed_from_u64(7);
		let store = ParticleStore::seed(1280.0, 720.0, &style, &mut rng);

		assert_eq!(store.len(), 42);
		for p in store.particles() {
			assert!((0.0..1280.0).contains(&p.x));
			assert!((0.0..720.0).contains(&p.y));
			assert!(p.vx.abs() <= 0.15 && p.vy.abs() <= 0.15);
			assert!((1.0..=3.0).contains(&p.radius));
			assert!((0.1..=0.6).contains(&p.opacity));
		}
	}

	#[test]
	fn zero_height_viewport_still_seeds() {
		let mut rng = StdRng::seed_from_u64(1);
		let store = ParticleStore::seed(300.0, 0.0, &FieldStyle::default(), &mut rng);
		assert_eq!(store.len(), 10);
		assert!(store.particles().iter().all(|p| p.y == 0.0));
	}

	#[test]
	fn same_seed_same_field() {
		let style = FieldStyle::default();
		let a = ParticleStore::seed(600.0, 400.0, &style, &mut StdRng::seed_from_u64(3));
		let b = ParticleStore::seed(600.0, 400.0, &style, &mut StdRng::seed_from_u64(3));
		assert_eq!(a.particles(), b.particles());
	}
}
