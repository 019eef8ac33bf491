//! Per-frame particle physics: Euler integration, edge wrap, pointer repulsion.
//!
//! Time is a fixed unit per frame, so velocities are in logical pixels per frame.
//! Velocity is never damped or clamped; a particle held near the pointer keeps
//! accelerating for as long as it stays inside the interaction radius.

use super::theme::FieldStyle;
use super::types::{Particle, PointerState};

/// Advance one particle by a single frame inside a `width` x `height` viewport.
pub fn advance(
	particle: &mut Particle,
	pointer: &PointerState,
	width: f64,
	height: f64,
	style: &FieldStyle,
) {
	particle.x += particle.vx;
	particle.y += particle.vy;

	wrap(particle, width, height, style.wrap_margin);
	repel(particle, pointer, style);
}

/// Advance every particle once. Particles do not interact in this step.
pub fn step(
	particles: &mut [Particle],
	pointer: &PointerState,
	width: f64,
	height: f64,
	style: &FieldStyle,
) {
	for p in particles {
		advance(p, pointer, width, height, style);
	}
}

/// Teleport particles that drift past the margin to the opposite edge.
fn wrap(p: &mut Particle, width: f64, height: f64, margin: f64) {
	if p.x < -margin {
		p.x = width + margin;
	}
	if p.x > width + margin {
		p.x = -margin;
	}
	if p.y < -margin {
		p.y = height + margin;
	}
	if p.y > height + margin {
		p.y = -margin;
	}
}

fn repel(p: &mut Particle, pointer: &PointerState, style: &FieldStyle) {
	if !pointer.is_active() {
		return;
	}

	let (dx, dy) = (p.x - pointer.x, p.y - pointer.y);
	let dist = (dx * dx + dy * dy).sqrt();
	if dist <= 0.0 || dist >= style.interaction_radius {
		return;
	}

	let falloff = (style.interaction_radius - dist) / style.interaction_radius;
	let push = falloff * style.repel_strength;
	p.vx += dx / dist * push;
	p.vy += dy / dist * push;
}

#[cfg(test)]
mod tests {
	use super::*;

	fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
		Particle {
			x,
			y,
			vx,
			vy,
			radius: 2.0,
			opacity: 0.3,
		}
	}

	#[test]
	fn integrates_without_pointer() {
		let style = FieldStyle::default();
		let mut p = particle(100.0, 100.0, 0.1, -0.05);
		for _ in 0..10 {
			advance(&mut p, &PointerState::INACTIVE, 800.0, 600.0, &style);
		}
		assert!((p.x - 101.0).abs() < 1e-9);
		assert!((p.y - 99.5).abs() < 1e-9);
		assert_eq!((p.vx, p.vy), (0.1, -0.05));
	}

	#[test]
	fn wraps_past_each_edge() {
		let style = FieldStyle::default();
		let none = PointerState::INACTIVE;

		let mut left = particle(-9.95, 50.0, -0.1, 0.0);
		advance(&mut left, &none, 800.0, 600.0, &style);
		assert_eq!(left.x, 810.0);

		let mut right = particle(809.95, 50.0, 0.1, 0.0);
		advance(&mut right, &none, 800.0, 600.0, &style);
		assert_eq!(right.x, -10.0);

		let mut top = particle(50.0, -9.95, 0.0, -0.1);
		advance(&mut top, &none, 800.0, 600.0, &style);
		assert_eq!(top.y, 610.0);

		let mut bottom = particle(50.0, 609.95, 0.0, 0.1);
		advance(&mut bottom, &none, 800.0, 600.0, &style);
		assert_eq!(bottom.y, -10.0);
	}

	#[test]
	fn pointer_pushes_particle_away() {
		let style = FieldStyle::default();
		let mut p = particle(160.0, 100.0, 0.0, 0.0);
		advance(&mut p, &PointerState::new(100.0, 100.0), 800.0, 600.0, &style);

		// d = 60, falloff = 0.5
		assert!((p.vx - 0.005).abs() < 1e-12);
		assert_eq!(p.vy, 0.0);
	}

	#[test]
	fn pointer_outside_radius_has_no_effect() {
		let style = FieldStyle::default();
		let mut p = particle(220.0, 100.0, 0.0, 0.0);
		advance(&mut p, &PointerState::new(100.0, 100.0), 800.0, 600.0, &style);
		assert_eq!((p.vx, p.vy), (0.0, 0.0));
	}

	#[test]
	fn pointer_on_top_of_particle_is_ignored() {
		let style = FieldStyle::default();
		let mut p = particle(100.0, 100.0, 0.0, 0.0);
		advance(&mut p, &PointerState::new(100.0, 100.0), 800.0, 600.0, &style);
		assert_eq!((p.vx, p.vy), (0.0, 0.0));
		assert!(p.x.is_finite() && p.y.is_finite());
	}

	#[test]
	fn sustained_proximity_keeps_accelerating() {
		let style = FieldStyle::default();
		let pointer = PointerState::new(400.0, 300.0);
		let mut p = particle(410.0, 300.0, 0.0, 0.0);
		let mut last_speed = 0.0;
		for _ in 0..20 {
			advance(&mut p, &pointer, 800.0, 600.0, &style);
			let speed = p.vx.hypot(p.vy);
			assert!(speed > last_speed);
			last_speed = speed;
		}
	}
}
