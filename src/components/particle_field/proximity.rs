//! Pairwise proximity links between particles.
//!
//! Every unordered pair is checked each frame, which is O(n^2). That is only
//! affordable because the particle count is capped at
//! [`MAX_PARTICLES`](super::theme::MAX_PARTICLES).

use super::theme::FieldStyle;
use super::types::Particle;

/// A connected pair, `from < to`, with the alpha of the line joining them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	/// Index of the first particle.
	pub from: usize,
	/// Index of the second particle, always greater than `from`.
	pub to: usize,
	/// Stroke alpha for the line.
	pub alpha: f64,
}

/// Line alpha for two particles, or `None` when they are too far apart.
///
/// Depends only on the distance between the two, so it is symmetric.
pub fn link_alpha(a: &Particle, b: &Particle, style: &FieldStyle) -> Option<f64> {
	let (dx, dy) = (a.x - b.x, a.y - b.y);
	let dist_sq = dx * dx + dy * dy;
	if dist_sq >= style.link_radius * style.link_radius {
		return None;
	}
	Some(style.link_opacity * (1.0 - dist_sq.sqrt() / style.link_radius))
}

/// This frame's links. The buffer is reused across frames.
#[derive(Clone, Debug, Default)]
pub struct ProximityGraph {
	links: Vec<Link>,
}

impl ProximityGraph {
	/// Recompute the links for the current particle positions.
	pub fn rebuild(&mut self, particles: &[Particle], style: &FieldStyle) {
		self.links.clear();
		for (i, a) in particles.iter().enumerate() {
			for (j, b) in particles.iter().enumerate().skip(i + 1) {
				if let Some(alpha) = link_alpha(a, b, style) {
					self.links.push(Link { from: i, to: j, alpha });
				}
			}
		}
	}

	/// Links from the last [`rebuild`](Self::rebuild).
	pub fn links(&self) -> &[Link] {
		&self.links
	}
}
