//! Visual and physical tuning for the particle field.
//!
//! Every constant the field uses lives in [`FieldStyle`]. The defaults reproduce
//! the stock cyan look; a page may override any subset of fields through JSON.

use log::warn;
use serde::Deserialize;

/// Hard ceiling on the particle count. Proximity links are computed over every
/// pair each frame, so this bounds per-frame work at 1770 pair checks.
pub const MAX_PARTICLES: usize = 60;

/// HSLA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	/// Hue in degrees.
	pub h: f64,
	/// Saturation in percent.
	pub s: f64,
	/// Lightness in percent.
	pub l: f64,
	/// Alpha in `[0, 1]`; opaque when omitted.
	#[serde(default = "opaque")]
	pub a: f64,
}

fn opaque() -> f64 {
	1.0
}

impl Color {
	/// Opaque color from hue, saturation and lightness.
	pub const fn hsl(h: f64, s: f64, l: f64) -> Self {
		Self { h, s, l, a: 1.0 }
	}

	/// Color with explicit alpha.
	pub const fn hsla(h: f64, s: f64, l: f64, a: f64) -> Self {
		Self { h, s, l, a }
	}

	/// Same hue with a different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS `hsla(...)` string.
	pub fn to_css(self) -> String {
		format!("hsla({}, {}%, {}%, {})", self.h, self.s, self.l, self.a)
	}
}

/// Complete particle field configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldStyle {
	/// Hue shared by particles and links; alpha is supplied per draw.
	pub color: Color,
	/// Upper bound on the particle count, never above [`MAX_PARTICLES`].
	pub max_particles: usize,
	/// Logical pixels of viewport width per particle.
	pub spacing: f64,
	/// Maximum magnitude of each initial velocity component.
	pub speed: f64,
	/// Smallest particle radius, logical pixels.
	pub radius_min: f64,
	/// Largest particle radius, logical pixels.
	pub radius_max: f64,
	/// Lowest particle fill alpha.
	pub opacity_min: f64,
	/// Highest particle fill alpha.
	pub opacity_max: f64,
	/// Distance within which the pointer pushes particles away.
	pub interaction_radius: f64,
	/// Velocity change per frame at zero distance from the pointer.
	pub repel_strength: f64,
	/// Distance within which two particles are joined by a line.
	pub link_radius: f64,
	/// Line alpha for two coincident particles; fades linearly to 0 at `link_radius`.
	pub link_opacity: f64,
	/// Line width in logical pixels.
	pub link_width: f64,
	/// Overscan beyond each viewport edge before a particle wraps around.
	pub wrap_margin: f64,
	/// Minimum milliseconds between accepted pointer updates.
	pub pointer_interval_ms: f64,
}

impl Default for FieldStyle {
	fn default() -> Self {
		Self {
			color: Color::hsl(187.0, 80.0, 55.0),
			max_particles: MAX_PARTICLES,
			spacing: 30.0,
			speed: 0.15,
			radius_min: 1.0,
			radius_max: 3.0,
			opacity_min: 0.1,
			opacity_max: 0.6,
			interaction_radius: 120.0,
			repel_strength: 0.01,
			link_radius: 120.0,
			link_opacity: 0.12,
			link_width: 1.0,
			wrap_margin: 10.0,
			pointer_interval_ms: 16.0,
		}
	}
}

impl FieldStyle {
	/// Parse a (possibly partial) style from JSON, filling gaps with defaults.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str::<FieldStyle>(json).map(Self::validated)
	}

	/// Repair values that would break seeding or the frame budget.
	///
	/// Every numeric field ends up finite, and every seeding range has a finite span.
	pub fn validated(mut self) -> Self {
		let defaults = Self::default();

		if self.max_particles > MAX_PARTICLES {
			warn!(
				"particle-field: max_particles {} exceeds ceiling, clamping to {}",
				self.max_particles, MAX_PARTICLES
			);
			self.max_particles = MAX_PARTICLES;
		}
		self.spacing = positive("spacing", self.spacing, defaults.spacing);

		if !self.speed.is_finite() {
			warn!("particle-field: speed {} is not finite, using default", self.speed);
			self.speed = defaults.speed;
		}
		self.speed = self.speed.abs();
		if self.speed > MAX_SPEED {
			warn!(
				"particle-field: speed {} exceeds ceiling, clamping to {}",
				self.speed, MAX_SPEED
			);
			self.speed = MAX_SPEED;
		}

		(self.radius_min, self.radius_max) = ordered(self.radius_min, self.radius_max);
		if !(self.radius_min.is_finite() && self.radius_min > 0.0 && self.radius_max.is_finite()) {
			warn!(
				"particle-field: radius range {}..{} is invalid, using default",
				self.radius_min, self.radius_max
			);
			(self.radius_min, self.radius_max) = (defaults.radius_min, defaults.radius_max);
		}
		if self.radius_max > MAX_RADIUS {
			warn!(
				"particle-field: radius {} exceeds ceiling, clamping to {}",
				self.radius_max, MAX_RADIUS
			);
			self.radius_max = MAX_RADIUS;
			self.radius_min = self.radius_min.min(MAX_RADIUS);
		}

		if self.opacity_min.is_nan() || self.opacity_max.is_nan() {
			warn!("particle-field: opacity range is not a number, using default");
			(self.opacity_min, self.opacity_max) = (defaults.opacity_min, defaults.opacity_max);
		}
		(self.opacity_min, self.opacity_max) = ordered(
			self.opacity_min.clamp(0.0, 1.0),
			self.opacity_max.clamp(0.0, 1.0),
		);

		self.interaction_radius = non_negative(
			"interaction_radius",
			self.interaction_radius,
			defaults.interaction_radius,
		);
		self.repel_strength =
			non_negative("repel_strength", self.repel_strength, defaults.repel_strength);
		self.link_radius = non_negative("link_radius", self.link_radius, defaults.link_radius);
		self.link_opacity =
			non_negative("link_opacity", self.link_opacity, defaults.link_opacity).min(1.0);
		self.link_width = positive("link_width", self.link_width, defaults.link_width);
		self.wrap_margin = non_negative("wrap_margin", self.wrap_margin, defaults.wrap_margin);
		self.pointer_interval_ms = non_negative(
			"pointer_interval_ms",
			self.pointer_interval_ms,
			defaults.pointer_interval_ms,
		);
		self
	}
}

/// Ceiling on each initial velocity component, in logical pixels per frame.
const MAX_SPEED: f64 = 50.0;

/// Ceiling on particle radius, in logical pixels.
const MAX_RADIUS: f64 = 100.0;

fn non_negative(name: &str, value: f64, default: f64) -> f64 {
	if value.is_finite() && value >= 0.0 {
		return value;
	}
	warn!("particle-field: {} {} is invalid, using {}", name, value, default);
	default
}

fn positive(name: &str, value: f64, default: f64) -> f64 {
	if value.is_finite() && value > 0.0 {
		return value;
	}
	warn!("particle-field: {} {} is invalid, using {}", name, value, default);
	default
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
	if a > b { (b, a) } else { (a, b) }
}
