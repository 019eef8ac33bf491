//! Core data carried by the particle field: particles and the pointer.

/// A single drifting point.
///
/// `radius` and `opacity` are fixed at creation; only position and velocity
/// change while the field runs.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position, logical pixels.
	pub x: f64,
	/// Vertical position, logical pixels.
	pub y: f64,
	/// Horizontal velocity, logical pixels per frame.
	pub vx: f64,
	/// Vertical velocity, logical pixels per frame.
	pub vy: f64,
	/// Circle radius in logical pixels.
	pub radius: f64,
	/// Fill alpha, within the style's opacity range.
	pub opacity: f64,
}

/// Last accepted pointer coordinate, in logical (CSS) pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
	/// Client x coordinate.
	pub x: f64,
	/// Client y coordinate.
	pub y: f64,
}

impl PointerState {
	/// Sentinel far outside any viewport, meaning "no active interaction".
	pub const INACTIVE: PointerState = PointerState {
		x: -9999.0,
		y: -9999.0,
	};

	/// An active pointer at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Whether the pointer holds a real position rather than the sentinel.
	pub fn is_active(&self) -> bool {
		*self != Self::INACTIVE
	}
}

impl Default for PointerState {
	fn default() -> Self {
		Self::INACTIVE
	}
}
