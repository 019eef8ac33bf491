//! Logical vs. backing-store sizing and device pixel ratio handling.

use super::surface::Surface;

/// Raw readings from the host window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HostViewport {
	/// Logical width in CSS pixels.
	pub width: f64,
	/// Logical height in CSS pixels.
	pub height: f64,
	/// `window.devicePixelRatio` as reported; may be below 1 or not finite.
	pub pixel_ratio: f64,
}

/// Sanitized viewport the field simulates and draws in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
	/// Logical width in CSS pixels, never negative.
	pub width: f64,
	/// Logical height in CSS pixels, never negative.
	pub height: f64,
	/// Device pixels per logical pixel, at least 1.
	pub pixel_ratio: f64,
}

impl Default for ViewportState {
	fn default() -> Self {
		Self {
			width: 0.0,
			height: 0.0,
			pixel_ratio: 1.0,
		}
	}
}

impl ViewportState {
	/// Clean up raw readings: bad dimensions become 0, bad ratios become 1.
	pub fn from_host(host: HostViewport) -> Self {
		let dimension = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
		let pixel_ratio = if host.pixel_ratio.is_finite() {
			host.pixel_ratio.max(1.0)
		} else {
			1.0
		};
		Self {
			width: dimension(host.width),
			height: dimension(host.height),
			pixel_ratio,
		}
	}

	/// Backing store size in device pixels: `round(logical * ratio)`.
	pub fn backing_size(&self) -> (u32, u32) {
		(
			(self.width * self.pixel_ratio).round() as u32,
			(self.height * self.pixel_ratio).round() as u32,
		)
	}
}

/// Owns the viewport state and keeps the surface sized to it.
#[derive(Clone, Debug, Default)]
pub struct ViewportManager {
	state: ViewportState,
}

impl ViewportManager {
	/// Adopt new host readings and resize `surface` to match.
	///
	/// The backing store is sized in device pixels, the display size in logical
	/// pixels, and the transform scaled so later draw calls use logical units.
	pub fn resize<S: Surface>(&mut self, host: HostViewport, surface: &S) -> ViewportState {
		self.state = ViewportState::from_host(host);

		let (bw, bh) = self.state.backing_size();
		surface.set_backing_size(bw, bh);
		surface.set_display_size(self.state.width, self.state.height);
		surface.set_scale(self.state.pixel_ratio);

		self.state
	}

	/// Viewport from the last resize.
	pub fn state(&self) -> &ViewportState {
		&self.state
	}
}
