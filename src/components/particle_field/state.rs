//! The field's single mutable aggregate.
//!
//! Particles, pointer and viewport live together in [`SimulationContext`]. The
//! frame, pointer and resize callbacks all receive it explicitly; nothing else
//! holds field state.

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::input::InputBridge;
use super::particles::ParticleStore;
use super::simulation;
use super::surface::Surface;
use super::theme::FieldStyle;
use super::viewport::{HostViewport, ViewportManager, ViewportState};

/// Particles, pointer and viewport bound together with the style and RNG that
/// drive them.
pub struct SimulationContext {
	style: FieldStyle,
	/// Live particles; replaced on every resize.
	pub store: ParticleStore,
	/// Throttled pointer position.
	pub input: InputBridge,
	/// Logical size and pixel ratio.
	pub viewport: ViewportManager,
	rng: StdRng,
}

impl SimulationContext {
	/// An empty field. Nothing is seeded until the first [`resize`](Self::resize).
	pub fn new(style: FieldStyle, seed: u64) -> Self {
		let style = style.validated();
		Self {
			input: InputBridge::new(style.pointer_interval_ms),
			store: ParticleStore::default(),
			viewport: ViewportManager::default(),
			rng: StdRng::seed_from_u64(seed),
			style,
		}
	}

	/// The validated style the field runs with.
	pub fn style(&self) -> &FieldStyle {
		&self.style
	}

	/// Resize the surface to the host viewport, then replace every particle.
	pub fn resize<S: Surface>(&mut self, host: HostViewport, surface: &S) -> ViewportState {
		let state = self.viewport.resize(host, surface);
		self.reseed();
		state
	}

	/// Discard all particles and scatter a new set over the current viewport.
	pub fn reseed(&mut self) {
		let ViewportState { width, height, .. } = *self.viewport.state();
		self.store = ParticleStore::seed(width, height, &self.style, &mut self.rng);
	}

	/// Record a pointer position observed at `now_ms`, subject to throttling.
	pub fn observe_pointer(&mut self, x: f64, y: f64, now_ms: f64) -> bool {
		self.input.observe(x, y, now_ms)
	}

	/// Advance every particle by one frame.
	pub fn step(&mut self) {
		let ViewportState { width, height, .. } = *self.viewport.state();
		simulation::step(
			self.store.particles_mut(),
			self.input.pointer(),
			width,
			height,
			&self.style,
		);
	}
}
