//! Frame loop lifecycle.
//!
//! The host calls [`AnimationLoop::frame`] once per display frame and, when it
//! returns `true`, registers for the next one and reports the handle through
//! [`AnimationLoop::scheduled`]. Teardown is cooperative: [`AnimationLoop::stop`]
//! flips the state and hands back any pending handle for best-effort
//! cancellation. A frame that was already in flight sees `Stopped` on entry and
//! touches nothing.

use log::info;

use super::proximity::ProximityGraph;
use super::render;
use super::state::SimulationContext;
use super::surface::Surface;

/// Lifecycle of the loop. `Stopped` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
	/// Not yet mounted.
	#[default]
	Idle,
	/// Frames run and reschedule.
	Running,
	/// Torn down; frames are ignored.
	Stopped,
}

/// Drives simulate, link and render once per frame while running.
#[derive(Debug, Default)]
pub struct AnimationLoop {
	state: LoopState,
	pending: Option<i32>,
	graph: ProximityGraph,
	frames: u64,
}

impl AnimationLoop {
	/// Enter `Running`. Only valid from `Idle`; returns whether the loop started.
	pub fn start(&mut self) -> bool {
		if self.state != LoopState::Idle {
			return false;
		}
		self.state = LoopState::Running;
		true
	}

	/// Current lifecycle state.
	pub fn state(&self) -> LoopState {
		self.state
	}

	/// Whether frames currently run.
	pub fn is_running(&self) -> bool {
		self.state == LoopState::Running
	}

	/// Frames fully processed so far.
	pub fn frames(&self) -> u64 {
		self.frames
	}

	/// Links computed by the most recent frame.
	pub fn graph(&self) -> &ProximityGraph {
		&self.graph
	}

	/// Run one frame. Returns whether the host should schedule another.
	pub fn frame<S: Surface>(&mut self, field: &mut SimulationContext, surface: &S) -> bool {
		if !self.is_running() {
			return false;
		}
		self.pending = None;

		field.step();
		self.graph.rebuild(field.store.particles(), field.style());
		render::render(
			surface,
			field.store.particles(),
			self.graph.links(),
			field.style(),
		);

		self.frames += 1;
		true
	}

	/// Remember the handle of the next registered frame callback.
	pub fn scheduled(&mut self, handle: i32) {
		if self.is_running() {
			self.pending = Some(handle);
		}
	}

	/// Stop for good. Returns the pending frame handle, if any, so the host
	/// can cancel it.
	pub fn stop(&mut self) -> Option<i32> {
		if self.state != LoopState::Stopped {
			info!("particle-field: loop stopped after {} frames", self.frames);
		}
		self.state = LoopState::Stopped;
		self.pending.take()
	}
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;

	use super::super::theme::FieldStyle;
	use super::super::viewport::HostViewport;
	use super::*;

	#[derive(Default)]
	struct Counter {
		draws: Cell<usize>,
	}

	impl Surface for Counter {
		fn set_backing_size(&self, _: u32, _: u32) {}
		fn set_display_size(&self, _: f64, _: f64) {}
		fn set_scale(&self, _: f64) {}
		fn backing_size(&self) -> (f64, f64) {
			(0.0, 0.0)
		}
		fn clear_rect(&self, _: f64, _: f64, _: f64, _: f64) {
			self.draws.set(self.draws.get() + 1);
		}
		fn fill_circle(&self, _: f64, _: f64, _: f64, _: &str) {}
		fn stroke_line(&self, _: (f64, f64), _: (f64, f64), _: &str, _: f64) {}
	}

	fn field(surface: &Counter) -> SimulationContext {
		let mut field = SimulationContext::new(FieldStyle::default(), 11);
		field.resize(
			HostViewport {
				width: 900.0,
				height: 600.0,
				pixel_ratio: 1.0,
			},
			surface,
		);
		field
	}

	#[test]
	fn idle_loop_does_not_run_frames() {
		let surface = Counter::default();
		let mut field = field(&surface);
		let mut anim = AnimationLoop::default();

		assert!(!anim.frame(&mut field, &surface));
		assert_eq!(surface.draws.get(), 0);
	}

	#[test]
	fn running_loop_requests_next_frame() {
		let surface = Counter::default();
		let mut field = field(&surface);
		let mut anim = AnimationLoop::default();

		assert!(anim.start());
		assert!(anim.frame(&mut field, &surface));
		assert!(anim.frame(&mut field, &surface));
		assert_eq!(anim.frames(), 2);
		assert_eq!(surface.draws.get(), 2);
	}

	#[test]
	fn stop_returns_pending_handle_once() {
		let mut anim = AnimationLoop::default();
		anim.start();
		anim.scheduled(42);

		assert_eq!(anim.stop(), Some(42));
		assert_eq!(anim.stop(), None);
		assert_eq!(anim.state(), LoopState::Stopped);
	}

	#[test]
	fn stopped_is_terminal() {
		let mut anim = AnimationLoop::default();
		anim.start();
		anim.stop();

		assert!(!anim.start());
		anim.scheduled(7);
		assert_eq!(anim.stop(), None);
	}

	#[test]
	fn in_flight_frame_after_stop_is_a_no_op() {
		let surface = Counter::default();
		let mut field = field(&surface);
		let mut anim = AnimationLoop::default();
		anim.start();
		anim.frame(&mut field, &surface);
		anim.stop();

		let before = field.store.particles().to_vec();
		assert!(!anim.frame(&mut field, &surface));
		assert_eq!(field.store.particles(), &before[..]);
		assert_eq!(surface.draws.get(), 1);
	}
}
