//! Throttled pointer tracking.

use super::types::PointerState;

/// Holds the latest pointer position, accepting at most one update per
/// `interval_ms`. Updates arriving sooner are dropped, not queued.
#[derive(Clone, Debug)]
pub struct InputBridge {
	pointer: PointerState,
	interval_ms: f64,
	last_accepted: Option<f64>,
}

impl InputBridge {
	/// Inactive pointer, accepting one update per `interval_ms`.
	pub fn new(interval_ms: f64) -> Self {
		Self {
			pointer: PointerState::INACTIVE,
			interval_ms,
			last_accepted: None,
		}
	}

	/// Offer a pointer position observed at `now_ms`. Returns whether it was accepted.
	pub fn observe(&mut self, x: f64, y: f64, now_ms: f64) -> bool {
		if let Some(last) = self.last_accepted {
			if now_ms - last < self.interval_ms {
				return false;
			}
		}
		self.last_accepted = Some(now_ms);
		self.pointer = PointerState::new(x, y);
		true
	}

	/// Last accepted position, or the inactive sentinel.
	pub fn pointer(&self) -> &PointerState {
		&self.pointer
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn starts_inactive() {
		assert!(!InputBridge::new(16.0).pointer().is_active());
	}

	#[test]
	fn drops_updates_inside_interval() {
		let mut input = InputBridge::new(16.0);
		assert!(input.observe(10.0, 10.0, 1000.0));
		assert!(!input.observe(20.0, 20.0, 1008.0));
		assert!(!input.observe(30.0, 30.0, 1015.9));
		assert_eq!(input.pointer(), &PointerState::new(10.0, 10.0));

		assert!(input.observe(40.0, 40.0, 1016.0));
		assert_eq!(input.pointer(), &PointerState::new(40.0, 40.0));
	}

	#[test]
	fn first_update_is_always_accepted() {
		let mut input = InputBridge::new(16.0);
		assert!(input.observe(5.0, 6.0, 0.0));
		assert!(input.pointer().is_active());
	}
}
