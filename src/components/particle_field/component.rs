//! Leptos component hosting the particle field on a canvas.
//!
//! On mount the component sizes the canvas, seeds the field and starts a
//! `requestAnimationFrame` loop. Window `resize` reseeds the field and
//! window `mousemove` (passive) feeds the pointer. On cleanup the loop is
//! stopped, the pending frame cancelled and both listeners removed.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, MouseEvent, Window};

use super::animation::AnimationLoop;
use super::state::SimulationContext;
use super::surface::{CanvasSurface, Surface};
use super::theme::FieldStyle;
use super::viewport::HostViewport;

/// Everything a mounted field needs per callback.
struct Mount<S = CanvasSurface> {
	field: SimulationContext,
	surface: S,
	animation: AnimationLoop,
}

/// JS callbacks kept alive while mounted.
#[derive(Default)]
struct Callbacks {
	animate: Option<Closure<dyn FnMut()>>,
	resize: Option<Closure<dyn FnMut()>>,
	pointer: Option<Closure<dyn FnMut(MouseEvent)>>,
}

type Shared<T> = Rc<RefCell<T>>;

const CANVAS_STYLE: &str = "position: absolute; inset: 0; pointer-events: none; z-index: -10; \
	display: block; transform: translateZ(0); backface-visibility: hidden; will-change: transform;";

/// Renders the ambient particle field behind its siblings.
///
/// The canvas fills its positioned container, ignores pointer hit-testing and
/// is hidden from assistive technology. If the host cannot provide a 2D
/// context the effect is silently absent.
#[component]
pub fn ParticleBackground(
	/// Field tuning; defaults to the stock cyan style.
	#[prop(optional)]
	theme: FieldStyle,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let mount: Shared<Option<Mount>> = Rc::new(RefCell::new(None));
	let callbacks: Shared<Callbacks> = Rc::default();
	let (mount_init, callbacks_init) = (mount.clone(), callbacks.clone());

	Effect::new(move |_| {
		if mount_init.borrow().is_some() {
			return;
		}
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let Some(window) = web_sys::window() else {
			warn!("particle-field: no window, effect disabled");
			return;
		};
		let Some(surface) = CanvasSurface::acquire(canvas) else {
			warn!("particle-field: 2d context unavailable, effect disabled");
			return;
		};

		let mut field = SimulationContext::new(theme.clone(), random_seed());
		let viewport = field.resize(read_host(&window), &surface);
		let mut animation = AnimationLoop::default();
		animation.start();
		info!(
			"particle-field: mounted {} particles in {}x{} @{}x",
			field.store.len(),
			viewport.width,
			viewport.height,
			viewport.pixel_ratio
		);

		*mount_init.borrow_mut() = Some(Mount {
			field,
			surface,
			animation,
		});

		install_listeners(&window, &mount_init, &callbacks_init);

		// Weak so the closure does not keep its own storage alive.
		let (mount_anim, callbacks_anim) =
			(Rc::downgrade(&mount_init), Rc::downgrade(&callbacks_init));
		callbacks_init.borrow_mut().animate = Some(Closure::new(move || {
			let (Some(mount), Some(callbacks)) = (mount_anim.upgrade(), callbacks_anim.upgrade())
			else {
				return;
			};
			if animate_frame(&mount) {
				request_frame(&mount, &callbacks);
			}
		}));
		request_frame(&mount_init, &callbacks_init);
	});

	let teardown = StoredValue::new_local((mount, callbacks));
	on_cleanup(move || {
		let _ = teardown.try_with_value(|(mount, callbacks)| stop(mount, callbacks));
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field-canvas"
			aria-hidden="true"
			style=CANVAS_STYLE
		/>
	}
}

fn install_listeners(window: &Window, mount: &Shared<Option<Mount>>, callbacks: &Shared<Callbacks>) {
	let mount_resize = mount.clone();
	let on_resize = Closure::<dyn FnMut()>::new(move || {
		let Some(win) = web_sys::window() else {
			return;
		};
		if let Some(ref mut m) = *mount_resize.borrow_mut() {
			if !m.animation.is_running() {
				return;
			}
			let viewport = m.field.resize(read_host(&win), &m.surface);
			let (bw, bh) = viewport.backing_size();
			debug!(
				"particle-field: resized to {}x{} ({}x{} backing), {} particles",
				viewport.width,
				viewport.height,
				bw,
				bh,
				m.field.store.len()
			);
		}
	});

	let mount_pointer = mount.clone();
	let on_pointer = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
		if let Some(ref mut m) = *mount_pointer.borrow_mut() {
			m.field
				.observe_pointer(ev.client_x() as f64, ev.client_y() as f64, ev.time_stamp());
		}
	});

	let _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
	let passive = AddEventListenerOptions::new();
	passive.set_passive(true);
	let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
		"mousemove",
		on_pointer.as_ref().unchecked_ref(),
		&passive,
	);

	let mut cbs = callbacks.borrow_mut();
	cbs.resize = Some(on_resize);
	cbs.pointer = Some(on_pointer);
}

/// One frame callback. The loop itself rechecks its running flag first.
fn animate_frame<S: Surface>(mount: &Shared<Option<Mount<S>>>) -> bool {
	match *mount.borrow_mut() {
		Some(ref mut m) => m.animation.frame(&mut m.field, &m.surface),
		None => false,
	}
}

fn request_frame(mount: &Shared<Option<Mount>>, callbacks: &Shared<Callbacks>) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let handle = match callbacks.borrow().animate {
		Some(ref cb) => window.request_animation_frame(cb.as_ref().unchecked_ref()).ok(),
		None => None,
	};
	if let (Some(handle), Some(m)) = (handle, mount.borrow_mut().as_mut()) {
		m.animation.scheduled(handle);
	}
}

fn stop(mount: &Shared<Option<Mount>>, callbacks: &Shared<Callbacks>) {
	let window = web_sys::window();

	let pending = mount
		.borrow_mut()
		.as_mut()
		.and_then(|m| m.animation.stop());
	if let (Some(handle), Some(win)) = (pending, window.as_ref()) {
		let _ = win.cancel_animation_frame(handle);
	}

	let mut cbs = callbacks.borrow_mut();
	if let Some(win) = window.as_ref() {
		if let Some(ref cb) = cbs.resize {
			let _ = win.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
		if let Some(ref cb) = cbs.pointer {
			let _ =
				win.remove_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}
	}
	cbs.resize = None;
	cbs.pointer = None;
	// `animate` stays alive until the component's storage is dropped, so a frame
	// that fires despite the cancel still lands in `AnimationLoop::frame`.
}

/// Reads logical size and pixel ratio from the window; missing values read as 0.
fn read_host(window: &Window) -> HostViewport {
	let dimension = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	HostViewport {
		width: dimension(window.inner_width()),
		height: dimension(window.inner_height()),
		pixel_ratio: window.device_pixel_ratio(),
	}
}

fn random_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}

#[cfg(test)]
mod tests {
	use super::super::animation::LoopState;
	use super::*;

	struct Blank;

	impl Surface for Blank {
		fn set_backing_size(&self, _: u32, _: u32) {}
		fn set_display_size(&self, _: f64, _: f64) {}
		fn set_scale(&self, _: f64) {}
		fn backing_size(&self) -> (f64, f64) {
			(0.0, 0.0)
		}
		fn clear_rect(&self, _: f64, _: f64, _: f64, _: f64) {}
		fn fill_circle(&self, _: f64, _: f64, _: f64, _: &str) {}
		fn stroke_line(&self, _: (f64, f64), _: (f64, f64), _: &str, _: f64) {}
	}

	fn mounted() -> Shared<Option<Mount<Blank>>> {
		let mut field = SimulationContext::new(FieldStyle::default(), 9);
		field.resize(
			HostViewport {
				width: 600.0,
				height: 400.0,
				pixel_ratio: 1.0,
			},
			&Blank,
		);
		let mut animation = AnimationLoop::default();
		animation.start();
		Rc::new(RefCell::new(Some(Mount {
			field,
			surface: Blank,
			animation,
		})))
	}

	#[test]
	fn frame_callback_runs_while_mounted() {
		let mount = mounted();
		assert!(animate_frame(&mount));
		assert!(animate_frame(&mount));
		assert_eq!(mount.borrow().as_ref().map(|m| m.animation.frames()), Some(2));
	}

	#[test]
	fn late_frame_callback_after_stop_leaves_field_alone() {
		let mount = mounted();
		animate_frame(&mount);
		let pending = mount.borrow_mut().as_mut().and_then(|m| m.animation.stop());
		assert_eq!(pending, None);

		let before = mount.borrow().as_ref().map(|m| m.field.store.particles().to_vec());
		assert!(!animate_frame(&mount));

		let m = mount.borrow();
		let m = m.as_ref().unwrap();
		assert_eq!(m.animation.state(), LoopState::Stopped);
		assert_eq!(m.animation.frames(), 1);
		assert_eq!(Some(m.field.store.particles().to_vec()), before);
	}

	#[test]
	fn unmounted_frame_callback_is_a_no_op() {
		let mount: Shared<Option<Mount<Blank>>> = Rc::default();
		assert!(!animate_frame(&mount));
	}
}
