//! particle-field: ambient particle background for web pages.
//!
//! This crate provides a WASM canvas component that draws drifting particles,
//! pushes them away from the pointer and links nearby ones with fading lines.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::particle_field::{FieldStyle, ParticleBackground};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("particle-field: logging initialized");
}

/// Load a field style from a script element with id="particle-config".
/// Expected format: JSON with any subset of [`FieldStyle`] fields.
fn load_style() -> Option<FieldStyle> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("particle-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match FieldStyle::from_json(&json_text) {
		Ok(style) => {
			info!(
				"particle-field: loaded style (up to {} particles)",
				style.max_particles
			);
			Some(style)
		}
		Err(e) => {
			warn!("particle-field: failed to parse style: {}", e);
			None
		}
	}
}

/// Main application component.
/// Renders a full-height hero section with the particle field behind it.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let style = load_style().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Particle Field" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<section class="hero" style="position: relative; min-height: 100vh; overflow: hidden;">
			<ParticleBackground theme=style />
			<div class="hero-content">
				<h1>"Particle Field"</h1>
				<p class="subtitle">"Move the pointer through the field to push particles away."</p>
			</div>
		</section>
	}
}
