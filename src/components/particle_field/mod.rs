//! Ambient particle field rendered on an HTML canvas.
//!
//! Drifting points wrap around the viewport edges, are pushed away by the
//! pointer, and are joined by fading lines when close to each other:
//! - [`ParticleStore`] seeds particles from the viewport width
//! - [`simulation`] advances each particle once per frame
//! - [`ProximityGraph`] finds linked pairs and their line alpha
//! - [`render`] paints the frame onto a [`Surface`]
//! - [`AnimationLoop`] owns the start/stop lifecycle
//!
//! # Example
//!
//! ```ignore
//! use particle_field::{FieldStyle, ParticleBackground};
//!
//! view! {
//!     <section style="position: relative;">
//!         <ParticleBackground theme=FieldStyle::default() />
//!         <h1>"Hello"</h1>
//!     </section>
//! }
//! ```

mod animation;
mod component;
mod input;
mod particles;
mod proximity;
pub mod render;
pub mod simulation;
mod state;
mod surface;
pub mod theme;
mod types;
mod viewport;

pub use animation::{AnimationLoop, LoopState};
pub use component::ParticleBackground;
pub use input::InputBridge;
pub use particles::ParticleStore;
pub use proximity::{Link, ProximityGraph, link_alpha};
pub use state::SimulationContext;
pub use surface::{CanvasSurface, Surface};
pub use theme::{Color, FieldStyle, MAX_PARTICLES};
pub use types::{Particle, PointerState};
pub use viewport::{HostViewport, ViewportManager, ViewportState};
