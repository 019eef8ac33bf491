//! Draws the field onto a [`Surface`].
//!
//! Two passes: particles as filled circles, then proximity links on top.

use super::proximity::Link;
use super::surface::Surface;
use super::theme::FieldStyle;
use super::types::Particle;

/// Clear the surface and paint one frame.
pub fn render<S: Surface>(surface: &S, particles: &[Particle], links: &[Link], style: &FieldStyle) {
	clear(surface);
	draw_particles(surface, particles, style);
	draw_links(surface, particles, links, style);
}

/// Clears the whole backing store. The transform is scaled by the pixel ratio,
/// so the device-pixel extent covers at least the full logical area.
fn clear<S: Surface>(surface: &S) {
	let (w, h) = surface.backing_size();
	surface.clear_rect(0.0, 0.0, w, h);
}

fn draw_particles<S: Surface>(surface: &S, particles: &[Particle], style: &FieldStyle) {
	for p in particles {
		let fill = style.color.with_alpha(p.opacity).to_css();
		surface.fill_circle(p.x, p.y, p.radius, &fill);
	}
}

fn draw_links<S: Surface>(surface: &S, particles: &[Particle], links: &[Link], style: &FieldStyle) {
	for link in links {
		let (Some(a), Some(b)) = (particles.get(link.from), particles.get(link.to)) else {
			continue;
		};
		let stroke = style.color.with_alpha(link.alpha).to_css();
		surface.stroke_line((a.x, a.y), (b.x, b.y), &stroke, style.link_width);
	}
}
