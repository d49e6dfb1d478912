use std::f64::consts::PI;
use std::fmt;

use web_sys::CanvasRenderingContext2d;

use super::state::ParticleField;
use super::types::Vec2;
use crate::theme::Theme;

/// An sRGB colour with alpha, formatted as a CSS `rgba()` string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl fmt::Display for Rgba {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Ink colour for particles and lines: white on dark, black on light.
pub fn ink(theme: Theme, alpha: f64) -> Rgba {
	let v = if theme.is_dark() { 255 } else { 0 };
	Rgba {
		r: v,
		g: v,
		b: v,
		a: alpha,
	}
}

/// The drawing operations the particle field needs from a 2D target.
pub trait DrawSurface {
	fn clear(&mut self, width: f64, height: f64);
	fn draw_line(&mut self, from: Vec2, to: Vec2, width: f64, color: Rgba);
	fn draw_circle(&mut self, center: Vec2, radius: f64, color: Rgba);
}

impl DrawSurface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn draw_line(&mut self, from: Vec2, to: Vec2, width: f64, color: Rgba) {
		self.begin_path();
		self.set_stroke_style_str(&color.to_string());
		self.set_line_width(width);
		self.move_to(from.x, from.y);
		self.line_to(to.x, to.y);
		self.stroke();
	}

	fn draw_circle(&mut self, center: Vec2, radius: f64, color: Rgba) {
		self.begin_path();
		let _ = self.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
		self.set_fill_style_str(&color.to_string());
		self.fill();
	}
}

/// Clear the surface, then draw connections underneath the particles.
pub fn render<S: DrawSurface + ?Sized>(field: &ParticleField, theme: Theme, surface: &mut S) {
	let vp = field.viewport();
	surface.clear(vp.width, vp.height);

	let line_width = field.config.connection_width;
	for link in field.connections() {
		surface.draw_line(link.from, link.to, line_width, ink(theme, link.opacity));
	}
	for p in field.particles() {
		surface.draw_circle(p.position, p.radius, ink(theme, p.opacity));
	}
}

#[cfg(test)]
pub(crate) mod testing {
	use super::*;

	#[derive(Clone, Debug, PartialEq)]
	pub enum DrawCall {
		Clear(f64, f64),
		Line(Vec2, Vec2, Rgba),
		Circle(Vec2, f64, Rgba),
	}

	/// Records every call instead of drawing.
	#[derive(Debug, Default)]
	pub struct RecordingSurface {
		pub calls: Vec<DrawCall>,
	}

	impl DrawSurface for RecordingSurface {
		fn clear(&mut self, width: f64, height: f64) {
			self.calls.push(DrawCall::Clear(width, height));
		}

		fn draw_line(&mut self, from: Vec2, to: Vec2, _width: f64, color: Rgba) {
			self.calls.push(DrawCall::Line(from, to, color));
		}

		fn draw_circle(&mut self, center: Vec2, radius: f64, color: Rgba) {
			self.calls.push(DrawCall::Circle(center, radius, color));
		}
	}
}
