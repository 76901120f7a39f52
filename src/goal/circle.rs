use std::f32::consts::TAU;

use glam::Vec2;

use super::{uniform, GenerateError, SizeClass, EDGE_MARGIN, MAX_TRIES};
use crate::geom::AABox;

/// Guide crawl speed around the circle, in radians per second.
const GUIDE_RATE: f32 = 0.08;

/// A circle target. Origin, radius and start angle are fixed for the
/// target's lifetime; only the guide-animation offset mutates.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalCircle {
	origin: Vec2,
	radius: f32,
	start_angle: f32,
	offset: f32,
}

impl GoalCircle {
	pub fn new(origin: Vec2, radius: f32, start_angle: f32) -> Self {
		Self {
			origin,
			radius,
			start_angle,
			offset: 0.0,
		}
	}

	pub fn origin(&self) -> Vec2 {
		self.origin
	}

	pub fn radius(&self) -> f32 {
		self.radius
	}

	pub fn start_angle(&self) -> f32 {
		self.start_angle
	}

	pub fn advance(&mut self, dt: f32) {
		self.offset += dt * GUIDE_RATE;
		while self.offset >= TAU {
			self.offset -= TAU;
		}
	}

	/// Angle the dashed guide starts from this frame.
	pub fn guide_angle(&self) -> f32 {
		self.start_angle + self.offset
	}

	/// Marker point where the user is encouraged to begin tracing.
	pub fn start_point(&self) -> Vec2 {
		self.origin + self.radius * Vec2::from_angle(self.start_angle)
	}

	/// Draws a radius from the size class and places the origin so the
	/// whole circle keeps the edge margin. A radius too large for the
	/// canvas burns a retry; fails once the budget is spent.
	pub fn generate(
		canvas_width: f32,
		canvas_height: f32,
		size: SizeClass,
		rng: &mut fastrand::Rng,
	) -> Result<Self, GenerateError> {
		for _ in 0..MAX_TRIES {
			let radius = uniform(rng, size.circle_radius());
			let placement = AABox::from_size(canvas_width, canvas_height).shrunk(EDGE_MARGIN + radius);
			if placement.is_degenerate() {
				continue;
			}
			let origin = placement.sample(rng);
			let start_angle = rng.f32() * TAU;
			return Ok(Self::new(origin, radius, start_angle));
		}
		tracing::warn!(?size, canvas_width, canvas_height, "circle placement budget exhausted");
		Err(GenerateError::Circle {
			size,
			width: canvas_width,
			height: canvas_height,
			tries: MAX_TRIES,
		})
	}
}
