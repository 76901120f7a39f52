use std::f32::consts::TAU;

use glam::Vec2;

use super::{uniform, GenerateError, SizeClass, EDGE_MARGIN, MAX_TRIES};
use crate::geom::{AABox, Segment};

/// Guide crawl speed, in dash periods per second.
const GUIDE_RATE: f32 = 0.45;
/// One dash-gap period of the guide pattern, in pixels.
const DASH_PERIOD: f32 = 20.0;

/// A straight-line target. The segment is fixed for the target's
/// lifetime; only the guide-animation offset mutates.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalLine {
	segment: Segment,
	offset: f32,
}

impl GoalLine {
	pub fn new(segment: Segment) -> Self {
		Self {
			segment,
			offset: 0.0,
		}
	}

	pub fn segment(&self) -> Segment {
		self.segment
	}

	pub fn advance(&mut self, dt: f32) {
		self.offset += dt * GUIDE_RATE;
		while self.offset >= 1.0 {
			self.offset -= 1.0;
		}
	}

	/// Span to stroke with the dashed guide pattern this frame. Its start
	/// crawls from the target's first endpoint toward the second so the
	/// dashes appear to travel along the line.
	pub fn guide(&self) -> Segment {
		let direction = self.segment.delta().normalize_or_zero();
		Segment::new(
			self.segment.start + direction * (self.offset * DASH_PERIOD),
			self.segment.end,
		)
	}

	/// Draws a length from the size class, a start point and a direction,
	/// and keeps the result only when the far endpoint also lands inside
	/// the working rectangle. Fails once the retry budget is spent.
	pub fn generate(
		canvas_width: f32,
		canvas_height: f32,
		size: SizeClass,
		rng: &mut fastrand::Rng,
	) -> Result<Self, GenerateError> {
		let working = AABox::from_size(canvas_width, canvas_height).shrunk(EDGE_MARGIN);
		for _ in 0..MAX_TRIES {
			let length = uniform(rng, size.line_length());
			let start = working.sample(rng);
			let angle = rng.f32() * TAU;
			let end = start + length * Vec2::from_angle(angle);
			if working.contains(end) {
				return Ok(Self::new(Segment::new(start, end)));
			}
		}
		tracing::warn!(?size, canvas_width, canvas_height, "line placement budget exhausted");
		Err(GenerateError::Line {
			size,
			width: canvas_width,
			height: canvas_height,
			tries: MAX_TRIES,
		})
	}
}
