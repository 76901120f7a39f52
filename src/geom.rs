use glam::Vec2;

/// Axis-aligned rectangle, used for canvas working areas and placement
/// rectangles during target generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABox {
	min: Vec2,
	max: Vec2,
}

impl AABox {
	pub fn new(min: Vec2, max: Vec2) -> Self {
		Self { min, max }
	}

	pub fn from_size(width: f32, height: f32) -> Self {
		Self::new(Vec2::ZERO, Vec2::new(width, height))
	}

	/// Insets the box by `margin` on every side. The result may be
	/// degenerate; callers check before sampling.
	pub fn shrunk(self, margin: f32) -> Self {
		Self::new(self.min + margin, self.max - margin)
	}

	pub fn is_degenerate(&self) -> bool {
		self.min.x > self.max.x || self.min.y > self.max.y
	}

	pub fn extent(&self) -> Vec2 {
		self.max - self.min
	}

	pub fn contains(&self, point: Vec2) -> bool {
		!(point.x < self.min.x)
			&& !(point.y < self.min.y)
			&& !(point.x > self.max.x)
			&& !(point.y > self.max.y)
	}

	/// Uniformly sampled point inside the box.
	pub fn sample(&self, rng: &mut fastrand::Rng) -> Vec2 {
		self.min + self.extent() * Vec2::new(rng.f32(), rng.f32())
	}

	pub fn min(&self) -> Vec2 {
		self.min
	}

	pub fn max(&self) -> Vec2 {
		self.max
	}
}

/// Directed span between two points. Doubles as a line target's reference
/// geometry and as the step between two consecutive stroke samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
	pub start: Vec2,
	pub end: Vec2,
}

impl Segment {
	pub fn new(start: Vec2, end: Vec2) -> Self {
		Self { start, end }
	}

	pub fn delta(&self) -> Vec2 {
		self.end - self.start
	}

	pub fn length(&self) -> f32 {
		self.delta().length()
	}

	/// Normalized projection of `point` onto the segment's carrier line:
	/// 0 at `start`, 1 at `end`, outside [0, 1] past either endpoint.
	/// A zero-length segment projects everything to 0.
	pub fn project(&self, point: Vec2) -> f32 {
		let delta = self.delta();
		let length_squared = delta.length_squared();
		if length_squared <= f32::EPSILON {
			return 0.0;
		}
		(point - self.start).dot(delta) / length_squared
	}

	/// Perpendicular distance from `point` to the infinite line through
	/// the segment. Falls back to point distance when the segment is
	/// degenerate.
	pub fn line_distance(&self, point: Vec2) -> f32 {
		let delta = self.delta();
		let length = delta.length();
		if length <= f32::EPSILON {
			return (point - self.start).length();
		}
		delta.perp_dot(point - self.start).abs() / length
	}
}
