use glam::{Vec2, Vec3};

use super::ScoreVerdict;
use crate::util::color;

/// Pen pressure (0..1) to stroke width in pixels.
pub const WIDTH_SCALE: f32 = 20.0;

/// One recorded pen sample. `score` is `None` for samples laid down
/// before live grading engages: the pen-down sentinel, early jitter
/// samples, and anything drawn while no exercise is running.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeSample {
	pub position: Vec2,
	pub color: Vec3,
	pub width: f32,
	pub score: Option<ScoreVerdict>,
}

impl StrokeSample {
	/// The pen-down sample. It has no preceding point to grade against.
	pub fn sentinel(position: Vec2) -> Self {
		Self {
			position,
			color: color::GREY,
			width: 0.0,
			score: None,
		}
	}
}

/// The stroke currently being drawn: an append-only sample buffer opened
/// on pen-down and consumed on pen-up.
#[derive(Debug, Clone)]
pub struct ActiveStroke {
	samples: Vec<StrokeSample>,
}

impl ActiveStroke {
	pub fn begin(position: Vec2) -> Self {
		Self {
			samples: vec![StrokeSample::sentinel(position)],
		}
	}

	pub fn add_sample(&mut self, sample: StrokeSample) {
		self.samples.push(sample);
	}

	pub fn samples(&self) -> &[StrokeSample] {
		&self.samples
	}

	pub fn len(&self) -> usize {
		self.samples.len()
	}

	pub fn is_empty(&self) -> bool {
		self.samples.is_empty()
	}

	/// Strokes shorter than two samples carry no usable segment and are
	/// dropped without a verdict.
	pub fn is_scorable(&self) -> bool {
		self.samples.len() >= 2
	}

	pub fn finish(self) -> Vec<StrokeSample> {
		self.samples
	}
}
