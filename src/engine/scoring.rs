use glam::{Vec2, Vec3};

use crate::goal::{Goal, GoalCircle, GoalLine};
use crate::util::color;

/// Quality grade for a segment or a whole stroke. Worst first, so `Ord`
/// makes "the worse of two grades" a plain `min`.
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display,
)]
pub enum ScoreVerdict {
	#[display("Miss")]
	Miss,
	#[display("Okay")]
	Okay,
	#[display("Good")]
	Good,
	#[display("Perfect!")]
	Perfect,
}

impl ScoreVerdict {
	/// Feedback color for the on-screen verdict banner.
	pub fn color(self) -> Vec3 {
		match self {
			ScoreVerdict::Perfect => color::GREEN,
			ScoreVerdict::Good => color::ORANGE,
			ScoreVerdict::Okay => color::GREY,
			ScoreVerdict::Miss => color::RED,
		}
	}
}

/// Samples a stroke must accumulate before live grading engages. Pen-down
/// jitter is noisy enough that grading it would punish every stroke.
pub const BOOTSTRAP_SAMPLES: usize = 3;

// Per-segment distance thresholds, in pixels. Circles get looser bands
// than lines since constant-curvature tracing is harder.
const LINE_PERFECT: f32 = 2.0;
const LINE_GOOD: f32 = 25.0;
const LINE_OKAY: f32 = 50.0;
const CIRCLE_PERFECT: f32 = 5.0;
const CIRCLE_GOOD: f32 = 30.0;
const CIRCLE_OKAY: f32 = 60.0;

/// Live feedback for one newly drawn segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiveScore {
	/// Not graded: no exercise is running, or the stroke is still inside
	/// its bootstrap window.
	Neutral,
	Scored { color: Vec3, bucket: ScoreVerdict },
}

impl LiveScore {
	/// Color to paint the segment with.
	pub fn color(self) -> Vec3 {
		match self {
			LiveScore::Neutral => color::GREY,
			LiveScore::Scored { color, .. } => color,
		}
	}

	/// Grade for the segment; neutral segments grade as perfect so they
	/// never drag a stroke down.
	pub fn bucket(self) -> ScoreVerdict {
		match self {
			LiveScore::Neutral => ScoreVerdict::Perfect,
			LiveScore::Scored { bucket, .. } => bucket,
		}
	}

	/// The grade to record on the sample: `None` for neutral segments so
	/// aggregation can leave them out.
	pub fn graded(self) -> Option<ScoreVerdict> {
		match self {
			LiveScore::Neutral => None,
			LiveScore::Scored { bucket, .. } => Some(bucket),
		}
	}
}

/// Grades the segment from the last recorded sample to the incoming
/// point. `samples_so_far` is the stroke's current sample count; the
/// first few segments and anything drawn outside a running exercise come
/// back [`LiveScore::Neutral`]. Pure: no state is touched.
pub fn live_score(
	goal: &Goal,
	prior: Vec2,
	new: Vec2,
	samples_so_far: usize,
	running: bool,
) -> LiveScore {
	if !running || samples_so_far < BOOTSTRAP_SAMPLES {
		return LiveScore::Neutral;
	}
	let (color, bucket) = match goal {
		Goal::Line(line) => score_line_segment(line, prior, new),
		Goal::Circle(circle) => score_circle_segment(circle, new),
	};
	LiveScore::Scored { color, bucket }
}

fn score_line_segment(line: &GoalLine, prior: Vec2, new: Vec2) -> (Vec3, ScoreVerdict) {
	let segment = line.segment();
	// Overshooting past either endpoint is a miss no matter how close the
	// pen is to the carrier line.
	if segment.project(prior) < 0.0 || segment.project(new) > 1.0 {
		return (color::RED, ScoreVerdict::Miss);
	}
	let distance = segment.line_distance(new);
	if distance < LINE_PERFECT {
		(color::GREEN, ScoreVerdict::Perfect)
	} else if distance < LINE_GOOD {
		let t = (distance - LINE_PERFECT) / (LINE_GOOD - LINE_PERFECT);
		(color::lerp(color::GREEN, color::ORANGE, t), ScoreVerdict::Good)
	} else if distance < LINE_OKAY {
		let t = (distance - LINE_GOOD) / (LINE_OKAY - LINE_GOOD);
		(color::lerp(color::ORANGE, color::RED, t), ScoreVerdict::Okay)
	} else {
		(color::RED, ScoreVerdict::Miss)
	}
}

fn score_circle_segment(circle: &GoalCircle, new: Vec2) -> (Vec3, ScoreVerdict) {
	// Radial deviation from the ideal ring, inside or outside alike.
	let distance = ((new - circle.origin()).length() - circle.radius()).abs();
	if distance < CIRCLE_PERFECT {
		(color::GREEN, ScoreVerdict::Perfect)
	} else if distance < CIRCLE_GOOD {
		let t = (distance - CIRCLE_PERFECT) / (CIRCLE_GOOD - CIRCLE_PERFECT);
		(color::lerp(color::GREEN, color::ORANGE, t), ScoreVerdict::Good)
	} else if distance < CIRCLE_OKAY {
		let t = (distance - CIRCLE_GOOD) / (CIRCLE_OKAY - CIRCLE_GOOD);
		(color::lerp(color::ORANGE, color::RED, t), ScoreVerdict::Okay)
	} else {
		(color::RED, ScoreVerdict::Miss)
	}
}
