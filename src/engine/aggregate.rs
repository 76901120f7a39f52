use itertools::Itertools;

use super::{ScoreVerdict, StrokeSample};
use crate::goal::{Goal, GoalLine};

/// Grades a completed stroke against the target. Returns `None` for
/// strokes with fewer than two samples; those carry no segment worth
/// grading and are dropped silently.
///
/// Lines are graded on two independent axes, precision and coverage, and
/// take the worse of the two. Circles have no finite extent to cover, so
/// precision alone decides.
pub fn score_stroke(goal: &Goal, samples: &[StrokeSample]) -> Option<ScoreVerdict> {
	if samples.len() < 2 {
		return None;
	}
	let accuracy = accuracy(samples);
	Some(match goal {
		Goal::Line(line) => accuracy.min(coverage(line, samples)),
		Goal::Circle(_) => accuracy,
	})
}

/// How precisely the graded segments hugged the target, from the
/// fractions of samples per bucket. Ungraded bootstrap samples are left
/// out; a stroke graded on nothing is vacuously perfect here (coverage
/// still gets its say for lines).
fn accuracy(samples: &[StrokeSample]) -> ScoreVerdict {
	let graded = samples.iter().filter_map(|s| s.score).collect::<Vec<_>>();
	if graded.is_empty() {
		return ScoreVerdict::Perfect;
	}
	let fraction = |bucket: ScoreVerdict| {
		graded.iter().filter(|&&s| s == bucket).count() as f32 / graded.len() as f32
	};
	let miss = fraction(ScoreVerdict::Miss);
	let okay = fraction(ScoreVerdict::Okay);
	let good = fraction(ScoreVerdict::Good);

	if miss > 0.10 {
		ScoreVerdict::Miss
	} else if miss > 0.02 || okay > 0.10 {
		ScoreVerdict::Okay
	} else if okay > 0.02 || good > 0.10 {
		ScoreVerdict::Good
	} else {
		ScoreVerdict::Perfect
	}
}

/// How much of the line's extent the stroke actually traced. Projects
/// every consecutive sample pair onto the target and narrows the traced
/// interval: `start` must push past 0.99 and `end` dip under 0.01 for a
/// full trace. Direction does not matter; only the reach does.
fn coverage(line: &GoalLine, samples: &[StrokeSample]) -> ScoreVerdict {
	let segment = line.segment();
	let mut start = 0.0f32;
	let mut end = 1.0f32;
	for (prev, current) in samples.iter().tuple_windows() {
		start = start.max(segment.project(prev.position));
		end = end.min(segment.project(current.position));
	}

	if end < 0.01 && start > 0.99 {
		ScoreVerdict::Perfect
	} else if end < 0.05 && start > 0.95 {
		ScoreVerdict::Good
	} else if end < 0.10 && start > 0.90 {
		ScoreVerdict::Okay
	} else {
		ScoreVerdict::Miss
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::geom::Segment;
	use crate::goal::GoalCircle;
	use crate::util::color;
	use glam::Vec2;

	fn line_goal() -> Goal {
		Goal::Line(GoalLine::new(Segment::new(
			Vec2::new(100.0, 100.0),
			Vec2::new(500.0, 100.0),
		)))
	}

	fn sample(position: Vec2, score: Option<ScoreVerdict>) -> StrokeSample {
		StrokeSample {
			position,
			color: color::GREY,
			width: 10.0,
			score,
		}
	}

	/// Samples along the target's span between normalized positions
	/// `from` and `to`, all graded `score`.
	fn trace_line(from: f32, to: f32, count: usize, score: Option<ScoreVerdict>) -> Vec<StrokeSample> {
		let segment = match line_goal() {
			Goal::Line(line) => line.segment(),
			_ => unreachable!(),
		};
		(0..count)
			.map(|i| {
				let t = from + (to - from) * (i as f32 / (count - 1) as f32);
				sample(segment.start + segment.delta() * t, score)
			})
			.collect()
	}

	#[test]
	fn short_strokes_have_no_verdict() {
		let goal = line_goal();
		assert_eq!(score_stroke(&goal, &[]), None);
		assert_eq!(
			score_stroke(&goal, &[sample(Vec2::new(100.0, 100.0), None)]),
			None
		);
	}

	#[test]
	fn full_on_target_trace_is_perfect() {
		let samples = trace_line(0.0, 1.0, 201, Some(ScoreVerdict::Perfect));
		assert_eq!(score_stroke(&line_goal(), &samples), Some(ScoreVerdict::Perfect));
	}

	#[test]
	fn reversed_trace_scores_the_same() {
		let samples = trace_line(1.0, 0.0, 201, Some(ScoreVerdict::Perfect));
		assert_eq!(score_stroke(&line_goal(), &samples), Some(ScoreVerdict::Perfect));
	}

	#[test]
	fn partial_coverage_misses_despite_precision() {
		// 80% of the span, every segment graded perfect.
		let samples = trace_line(0.0, 0.8, 201, Some(ScoreVerdict::Perfect));
		assert_eq!(score_stroke(&line_goal(), &samples), Some(ScoreVerdict::Miss));
	}

	#[test]
	fn slightly_short_trace_degrades_gracefully() {
		// Reaching 96% of the way grades Good, 92% grades Okay.
		let samples = trace_line(0.0, 0.96, 401, Some(ScoreVerdict::Perfect));
		assert_eq!(score_stroke(&line_goal(), &samples), Some(ScoreVerdict::Good));
		let samples = trace_line(0.0, 0.92, 401, Some(ScoreVerdict::Perfect));
		assert_eq!(score_stroke(&line_goal(), &samples), Some(ScoreVerdict::Okay));
	}

	#[test]
	fn accuracy_fractions_pick_the_band() {
		let full = |scores: &[(ScoreVerdict, usize)]| {
			// Positions cover the whole span so coverage stays perfect
			// and accuracy alone decides.
			let graded: Vec<Option<ScoreVerdict>> = scores
				.iter()
				.flat_map(|&(score, count)| std::iter::repeat(Some(score)).take(count))
				.collect();
			let mut samples = trace_line(0.0, 1.0, graded.len(), None);
			for (sample, score) in samples.iter_mut().zip(graded) {
				sample.score = score;
			}
			samples
		};

		use ScoreVerdict::*;
		let goal = line_goal();
		assert_eq!(
			score_stroke(&goal, &full(&[(Perfect, 500)])),
			Some(Perfect)
		);
		// 20% good exceeds the 10% allowance.
		assert_eq!(
			score_stroke(&goal, &full(&[(Good, 100), (Perfect, 400)])),
			Some(Good)
		);
		// 20% okay exceeds the 10% allowance for good-grade strokes.
		assert_eq!(
			score_stroke(&goal, &full(&[(Okay, 100), (Perfect, 400)])),
			Some(Okay)
		);
		// 20% missed segments sink the whole stroke.
		assert_eq!(
			score_stroke(&goal, &full(&[(Miss, 100), (Perfect, 400)])),
			Some(Miss)
		);
		// A tiny dusting under every threshold keeps the perfect grade.
		assert_eq!(
			score_stroke(&goal, &full(&[(Good, 5), (Perfect, 495)])),
			Some(Perfect)
		);
		// Between 2% and 10% missed lands in the okay band.
		assert_eq!(
			score_stroke(&goal, &full(&[(Miss, 25), (Perfect, 475)])),
			Some(Okay)
		);
	}

	#[test]
	fn bootstrap_samples_do_not_dilute_accuracy() {
		// One miss among 48 graded samples sits just over the 2% line.
		// Counting the three ungraded bootstrap samples would dilute it
		// under the threshold and misgrade the stroke as perfect.
		let goal = Goal::Circle(GoalCircle::new(Vec2::new(400.0, 400.0), 200.0, 0.0));
		let mut samples = vec![sample(Vec2::new(600.0, 400.0), None); 3];
		samples.push(sample(Vec2::new(600.0, 400.0), Some(ScoreVerdict::Miss)));
		samples.extend(std::iter::repeat(sample(Vec2::new(600.0, 400.0), Some(ScoreVerdict::Perfect))).take(47));
		assert_eq!(score_stroke(&goal, &samples), Some(ScoreVerdict::Okay));
	}

	#[test]
	fn all_bootstrap_line_stroke_still_needs_coverage() {
		let samples = trace_line(0.0, 0.5, 4, None);
		assert_eq!(score_stroke(&line_goal(), &samples), Some(ScoreVerdict::Miss));
	}

	#[test]
	fn circle_verdict_is_accuracy_alone() {
		let goal = Goal::Circle(GoalCircle::new(Vec2::new(400.0, 400.0), 200.0, 0.0));
		// A ring traced at constant deviation 40 grades okay per segment.
		let samples: Vec<StrokeSample> = (0..120)
			.map(|i| {
				let angle = std::f32::consts::TAU * i as f32 / 120.0;
				let position = Vec2::new(400.0, 400.0) + 240.0 * Vec2::from_angle(angle);
				sample(position, Some(ScoreVerdict::Okay))
			})
			.collect();
		assert_eq!(score_stroke(&goal, &samples), Some(ScoreVerdict::Okay));
	}
}
