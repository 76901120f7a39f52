use glam::{Vec2, Vec3};

use crate::engine::{
	live_score, score_stroke, ActiveStroke, LiveScore, ScoreVerdict, StrokeSample, WIDTH_SCALE,
};
use crate::goal::{generate, ExerciseKind, GenerateError, Goal, SizeClass};

/// Strokes per target before a fresh one is generated.
pub const ATTEMPT_QUOTA: u32 = 5;

/// Finished strokes linger this long before vanishing.
const STROKE_FADE_SECONDS: f32 = 0.8;
/// Verdict banners linger this long.
const MESSAGE_FADE_SECONDS: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
	Idle,
	Running,
	Paused,
}

/// A completed stroke kept around briefly so the renderer can fade it out.
#[derive(Debug, Clone)]
pub struct FadingStroke {
	samples: Vec<StrokeSample>,
	lifetime: f32,
	remaining: f32,
}

impl FadingStroke {
	fn new(samples: Vec<StrokeSample>, lifetime: f32) -> Self {
		Self {
			samples,
			lifetime,
			remaining: lifetime,
		}
	}

	pub fn samples(&self) -> &[StrokeSample] {
		&self.samples
	}

	/// 1 when fresh, 0 when due for removal.
	pub fn opacity(&self) -> f32 {
		(self.remaining / self.lifetime).clamp(0.0, 1.0)
	}
}

/// Transient feedback banner for a scored stroke.
#[derive(Debug, Clone, Copy)]
pub struct VerdictMessage {
	verdict: ScoreVerdict,
	lifetime: f32,
	remaining: f32,
}

impl VerdictMessage {
	fn new(verdict: ScoreVerdict, lifetime: f32) -> Self {
		Self {
			verdict,
			lifetime,
			remaining: lifetime,
		}
	}

	pub fn verdict(&self) -> ScoreVerdict {
		self.verdict
	}

	pub fn color(&self) -> Vec3 {
		self.verdict.color()
	}

	pub fn opacity(&self) -> f32 {
		(self.remaining / self.lifetime).clamp(0.0, 1.0)
	}
}

/// One practice session: owns the current target, the stroke being drawn,
/// the attempts countdown, and the transient feedback state. Everything
/// runs synchronously inside the host's event handlers and update tick.
#[derive(Debug)]
pub struct Session {
	kind: ExerciseKind,
	size: SizeClass,
	state: SessionState,
	canvas: Vec2,
	goal: Option<Goal>,
	attempts_left: u32,
	stroke: Option<ActiveStroke>,
	fading: Vec<FadingStroke>,
	messages: Vec<VerdictMessage>,
	rng: fastrand::Rng,
}

impl Session {
	pub fn new(canvas_width: f32, canvas_height: f32) -> Self {
		Self::with_rng(canvas_width, canvas_height, fastrand::Rng::new())
	}

	/// A session with a caller-provided random source, so target
	/// generation can be made deterministic.
	pub fn with_rng(canvas_width: f32, canvas_height: f32, rng: fastrand::Rng) -> Self {
		Self {
			kind: ExerciseKind::Lines,
			size: SizeClass::Unconstrained,
			state: SessionState::Idle,
			canvas: Vec2::new(canvas_width, canvas_height),
			goal: None,
			attempts_left: ATTEMPT_QUOTA,
			stroke: None,
			fading: Vec::new(),
			messages: Vec::new(),
			rng,
		}
	}

	/// New canvas bounds, picked up by the next target generation.
	pub fn resize(&mut self, canvas_width: f32, canvas_height: f32) {
		self.canvas = Vec2::new(canvas_width, canvas_height);
	}

	/// Begins an exercise: resets the attempts countdown and generates
	/// the first target. On failure the session stays idle and the error
	/// surfaces to the caller.
	pub fn start(&mut self, kind: ExerciseKind, size: SizeClass) -> Result<(), GenerateError> {
		self.kind = kind;
		self.size = size;
		self.attempts_left = ATTEMPT_QUOTA;
		self.goal = Some(self.generate_goal()?);
		self.state = SessionState::Running;
		tracing::debug!(?kind, ?size, "exercise started");
		Ok(())
	}

	pub fn pause(&mut self) {
		if self.state == SessionState::Running {
			self.state = SessionState::Paused;
			tracing::debug!("exercise paused");
		}
	}

	pub fn resume(&mut self) {
		if self.state == SessionState::Paused {
			self.state = SessionState::Running;
			tracing::debug!("exercise resumed");
		}
	}

	/// Ends the exercise: the target is cleared and any in-flight stroke
	/// is abandoned without scoring.
	pub fn stop(&mut self) {
		self.state = SessionState::Idle;
		self.goal = None;
		self.stroke = None;
		tracing::debug!("exercise stopped");
	}

	/// Counts a completed attempt. When the quota is used up the counter
	/// resets and a fresh target of the same kind and size is generated.
	pub fn record_attempt(&mut self, verdict: ScoreVerdict) -> Result<(), GenerateError> {
		self.attempts_left = self.attempts_left.saturating_sub(1);
		tracing::debug!(%verdict, attempts_left = self.attempts_left, "attempt recorded");
		if self.attempts_left == 0 {
			self.attempts_left = ATTEMPT_QUOTA;
			self.goal = Some(self.generate_goal()?);
		}
		Ok(())
	}

	/// Opens a stroke buffer at the pen-down position.
	pub fn pen_down(&mut self, position: Vec2) {
		self.stroke = Some(ActiveStroke::begin(position));
	}

	/// Appends a sample while the pen is down, colored and graded by the
	/// live scorer. Moves with the pen up are ignored.
	pub fn pen_move(&mut self, position: Vec2, pressure: f32) {
		let running = self.state == SessionState::Running;
		let Some(stroke) = self.stroke.as_mut() else {
			return;
		};
		let score = match (&self.goal, stroke.samples().last()) {
			(Some(goal), Some(prior)) => {
				live_score(goal, prior.position, position, stroke.len(), running)
			}
			_ => LiveScore::Neutral,
		};
		stroke.add_sample(StrokeSample {
			position,
			color: score.color(),
			width: pressure * WIDTH_SCALE,
			score: score.graded(),
		});
	}

	/// Closes the stroke buffer. A stroke with at least two samples joins
	/// the fade-out list; if the exercise is running it is also graded,
	/// a feedback banner is queued and the attempt recorded (which may
	/// regenerate the target, and so may fail). Shorter strokes vanish
	/// silently. Returns the verdict when one was produced.
	pub fn pen_up(&mut self) -> Result<Option<ScoreVerdict>, GenerateError> {
		let Some(stroke) = self.stroke.take() else {
			return Ok(None);
		};
		if !stroke.is_scorable() {
			return Ok(None);
		}
		let samples = stroke.finish();
		let verdict = match (&self.goal, self.state == SessionState::Running) {
			(Some(goal), true) => score_stroke(goal, &samples),
			_ => None,
		};
		self.fading.push(FadingStroke::new(samples, STROKE_FADE_SECONDS));
		if let Some(verdict) = verdict {
			self.messages.push(VerdictMessage::new(verdict, MESSAGE_FADE_SECONDS));
			self.record_attempt(verdict)?;
		}
		Ok(verdict)
	}

	/// Per-frame tick: advances the target's guide animation and decays
	/// the transient feedback state. Pure in `dt`, so synthetic ticks
	/// replay identically.
	pub fn update(&mut self, dt: f32) {
		if let Some(goal) = self.goal.as_mut() {
			goal.advance(dt);
		}
		for stroke in &mut self.fading {
			stroke.remaining -= dt;
		}
		self.fading.retain(|stroke| stroke.remaining > 0.0);
		for message in &mut self.messages {
			message.remaining -= dt;
		}
		self.messages.retain(|message| message.remaining > 0.0);
	}

	/// Wipes the canvas: fading strokes and the in-flight stroke go away.
	pub fn clear_drawings(&mut self) {
		self.fading.clear();
		self.stroke = None;
	}

	pub fn state(&self) -> SessionState {
		self.state
	}

	pub fn goal(&self) -> Option<&Goal> {
		self.goal.as_ref()
	}

	pub fn attempts_left(&self) -> u32 {
		self.attempts_left
	}

	pub fn current_stroke(&self) -> Option<&[StrokeSample]> {
		self.stroke.as_ref().map(|stroke| stroke.samples())
	}

	pub fn fading_strokes(&self) -> &[FadingStroke] {
		&self.fading
	}

	pub fn messages(&self) -> &[VerdictMessage] {
		&self.messages
	}

	fn generate_goal(&mut self) -> Result<Goal, GenerateError> {
		generate(self.kind, self.size, self.canvas.x, self.canvas.y, &mut self.rng)
	}
}
