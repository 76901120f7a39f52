//! Core engine for a freehand drawing trainer: procedurally generated
//! practice targets (lines and circles), live per-segment grading of the
//! stroke being drawn, and whole-stroke scoring on completion.

mod util;
pub use util::color;

mod engine;
mod geom;
mod goal;
mod session;

pub use engine::*;
pub use geom::*;
pub use goal::*;
pub use session::*;
