//! Controllers that tie the engines to a front end.
//!
//! A session owns the model, the algorithm selection and the speed slider,
//! and runs one algorithm at a time on a worker thread. The worker pauses at
//! every step through a shared [`Pacer`](algoviz_core::Pacer); the front end
//! drains the step stream with `poll()` and steers the run with
//! `pause_toggle()`, `set_speed()` and `reset()`.

mod path;
mod runner;
mod sort;

pub use path::PathSession;
pub use sort::SortSession;
