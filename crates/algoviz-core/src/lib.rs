//! **algoviz-core**: shared types for step-animated algorithm visualization.
//!
//! This crate provides the models the engines mutate ([`Grid`], [`Bars`]),
//! the [`Step`] events they emit, and the pacing primitive ([`Pacer`],
//! [`StepEmitter`], [`StepSink`]) that suspends an algorithm between steps,
//! honours pause/resume and applies a configurable delay.

pub mod bars;
pub mod cell;
pub mod config;
pub mod error;
pub mod geom;
pub mod grid;
pub mod pacing;
pub mod run;
pub mod step;

pub use bars::Bars;
pub use cell::Cell;
pub use config::VizConfig;
pub use error::RunError;
pub use geom::{Point, Range};
pub use grid::Grid;
pub use pacing::{Pacer, Recorder, StepEmitter, StepSink};
pub use run::RunState;
pub use step::{Outcome, Signal, Step};
