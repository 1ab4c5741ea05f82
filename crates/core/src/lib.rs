//! Core module - pure scoring logic with no I/O
//!
//! This crate contains the frame parser, the per-rule throw evaluators, and
//! the game orchestrator that ties them together. It has zero dependencies
//! on the terminal, files, or networking.

pub mod frames;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use frames::{parse_frames, Frame, FrameList};
pub use game::Game;
pub use rules::{Evaluator, PendingBonus, ScoringContext};
