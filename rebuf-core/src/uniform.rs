//! Uniform experience replay.
//!
//! This module provides the uniform-sampling replay strategy:
//!
//! - [`UniformReplayBuffer`]: the strategy implementing [`ReplayBuffer`](crate::ReplayBuffer)
//! - [`UniformReplayState`]: the immutable buffer state it produces and consumes
//! - [`UniformReplayConfig`]: construction parameters
//!
//! Items are stored in a fixed-capacity ring with FIFO eviction and drawn
//! uniformly at random, with replacement, from the currently valid window.
mod base;
mod config;
pub use base::{UniformReplayBuffer, UniformReplayState};
pub use config::UniformReplayConfig;
