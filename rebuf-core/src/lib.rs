#![warn(missing_docs)]
//! A library for experience replay in reinforcement learning.
//!
//! The crate provides a fixed-capacity replay buffer with FIFO eviction and
//! uniform random sampling. Buffer states are immutable values: every
//! operation takes a state by reference and returns a new state, so a caller
//! can keep, discard, or fork old versions freely.
//!
//! Randomness is explicit. Sampling consumes a [`RandomKey`] and is a pure
//! function of that key, which makes draws reproducible across repeated or
//! parallel execution.
pub mod error;
pub mod uniform;

mod base;
pub use base::{BatchBase, ReplayBuffer};

mod circular_buffer;
pub use circular_buffer::CircularBuffer;

mod key;
pub use key::RandomKey;

mod shape;
pub use shape::ItemShape;

mod transition;
pub use transition::TransitionBatch;
