//! Replay buffer interface for reinforcement learning.
//!
//! This module defines the capability bundle consumed by a training loop:
//! six pure operations over an immutable buffer state. No operation mutates
//! its state argument; each transition returns a new state value, and the
//! caller decides whether to keep or discard the old one.

use crate::{BatchBase, RandomKey};
use anyhow::Result;

/// Interface for replay buffers.
///
/// Different replay strategies (uniform, prioritized, ...) are alternative
/// implementors of this trait, selected at construction time. The strategy
/// value itself is stateless configuration; all mutable information lives in
/// the [`ReplayBuffer::State`] values it produces and consumes.
///
/// # Associated Types
///
/// * `Config` - Configuration parameters for the buffer
/// * `Item` - Storage type of items and item batches
/// * `State` - The immutable buffer state produced and consumed by the
///   operations
///
/// # Examples
///
/// ```ignore
/// let buffer = UniformReplayBuffer::build(&config);
/// let mut state = buffer.init(&prototype)?;
///
/// for item in items {
///     state = buffer.add(&state, &item)?;
/// }
///
/// let key = RandomKey::new(42);
/// let batch = buffer.sample(&state, key, 32)?;
/// ```
pub trait ReplayBuffer {
    /// Configuration parameters for the replay buffer.
    ///
    /// This type must implement `Clone` to support building multiple
    /// instances with the same configuration.
    type Config: Clone;

    /// Storage type of items and item batches.
    ///
    /// A single item is a batch of length 1.
    type Item: BatchBase;

    /// The immutable buffer state.
    ///
    /// States are cheap to clone relative to training work and may be
    /// retained by the caller as history.
    type State: Clone;

    /// Builds a replay buffer from the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - The configuration parameters
    fn build(config: &Self::Config) -> Self;

    /// Creates an empty state whose item shape is fixed from a prototype.
    ///
    /// # Arguments
    ///
    /// * `item_prototype` - A batch of length 1 whose per-item shape every
    ///   later write must match
    ///
    /// # Errors
    ///
    /// Fails if the prototype is not a single item or the configured
    /// capacity is zero.
    fn init(&self, item_prototype: &Self::Item) -> Result<Self::State>;

    /// Returns the number of items currently stored in `state`.
    fn size(&self, state: &Self::State) -> usize;

    /// Inserts a single item, evicting the oldest item when full.
    ///
    /// # Arguments
    ///
    /// * `state` - The state to derive the new state from
    /// * `item` - The item to insert
    ///
    /// # Errors
    ///
    /// Fails if `item` is not a single item of the shape fixed at
    /// [`ReplayBuffer::init`].
    fn add(&self, state: &Self::State, item: &Self::Item) -> Result<Self::State>;

    /// Inserts the items of `batch`, oldest-first.
    ///
    /// The default implementation folds [`ReplayBuffer::add`] over the items
    /// of the batch. It is correct for every batch length and wrap
    /// alignment; implementors may override it with a faster insert that
    /// holds under narrower conditions.
    ///
    /// # Arguments
    ///
    /// * `state` - The state to derive the new state from
    /// * `batch` - The items to insert
    fn add_batch(&self, state: &Self::State, batch: &Self::Item) -> Result<Self::State> {
        let mut next = state.clone();
        for ix in 0..batch.len() {
            next = self.add(&next, &batch.sample(&vec![ix]))?;
        }
        Ok(next)
    }

    /// Draws `batch_size` stored items uniformly at random, with
    /// replacement.
    ///
    /// Sampling never alters `state`; all randomness derives from `key`, so
    /// the same state, key, and batch size always yield the same batch.
    ///
    /// # Arguments
    ///
    /// * `state` - The state to sample from
    /// * `key` - Sole source of randomness for the draws
    /// * `batch_size` - Number of items to draw
    ///
    /// # Errors
    ///
    /// Fails if `state` holds no items.
    fn sample(
        &self,
        state: &Self::State,
        key: RandomKey,
        batch_size: usize,
    ) -> Result<Self::Item>;

    /// Applies a per-item transformation to every physical slot of the
    /// storage.
    ///
    /// The transform runs over all `capacity` slots, including slots outside
    /// the current logical range; stale slots are transformed too, which is
    /// harmless since they are not observable until overwritten.
    ///
    /// # Arguments
    ///
    /// * `state` - The state to derive the new state from
    /// * `item_update_fn` - A shape-preserving transformation of a single
    ///   item
    ///
    /// # Errors
    ///
    /// Fails if the transform changes the item shape.
    fn update<F>(&self, state: &Self::State, item_update_fn: F) -> Result<Self::State>
    where
        F: Fn(&Self::Item) -> Self::Item;
}
