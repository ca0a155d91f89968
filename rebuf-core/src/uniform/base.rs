//! Uniform replay strategy.
use super::UniformReplayConfig;
use crate::{error::ReplayError, BatchBase, CircularBuffer, RandomKey, ReplayBuffer};
use anyhow::Result;
use rand::Rng;
use std::marker::PhantomData;

/// The immutable state of a uniform replay buffer.
///
/// A state owns exactly one circular storage. Every transition on
/// [`UniformReplayBuffer`] returns a new state; the old one may be discarded
/// or retained by the caller as history.
///
/// # Type Parameters
///
/// * `B` - Storage type of items and item batches, must implement [`BatchBase`]
#[derive(Debug)]
pub struct UniformReplayState<B: BatchBase> {
    storage: CircularBuffer<B>,
}

impl<B: BatchBase> Clone for UniformReplayState<B> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
        }
    }
}

impl<B: BatchBase> UniformReplayState<B> {
    /// The circular storage owned by this state.
    pub fn storage(&self) -> &CircularBuffer<B> {
        &self.storage
    }
}

/// A replay buffer with uniform random sampling.
///
/// The strategy value holds only the configured capacity; all stored items
/// live in the [`UniformReplayState`] values it produces. Single-item
/// inserts evict the oldest item once the buffer is full. Sampling draws
/// indices uniformly at random, with replacement, from the valid window,
/// using a caller-supplied [`RandomKey`] as the sole source of randomness.
///
/// # Type Parameters
///
/// * `B` - Storage type of items and item batches, must implement [`BatchBase`]
///
/// # Examples
///
/// ```ignore
/// let buffer = UniformReplayBuffer::build(&UniformReplayConfig::default().capacity(1000));
/// let state = buffer.init(&prototype)?;
/// let state = buffer.add(&state, &item)?;
/// let batch = buffer.sample(&state, RandomKey::new(42), 32)?;
/// ```
pub struct UniformReplayBuffer<B> {
    /// Maximum number of items that can be stored.
    capacity: usize,

    phantom: PhantomData<B>,
}

impl<B: BatchBase> UniformReplayBuffer<B> {
    /// Creates a strategy with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            phantom: PhantomData,
        }
    }

    /// Returns the configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<B: BatchBase> ReplayBuffer for UniformReplayBuffer<B> {
    type Config = UniformReplayConfig;
    type Item = B;
    type State = UniformReplayState<B>;

    fn build(config: &Self::Config) -> Self {
        Self::new(config.capacity)
    }

    fn init(&self, item_prototype: &B) -> Result<Self::State> {
        Ok(UniformReplayState {
            storage: CircularBuffer::new(item_prototype, self.capacity)?,
        })
    }

    fn size(&self, state: &Self::State) -> usize {
        state.storage.len()
    }

    fn add(&self, state: &Self::State, item: &B) -> Result<Self::State> {
        Ok(UniformReplayState {
            storage: state.storage.push(item)?,
        })
    }

    /// One-shot slice insert of the whole batch.
    ///
    /// Faster than the default fold but only defined under the restrictions
    /// of [`CircularBuffer::push_batch`]; calls outside them fail with
    /// [`ReplayError::UnsupportedBatchInsert`] instead of corrupting state.
    fn add_batch(&self, state: &Self::State, batch: &B) -> Result<Self::State> {
        Ok(UniformReplayState {
            storage: state.storage.push_batch(batch)?,
        })
    }

    fn sample(&self, state: &Self::State, key: RandomKey, batch_size: usize) -> Result<B> {
        let size = state.storage.len();
        if size == 0 {
            return Err(ReplayError::EmptyBuffer.into());
        }

        let mut rng = key.rng();
        let offsets = (0..batch_size)
            .map(|_| rng.gen_range(0..size))
            .collect::<Vec<_>>();
        Ok(state.storage.gather(&offsets)?)
    }

    fn update<F>(&self, state: &Self::State, item_update_fn: F) -> Result<Self::State>
    where
        F: Fn(&B) -> B,
    {
        Ok(UniformReplayState {
            storage: state.storage.map_slots(item_update_fn)?,
        })
    }
}
