//! Configuration for uniform experience replay.
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    default::Default,
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration for [`UniformReplayBuffer`](super::UniformReplayBuffer).
///
/// There is deliberately no random seed here: sampling takes an explicit
/// [`RandomKey`](crate::RandomKey) on every call, so a construction-time
/// seed would be a second, hidden source of randomness.
///
/// # Examples
///
/// ```rust
/// use rebuf_core::uniform::UniformReplayConfig;
///
/// let config = UniformReplayConfig::default().capacity(10000);
/// ```
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct UniformReplayConfig {
    /// Maximum number of items that can be stored in the buffer. When the
    /// buffer is full, new items replace the oldest ones.
    pub capacity: usize,
}

impl Default for UniformReplayConfig {
    fn default() -> Self {
        Self { capacity: 10000 }
    }
}

impl UniformReplayConfig {
    /// Sets the capacity of the replay buffer.
    ///
    /// # Arguments
    ///
    /// * `capacity` - The new capacity for the buffer
    ///
    /// # Returns
    ///
    /// The modified configuration
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Loads the configuration from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves the configuration to a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path where the configuration should be saved
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
