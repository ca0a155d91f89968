//! Core functionalities.
mod batch;
mod replay_buffer;
pub use batch::BatchBase;
pub use replay_buffer::ReplayBuffer;
