//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Storage (LocalStorage on web, in-memory elsewhere)
//! - Input events (keyboard and start button)
//! - Drawing and dialogs (canvas 2D, alert, prompt)

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod input;
pub mod storage;

pub use input::{InputQueue, key_to_input};
pub use storage::{KeyValueStore, MemoryStore, StorageError, or_memory};
