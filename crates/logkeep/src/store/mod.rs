//! Storage abstraction layer for the log collection.
//!
//! The HTTP layer only talks to the [`LogStore`] trait. The file-backed
//! implementation lives in the `file` submodule; [`MemoryLogStore`] keeps the
//! collection in process memory for tests and embedding.
//!
//! # Naming Conventions
//!
//! - `load` - read the whole collection, never fails
//! - `save` - replace the whole collection (must be atomic)

pub mod error;

mod logs;
mod memory;

pub mod file;

pub use error::{StorageError, StorageResult};
pub use logs::{LogCollection, LogStore};
pub use memory::MemoryLogStore;
