//! Storage abstraction for Votebox.
//!
//! The vote records live in a key-value blob store. This module defines the
//! `BlobStore` trait and its two backends:
//! - `MemoryStore`: process-local, for tests and embedding
//! - `FileStore`: one JSON file per key in a directory, written atomically
//!
//! The store knows nothing about votes; record layout and the read-modify-write
//! cycle live in [`crate::store`].

pub mod file;
pub mod memory;
pub mod traits;

// Re-export public types
pub use file::FileStore;
pub use memory::MemoryStore;
pub use traits::BlobStore;
