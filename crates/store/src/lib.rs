//! In-memory store for termdex
//!
//! This crate provides `MemoryIndexStore`, a DashMap-backed implementation
//! of the engine's `IndexStore` and `IdResolver` collaborators. Embeddings
//! with real persistence supply their own implementations of the same
//! traits; this one is the reference embedding and the test workhorse.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod memory;

pub use memory::MemoryIndexStore;
