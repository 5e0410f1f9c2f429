//! Activity storage for LearnTrack.
//!
//! This crate provides a trait-based store interface with an in-memory
//! implementation seeded from a fixed built-in list.

#![warn(missing_docs)]

pub mod trait_;
pub mod memory_storage;
pub mod seed;

pub use trait_::{ActivityStore, StoreError, ValidationError, Result};
pub use memory_storage::MemoryStore;
pub use seed::seed_activities;
