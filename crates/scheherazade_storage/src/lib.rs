//! In-memory reference store for the Scheherazade engine.
//!
//! This crate provides [`InMemoryStoryStore`], a HashMap-based
//! implementation of the `StoryStore` trait. It exists for tests and for
//! demonstrating the store contract; durable backends implement the same
//! trait elsewhere.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod in_memory;

pub use in_memory::InMemoryStoryStore;
