//! core
//!
//! Domain types and the arithmetic heart of the tool: the channel-capacity
//! model, the sequential channel allocator, selection parsing, and the
//! centroid helper. Everything here is synchronous and free of I/O; the
//! only outward dependency is the injected prompt capability.

pub mod allocator;
pub mod centroid;
pub mod fixture;
pub mod screen;
pub mod selection;
