//! Game-object store for RAMPART.
//!
//! `GameWorld` wraps a hecs world with a stable-id index so every live game
//! object stays addressable by its `ObjectId`. It also owns the session clock
//! and the outbound player-order queue. Hosts (or the replay tool) mutate it;
//! the tracker and item helpers only read through the narrow query surface.

pub mod spawn;
pub mod world;

pub use world::{GameWorld, WorldError};

#[cfg(test)]
mod tests;
