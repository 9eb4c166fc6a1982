//! Core types and definitions for the RAMPART toolkit.
//!
//! This crate defines the vocabulary shared across all other crates:
//! object components, engine events, outbound orders, and constants.
//! It has no dependency on hecs or any runtime framework.

pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod orders;
pub mod types;
