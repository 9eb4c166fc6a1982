//! Turret attack tracking and prediction.
//!
//! The tracker consumes two engine feeds that arrive with no shared key,
//! object creation and cast begin, and correlates both onto per-turret
//! state: which bolt particle belongs to which turret, and when the attack
//! a cast announces will land. Subscribers receive one
//! [`TurretAttack`](rampart_core::events::TurretAttack) notification per
//! turret cast.

pub mod attack;
pub mod bolt;
pub mod notify;
pub mod registry;
pub mod tracker;

pub use registry::{TurretRegistry, TurretState};
pub use tracker::{TrackerConfig, TurretTracker};
