//! Inbound engine callbacks and the outbound attack notification.

use serde::{Deserialize, Serialize};

use crate::types::ObjectId;

/// Low-level engine callbacks delivered by the host.
///
/// Events carry identities only; payload details are resolved against the
/// game-object store at handling time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EngineEvent {
    /// One-time signal that the game world finished loading.
    GameLoad,
    /// A game object was created.
    ObjectCreated { object: ObjectId },
    /// A unit began an attack or spell cast.
    CastBegin { caster: ObjectId },
}

/// Notification raised once per observed turret attack event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurretAttack {
    /// Turret the attack belongs to.
    pub turret: ObjectId,
    /// Tick (ms) at which the attack was observed to start.
    pub attack_start: u64,
    /// Predicted duration from attack start to projectile impact (ms).
    ///
    /// Carried over unchanged from the previous attack when the turret had
    /// no valid target at observation time.
    pub attack_delay: f64,
    /// Predicted impact tick: `attack_start + attack_delay` as of the last
    /// attack with a valid target.
    pub attack_end: f64,
    /// Most recently correlated attack particle, if any.
    pub bolt: Option<ObjectId>,
    /// The turret's target at notification time.
    pub target: Option<ObjectId>,
    /// Whether the turret was winding up at notification time.
    pub winding_up: bool,
}
