//! Subscriber list for turret attack notifications.

use std::panic::AssertUnwindSafe;

use rampart_core::events::TurretAttack;

/// A turret attack callback.
pub type AttackHandler = Box<dyn FnMut(&TurretAttack)>;

/// Explicit list of attack subscribers.
///
/// Delivery is in subscription order. A panicking subscriber is caught and
/// logged so it cannot take down the feed dispatch or starve the remaining
/// subscribers.
#[derive(Default)]
pub struct AttackNotifier {
    handlers: Vec<AttackHandler>,
}

impl AttackNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, handler: impl FnMut(&TurretAttack) + 'static) {
        self.handlers.push(Box::new(handler));
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Deliver one notification to every subscriber.
    pub fn emit(&mut self, attack: &TurretAttack) {
        for handler in &mut self.handlers {
            if let Err(e) = std::panic::catch_unwind(AssertUnwindSafe(|| handler(attack))) {
                tracing::error!(turret = %attack.turret, panic = ?e, "attack subscriber panicked");
            }
        }
    }
}
