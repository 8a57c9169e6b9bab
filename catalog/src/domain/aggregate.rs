//! Aggregate root capability
//!
//! Entities that are addressed by identity and can check their own invariants.

use super::validation::{Notification, ValidationHandler};

pub trait AggregateRoot {
    type Id: Clone + Eq + std::hash::Hash + std::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// Report every broken invariant to `handler`
    fn validate<H: ValidationHandler>(&self, handler: &mut H);

    /// Run `validate` into a fresh collecting handler
    fn notification(&self) -> Notification {
        let mut notification = Notification::new();
        self.validate(&mut notification);
        notification
    }
}
