//! Subscriber types for store notifications

use std::fmt;

use crate::domain::Project;

/// Callback invoked with the full, ordered project sequence
pub type Listener = Box<dyn FnMut(&[Project])>;

/// Handle returned by `subscribe`, used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub(crate) u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// Something that renders from project snapshots
///
/// Views never see the store itself, only the snapshot handed to them on
/// each notification.
pub trait View {
    fn on_snapshot(&mut self, projects: &[Project]);
}
