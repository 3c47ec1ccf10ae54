use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Event subscriptions the engine owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListenerKind {
    /// Single click listener on the drawing surface.
    SurfaceClick,
    /// Host viewport resize notifications.
    ViewportResize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ListenerId(u64);

/// Tracks active subscriptions, at most one per kind.
///
/// `register` always removes the previous subscription of the same kind
/// first, so repeated redraws never stack handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListenerRegistry {
    active: IndexMap<ListenerKind, ListenerId>,
    next_id: u64,
    registered_total: u64,
    deregistered_total: u64,
}

impl ListenerRegistry {
    pub fn register(&mut self, kind: ListenerKind) -> ListenerId {
        self.deregister(kind);
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.active.insert(kind, id);
        self.registered_total += 1;
        trace!(?kind, id = id.0, "listener registered");
        id
    }

    pub fn deregister(&mut self, kind: ListenerKind) -> Option<ListenerId> {
        let removed = self.active.shift_remove(&kind)?;
        self.deregistered_total += 1;
        trace!(?kind, id = removed.0, "listener deregistered");
        Some(removed)
    }

    pub fn deregister_all(&mut self) {
        let kinds: Vec<ListenerKind> = self.active.keys().copied().collect();
        for kind in kinds {
            self.deregister(kind);
        }
    }

    #[must_use]
    pub fn active(&self, kind: ListenerKind) -> Option<ListenerId> {
        self.active.get(&kind).copied()
    }

    #[must_use]
    pub fn is_active(&self, kind: ListenerKind) -> bool {
        self.active.contains_key(&kind)
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn registered_total(&self) -> u64 {
        self.registered_total
    }

    #[must_use]
    pub fn deregistered_total(&self) -> u64 {
        self.deregistered_total
    }
}
