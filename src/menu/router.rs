use super::NodeId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::mpsc;

/// Fans tray activation events out to one channel per menu entry.
///
/// Dropping a route closes its channel, which ends the listener on the
/// other side.
#[derive(Clone, Default)]
pub struct EventRouter {
    routes: Arc<Mutex<HashMap<NodeId, mpsc::UnboundedSender<()>>>>,
}

impl EventRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `id` and returns its activation stream. Registering an id
    /// twice replaces (and closes) the earlier stream.
    pub fn register(&self, id: NodeId) -> mpsc::UnboundedReceiver<()> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.lock().insert(id, tx);
        rx
    }

    pub fn unregister(&self, id: &NodeId) -> bool {
        self.lock().remove(id).is_some()
    }

    /// Delivers one activation. Returns false when no live route exists.
    pub fn route(&self, event_id: &str) -> bool {
        let id = NodeId::from(event_id);
        let mut routes = self.lock();
        let Some(tx) = routes.get(&id) else {
            log::warn!("No route found for event: {}", event_id);
            return false;
        };

        if tx.send(()).is_ok() {
            return true;
        }

        log::debug!("Listener for {} has exited, dropping route", event_id);
        routes.remove(&id);
        false
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<NodeId, mpsc::UnboundedSender<()>>> {
        self.routes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
