//! Search-session state
//!
//! The one piece of state that outlives a recognition cycle: the object the
//! user asked the system to find. Written when a find command arrives,
//! read on every capture, cleared once the object is found. Single writer,
//! single reader; a lock is still used so the handle can be cloned across
//! the recognizer and detection tasks.

use parking_lot::RwLock;
use std::sync::Arc;
use wayfinder_intent::ObjectId;

#[derive(Clone, Default)]
pub struct SearchSession {
    sought: Arc<RwLock<Option<ObjectId>>>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start searching for an object, replacing any previous search.
    pub fn start_search(&self, object: ObjectId) {
        tracing::info!("Search started: {}", object);
        *self.sought.write() = Some(object);
    }

    /// Object currently being sought, if any.
    pub fn sought(&self) -> Option<ObjectId> {
        self.sought.read().clone()
    }

    /// Whether a search is currently active.
    pub fn is_searching(&self) -> bool {
        self.sought.read().is_some()
    }

    /// Clear the slot if `label` names the sought object.
    /// Returns true when the search completed.
    pub fn complete_if_found(&self, label: &str) -> bool {
        let mut sought = self.sought.write();
        match sought.as_ref() {
            Some(object) if object.as_str() == label => {
                tracing::info!("Search completed: {}", object);
                *sought = None;
                true
            }
            _ => false,
        }
    }

    /// Abandon the current search, if any.
    pub fn cancel(&self) {
        if let Some(object) = self.sought.write().take() {
            tracing::info!("Search cancelled: {}", object);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_starts_empty() {
        let session = SearchSession::new();
        assert!(!session.is_searching());
        assert_eq!(session.sought(), None);
    }

    #[test]
    fn complete_clears_only_on_match() {
        let session = SearchSession::new();
        session.start_search(ObjectId::from("room-key"));

        assert!(!session.complete_if_found("bike-key"));
        assert!(session.is_searching());

        assert!(session.complete_if_found("room-key"));
        assert!(!session.is_searching());

        // Second completion is a no-op.
        assert!(!session.complete_if_found("room-key"));
    }

    #[test]
    fn new_search_replaces_old() {
        let session = SearchSession::new();
        session.start_search(ObjectId::from("room-key"));
        session.start_search(ObjectId::from("bottle"));
        assert_eq!(session.sought(), Some(ObjectId::from("bottle")));
    }

    #[test]
    fn clones_share_the_slot() {
        let session = SearchSession::new();
        let reader = session.clone();
        session.start_search(ObjectId::from("laptop"));
        assert!(reader.complete_if_found("laptop"));
        assert!(!session.is_searching());
    }
}
