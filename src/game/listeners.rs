//! Change-notification listeners.
//!
//! Listeners are registered with `add`, removed by id with `remove`, and
//! invoked synchronously in registration order. Dispatch walks a snapshot of
//! the registry, so a listener may register or remove listeners, or drive
//! the game further, without disturbing the dispatch in progress.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Handle returned by `ListenerRegistry::add`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(pub u32);

impl ListenerId {
    /// Create a new listener ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Listener({})", self.0)
    }
}

/// A callback receiving the notifying context and the event.
pub type Listener<C, E> = Rc<dyn Fn(&mut C, &E)>;

/// Ordered list of listeners.
pub struct ListenerRegistry<C, E> {
    next_id: u32,
    entries: Vec<(ListenerId, Listener<C, E>)>,
}

impl<C, E> Default for ListenerRegistry<C, E> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<C, E> ListenerRegistry<C, E> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it runs after every listener added before it.
    pub fn add(&mut self, listener: impl Fn(&mut C, &E) + 'static) -> ListenerId {
        let id = ListenerId::new(self.next_id);
        self.next_id += 1;
        let listener: Listener<C, E> = Rc::new(listener);
        self.entries.push((id, listener));
        id
    }

    /// Unregister a listener. Returns false if `id` was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(existing, _)| *existing != id);
        self.entries.len() != before
    }

    /// Is `id` currently registered?
    #[must_use]
    pub fn contains(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|(existing, _)| *existing == id)
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Are there no listeners?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Listeners in registration order, detached from the registry.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Listener<C, E>> {
        self.entries
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect()
    }

    /// Invoke every listener with `context` and `event`.
    pub fn dispatch(listeners: &[Listener<C, E>], context: &mut C, event: &E) {
        for listener in listeners {
            listener(context, event);
        }
    }
}

impl<C, E> std::fmt::Debug for ListenerRegistry<C, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("ids", &self.entries.iter().map(|(id, _)| *id).collect::<Vec<_>>())
            .finish()
    }
}
