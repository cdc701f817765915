//! Update notifications.
//!
//! The index keeps an explicit list of listeners and dispatches to them synchronously,
//! in registration order, once per [`Index::update`](crate::Index::update). A panicking
//! listener is not caught.

use std::fmt;

use crate::Index;

/// An event dispatched by the index.
#[derive(Debug, Clone, Copy)]
pub enum IndexEvent<'a> {
    /// The flat cache was rebuilt; carries the index itself.
    Updated(&'a Index),
}

/// Handle returned by [`Index::subscribe`](crate::Index::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Boxed listener callback.
type Listener = Box<dyn FnMut(&IndexEvent<'_>)>;

/// Registered listeners.
#[derive(Default)]
pub(crate) struct Listeners {
    /// Next id to hand out.
    next: u64,
    /// Listeners in registration order.
    entries: Vec<(ListenerId, Listener)>,
}

impl Listeners {
    /// Registers a listener and returns its handle.
    pub(crate) fn add(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next);
        self.next += 1;
        self.entries.push((id, listener));
        id
    }

    /// Removes a listener, returning whether it was registered.
    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    /// Returns the number of registered listeners.
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Calls every listener with `event`.
    pub(crate) fn dispatch(&mut self, event: &IndexEvent<'_>) {
        for (_, listener) in &mut self.entries {
            listener(event);
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
