//! Synchronous event dispatcher for page triggers.
//!
//! The browser glue turns DOM events into [`PageEvent`]s and hands them to a
//! [`Dispatcher`]; tests dispatch the same events directly. Handlers run to
//! completion in subscription order, with no throttling.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

/// A trigger the runtime reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// The document finished parsing.
    Load,
    /// The window scrolled.
    Scroll,
    /// An element with the given id was clicked.
    Click { target_id: String },
}

/// Subscription key for a [`PageEvent`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Load,
    Scroll,
    Click,
}

impl PageEvent {
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Load => EventKind::Load,
            Self::Scroll => EventKind::Scroll,
            Self::Click { .. } => EventKind::Click,
        }
    }
}

type Handler = Box<dyn FnMut(&PageEvent)>;

/// Ordered list of handlers keyed by event kind.
#[derive(Default)]
pub struct Dispatcher {
    handlers: Vec<(EventKind, Handler)>,
}

impl Dispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for every event of `kind`.
    pub fn subscribe(&mut self, kind: EventKind, handler: impl FnMut(&PageEvent) + 'static) {
        self.handlers.push((kind, Box::new(handler)));
    }

    /// Run every handler subscribed to the event's kind. Returns how many ran.
    pub fn dispatch(&mut self, event: &PageEvent) -> usize {
        let kind = event.kind();
        let mut ran = 0;
        for (subscribed, handler) in &mut self.handlers {
            if *subscribed == kind {
                handler(event);
                ran += 1;
            }
        }
        ran
    }
}
