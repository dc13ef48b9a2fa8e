//! Append-only notification log.

use agora_types::Event;
use serde::{Deserialize, Serialize};

/// Events in emission order.
///
/// The log is the engine's whole notification surface: appended to alongside
/// each mutation, never rewritten, so callers (and tests) can observe the
/// exact sequence independently of final state. Delivering entries to
/// external subscribers is a transport concern left to the embedder.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
