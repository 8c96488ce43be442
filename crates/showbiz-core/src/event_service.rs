use std::collections::HashMap;

use showbiz_domain::{Event, Identifiable, NamedEntity};
use uuid::Uuid;

use crate::CoreError;

#[derive(Debug, Default)]
pub struct EventManager {
    events: HashMap<Uuid, Event>,
}

impl EventManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_event(&mut self, event: Event) -> Result<Uuid, CoreError> {
        let id = event.id();
        if self.events.contains_key(&id) {
            tracing::warn!(%id, "event already exists in the list");
            return Err(CoreError::Duplicate { kind: "event", id });
        }
        tracing::info!(%id, name = event.name(), "event added");
        self.events.insert(id, event);
        Ok(id)
    }

    pub fn event(&self, id: Uuid) -> Result<&Event, CoreError> {
        self.events
            .get(&id)
            .ok_or(CoreError::NotFound { kind: "event", id })
    }

    pub fn event_mut(&mut self, id: Uuid) -> Result<&mut Event, CoreError> {
        self.events
            .get_mut(&id)
            .ok_or(CoreError::NotFound { kind: "event", id })
    }

    /// Sells `count` tickets for the event `id`, returning the tickets left.
    pub fn sell_tickets(&mut self, id: Uuid, count: u32) -> Result<u32, CoreError> {
        let remaining = self.event_mut(id)?.sell_tickets(count)?;
        tracing::info!(%id, count, remaining, "tickets sold");
        Ok(remaining)
    }

    pub fn remove_event(&mut self, id: Uuid) -> Result<Event, CoreError> {
        let event = self
            .events
            .remove(&id)
            .ok_or(CoreError::NotFound { kind: "event", id })?;
        tracing::info!(%id, name = event.name(), "event removed");
        Ok(event)
    }

    /// Events ordered by date, then name.
    pub fn events(&self) -> Vec<&Event> {
        let mut events: Vec<_> = self.events.values().collect();
        events.sort_by(|a, b| a.date().cmp(&b.date()).then_with(|| a.name().cmp(b.name())));
        events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
