//! Observable parameter store
//!
//! [`TableStore`] owns the session's single [`TableParameters`] value.
//! Setters never validate: range limits belong to the widgets that call them,
//! so a value outside the slider ranges (or even NaN) is stored and rendered
//! as given.
//!
//! Every setter call notifies every subscriber with the new snapshot,
//! synchronously and before returning. Subscribers observe the whole store;
//! there is no per-field filtering and no equality short-circuit.

use std::fmt;

use crate::color::TableColor;
use crate::parameters::TableParameters;

/// Handle returned by [`TableStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&TableParameters) + Send>;

/// Single source of truth for the table parameters
pub struct TableStore {
    params: TableParameters,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
    revision: u64,
}

impl Default for TableStore {
    fn default() -> Self {
        Self::new(TableParameters::default())
    }
}

impl fmt::Debug for TableStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableStore")
            .field("params", &self.params)
            .field("subscribers", &self.subscribers.len())
            .field("revision", &self.revision)
            .finish()
    }
}

impl TableStore {
    /// Create a store holding `initial`
    pub fn new(initial: TableParameters) -> Self {
        Self {
            params: initial,
            subscribers: Vec::new(),
            next_subscription: 0,
            revision: 0,
        }
    }

    /// Current parameter snapshot
    pub fn snapshot(&self) -> TableParameters {
        self.params
    }

    /// Number of mutations applied since creation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the table width
    pub fn set_width(&mut self, width: f32) {
        self.update(|p| p.width = width);
    }

    /// Replace the top thickness
    pub fn set_thickness(&mut self, thickness: f32) {
        self.update(|p| p.thickness = thickness);
    }

    /// Replace the top color
    pub fn set_color(&mut self, color: TableColor) {
        self.update(|p| p.color = color);
    }

    /// Restore the default parameters
    pub fn reset(&mut self) {
        self.update(|p| *p = TableParameters::default());
    }

    /// Register a callback run with the new snapshot after every mutation
    ///
    /// The callback runs while the store is borrowed mutably; it must not
    /// reach back into the store.
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&TableParameters) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscriber; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Number of registered subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn update(&mut self, mutate: impl FnOnce(&mut TableParameters)) {
        mutate(&mut self.params);
        self.revision += 1;
        tracing::debug!(
            revision = self.revision,
            width = self.params.width,
            thickness = self.params.thickness,
            color = %self.params.color,
            "table parameters changed"
        );

        let snapshot = self.params;
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&snapshot);
        }
    }
}
