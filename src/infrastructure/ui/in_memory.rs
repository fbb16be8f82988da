use crate::infrastructure::ui::{Cursor, Notifier, UiStatus};
use std::sync::{Arc, PoisonError, RwLock};

/// Keeps the cursor in memory and remembers every change.
#[derive(Clone, Default)]
pub struct InMemoryUiStatus {
    changes: Arc<RwLock<Vec<Cursor>>>,
}

impl InMemoryUiStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> Cursor {
        let changes = self.changes.read().unwrap_or_else(PoisonError::into_inner);
        changes.last().copied().unwrap_or_default()
    }

    pub fn changes(&self) -> Vec<Cursor> {
        self.changes.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl UiStatus for InMemoryUiStatus {
    fn set_cursor(&self, cursor: Cursor) {
        self.changes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(cursor);
    }
}

/// Collects alerts instead of showing them.
#[derive(Clone, Default)]
pub struct InMemoryNotifier {
    messages: Arc<RwLock<Vec<String>>>,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Notifier for InMemoryNotifier {
    fn alert(&self, message: &str) {
        self.messages
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}
