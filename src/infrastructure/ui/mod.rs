pub mod console;
pub mod in_memory;

/// Pointer state shown while work is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    Wait,
}

/// Global busy indicator. Writes are not counted; the last one wins.
pub trait UiStatus: Send + Sync {
    fn set_cursor(&self, cursor: Cursor);
}

/// Blocking user notification.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}
