use crate::infrastructure::ui::{Cursor, Notifier, UiStatus};
use std::io::Write;

/// Terminal stand-in for the page cursor: prints a marker on stderr when busy.
#[derive(Clone, Copy, Default)]
pub struct ConsoleUiStatus;

impl UiStatus for ConsoleUiStatus {
    fn set_cursor(&self, cursor: Cursor) {
        tracing::trace!(?cursor, "cursor changed");
        if cursor == Cursor::Wait {
            let mut stderr = std::io::stderr().lock();
            let _ = writeln!(stderr, "loading...");
        }
    }
}

/// Writes alerts to stderr.
#[derive(Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{}", message);
    }
}
