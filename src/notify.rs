//! Notifications
//!
//! Fire-and-forget sink for user-facing confirmations (the toast equivalent).
//! Failure on the sink side is not observable to the cart.

use std::cell::RefCell;

/// Fire-and-forget notification sink.
pub trait Notifier {
    /// Deliver a `(title, description)` pair. Must not fail observably.
    fn notify(&self, title: &str, description: &str);
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, title: &str, description: &str) {
        (**self).notify(title, description);
    }
}

/// A notifier that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _title: &str, _description: &str) {}
}

/// A notifier that records every message, for assertions in tests and demos.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<(String, String)>>,
}

impl RecordingNotifier {
    /// Create an empty recording notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All `(title, description)` pairs delivered so far.
    #[must_use]
    pub fn messages(&self) -> Vec<(String, String)> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, title: &str, description: &str) {
        self.messages
            .borrow_mut()
            .push((title.to_string(), description.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_notifier_captures_messages_in_order() {
        let notifier = RecordingNotifier::new();

        notifier.notify("Added to Cart", "Widget has been added to your cart.");
        notifier.notify("Item Removed", "Item has been removed from your cart.");

        let messages = notifier.messages();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].0, "Added to Cart");
        assert_eq!(messages[1].0, "Item Removed");
    }

    #[test]
    fn null_notifier_accepts_anything() {
        NullNotifier.notify("title", "description");
    }
}
