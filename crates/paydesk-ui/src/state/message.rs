/// Identifies one shown message so an expiry can tell whether it is stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MessageId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// A user-visible message that dismisses itself after a timeout.
#[derive(Clone, Debug, PartialEq)]
pub struct TransientMessage {
    pub id: MessageId,
    pub kind: MessageKind,
    pub text: String,
}

/// Holds at most one visible message.
///
/// Each `set` mints a fresh id. `clear_if` only clears when the given id is
/// still the one shown, so an expiry scheduled for a replaced message is a
/// no-op.
#[derive(Clone, Debug, Default)]
pub struct MessageSlot {
    current: Option<TransientMessage>,
    next_id: u64,
}

impl MessageSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the visible message, returning the new message's id.
    pub fn set(&mut self, kind: MessageKind, text: impl Into<String>) -> MessageId {
        self.next_id += 1;
        let id = MessageId(self.next_id);
        self.current = Some(TransientMessage {
            id,
            kind,
            text: text.into(),
        });
        id
    }

    /// Clear the message if `id` is still the visible one.
    pub fn clear_if(&mut self, id: MessageId) -> bool {
        if self.current.as_ref().is_some_and(|m| m.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&TransientMessage> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_previous_message() {
        let mut slot = MessageSlot::new();
        let first = slot.set(MessageKind::Success, "one");
        let second = slot.set(MessageKind::Error, "two");

        assert_ne!(first, second);
        let current = slot.current().unwrap();
        assert_eq!(current.text, "two");
        assert_eq!(current.kind, MessageKind::Error);
    }

    #[test]
    fn test_clear_if_ignores_stale_id() {
        let mut slot = MessageSlot::new();
        let first = slot.set(MessageKind::Success, "one");
        slot.set(MessageKind::Success, "two");

        assert!(!slot.clear_if(first));
        assert_eq!(slot.current().unwrap().text, "two");
    }

    #[test]
    fn test_clear_if_clears_current() {
        let mut slot = MessageSlot::new();
        let id = slot.set(MessageKind::Success, "one");

        assert!(slot.clear_if(id));
        assert!(slot.current().is_none());
        assert!(!slot.clear_if(id));
    }
}
