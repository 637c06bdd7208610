use super::samples::find_sample;
use super::types::Message;

/// Messages currently shown in one chat session, in insertion order.
///
/// Messages are only ever appended; the log as a whole can be replaced by a
/// sample history or cleared, but no single message is edited or removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<Message>,
    active_sample: Option<&'static str>,
}

impl Conversation {
    pub fn new() -> Conversation {
        Conversation::default()
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Replaces the whole log with a sample's messages. Unknown ids leave the
    /// conversation untouched and return `false`.
    pub fn load_sample(&mut self, id: &str) -> bool {
        match find_sample(id) {
            Some(sample) => {
                self.messages = sample.messages.clone();
                self.active_sample = Some(sample.id);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.messages.clear();
        self.active_sample = None;
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn active_sample(&self) -> Option<&'static str> {
        self.active_sample
    }

    /// Plain-text transcript used by the export action.
    pub fn export_text(&self) -> String {
        self.messages
            .iter()
            .map(|msg| {
                format!(
                    "{} ({})\n{}",
                    msg.role().display_name(),
                    msg.timestamp(),
                    msg.content()
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor_core::samples::SAMPLE_HISTORIES;
    use crate::advisor_core::types::Role;

    #[test]
    fn test_append_keeps_prefix() {
        let mut conversation = Conversation::new();
        conversation.append(Message::at(Role::User, "first", "1:00 PM"));
        conversation.append(Message::at(Role::Agent, "second", "1:01 PM"));
        let before = conversation.messages().to_vec();

        let msg = Message::at(Role::User, "third", "1:02 PM");
        conversation.append(msg.clone());

        assert_eq!(conversation.len(), 3);
        assert_eq!(conversation.last(), Some(&msg));
        assert_eq!(&conversation.messages()[..2], &before[..]);
    }

    #[test]
    fn test_load_sample_replaces_everything() {
        let mut conversation = Conversation::new();
        conversation.append(Message::at(Role::User, "stale", "9:00 AM"));

        assert!(conversation.load_sample("1"));
        assert_eq!(conversation.messages(), &SAMPLE_HISTORIES[0].messages[..]);
        assert_eq!(conversation.len(), 2);
        assert_eq!(conversation.active_sample(), Some("1"));

        assert!(conversation.load_sample("2"));
        assert_eq!(conversation.messages(), &SAMPLE_HISTORIES[1].messages[..]);
        assert_eq!(conversation.active_sample(), Some("2"));
    }

    #[test]
    fn test_load_unknown_sample_is_noop() {
        let mut conversation = Conversation::new();
        conversation.append(Message::at(Role::User, "keep me", "9:00 AM"));
        let before = conversation.clone();

        assert!(!conversation.load_sample("42"));
        assert_eq!(conversation, before);
    }

    #[test]
    fn test_clear() {
        let mut conversation = Conversation::new();
        conversation.load_sample("2");
        conversation.clear();
        assert!(conversation.is_empty());
        assert_eq!(conversation.active_sample(), None);
    }

    #[test]
    fn test_export_text() {
        let mut conversation = Conversation::new();
        assert_eq!(conversation.export_text(), "");

        conversation.append(Message::at(Role::User, "pricing?", "3:42 PM"));
        conversation.append(Message::at(Role::Agent, "GPT-4", "3:43 PM"));
        assert_eq!(
            conversation.export_text(),
            "You (3:42 PM)\npricing?\n\nLLM Advisor (3:43 PM)\nGPT-4"
        );
    }
}
