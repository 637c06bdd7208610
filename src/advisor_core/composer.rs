use super::conversation::Conversation;
use super::types::{Message, Role};

/// Draft text and reply lock for one chat session.
///
/// At most one reply is outstanding: `send` refuses while the previous reply
/// has not been handed back through `receive`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composer {
    draft: String,
    pending: bool,
    sent_with_enter: bool,
}

impl Composer {
    pub fn new() -> Composer {
        Composer::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Records the current contents of the input box.
    ///
    /// The browser still inserts the newline of an Enter that already sent the
    /// draft and reports it as one more input event; that value is dropped.
    pub fn input(&mut self, value: String) {
        if self.sent_with_enter {
            self.sent_with_enter = false;
            if value.contains('\n') {
                return;
            }
        }
        self.draft = value;
    }

    /// Appends the draft as a user message and returns the text to answer.
    /// Blank drafts and sends during a pending reply return `None` and leave
    /// everything as it was.
    pub fn send(&mut self, conversation: &mut Conversation, with_enter: bool) -> Option<String> {
        if self.pending || self.draft.trim().is_empty() {
            return None;
        }
        let text = std::mem::take(&mut self.draft);
        self.pending = true;
        self.sent_with_enter = with_enter;
        conversation.append(Message::new(Role::User, text.clone()));
        Some(text)
    }

    /// Appends the agent reply and releases the lock.
    pub fn receive(&mut self, conversation: &mut Conversation, reply: Message) {
        conversation.append(reply);
        self.pending = false;
    }
}
