use chrono::Local;

use crate::global;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Agent,
}

impl Role {
    /// Name shown above a message in the chat window.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::User => "You",
            Role::Agent => "LLM Advisor",
        }
    }
}

/// A single chat message. Never modified after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    role: Role,
    content: String,
    timestamp: String,
}

impl Message {
    /// Creates a message stamped with the current local time.
    pub fn new(role: Role, content: impl Into<String>) -> Message {
        Message::at(role, content, display_time_now())
    }

    pub fn at(role: Role, content: impl Into<String>, timestamp: impl Into<String>) -> Message {
        Message {
            role,
            content: content.into(),
            timestamp: timestamp.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

pub struct SampleHistory {
    pub id: &'static str,
    pub title: &'static str,
    pub preview: &'static str,
    pub timestamp: &'static str,
    pub messages: Vec<Message>,
}

fn display_time_now() -> String {
    Local::now().format(global::TIME_FORMAT).to_string()
}
