//! Append-only chat transcript.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::assistant::responder::{KeywordResponder, GREETING};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChatError {
    #[error("Message is empty")]
    EmptyMessage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// A conversation with the rule-based assistant.
///
/// Messages are only ever appended; [`ChatSession::reset`] is the one way
/// to drop them, and it restores the greeting.
#[derive(Debug, Clone)]
pub struct ChatSession {
    responder: KeywordResponder,
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(KeywordResponder::default())
    }
}

impl ChatSession {
    pub fn new(responder: KeywordResponder) -> Self {
        let mut session = Self {
            responder,
            messages: Vec::new(),
            next_id: 1,
        };
        session.push(Sender::Assistant, GREETING.to_string());
        session
    }

    pub fn responder(&self) -> KeywordResponder {
        self.responder
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append a user message. Blank input is rejected and nothing is appended.
    pub fn push_user(&mut self, text: &str) -> Result<&ChatMessage, ChatError> {
        if text.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        Ok(self.push(Sender::User, text.to_string()))
    }

    /// Append an assistant reply.
    pub fn push_assistant(&mut self, text: &str) -> &ChatMessage {
        self.push(Sender::Assistant, text.to_string())
    }

    /// Append the user message and the assistant's reply in one step.
    pub fn exchange(&mut self, text: &str) -> Result<&ChatMessage, ChatError> {
        self.push_user(text)?;
        let reply = self.responder.respond(text);
        Ok(self.push_assistant(reply))
    }

    pub fn reset(&mut self) {
        self.messages.clear();
        self.next_id = 1;
        self.push(Sender::Assistant, GREETING.to_string());
    }

    fn push(&mut self, sender: Sender, text: String) -> &ChatMessage {
        let message = ChatMessage {
            id: self.next_id,
            sender,
            text,
            timestamp: Utc::now(),
        };
        self.next_id += 1;
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::responder::FALLBACK_RESPONSE;

    #[test]
    fn new_session_has_greeting() {
        let session = ChatSession::default();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].sender, Sender::Assistant);
        assert_eq!(session.messages()[0].text, GREETING);
    }

    #[test]
    fn exchange_appends_in_order() {
        let mut session = ChatSession::default();
        let reply = session.exchange("what's new?").unwrap().clone();
        assert_eq!(reply.text, FALLBACK_RESPONSE);

        let senders: Vec<Sender> = session.messages().iter().map(|m| m.sender).collect();
        assert_eq!(senders, [Sender::Assistant, Sender::User, Sender::Assistant]);
        let ids: Vec<u64> = session.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn blank_message_is_rejected() {
        let mut session = ChatSession::default();
        assert_eq!(session.exchange("   ").unwrap_err(), ChatError::EmptyMessage);
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn reset_restores_greeting_only() {
        let mut session = ChatSession::default();
        session.exchange("wifi").unwrap();
        session.reset();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].id, 1);
    }
}
