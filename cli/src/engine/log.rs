//! # rulebot Conversation Log
//!
//! File: cli/src/engine/log.rs
//! Author: Christi Mahu
//!
//! Append-only record of every user line and bot reply in the current run.
//! The log is owned by the `Responder`; collaborators only ever see it through
//! a shared reference (e.g. to print the end-of-session summary).
//!
use chrono::{DateTime, Local};
use std::fmt;

/// Who produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::User => f.write_str("user"),
            Speaker::Bot => f.write_str("bot"),
        }
    }
}

/// One line of the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationEvent {
    pub speaker: Speaker,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

/// Counts shown at the end of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConversationSummary {
    pub user_messages: usize,
    pub bot_messages: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ConversationLog {
    events: Vec<ConversationEvent>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.events.push(ConversationEvent {
            speaker,
            text: text.into(),
            timestamp: Local::now(),
        });
    }

    /// Events in the order they happened.
    pub fn events(&self) -> &[ConversationEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn summary(&self) -> ConversationSummary {
        let user_messages = self
            .events
            .iter()
            .filter(|event| event.speaker == Speaker::User)
            .count();
        let bot_messages = self
            .events
            .iter()
            .filter(|event| event.speaker == Speaker::Bot)
            .count();
        ConversationSummary {
            user_messages,
            bot_messages,
            total: self.events.len(),
        }
    }
}
