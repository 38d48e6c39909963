use crate::model::Quote;

pub mod add;
pub mod random;
pub mod search;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Quotes to display, in order.
    pub listed_quotes: Vec<Quote>,
    /// Quotes written to the store.
    pub affected_quotes: Vec<Quote>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_quotes(mut self, quotes: Vec<Quote>) -> Self {
        self.listed_quotes = quotes;
        self
    }

    pub fn with_affected_quotes(mut self, quotes: Vec<Quote>) -> Self {
        self.affected_quotes = quotes;
        self
    }
}
