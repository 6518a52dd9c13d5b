//! Chat session with the temple assistant
//!
//! The session keeps the local conversation, sends only a short window of
//! it as context, and never surfaces a failure as an error: the fallback
//! answer is appended instead.

use std::fs;
use std::path::{Path, PathBuf};

use shared::models::{CHAT_FALLBACK_ANSWER, ChatMessage, ChatRequest};

use crate::{ClientResult, HttpClient};

/// History messages sent along with a new question
pub const CHAT_CONTEXT_MESSAGES: usize = 6;

/// Messages kept in the local history
pub const CHAT_HISTORY_LIMIT: usize = 50;

/// JSON file holding the chat history between runs
#[derive(Debug, Clone)]
pub struct ChatHistoryStore {
    path: PathBuf,
}

impl ChatHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the history; a missing file is an empty history
    pub fn load(&self) -> ClientResult<Vec<ChatMessage>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let text = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn save(&self, messages: &[ChatMessage]) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(messages)?)?;
        Ok(())
    }

    pub fn clear(&self) -> ClientResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// Drop the oldest messages beyond the history limit
fn cap_history(history: &mut Vec<ChatMessage>) {
    if history.len() > CHAT_HISTORY_LIMIT {
        let excess = history.len() - CHAT_HISTORY_LIMIT;
        history.drain(..excess);
    }
}

pub struct ChatSession {
    client: HttpClient,
    history: Vec<ChatMessage>,
    suggestions: Vec<String>,
    store: Option<ChatHistoryStore>,
}

impl ChatSession {
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            history: Vec::new(),
            suggestions: Vec::new(),
            store: None,
        }
    }

    /// Session backed by a history file; an unreadable file starts empty
    pub fn with_store(client: HttpClient, store: ChatHistoryStore) -> Self {
        let mut history = store.load().unwrap_or_else(|e| {
            tracing::warn!(
                path = %store.path().display(),
                error = %e,
                "Chat history unreadable, starting empty"
            );
            Vec::new()
        });
        cap_history(&mut history);
        Self {
            client,
            history,
            suggestions: Vec::new(),
            store: Some(store),
        }
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Suggestions from the last answer, if it carried any
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Context sent with a new question: the last few messages plus the question
    fn context_for(&self, question: ChatMessage) -> Vec<ChatMessage> {
        let start = self.history.len().saturating_sub(CHAT_CONTEXT_MESSAGES);
        let mut messages = self.history[start..].to_vec();
        messages.push(question);
        messages
    }

    /// Ask a question and return the reply appended to the history.
    ///
    /// Blank input is ignored and returns `None`.
    pub async fn send(&mut self, text: &str) -> Option<&ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let question = ChatMessage::user(text);
        let request = ChatRequest {
            messages: self.context_for(question.clone()),
        };
        self.history.push(question);

        let reply = match self.client.chat(&request).await {
            Ok(response) => {
                self.suggestions = response.suggestions.unwrap_or_default();
                ChatMessage::bot(response.answer)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Chat request failed");
                self.suggestions.clear();
                ChatMessage::bot(CHAT_FALLBACK_ANSWER)
            }
        };
        self.history.push(reply);
        cap_history(&mut self.history);
        self.persist();

        self.history.last()
    }

    /// Forget the conversation, including the stored copy
    pub fn clear(&mut self) -> ClientResult<()> {
        self.history.clear();
        self.suggestions.clear();
        match &self.store {
            Some(store) => store.clear(),
            None => Ok(()),
        }
    }

    fn persist(&self) {
        if let Some(store) = &self.store
            && let Err(e) = store.save(&self.history)
        {
            tracing::warn!(
                path = %store.path().display(),
                error = %e,
                "Failed to save chat history"
            );
        }
    }
}
