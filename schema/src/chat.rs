//! Chats, canvas versions, and chat messages.
//!
//! DESIGN
//! ======
//! A chat is a thread of prompts; every prompt produces an immutable
//! [`Version`] whose `components` list is a declarative canvas schema. The
//! client never edits a version, it only creates new ones and picks which one
//! is current.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::normalize::{deserialize_id, deserialize_opt_id};

/// A conversation that owns a sequence of canvas versions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    /// Canonical identifier (after `_id` normalization).
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Display title, derived from the first prompt.
    #[serde(default)]
    pub title: String,
    /// ISO 8601 creation timestamp.
    pub created_at: Option<String>,
    /// ISO 8601 last-update timestamp.
    pub updated_at: Option<String>,
    /// Version the backend considers current, if any.
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub current_version_id: Option<String>,
    /// Number of messages in the chat.
    #[serde(default)]
    pub message_count: u32,
    /// Whether the backend flags this chat as active.
    #[serde(default)]
    pub is_active: bool,
}

/// One widget slot in a canvas schema.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComponentEntry {
    /// Stable key for keyed rendering; generated when the backend omits it.
    #[serde(default = "generated_entry_id", deserialize_with = "deserialize_id")]
    pub id: String,
    /// Registry name of the widget (e.g. `"AlertsInsights"`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Widget input, passed through untouched.
    #[serde(default)]
    pub data: Value,
}

fn generated_entry_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Immutable snapshot of a canvas schema tied to one prompt.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_id")]
    pub chat_id: String,
    /// 1-based position within the chat.
    #[serde(default)]
    pub version_number: u32,
    #[serde(default)]
    pub prompt: String,
    /// Ordered canvas schema; render order is list order.
    #[serde(default)]
    pub components: Vec<ComponentEntry>,
    pub created_at: Option<String>,
}

/// A chat message. Read-only from the client's perspective.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_id")]
    pub chat_id: String,
    /// `"user"` or `"assistant"`.
    #[serde(default)]
    pub role: String,
    /// Markdown body.
    #[serde(default)]
    pub content: String,
    pub created_at: Option<String>,
}

/// Body for `POST /chats/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewChat {
    pub title: String,
}

/// Body for `POST /chats/{chatId}/versions`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVersion {
    pub prompt: String,
    pub version_number: u32,
}

/// Maximum number of characters kept when deriving a chat title.
pub const CHAT_TITLE_MAX_CHARS: usize = 60;

/// Derive a chat title from the prompt that created it.
///
/// Uses the first non-empty line, trimmed, cut at [`CHAT_TITLE_MAX_CHARS`]
/// characters with a trailing ellipsis when shortened.
#[must_use]
pub fn chat_title_from_prompt(prompt: &str) -> String {
    let line = prompt.lines().map(str::trim).find(|l| !l.is_empty()).unwrap_or_default();
    if line.chars().count() <= CHAT_TITLE_MAX_CHARS {
        return line.to_owned();
    }
    let mut title: String = line.chars().take(CHAT_TITLE_MAX_CHARS).collect();
    title.truncate(title.trim_end().len());
    title.push('\u{2026}');
    title
}
