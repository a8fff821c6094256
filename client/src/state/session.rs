//! Chat session state: chats, the selected chat, its versions, and messages.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the single writer for everything the canvas view shows. Async
//! fetches live in `net::session_sync`; they hand their results back through
//! the `apply_*` methods here together with the [`SelectionTicket`] they were
//! started under, and results for a superseded selection are dropped.
//!
//! ERROR HANDLING
//! ==============
//! Chat and version failures surface a generic banner string. Message
//! failures are downgraded to an empty list: messages are secondary to the
//! canvas, and a missing transcript should not hide a rendered version.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use schema::{ApiError, Chat, Message, Version};

pub const CHATS_LOAD_FAILED: &str = "Failed to load chats";
pub const VERSIONS_LOAD_FAILED: &str = "Failed to load versions";
pub const CHAT_CREATE_FAILED: &str = "Failed to create chat";
pub const VERSION_CREATE_FAILED: &str = "Failed to create version";

/// Identifies the chat selection a fetch was started for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionTicket {
    generation: u64,
    pub chat_id: String,
}

/// Outcome of [`SessionState::select_chat`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionChange {
    /// The same chat was already selected; nothing to do.
    Unchanged,
    /// Selection cleared; dependent state was reset synchronously.
    Cleared,
    /// A new chat is selected; fetch its versions under this ticket.
    Fetch(SelectionTicket),
}

#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub chats: Vec<Chat>,
    pub selected_chat: Option<Chat>,
    /// Versions of the selected chat, in server order.
    pub versions: Vec<Version>,
    /// Version the canvas renders.
    pub current_version: Option<Version>,
    pub messages: Vec<Message>,
    pub is_loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl SessionState {
    // --- chats ---

    pub fn begin_chats_load(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    pub fn finish_chats_load(&mut self, result: Result<Vec<Chat>, ApiError>) {
        self.is_loading = false;
        match result {
            Ok(chats) => self.chats = chats,
            Err(_) => self.error = Some(CHATS_LOAD_FAILED.to_owned()),
        }
    }

    // --- selection ---

    /// Change the selected chat, resetting everything that belongs to the old one.
    pub fn select_chat(&mut self, chat: Option<Chat>) -> SelectionChange {
        let next_id = chat.as_ref().map(|c| c.id.as_str());
        let current_id = self.selected_chat.as_ref().map(|c| c.id.as_str());
        if next_id.is_some() && next_id == current_id {
            return SelectionChange::Unchanged;
        }

        self.generation += 1;
        self.versions.clear();
        self.messages.clear();
        self.current_version = None;
        self.selected_chat = chat;

        match &self.selected_chat {
            None => {
                self.is_loading = false;
                SelectionChange::Cleared
            }
            Some(chat) => {
                self.is_loading = true;
                self.error = None;
                SelectionChange::Fetch(SelectionTicket { generation: self.generation, chat_id: chat.id.clone() })
            }
        }
    }

    #[must_use]
    pub fn is_current(&self, ticket: &SelectionTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Apply a version fetch. Returns `true` when messages should be fetched next.
    pub fn apply_versions(&mut self, ticket: &SelectionTicket, result: Result<Vec<Version>, ApiError>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.is_loading = false;
        match result {
            Ok(versions) => {
                self.current_version = versions.first().cloned();
                self.versions = versions;
                true
            }
            Err(ApiError::Cancelled) => false,
            Err(_) => {
                self.error = Some(VERSIONS_LOAD_FAILED.to_owned());
                false
            }
        }
    }

    /// Apply a message fetch. Failures leave the list empty.
    pub fn apply_messages(&mut self, ticket: &SelectionTicket, result: Result<Vec<Message>, ApiError>) {
        if !self.is_current(ticket) {
            return;
        }
        self.messages = result.unwrap_or_default();
    }

    // --- versions ---

    /// Number the next version of the selected chat gets.
    #[must_use]
    pub fn next_version_number(&self) -> u32 {
        u32::try_from(self.versions.len()).map_or(u32::MAX, |n| n.saturating_add(1))
    }

    pub fn set_current_version(&mut self, version_id: &str) -> bool {
        match self.versions.iter().find(|v| v.id == version_id) {
            Some(version) => {
                self.current_version = Some(version.clone());
                true
            }
            None => false,
        }
    }

    // --- prompt submission ---

    pub fn begin_submit(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    pub fn fail_submit(&mut self, message: &str) {
        self.is_loading = false;
        self.error = Some(message.to_owned());
    }

    /// Record a version created for `chat_id`.
    ///
    /// Ignored entirely when the user has since selected another chat: the
    /// loading flag then belongs to that chat's own fetch, and its numbering
    /// must not absorb another chat's versions.
    pub fn finish_version_create(&mut self, chat_id: &str, result: Result<Version, ApiError>) {
        if !self.selected_chat.as_ref().is_some_and(|c| c.id == chat_id) {
            return;
        }
        self.is_loading = false;
        match result {
            Ok(version) => {
                self.versions.push(version.clone());
                self.current_version = Some(version);
            }
            Err(_) => self.error = Some(VERSION_CREATE_FAILED.to_owned()),
        }
    }

    /// Adopt a chat created by the first prompt, plus its first version.
    ///
    /// The chat becomes selected without a fetch: its only version is the one
    /// we just created.
    pub fn adopt_new_chat(&mut self, chat: Chat, first_version: Result<Version, ApiError>) {
        self.generation += 1;
        self.is_loading = false;
        self.chats.retain(|c| c.id != chat.id);
        self.chats.insert(0, chat.clone());
        self.selected_chat = Some(chat);
        self.messages.clear();
        match first_version {
            Ok(version) => {
                self.versions = vec![version.clone()];
                self.current_version = Some(version);
            }
            Err(_) => {
                self.versions.clear();
                self.current_version = None;
                self.error = Some(VERSION_CREATE_FAILED.to_owned());
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}
