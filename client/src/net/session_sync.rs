//! Session controller: sequences chat/version/message fetches.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionState` decides what a result means; this module decides when
//! requests are issued. A selection mints a [`SelectionTicket`] inside the
//! state and a [`CancelToken`] here. Selecting again aborts the previous
//! token before the new fetch starts, and the ticket check in the state
//! drops anything that still slips through.
//!
//! Versions always resolve before messages are requested for the same
//! selection. Everything else runs unordered.

#[cfg(test)]
#[path = "session_sync_test.rs"]
mod session_sync_test;

use leptos::prelude::*;
use schema::chat::chat_title_from_prompt;
use schema::{ApiError, Chat};

use super::{api, spawn};
use super::cancel::CancelToken;
use crate::state::session::{CHAT_CREATE_FAILED, SelectionChange, SelectionTicket, SessionState};

/// Handle provided through context; cheap to copy into event handlers.
#[derive(Clone, Copy)]
pub struct SessionController {
    session: RwSignal<SessionState>,
    inflight: StoredValue<Option<CancelToken>, LocalStorage>,
}

impl SessionController {
    pub fn new(session: RwSignal<SessionState>) -> Self {
        Self { session, inflight: StoredValue::new_local(None) }
    }

    pub fn session(self) -> RwSignal<SessionState> {
        self.session
    }

    /// Fetch the chat list once. Failure leaves a banner and is not retried.
    pub fn load_chats(self) {
        let session = self.session;
        session.update(SessionState::begin_chats_load);
        spawn(async move {
            let result = api::fetch_chats().await;
            if let Err(err) = &result {
                leptos::logging::warn!("chat list fetch failed: {err}");
            }
            session.update(|s| s.finish_chats_load(result));
        });
    }

    /// Change the selected chat and start loading its versions.
    pub fn select_chat(self, chat: Option<Chat>) {
        let change = self.session.try_update(|s| s.select_chat(chat)).unwrap_or(SelectionChange::Unchanged);
        match change {
            SelectionChange::Unchanged => {}
            SelectionChange::Cleared => self.cancel_inflight(),
            SelectionChange::Fetch(ticket) => {
                self.cancel_inflight();
                let token = CancelToken::new();
                self.inflight.set_value(Some(token.clone()));
                spawn(self.load_selection(ticket, token));
            }
        }
    }

    async fn load_selection(self, ticket: SelectionTicket, token: CancelToken) {
        let versions = api::fetch_versions(&ticket.chat_id, Some(&token)).await;
        if let Err(err) = &versions {
            if *err != ApiError::Cancelled {
                leptos::logging::warn!("version fetch for chat {} failed: {err}", ticket.chat_id);
            }
        }
        let fetch_messages = self.session.try_update(|s| s.apply_versions(&ticket, versions)).unwrap_or(false);
        if !fetch_messages || token.is_cancelled() {
            return;
        }

        let messages = api::fetch_messages(&ticket.chat_id, Some(&token)).await;
        if let Err(err) = &messages {
            if *err != ApiError::Cancelled {
                leptos::logging::warn!("message fetch for chat {} failed, showing none: {err}", ticket.chat_id);
            }
        }
        self.session.update(|s| s.apply_messages(&ticket, messages));
    }

    /// Submit a prompt: create a chat first when none is selected, then a version.
    pub fn submit_prompt(self, prompt: &str) {
        let prompt = prompt.trim().to_owned();
        if prompt.is_empty() {
            return;
        }
        let session = self.session;
        let (selected, next_number) =
            session.with_untracked(|s| (s.selected_chat.clone(), s.next_version_number()));
        session.update(SessionState::begin_submit);

        match selected {
            None => spawn(async move {
                let chat = match api::create_chat(&chat_title_from_prompt(&prompt)).await {
                    Ok(chat) => chat,
                    Err(err) => {
                        leptos::logging::warn!("chat create failed: {err}");
                        session.update(|s| s.fail_submit(CHAT_CREATE_FAILED));
                        return;
                    }
                };
                let version = api::create_version(&chat.id, &prompt, 1).await;
                self.cancel_inflight();
                session.update(|s| s.adopt_new_chat(chat, version));
            }),
            Some(chat) => spawn(async move {
                let result = api::create_version(&chat.id, &prompt, next_number).await;
                if let Err(err) = &result {
                    leptos::logging::warn!("version create for chat {} failed: {err}", chat.id);
                }
                session.update(|s| s.finish_version_create(&chat.id, result));
            }),
        }
    }

    pub fn set_current_version(self, version_id: &str) {
        self.session.update(|s| {
            s.set_current_version(version_id);
        });
    }

    pub fn dismiss_error(self) {
        self.session.update(SessionState::dismiss_error);
    }

    fn cancel_inflight(self) {
        if let Some(token) = self.inflight.try_update_value(Option::take).flatten() {
            token.cancel();
        }
    }
}
