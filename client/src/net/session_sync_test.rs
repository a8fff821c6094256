use super::*;

fn chat(id: &str) -> Chat {
    Chat {
        id: id.to_owned(),
        title: id.to_owned(),
        created_at: None,
        updated_at: None,
        current_version_id: None,
        message_count: 0,
        is_active: true,
    }
}

fn with_controller(test: impl FnOnce(SessionController)) {
    let owner = Owner::new();
    owner.with(|| test(SessionController::new(RwSignal::new(SessionState::default()))));
}

#[test]
fn selecting_chat_resets_state_before_fetch_resolves() {
    with_controller(|ctl| {
        ctl.select_chat(Some(chat("a")));
        let state = ctl.session().get_untracked();
        assert_eq!(state.selected_chat.map(|c| c.id).as_deref(), Some("a"));
        assert!(state.is_loading);
        assert!(state.versions.is_empty());
    });
}

#[test]
fn clearing_selection_stops_loading() {
    with_controller(|ctl| {
        ctl.select_chat(Some(chat("a")));
        ctl.select_chat(None);
        let state = ctl.session().get_untracked();
        assert!(state.selected_chat.is_none());
        assert!(!state.is_loading);
    });
}

#[test]
fn blank_prompt_is_ignored() {
    with_controller(|ctl| {
        ctl.submit_prompt("   \n ");
        assert!(!ctl.session().get_untracked().is_loading);
    });
}

#[test]
fn submitting_prompt_marks_loading() {
    with_controller(|ctl| {
        ctl.session().update(|s| s.error = Some("old".into()));
        ctl.submit_prompt("show my portfolio");
        let state = ctl.session().get_untracked();
        assert!(state.is_loading);
        assert!(state.error.is_none());
    });
}

#[test]
fn dismiss_error_clears_banner() {
    with_controller(|ctl| {
        ctl.session().update(|s| s.error = Some("boom".into()));
        ctl.dismiss_error();
        assert!(ctl.session().get_untracked().error.is_none());
    });
}
