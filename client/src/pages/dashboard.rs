//! Dashboard page: sidebar launcher plus the docking workspace.
//!
//! SYSTEM CONTEXT
//! ==============
//! The chat list is loaded once when the page mounts so the canvas view and
//! its chat picker are populated before the user opens them.

use leptos::prelude::*;

use crate::components::dock_host::DockHost;
use crate::components::sidebar::Sidebar;
use crate::net::session_sync::SessionController;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let controller = expect_context::<SessionController>();

    let requested_chats = StoredValue::new(false);
    Effect::new(move || {
        if requested_chats.get_value() {
            return;
        }
        requested_chats.set_value(true);
        controller.load_chats();
    });

    view! {
        <div class="dashboard">
            <Sidebar/>
            <main class="dashboard__workspace">
                <DockHost/>
            </main>
        </div>
    }
}
