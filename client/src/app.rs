//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::session_sync::SessionController;
use crate::pages::dashboard::DashboardPage;
use crate::state::{briefing::BriefingState, news::NewsState, session::SessionState, workspace::WorkspaceState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Session, workspace, news and briefing state are app-wide signals so a
/// view keeps its data when its tab is closed and reopened.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let workspace = RwSignal::new(WorkspaceState::default());
    let news = RwSignal::new(NewsState::default());
    let briefing = RwSignal::new(BriefingState::default());

    provide_context(session);
    provide_context(workspace);
    provide_context(news);
    provide_context(briefing);
    provide_context(SessionController::new(session));

    view! {
        <Stylesheet id="leptos" href="/pkg/ledgerline.css"/>
        <Title text="Ledgerline"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
