use leptos::prelude::*;

use super::mock;
use crate::components::widgets::options_chain::OptionsChain;

#[component]
pub fn OptionsView() -> impl IntoView {
    view! {
        <div class="view view--options">
            <h2 class="view__title">"Options"</h2>
            <OptionsChain data=mock::options_chain()/>
        </div>
    }
}
