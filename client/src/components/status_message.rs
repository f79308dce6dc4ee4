//! Status line under the download form.

use leptos::prelude::*;

use crate::state::status::StatusState;

#[component]
pub fn StatusMessage() -> impl IntoView {
    let status = expect_context::<RwSignal<StatusState>>();

    let class = move || status.with(StatusState::class);
    let display = move || if status.with(|s| s.visible) { "block" } else { "none" };
    let text = move || status.with(|s| s.text().to_owned());

    view! {
        <div id="statusMessage" class=class style:display=display role="status">
            {text}
        </div>
    }
}
