//! URL input form.
//!
//! The form only collects input; the submission lifecycle is owned by the
//! page, which receives the raw value through `on_submit`.

use leptos::prelude::*;

use crate::state::download::DownloadState;

#[component]
pub fn DownloadForm(on_submit: Callback<String>) -> impl IntoView {
    let download = expect_context::<RwSignal<DownloadState>>();
    let url = RwSignal::new(String::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Focus the input once the page is interactive.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let loading = move || download.with(DownloadState::is_loading);

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(url.get_untracked());
    };

    view! {
        <form id="downloadForm" class="download-form" on:submit=on_form_submit>
            <input
                id="urlInput"
                class="download-form__input"
                type="text"
                autocomplete="off"
                placeholder="Paste a post link or enter a username"
                node_ref=input_ref
                prop:value=move || url.get()
                on:input=move |ev| url.set(event_target_value(&ev))
                disabled=loading
            />
            <button
                id="submitBtn"
                class="download-form__submit"
                class:loading=loading
                type="submit"
                disabled=loading
            >
                <span class="download-form__label">"Download"</span>
                <span class="download-form__spinner" aria-hidden="true"></span>
            </button>
        </form>
    }
}
