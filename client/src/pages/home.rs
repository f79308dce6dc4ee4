//! Download page: owns the submit lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form hands over raw input; this page validates it, drives the status
//! line through its phases, issues the request, renders the result, and
//! always returns the form to idle.

use std::time::Duration;

use leptos::prelude::*;
use wire::DownloadResponse;

use crate::components::download_form::DownloadForm;
use crate::components::result_section::ResultSection;
use crate::components::status_message::StatusMessage;
use crate::components::theme_toggle::ThemeToggle;
use crate::net::api;
use crate::state::download::{
    DownloadState, LINK_RECEIVED_MESSAGE, SCROLL_DELAY, VALIDATING_DELAY, VALIDATING_MESSAGE,
};
use crate::state::status::{StatusSeverity, StatusState, StatusTicket};
use crate::util::browser;

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

/// Replace the status line. Returns the ticket and the auto-hide delay, if
/// this severity hides itself.
pub(crate) fn post_status(
    status: &mut StatusState,
    text: impl Into<String>,
    severity: StatusSeverity,
) -> (StatusTicket, Option<Duration>) {
    (status.show(text, severity), severity.auto_hide_after())
}

/// Whether the delayed "validating" message may replace the status line.
pub(crate) fn should_show_validating(status: &StatusState, received: Option<StatusTicket>) -> bool {
    received.is_some_and(|ticket| status.is_current(ticket))
}

/// Fold a finished request into the form state and return the status line
/// to show. The form always leaves its loading state.
pub(crate) fn complete(
    download: &mut DownloadState,
    outcome: Result<DownloadResponse, String>,
) -> (String, StatusSeverity) {
    let line = match outcome {
        Ok(resp) => {
            download.show_result(resp.result);
            (resp.message, StatusSeverity::Success)
        }
        Err(e) => (e, StatusSeverity::Error),
    };
    download.finish();
    line
}

/// Whether there is a rendered result worth scrolling to.
pub(crate) fn should_scroll(download: &DownloadState) -> bool {
    download.view.is_section_visible()
}

/// Show a status and schedule its auto-hide when the severity calls for one.
fn show_status(
    status: RwSignal<StatusState>,
    text: impl Into<String>,
    severity: StatusSeverity,
) -> Option<StatusTicket> {
    let (ticket, auto_hide) = status.try_update(|s| post_status(s, text, severity))?;
    if let Some(delay) = auto_hide {
        leptos::task::spawn_local(async move {
            browser::sleep(delay).await;
            status.update(|s| {
                s.expire(ticket);
            });
        });
    }
    Some(ticket)
}

/// Run one submission from raw input to idle.
fn submit(
    raw: &str,
    download: RwSignal<DownloadState>,
    status: RwSignal<StatusState>,
    section_ref: NodeRef<leptos::html::Div>,
) {
    let Some(outcome) = download.try_update(|d| d.begin(raw)) else {
        return;
    };
    let url = match outcome {
        Ok(url) => url,
        Err(rejection) => {
            #[cfg(feature = "hydrate")]
            log::debug!("submission rejected: {rejection:?}");
            if let Some(message) = rejection.message() {
                show_status(status, message, StatusSeverity::Error);
            }
            return;
        }
    };

    let received = show_status(status, LINK_RECEIVED_MESSAGE, StatusSeverity::Success);
    leptos::task::spawn_local(async move {
        browser::sleep(VALIDATING_DELAY).await;
        if status.with_untracked(|s| should_show_validating(s, received)) {
            show_status(status, VALIDATING_MESSAGE, StatusSeverity::Info);
        }
    });

    leptos::task::spawn_local(async move {
        let outcome = api::submit_download(&url).await;
        #[cfg(feature = "hydrate")]
        if let Err(e) = &outcome {
            log::warn!("download failed: {e}");
        }
        let Some((text, severity)) = download.try_update(|d| complete(d, outcome)) else {
            return;
        };
        show_status(status, text, severity);

        if download.with_untracked(should_scroll) {
            leptos::task::spawn_local(async move {
                browser::sleep(SCROLL_DELAY).await;
                #[cfg(feature = "hydrate")]
                if let Some(section) = section_ref.get_untracked() {
                    browser::scroll_into_view(&section);
                }
                #[cfg(not(feature = "hydrate"))]
                let _ = section_ref;
            });
        }
    });
}

/// Landing page with the theme toggle, form, status line and results.
#[component]
pub fn HomePage() -> impl IntoView {
    let download = expect_context::<RwSignal<DownloadState>>();
    let status = expect_context::<RwSignal<StatusState>>();
    let section_ref = NodeRef::<leptos::html::Div>::new();

    let on_submit = Callback::new(move |raw: String| submit(&raw, download, status, section_ref));

    view! {
        <div class="page">
            <header class="page__header">
                <h1 class="page__title">"ReelDrop"</h1>
                <ThemeToggle/>
            </header>
            <main class="page__main">
                <p class="page__subtitle">"Download a video from a post link, or a whole profile as a ZIP."</p>
                <DownloadForm on_submit=on_submit/>
                <StatusMessage/>
                <ResultSection section_ref=section_ref/>
            </main>
        </div>
    }
}
