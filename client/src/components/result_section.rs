//! Result section with the single-item and profile views.
//!
//! DESIGN
//! ======
//! Both views render from `DownloadState::view`, so at most one of them is
//! displayed. The copy button is wired once; it reads the caption from state
//! at click time rather than capturing it per render.

use leptos::prelude::*;

use crate::state::download::{COPIED_LABEL_DURATION, DownloadState, ResultView};
use crate::util::browser;

fn display(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}

/// Shared result container. `section_ref` lets the page scroll it into view.
#[component]
pub fn ResultSection(section_ref: NodeRef<leptos::html::Div>) -> impl IntoView {
    let download = expect_context::<RwSignal<DownloadState>>();
    let visible = move || download.with(|d| d.view.is_section_visible());

    view! {
        <div id="resultSection" class="result-section" node_ref=section_ref style:display=move || display(visible())>
            <SingleResult/>
            <ProfileResult/>
        </div>
    }
}

#[component]
fn SingleResult() -> impl IntoView {
    let download = expect_context::<RwSignal<DownloadState>>();

    let single = move || {
        download.with(|d| match &d.view {
            ResultView::Single(view) => Some(view.clone()),
            _ => None,
        })
    };
    let caption = move || single().map(|v| v.caption_text().to_owned()).unwrap_or_default();
    let video_url = move || single().map(|v| v.video_url).unwrap_or_default();
    let filename = move || single().map(|v| v.filename).unwrap_or_default();
    let copy_label = move || download.with(|d| d.copy.label());

    let on_copy = move |_| {
        let text = download.with_untracked(|d| match &d.view {
            ResultView::Single(view) => view.clipboard_text().to_owned(),
            _ => String::new(),
        });
        leptos::task::spawn_local(async move {
            // Clipboard failures are silent; the label just stays put.
            if browser::copy_to_clipboard(&text).await.is_err() {
                return;
            }
            let Some(seq) = download.try_update(|d| d.copy.mark_copied()) else {
                return;
            };
            browser::sleep(COPIED_LABEL_DURATION).await;
            download.update(|d| d.copy.revert(seq));
        });
    };

    view! {
        <div
            id="singleResult"
            class="result-card result-card--single"
            style:display=move || display(download.with(|d| d.view.is_single_visible()))
        >
            <h2 class="result-card__title">"Video ready"</h2>
            <p id="captionText" class="result-card__caption">{caption}</p>
            <div class="result-card__actions">
                <button id="copyCaptionBtn" class="btn btn--secondary" type="button" on:click=on_copy>
                    {copy_label}
                </button>
                <a id="downloadVideoBtn" class="btn btn--primary" href=video_url download=filename>
                    "⬇️ Download Video"
                </a>
            </div>
        </div>
    }
}

#[component]
fn ProfileResult() -> impl IntoView {
    let download = expect_context::<RwSignal<DownloadState>>();

    let profile = move || {
        download.with(|d| match &d.view {
            ResultView::Profile(view) => Some(view.clone()),
            _ => None,
        })
    };
    let post_count = move || profile().map(|v| v.post_count.to_string()).unwrap_or_default();
    let zip_url = move || profile().map(|v| v.zip_url).unwrap_or_default();
    let filename = move || profile().map(|v| v.filename).unwrap_or_default();

    view! {
        <div
            id="profileResult"
            class="result-card result-card--profile"
            style:display=move || display(download.with(|d| d.view.is_profile_visible()))
        >
            <h2 class="result-card__title">"Profile archive ready"</h2>
            <p class="result-card__count">
                <span id="postCount">{post_count}</span>
                " videos bundled"
            </p>
            <div class="result-card__actions">
                <a id="downloadZipBtn" class="btn btn--primary" href=zip_url download=filename>
                    "⬇️ Download ZIP"
                </a>
            </div>
        </div>
    }
}
