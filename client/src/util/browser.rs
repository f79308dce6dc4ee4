//! Thin wrappers over browser APIs used by the download page.
//!
//! Each helper is a no-op (or an error) outside the `hydrate` build so page
//! logic can call them unconditionally from shared code paths.

#![allow(clippy::unused_async)]

use std::time::Duration;

/// Suspend the current task for `duration`.
pub async fn sleep(duration: Duration) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(duration).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = duration;
    }
}

/// Write `text` to the system clipboard.
///
/// # Errors
///
/// Returns an error string if the clipboard is unavailable or the write is
/// rejected by the browser.
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
        let Some(clipboard) = window.navigator().clipboard() else {
            return Err("clipboard unavailable".to_owned());
        };
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| format!("{e:?}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err("not available on server".to_owned())
    }
}

/// Smoothly scroll `el` into view with nearest alignment.
#[cfg(feature = "hydrate")]
pub fn scroll_into_view(el: &web_sys::Element) {
    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    opts.set_block(web_sys::ScrollLogicalPosition::Nearest);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}
