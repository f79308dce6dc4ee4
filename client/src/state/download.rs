//! Download form state: submission lifecycle and the visible result view.
//!
//! DESIGN
//! ======
//! `ResultView` is a single enum, so the single-item and profile views are
//! mutually exclusive by construction. `begin`/`finish` bracket one request;
//! `begin` refuses to start a second one while the first is in flight.

use std::time::Duration;

use wire::DownloadResult;

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a URL or username";
pub const LINK_RECEIVED_MESSAGE: &str = "Link received successfully ✅";
pub const VALIDATING_MESSAGE: &str = "Validating input...";
pub const NO_CAPTION_TEXT: &str = "No caption available";
pub const COPY_CAPTION_LABEL: &str = "📋 Copy Caption";
pub const COPIED_LABEL: &str = "✅ Copied!";

/// Delay before the "validating" follow-up status replaces "link received".
pub const VALIDATING_DELAY: Duration = Duration::from_millis(500);
/// Delay before the result section is scrolled into view.
pub const SCROLL_DELAY: Duration = Duration::from_millis(300);
/// How long the copy button shows its confirmation label.
pub const COPIED_LABEL_DURATION: Duration = Duration::from_secs(2);

/// Whether a request is in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// Why a submission did not start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitRejection {
    /// Input was empty after trimming.
    EmptyInput,
    /// A previous submission has not finished yet.
    InFlight,
}

impl SubmitRejection {
    /// Status text to show for this rejection, if the user should see one.
    #[must_use]
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::EmptyInput => Some(EMPTY_INPUT_MESSAGE),
            Self::InFlight => None,
        }
    }
}

/// Single media item view model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SingleView {
    pub caption: Option<String>,
    pub video_url: String,
    pub filename: String,
}

impl SingleView {
    /// Caption as displayed, with the placeholder when there is none.
    #[must_use]
    pub fn caption_text(&self) -> &str {
        match self.caption.as_deref() {
            Some(caption) if !caption.is_empty() => caption,
            _ => NO_CAPTION_TEXT,
        }
    }

    /// Text written to the clipboard by the copy button.
    #[must_use]
    pub fn clipboard_text(&self) -> &str {
        self.caption.as_deref().unwrap_or_default()
    }
}

/// Profile archive view model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileView {
    pub post_count: u64,
    pub zip_url: String,
    pub filename: String,
}

/// Which result view, if any, is on screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ResultView {
    #[default]
    Hidden,
    Single(SingleView),
    Profile(ProfileView),
}

impl ResultView {
    /// Map a decoded result to its view. Unknown result types render nothing.
    #[must_use]
    pub fn from_result(result: DownloadResult) -> Self {
        match result {
            DownloadResult::Single { caption, video_url, filename } => {
                Self::Single(SingleView { caption, video_url, filename })
            }
            DownloadResult::Profile { post_count, zip_url, filename } => {
                Self::Profile(ProfileView { post_count, zip_url, filename })
            }
            DownloadResult::Unknown => Self::Hidden,
        }
    }

    #[must_use]
    pub fn is_section_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    #[must_use]
    pub fn is_single_visible(&self) -> bool {
        matches!(self, Self::Single(_))
    }

    #[must_use]
    pub fn is_profile_visible(&self) -> bool {
        matches!(self, Self::Profile(_))
    }
}

/// Copy-caption button label with a self-reverting confirmation.
#[derive(Clone, Copy, Debug, Default)]
pub struct CopyFeedback {
    copied: bool,
    seq: u64,
}

impl CopyFeedback {
    /// Switch to the confirmation label. Returns the token `revert` expects.
    pub fn mark_copied(&mut self) -> u64 {
        self.seq += 1;
        self.copied = true;
        self.seq
    }

    /// Restore the normal label unless a newer copy happened since `seq`.
    pub fn revert(&mut self, seq: u64) {
        if seq == self.seq {
            self.copied = false;
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        if self.copied { COPIED_LABEL } else { COPY_CAPTION_LABEL }
    }
}

/// Download form state shared through context.
#[derive(Clone, Debug, Default)]
pub struct DownloadState {
    pub phase: SubmitPhase,
    pub view: ResultView,
    pub copy: CopyFeedback,
}

impl DownloadState {
    /// Start a submission for `raw_input`.
    ///
    /// On success the input is returned trimmed, prior results are hidden and
    /// the form enters its loading state. Rejections leave state untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitRejection::InFlight`] while a previous submission is
    /// still running, and [`SubmitRejection::EmptyInput`] when the trimmed
    /// input is empty.
    pub fn begin(&mut self, raw_input: &str) -> Result<String, SubmitRejection> {
        if self.is_loading() {
            return Err(SubmitRejection::InFlight);
        }
        let url = raw_input.trim();
        if url.is_empty() {
            return Err(SubmitRejection::EmptyInput);
        }
        self.view = ResultView::Hidden;
        self.copy = CopyFeedback::default();
        self.phase = SubmitPhase::Submitting;
        Ok(url.to_owned())
    }

    /// Show the result of a successful submission.
    pub fn show_result(&mut self, result: DownloadResult) {
        self.view = ResultView::from_result(result);
    }

    /// Leave the loading state. Called on every completion path.
    pub fn finish(&mut self) {
        self.phase = SubmitPhase::Idle;
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }
}
