//! Light/dark theme toggle button.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::theme;

/// Theme toggle in the page header.
///
/// Applies the stored preference once hydrated, then flips and persists the
/// theme on each click. The glyph always reflects the current theme.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    Effect::new(move || {
        let stored = theme::read_preference();
        theme::apply(stored);
        ui.update(|u| u.theme = stored);
    });

    let on_click = move |_| {
        let next = theme::toggle(ui.get_untracked().theme);
        ui.update(|u| u.theme = next);
    };

    view! {
        <button id="themeToggle" class="theme-toggle" type="button" title="Toggle theme" on:click=on_click>
            <span class="icon">{move || ui.get().theme.icon()}</span>
        </button>
    }
}
