use yew::prelude::*;

use crate::hooks::use_theme::use_theme;

/// Flips between light and dark. The title also shows the stored
/// preference, which may be `auto`.
#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let handle = use_theme();
    let (icon, label) = handle.effective_theme.toggle_hint();
    let title = format!("{label} (preference: {})", handle.theme.as_str());

    let onclick = {
        let toggle = handle.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    html! {
        <button class="theme-toggle" {onclick} aria-label={label} {title}>
            {icon}
        </button>
    }
}
