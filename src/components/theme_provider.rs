use yew::prelude::*;

use crate::hooks::use_theme::{ThemeHandle, ThemeStoreHandle, use_theme_state};

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    /// Where the preference is loaded from and saved to.
    pub store: ThemeStoreHandle,
    #[prop_or_default]
    pub children: Html,
}

/// Publishes a [`ThemeHandle`] to every descendant.
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let handle = use_theme_state(props.store.clone());

    html! {
        <ContextProvider<ThemeHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<ThemeHandle>>
    }
}
