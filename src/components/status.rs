use crate::hooks::use_query::QueryState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    /// What is being loaded, e.g. "fuel mix data".
    pub label: AttrValue,
    pub loading: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
}

impl StatusProps {
    pub fn from_state<T>(label: &'static str, state: &QueryState<T>) -> Self {
        Self {
            label: label.into(),
            loading: state.is_loading(),
            error: state.error().map(|e| AttrValue::from(e.to_string())),
        }
    }
}

/// Loading and failure banner. Renders nothing once data is present.
#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    if let Some(msg) = &props.error {
        return html! {
            <div class="status error">
                <p>{format!("Failed to load {}: ", props.label)}{msg}</p>
            </div>
        };
    }
    if props.loading {
        return html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{format!("Loading {}...", props.label)}</p>
            </div>
        };
    }
    Html::default()
}
