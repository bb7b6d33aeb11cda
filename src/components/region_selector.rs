use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::region::RegionScope;

#[derive(Properties, PartialEq)]
pub struct RegionSelectorProps {
    pub options: Vec<RegionScope>,
    pub selected: RegionScope,
    pub on_change: Callback<RegionScope>,
    #[prop_or(AttrValue::Static("Select region"))]
    pub label: AttrValue,
}

/// Region selector dropdown component
#[function_component(RegionSelector)]
pub fn region_selector(props: &RegionSelectorProps) -> Html {
    let on_change = {
        let callback = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            match target.value().parse::<RegionScope>() {
                Ok(scope) => callback.emit(scope),
                Err(err) => tracing::warn!(error = %err, "ignoring unknown region option"),
            }
        })
    };

    html! {
        <select
            class="region-selector"
            onchange={on_change}
            aria-label={props.label.clone()}
            title={props.label.clone()}
        >
            {
                props.options.iter().map(|scope| {
                    let selected = *scope == props.selected;
                    html! {
                        <option value={scope.id()} {selected}>{scope.label()}</option>
                    }
                }).collect::<Html>()
            }
        </select>
    }
}
