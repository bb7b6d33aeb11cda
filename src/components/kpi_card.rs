use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct KpiCardProps {
    pub label: AttrValue,
    pub value: f64,
    pub unit: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or(AttrValue::Static("inherit"))]
    pub color: AttrValue,
}

#[function_component(KpiCard)]
pub fn kpi_card(props: &KpiCardProps) -> Html {
    html! {
        <div class="summary-item kpi-card">
            <h3>{&props.label}</h3>
            <p class="summary-value" style={format!("color: {}", props.color)}>
                {format!("{:.2}", props.value)}
                <span class="kpi-unit">{" "}{&props.unit}</span>
            </p>
            if let Some(subtitle) = &props.subtitle {
                <p class="kpi-subtitle">{subtitle}</p>
            }
        </div>
    }
}
