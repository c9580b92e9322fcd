use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub icon: AttrValue,
    pub title: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    /// Accent class, e.g. `blue` or `green`.
    #[prop_or(AttrValue::Static("blue"))]
    pub color: AttrValue,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class={classes!("stat-card", props.color.to_string())}>
            <div class="stat-icon">
                <i class="material-icons">{ props.icon.clone() }</i>
            </div>
            <div class="stat-body">
                <span class="stat-title">{ props.title.clone() }</span>
                <span class="stat-value">{ props.value.clone() }</span>
                if let Some(subtitle) = &props.subtitle {
                    <span class="stat-subtitle">{ subtitle.clone() }</span>
                }
            </div>
        </div>
    }
}
