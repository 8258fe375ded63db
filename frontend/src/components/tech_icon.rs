use yew::prelude::*;

use crate::content::Tech;

#[derive(Properties, PartialEq)]
pub struct TechIconProps {
    pub tech: Tech,
    pub index: usize,
    pub category_index: usize,
    pub on_hover: Callback<bool>,
}

#[function_component(TechIcon)]
pub fn tech_icon(props: &TechIconProps) -> Html {
    let show_tooltip = use_state(|| false);

    let enter = {
        let show_tooltip = show_tooltip.clone();
        let on_hover = props.on_hover.clone();
        Callback::from(move |_: MouseEvent| {
            show_tooltip.set(true);
            on_hover.emit(true);
        })
    };
    let leave = {
        let show_tooltip = show_tooltip.clone();
        let on_hover = props.on_hover.clone();
        Callback::from(move |_: MouseEvent| {
            show_tooltip.set(false);
            on_hover.emit(false);
        })
    };

    let delay = 0.1 + props.index as f64 * 0.05 + props.category_index as f64 * 0.1;

    html! {
        <div class="tech-icon" style={format!("animation-delay: {:.2}s;", delay)}>
            <div class="tech-icon-tile" onmouseenter={enter} onmouseleave={leave}>
                <img src={props.tech.icon} alt={props.tech.name} width="48" height="48" />
                <span>{ props.tech.name }</span>
            </div>
            if *show_tooltip {
                <div class="tech-tooltip">
                    <p>{ props.tech.experience }</p>
                </div>
            }
        </div>
    }
}
