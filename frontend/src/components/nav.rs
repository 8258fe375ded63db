use yew::prelude::*;

use crate::interactive::scroll_spy::SECTIONS;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub active: AttrValue,
    pub menu_open: bool,
    pub dark_mode: bool,
    pub on_navigate: Callback<&'static str>,
    pub on_toggle_menu: Callback<()>,
    pub on_toggle_theme: Callback<()>,
    pub on_hover: Callback<bool>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let enter = props.on_hover.reform(|_: MouseEvent| true);
    let leave = props.on_hover.reform(|_: MouseEvent| false);

    let toggle_menu = {
        let on_toggle_menu = props.on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };
    let toggle_theme = props.on_toggle_theme.reform(|_: MouseEvent| ());

    let links = |mobile: bool| -> Html {
        SECTIONS
            .iter()
            .map(|&section| {
                let onclick = props.on_navigate.reform(move |_: MouseEvent| section);
                let class = classes!(
                    if mobile { "nav-link mobile" } else { "nav-link" },
                    (&*props.active == section).then(|| "active")
                );
                if mobile {
                    html! { <button {class} {onclick}>{ section }</button> }
                } else {
                    html! {
                        <button {class} {onclick}
                            onmouseenter={enter.clone()} onmouseleave={leave.clone()}>
                            { section }
                        </button>
                    }
                }
            })
            .collect::<Html>()
    };

    html! {
        <header class="top-nav">
            <div class="nav-content">
                <span class="nav-logo">{ "</>" }</span>
                <nav class="nav-links">
                    { links(false) }
                </nav>
                <div class="nav-actions">
                    <button class="theme-toggle" onclick={toggle_theme}
                        aria-label="Toggle theme"
                        onmouseenter={enter.clone()} onmouseleave={leave.clone()}>
                        { if props.dark_mode { "☀" } else { "☾" } }
                    </button>
                    <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                        { if props.menu_open { "✕" } else { "☰" } }
                    </button>
                </div>
            </div>
            if props.menu_open {
                <div class="mobile-menu">
                    { links(true) }
                </div>
            }
        </header>
    }
}
