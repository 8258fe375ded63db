use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use log::error;

use crate::interactive::cursor::{CursorState, CursorVariant};

#[derive(Properties, PartialEq)]
pub struct CustomCursorProps {
    pub variant: CursorVariant,
}

#[function_component(CustomCursor)]
pub fn custom_cursor(props: &CustomCursorProps) -> Html {
    let position = use_state(|| (0.0_f64, 0.0_f64));

    {
        let position = position.clone();
        use_effect_with_deps(move |_| {
            let listener = Closure::wrap(Box::new(move |e: MouseEvent| {
                position.set((f64::from(e.client_x()), f64::from(e.client_y())));
            }) as Box<dyn FnMut(MouseEvent)>);

            let window = web_sys::window();
            if let Some(window) = &window {
                if let Err(e) = window.add_event_listener_with_callback(
                    "mousemove",
                    listener.as_ref().unchecked_ref(),
                ) {
                    error!("Failed to attach mousemove listener: {:?}", e);
                }
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "mousemove",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    let (x, y) = *position;
    let cursor = CursorState { x, y, variant: props.variant };

    html! {
        <div class="custom-cursor" style={cursor.style()}>
            <style>
                {r#"
                    .custom-cursor {
                        position: fixed;
                        top: 0;
                        left: 0;
                        border-radius: 50%;
                        pointer-events: none;
                        z-index: 50;
                        transition: width 0.15s ease-out, height 0.15s ease-out,
                            background-color 0.15s ease-out, transform 0.05s linear;
                    }
                "#}
            </style>
        </div>
    }
}
