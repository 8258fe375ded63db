use std::rc::Rc;
use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::interactive::contact_form::Notice;

/// How long a toast stays on screen.
const TOAST_DURATION_MS: u32 = 4000;

/// Newer toasts push older ones out past this many.
const TOAST_LIMIT: usize = 1;

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub destructive: bool,
}

pub enum ToastAction {
    Push {
        title: String,
        description: String,
        destructive: bool,
    },
    Dismiss(u32),
}

impl ToastAction {
    pub fn from_notice(notice: Notice) -> Self {
        ToastAction::Push {
            title: notice.title().to_string(),
            description: notice.description().to_string(),
            destructive: notice.is_error(),
        }
    }
}

#[derive(Clone, PartialEq, Default, Debug)]
pub struct ToastQueue {
    next_id: u32,
    pub toasts: Vec<Toast>,
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut queue = (*self).clone();
        match action {
            ToastAction::Push { title, description, destructive } => {
                queue.toasts.insert(0, Toast {
                    id: queue.next_id,
                    title,
                    description,
                    destructive,
                });
                queue.next_id = queue.next_id.wrapping_add(1);
                queue.toasts.truncate(TOAST_LIMIT);
            }
            ToastAction::Dismiss(id) => {
                queue.toasts.retain(|t| t.id != id);
            }
        }
        queue.into()
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastViewProps {
    pub toast: Toast,
    pub on_dismiss: Callback<u32>,
}

#[function_component(ToastView)]
fn toast_view(props: &ToastViewProps) -> Html {
    {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(move |_| {
            let timeout = Timeout::new(TOAST_DURATION_MS, move || {
                on_dismiss.emit(id);
            });
            // Dropping the handle cancels the timeout if the toast goes first.
            move || drop(timeout)
        }, id);
    }

    let dismiss = {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class={classes!("toast", props.toast.destructive.then(|| "destructive"))} role="status">
            <div class="toast-body">
                <div class="toast-title">{ &props.toast.title }</div>
                <div class="toast-description">{ &props.toast.description }</div>
            </div>
            <button class="toast-close" onclick={dismiss}>{ "✕" }</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    html! {
        <div class="toaster">
            <style>
                {r#"
                    .toaster {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        z-index: 100;
                    }
                    .toast {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        min-width: 280px;
                        max-width: 380px;
                        padding: 1rem 1.25rem;
                        border-radius: 12px;
                        background: rgba(17, 24, 39, 0.95);
                        border: 1px solid rgba(0, 238, 255, 0.3);
                        color: #fff;
                        box-shadow: 0 8px 32px rgba(0, 0, 0, 0.4);
                        animation: toastIn 0.3s ease-out;
                    }
                    .toast.destructive {
                        border-color: rgba(239, 68, 68, 0.6);
                        background: rgba(127, 29, 29, 0.95);
                    }
                    .toast-title {
                        font-weight: 600;
                        margin-bottom: 0.25rem;
                    }
                    .toast-description {
                        font-size: 0.875rem;
                        color: #d1d5db;
                    }
                    .toast-close {
                        margin-left: auto;
                        background: none;
                        border: none;
                        color: #9ca3af;
                        cursor: pointer;
                    }
                    @keyframes toastIn {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
            { for props.toasts.iter().map(|toast| html! {
                <ToastView key={toast.id} toast={toast.clone()} on_dismiss={props.on_dismiss.clone()} />
            }) }
        </div>
    }
}
