use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use gloo_net::http::Request;
use log::{info, warn};

use crate::config;
use crate::interactive::contact_form::{
    ContactField, ContactFields, ContactForm, Notice, SinkOutcome, SubmitRejected,
};

#[derive(Properties, PartialEq)]
pub struct ContactFormViewProps {
    pub on_notify: Callback<Notice>,
    pub on_hover: Callback<bool>,
}

pub enum ContactFormMsg {
    Update(ContactField, String),
    Submit,
    Settled(SinkOutcome),
}

pub struct ContactFormView {
    form: ContactForm,
}

async fn post_contact(payload: ContactFields) -> SinkOutcome {
    let request = match Request::post(&format!("{}/api/contact", config::get_backend_url()))
        .json(&payload)
    {
        Ok(req) => req,
        Err(e) => return SinkOutcome::Unreachable(e.to_string()),
    };

    match request.send().await {
        Ok(response) => SinkOutcome::from_status(response.status()),
        Err(e) => {
            gloo_console::error!(format!("Contact request failed: {}", e));
            SinkOutcome::Unreachable(e.to_string())
        }
    }
}

impl Component for ContactFormView {
    type Message = ContactFormMsg;
    type Properties = ContactFormViewProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: ContactForm::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactFormMsg::Update(field, value) => {
                self.form.update_field(field, value);
                true
            }
            ContactFormMsg::Submit => match self.form.begin_submit() {
                Ok(payload) => {
                    ctx.props().on_notify.emit(Notice::Sending);
                    ctx.link().send_future(async move {
                        ContactFormMsg::Settled(post_contact(payload).await)
                    });
                    true
                }
                Err(SubmitRejected::InFlight) => {
                    warn!("Ignoring submit while a message is being sent");
                    false
                }
                Err(SubmitRejected::Invalid) => true,
            },
            ContactFormMsg::Settled(outcome) => {
                info!("Contact submission settled: {:?}", outcome);
                if let Some(notice) = self.form.settle(outcome) {
                    ctx.props().on_notify.emit(notice);
                    self.form.acknowledge();
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactFormMsg::Submit
        });
        let enter = ctx.props().on_hover.reform(|_: MouseEvent| true);
        let leave = ctx.props().on_hover.reform(|_: MouseEvent| false);
        let fields = self.form.fields();
        let errors = self.form.errors();
        let sending = self.form.is_sending();

        let input_class = |field: ContactField| {
            classes!("contact-input", (!errors.get(field).is_empty()).then(|| "invalid"))
        };
        let error_line = |field: ContactField| {
            let message = errors.get(field);
            if message.is_empty() {
                html! {}
            } else {
                html! { <p class="contact-error">{ message.to_string() }</p> }
            }
        };

        html! {
            <form class="contact-form" {onsubmit} novalidate=true>
                <div class="contact-row">
                    <div class="contact-field">
                        <label for="name">{ "Name" }</label>
                        <input
                            type="text"
                            id="name"
                            name="name"
                            class={input_class(ContactField::Name)}
                            placeholder="Your name"
                            value={fields.name.clone()}
                            oninput={ctx.link().callback(|e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                ContactFormMsg::Update(ContactField::Name, input.value())
                            })}
                            onmouseenter={enter.clone()}
                            onmouseleave={leave.clone()}
                        />
                        { error_line(ContactField::Name) }
                    </div>
                    <div class="contact-field">
                        <label for="email">{ "Email" }</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            class={input_class(ContactField::Email)}
                            placeholder="Your email"
                            value={fields.email.clone()}
                            oninput={ctx.link().callback(|e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                ContactFormMsg::Update(ContactField::Email, input.value())
                            })}
                            onmouseenter={enter.clone()}
                            onmouseleave={leave.clone()}
                        />
                        { error_line(ContactField::Email) }
                    </div>
                </div>
                <div class="contact-field">
                    <label for="message">{ "Message" }</label>
                    <textarea
                        id="message"
                        name="message"
                        rows="5"
                        class={input_class(ContactField::Message)}
                        placeholder="Your message"
                        value={fields.message.clone()}
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            ContactFormMsg::Update(ContactField::Message, input.value())
                        })}
                        onmouseenter={enter.clone()}
                        onmouseleave={leave.clone()}
                    />
                    { error_line(ContactField::Message) }
                </div>
                <button type="submit" class="contact-submit" disabled={sending}
                    onmouseenter={enter} onmouseleave={leave}>
                    { if sending { "Sending..." } else { "Send Message" } }
                </button>
            </form>
        }
    }
}
