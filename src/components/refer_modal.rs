use yew::prelude::*;
use web_sys::HtmlInputElement;
use log::info;

use crate::referral::client::{ReferralClient, ReferralError, ReferralTransport};
use crate::referral::flow::{Notice, ReferralFlow, SubmitBlocked};
use crate::referral::form::Field;
use crate::referral::models::{Course, ReferralResponse};

#[derive(Properties, PartialEq)]
pub struct ReferModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    pub on_notify: Callback<Notice>,
}

pub enum ReferModalMsg {
    SetField(Field, String),
    ToggleCourse(Course),
    Submit,
    Finished(Result<ReferralResponse, ReferralError>),
    Close,
    Noop,
}

pub struct ReferModal {
    flow: ReferralFlow,
    client: ReferralClient,
}

impl Component for ReferModal {
    type Message = ReferModalMsg;
    type Properties = ReferModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut flow = ReferralFlow::default();
        if ctx.props().is_open {
            flow.open();
        }
        Self {
            flow,
            client: ReferralClient::from_config(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        match (old_props.is_open, ctx.props().is_open) {
            (false, true) => self.flow.open(),
            (true, false) if !self.flow.in_progress() => self.flow.close(),
            _ => {}
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ReferModalMsg::SetField(field, value) => {
                self.flow.update_field(field, value);
                true
            }
            ReferModalMsg::ToggleCourse(course) => {
                let mut selection = self.flow.form().courses().to_vec();
                match selection.iter().position(|c| *c == course) {
                    Some(idx) => {
                        selection.remove(idx);
                    }
                    None => selection.push(course),
                }
                self.flow.update_courses(selection);
                true
            }
            ReferModalMsg::Submit => match self.flow.begin_submit() {
                Ok(request) => {
                    let client = self.client.clone();
                    ctx.link().send_future(async move {
                        ReferModalMsg::Finished(client.send_referral(&request).await)
                    });
                    true
                }
                Err(SubmitBlocked::InProgress) => false,
                Err(SubmitBlocked::Invalid(_)) => {
                    info!("Referral form has invalid fields");
                    true
                }
            },
            ReferModalMsg::Finished(result) => {
                let notice = self.flow.finish(result);
                ctx.props().on_notify.emit(notice);
                ctx.props().on_close.emit(());
                true
            }
            ReferModalMsg::Close => {
                if self.flow.in_progress() {
                    return false;
                }
                self.flow.close();
                ctx.props().on_close.emit(());
                true
            }
            ReferModalMsg::Noop => false,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !self.flow.is_open() {
            return html! {};
        }

        let link = ctx.link();
        let busy = self.flow.in_progress();

        let on_overlay_click = link.callback(|_: MouseEvent| ReferModalMsg::Close);
        let on_keydown = link.callback(|e: KeyboardEvent| {
            if e.key() == "Escape" {
                ReferModalMsg::Close
            } else {
                ReferModalMsg::Noop
            }
        });
        let on_submit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            ReferModalMsg::Submit
        });

        html! {
            <div class="modal-overlay" tabindex="-1" onclick={on_overlay_click} onkeydown={on_keydown}>
                <style>
                    {r#"
                        .modal-overlay {
                            position: fixed;
                            inset: 0;
                            background: rgba(0, 0, 0, 0.5);
                            display: flex;
                            justify-content: center;
                            align-items: center;
                            z-index: 900;
                        }
                        .modal-content {
                            background: #fff;
                            border-radius: 12px;
                            box-shadow: 0 16px 32px rgba(0, 0, 0, 0.3);
                            padding: 1.5rem;
                            width: 100%;
                            max-width: 28rem;
                            margin: 2.5rem auto;
                        }
                        .modal-content h2 {
                            font-size: 1.5rem;
                            font-weight: bold;
                            margin-bottom: 1rem;
                        }
                        .form-row {
                            margin-bottom: 1rem;
                        }
                        .form-row label {
                            display: block;
                            color: #374151;
                            margin-bottom: 0.5rem;
                        }
                        .form-row input {
                            width: 100%;
                            padding: 0.5rem;
                            border: 1px solid #d1d5db;
                            border-radius: 4px;
                        }
                        .form-row input.invalid {
                            border-color: #ef4444;
                        }
                        .field-error {
                            color: #ef4444;
                            font-size: 0.875rem;
                            margin-top: 0.25rem;
                        }
                        .course-options {
                            display: flex;
                            flex-wrap: wrap;
                            gap: 0.5rem;
                        }
                        .course-chip {
                            padding: 0.25rem 0.75rem;
                            border: 1px solid #d1d5db;
                            border-radius: 999px;
                            background: #fff;
                            cursor: pointer;
                        }
                        .course-chip.selected {
                            background: #2563eb;
                            border-color: #2563eb;
                            color: #fff;
                        }
                        .modal-buttons {
                            display: flex;
                            gap: 1rem;
                        }
                        .modal-button {
                            color: #fff;
                            padding: 0.5rem 1rem;
                            border: none;
                            border-radius: 4px;
                            cursor: pointer;
                        }
                        .modal-button.send { background: #2563eb; }
                        .modal-button.send:hover { background: #1d4ed8; }
                        .modal-button.cancel { background: #dc2626; }
                        .modal-button.cancel:hover { background: #b91c1c; }
                        .modal-button:disabled { opacity: 0.6; cursor: not-allowed; }
                    "#}
                </style>
                <div
                    class="modal-content"
                    role="dialog"
                    aria-label="Refer a Friend"
                    onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                >
                    <h2>{"Refer a Friend"}</h2>
                    <form onsubmit={on_submit} novalidate={true}>
                        { self.text_input(ctx, Field::ReferrerName, "name", "text", "Your Name", "Enter your name") }
                        { self.text_input(ctx, Field::ReferredName, "referredTo", "text", "Your Friend's Name", "Enter your Friend's name") }
                        { self.text_input(ctx, Field::ReferredEmail, "email", "email", "Your Friend's Email", "Enter your friend's email") }

                        <div class="form-row">
                            <label>{"Refer Courses"}</label>
                            <div class="course-options">
                                { for Course::ALL.iter().map(|course| self.course_chip(ctx, *course)) }
                            </div>
                        </div>

                        <div class="modal-buttons">
                            <button type="submit" class="modal-button send" disabled={busy}>
                                { if busy { "loading" } else { "Send Referral" } }
                            </button>
                            <button
                                type="button"
                                class="modal-button cancel"
                                disabled={busy}
                                onclick={link.callback(|_: MouseEvent| ReferModalMsg::Close)}
                            >
                                {"Close"}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        }
    }
}

impl ReferModal {
    fn text_input(
        &self,
        ctx: &Context<Self>,
        field: Field,
        id: &'static str,
        input_type: &'static str,
        label: &'static str,
        placeholder: &'static str,
    ) -> Html {
        let error = self.flow.form().errors().get(field);
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ReferModalMsg::SetField(field, input.value())
        });

        html! {
            <div class="form-row">
                <label for={id}>{label}</label>
                <input
                    type={input_type}
                    id={id}
                    class={classes!(error.is_some().then(|| "invalid"))}
                    value={self.flow.form().value(field).to_string()}
                    placeholder={placeholder}
                    disabled={self.flow.in_progress()}
                    oninput={oninput}
                />
                if let Some(message) = error {
                    <p class="field-error">{message}</p>
                }
            </div>
        }
    }

    fn course_chip(&self, ctx: &Context<Self>, course: Course) -> Html {
        let selected = self.flow.form().is_selected(course);
        html! {
            <button
                type="button"
                class={classes!("course-chip", selected.then(|| "selected"))}
                aria-pressed={selected.to_string()}
                disabled={self.flow.in_progress()}
                onclick={ctx.link().callback(move |_: MouseEvent| ReferModalMsg::ToggleCourse(course))}
            >
                {course.label()}
            </button>
        }
    }
}
