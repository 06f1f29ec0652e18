use log::{info, warn};
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::components::Link;

use crate::config;
use crate::contact::client::submit_application;
use crate::contact::mail_draft::mailto_uri;
use crate::contact::{
    ContactController, Delivery, ExperienceBracket, Field, InputKind, Position, StatusTone, SubmitError,
    ValidationError, LICENSES,
};
use crate::Route;

const CONCERN_EXAMPLES: &[&str] = &[
    "保育園のお迎えがあるため、17時までの勤務を希望します",
    "子どもの急な発熱で急なお休みをいただくことがあります",
    "ブランクがあり、最新のトレンドやカット技術に不安があります",
];

pub enum ContactMsg {
    Changed { field: Field, value: String, kind: InputKind },
    Submit,
    Delivered(Result<(), SubmitError>),
}

pub struct ContactPage {
    controller: ContactController,
    form_ref: NodeRef,
}

impl Component for ContactPage {
    type Message = ContactMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            controller: ContactController::new(),
            form_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::Changed { field, value, kind } => {
                self.controller.on_field_change(field, &value, kind);
                true
            }
            ContactMsg::Submit => match config::CONTACT_DELIVERY {
                Delivery::Network => match self.controller.begin_submit() {
                    Ok(payload) => {
                        ctx.link().send_future(async move {
                            ContactMsg::Delivered(submit_application(payload).await)
                        });
                        true
                    }
                    Err(err) => {
                        self.blocked(err);
                        false
                    }
                },
                Delivery::MailDraft => {
                    if let Err(err) = self.controller.validate() {
                        self.blocked(err);
                        return false;
                    }
                    open_mail_draft(&mailto_uri(config::RECRUIT_MAILBOX, self.controller.form()));
                    false
                }
            },
            ContactMsg::Delivered(outcome) => {
                self.controller.complete(outcome);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactMsg::Submit
        });
        let onchange = link.batch_callback(|e: Event| read_input(e.target_unchecked_into()));
        let oninput = link.batch_callback(|e: InputEvent| read_input(e.target_unchecked_into()));
        let onmessage = link.callback(|e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            ContactMsg::Changed {
                field: Field::Message,
                value: area.value(),
                kind: InputKind::TextArea,
            }
        });

        let form = self.controller.form();
        let age = form.age.map(|age| age.to_string()).unwrap_or_default();

        html! {
            <div class="min-h-screen bg-white py-12 px-4">
                <div class="max-w-lg mx-auto">
                    <Link<Route> to={Route::Home} classes="text-gray-600 hover:text-gray-800 mb-8 inline-block">
                        {"← 戻る"}
                    </Link<Route>>

                    <h1 class="text-2xl font-bold mb-8 text-center">{"応募フォーム"}</h1>

                    <form ref={self.form_ref.clone()} {onsubmit} class="space-y-6">
                        <div class="grid grid-cols-2 gap-4">
                            { text_input("姓", Field::LastName, "text", &form.last_name, true, None, &oninput) }
                            { text_input("名", Field::FirstName, "text", &form.first_name, true, None, &oninput) }
                        </div>

                        <div>
                            <label for="age" class="block text-sm font-medium text-gray-700 mb-1">{"年齢"}</label>
                            <input
                                type="number"
                                id="age"
                                name={Field::Age.name()}
                                min="18"
                                required=true
                                value={age}
                                oninput={oninput.clone()}
                                class="w-full px-4 py-2 border border-gray-300 rounded-md focus:ring-[#D3B58D] focus:border-[#D3B58D]"
                            />
                        </div>

                        { text_input("電話番号", Field::Phone, "tel", &form.phone, true, Some("例：090-1234-5678"), &oninput) }
                        { text_input("メールアドレス（任意）", Field::Email, "email", &form.email, false, None, &oninput) }

                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-3">{"美容師歴"}</label>
                            <div class="space-y-2">
                                { for ExperienceBracket::ALL.iter().map(|bracket| choice(
                                    "radio",
                                    Field::Experience,
                                    bracket.label(),
                                    form.experience == Some(*bracket),
                                    // The first radio of a group carries `required` for the whole group.
                                    *bracket == ExperienceBracket::ALL[0],
                                    &onchange,
                                )) }
                            </div>
                        </div>

                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-3">{"保有資格（複数選択可）"}</label>
                            <div class="space-y-2">
                                { for LICENSES.iter().map(|license| choice(
                                    "checkbox",
                                    Field::Licenses,
                                    license,
                                    form.licenses.contains(license),
                                    false,
                                    &onchange,
                                )) }
                            </div>
                        </div>

                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-3">{"現在のポジション"}</label>
                            <div class="space-y-2">
                                { for Position::ALL.iter().map(|position| choice(
                                    "radio",
                                    Field::Position,
                                    position.label(),
                                    form.position == Some(*position),
                                    false,
                                    &onchange,
                                )) }
                            </div>
                        </div>

                        <div class="mt-6">
                            <label class="block text-sm font-medium text-gray-700 mb-3">
                                {"勤務に対する不安などはありますか？"}
                            </label>
                            <div class="text-sm text-gray-500 mb-2">
                                {"例）"}
                                <ul class="ml-4">
                                    { for CONCERN_EXAMPLES.iter().map(|example| html! { <li>{ *example }</li> }) }
                                </ul>
                            </div>
                            <textarea
                                name={Field::Message.name()}
                                value={form.message.clone()}
                                oninput={onmessage}
                                class="w-full px-4 py-2 border rounded-md"
                                rows="6"
                            />
                        </div>

                        <div class="text-center">
                            <button
                                type="submit"
                                disabled={self.controller.is_pending()}
                                class="bg-[#e24a4a] text-white px-8 py-3 rounded-full w-full hover:bg-[#bd3535] transition duration-300"
                            >
                                {"送信する"}
                            </button>
                        </div>

                        {
                            if let Some(text) = self.controller.status().text() {
                                html! { <div class={StatusTone::of(&text).class()}>{ text }</div> }
                            } else {
                                html! {}
                            }
                        }
                    </form>
                </div>
            </div>
        }
    }
}

impl ContactPage {
    fn blocked(&self, err: ValidationError) {
        info!("submit blocked: {}", err);
        if let Some(form) = self.form_ref.cast::<HtmlFormElement>() {
            form.report_validity();
        }
    }
}

/// Turns any `<input>` event into a field change, the way the form's single
/// change handler always has: checkboxes toggle, everything else overwrites.
fn read_input(input: HtmlInputElement) -> Option<ContactMsg> {
    let field = match input.name().parse::<Field>() {
        Ok(field) => field,
        Err(err) => {
            warn!("{}", err);
            return None;
        }
    };
    let kind = match input.type_().as_str() {
        "checkbox" => InputKind::Checkbox { checked: input.checked() },
        "radio" => InputKind::Radio,
        "number" => InputKind::Number,
        _ => InputKind::Text,
    };
    Some(ContactMsg::Changed {
        field,
        value: input.value(),
        kind,
    })
}

fn text_input(
    label: &'static str,
    field: Field,
    input_type: &'static str,
    value: &str,
    required: bool,
    placeholder: Option<&'static str>,
    oninput: &Callback<InputEvent>,
) -> Html {
    html! {
        <div>
            <label class="block text-sm font-medium text-gray-700 mb-1">{ label }</label>
            <input
                type={input_type}
                name={field.name()}
                value={value.to_string()}
                oninput={oninput.clone()}
                {required}
                placeholder={placeholder}
                class="w-full px-4 py-2 border rounded-md"
            />
        </div>
    }
}

fn choice(
    input_type: &'static str,
    field: Field,
    value: &'static str,
    checked: bool,
    required: bool,
    onchange: &Callback<Event>,
) -> Html {
    html! {
        <div key={value} class="flex items-center">
            <input
                type={input_type}
                id={value}
                name={field.name()}
                {value}
                {checked}
                {required}
                onchange={onchange.clone()}
                class="h-4 w-4 text-indigo-600 border-gray-300"
            />
            <label for={value} class="ml-2 text-gray-700">{ value }</label>
        </div>
    }
}

fn open_mail_draft(uri: &str) {
    info!("opening mail draft");
    if let Some(window) = web_sys::window() {
        if window.location().set_href(uri).is_err() {
            warn!("could not hand the draft to the mail client");
        }
    }
}
