use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::forms::validation::{ContactForm, Field, FieldErrors};
use crate::tracking::tracker::{current_path, Tracker};

pub fn field_error(errors: &FieldErrors, field: Field) -> Html {
    match errors.get(&field) {
        Some(msg) => html! { <span class="field-error">{ *msg }</span> },
        None => html! {},
    }
}

#[function_component(ContactFormView)]
pub fn contact_form_view() -> Html {
    let form = use_state(ContactForm::default);
    let errors = use_state(FieldErrors::new);
    let is_submitting = use_state(|| false);
    let submitted = use_state(|| false);

    let on_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            match field {
                Field::Name => next.name = value,
                Field::Email => next.email = value,
                Field::Phone => next.phone = value,
                Field::Subject => next.subject = value,
                Field::Message => next.message = value,
            }
            form.set(next);
        })
    };

    let text_input = |field: Field| {
        let cb = on_input(field);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };

    let on_subject = {
        let cb = on_input(Field::Subject);
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            cb.emit(select.value());
        })
    };

    let on_message = {
        let cb = on_input(Field::Message);
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let is_submitting = is_submitting.clone();
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            let found = form.validate();
            if !found.is_empty() {
                errors.set(found);
                return;
            }
            errors.set(FieldErrors::new());
            is_submitting.set(true);

            let form = form.clone();
            let is_submitting = is_submitting.clone();
            let submitted = submitted.clone();
            spawn_local(async move {
                // Stands in for a network round trip.
                TimeoutFuture::new(config::SUBMIT_DELAY_MS).await;
                Tracker::browser().form_submit(&current_path(), "contact", Utc::now());
                log::info!("Contact form submitted");
                is_submitting.set(false);
                submitted.set(true);
                form.set(ContactForm::default());
            });
        })
    };

    if *submitted {
        let reset = {
            let submitted = submitted.clone();
            Callback::from(move |_| submitted.set(false))
        };
        return html! {
            <div class="form-success">
                <h3>{"Thank you!"}</h3>
                <p>{"We received your message and will get back to you within one business day."}</p>
                <button class="secondary-button" onclick={reset}>{"Send another message"}</button>
            </div>
        };
    }

    html! {
        <form class="contact-form" onsubmit={onsubmit} novalidate=true>
            <label>
                {"Name"}
                <input type="text" value={form.name.clone()} oninput={text_input(Field::Name)} />
                { field_error(&errors, Field::Name) }
            </label>
            <label>
                {"Email"}
                <input type="email" value={form.email.clone()} oninput={text_input(Field::Email)} />
                { field_error(&errors, Field::Email) }
            </label>
            <label>
                {"Phone (optional)"}
                <input type="tel" value={form.phone.clone()} oninput={text_input(Field::Phone)} />
                { field_error(&errors, Field::Phone) }
            </label>
            <label>
                {"Subject"}
                <select onchange={on_subject}>
                    <option value="" selected={form.subject.is_empty()}>{"Choose a subject"}</option>
                    <option value="security" selected={form.subject == "security"}>{"Security guarding"}</option>
                    <option value="cleaning" selected={form.subject == "cleaning"}>{"Cleaning"}</option>
                    <option value="portering" selected={form.subject == "portering"}>{"Portering"}</option>
                    <option value="other" selected={form.subject == "other"}>{"Something else"}</option>
                </select>
                { field_error(&errors, Field::Subject) }
            </label>
            <label>
                {"Message"}
                <textarea rows="5" value={form.message.clone()} oninput={on_message}></textarea>
                { field_error(&errors, Field::Message) }
            </label>
            <button type="submit" class="hero-cta" disabled={*is_submitting}>
                { if *is_submitting { "Sending..." } else { "Send message" } }
            </button>
        </form>
    }
}
