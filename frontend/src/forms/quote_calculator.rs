use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::config;
use crate::forms::contact_form::field_error;
use crate::forms::validation::{Field, FieldErrors, QuoteContact};
use crate::quote::{find_tier, format_amount, Quote, TIERS};
use crate::tracking::tracker::{current_path, Tracker};

#[derive(Properties, PartialEq)]
pub struct QuoteCalculatorProps {
    /// Tier selected on first render.
    #[prop_or(AttrValue::from("24h"))]
    pub initial_tier: AttrValue,
}

#[function_component(QuoteCalculator)]
pub fn quote_calculator(props: &QuoteCalculatorProps) -> Html {
    let tier_id = use_state(|| props.initial_tier.to_string());
    let contact = use_state(QuoteContact::default);
    let errors = use_state(FieldErrors::new);
    let is_submitting = use_state(|| false);
    let sent = use_state(|| false);

    let tier = find_tier(&tier_id).unwrap_or(&TIERS[0]);
    let quote = Quote::for_tier(tier);

    let on_tier = {
        let tier_id = tier_id.clone();
        let sent = sent.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            tier_id.set(select.value());
            sent.set(false);
        })
    };

    let text_input = |set: fn(&mut QuoteContact, String)| {
        let contact = contact.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*contact).clone();
            set(&mut next, input.value());
            contact.set(next);
        })
    };

    let onsubmit = {
        let contact = contact.clone();
        let errors = errors.clone();
        let is_submitting = is_submitting.clone();
        let sent = sent.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            let found = contact.validate();
            if !found.is_empty() {
                errors.set(found);
                return;
            }
            errors.set(FieldErrors::new());
            is_submitting.set(true);

            let submitted = (*contact).clone();
            let is_submitting = is_submitting.clone();
            let sent = sent.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::SUBMIT_DELAY_MS).await;
                Tracker::browser().quote_request(&current_path(), tier, &submitted, &quote, Utc::now());
                gloo_console::log!("Quote request logged:", format!("{} / {}", tier.id, format_amount(quote.total)));
                is_submitting.set(false);
                sent.set(true);
            });
        })
    };

    html! {
        <div class="quote-calculator">
            <h3>{"Get an instant quote"}</h3>
            <form onsubmit={onsubmit} novalidate=true>
                <label>
                    {"Service"}
                    <select onchange={on_tier}>
                        {
                            for TIERS.iter().map(|t| html! {
                                <option value={t.id} selected={t.id == tier.id}>{ t.name }</option>
                            })
                        }
                    </select>
                </label>
                <p class="tier-description">{ tier.description }</p>

                <table class="quote-breakdown">
                    <tr><td>{"Monthly base price"}</td><td>{ format_amount(quote.base_price) }</td></tr>
                    <tr><td>{"Management fee"}</td><td>{ format_amount(quote.fixed_fee) }</td></tr>
                    <tr><td>{"Tax (10%)"}</td><td>{ format_amount(quote.tax) }</td></tr>
                    <tr class="quote-total"><td>{"Total"}</td><td>{ format_amount(quote.total) }</td></tr>
                </table>

                <label>
                    {"Name"}
                    <input type="text" value={contact.name.clone()} oninput={text_input(|c, v| c.name = v)} />
                    { field_error(&errors, Field::Name) }
                </label>
                <label>
                    {"Email"}
                    <input type="email" value={contact.email.clone()} oninput={text_input(|c, v| c.email = v)} />
                    { field_error(&errors, Field::Email) }
                </label>
                <label>
                    {"Phone"}
                    <input type="tel" value={contact.phone.clone()} oninput={text_input(|c, v| c.phone = v)} />
                    { field_error(&errors, Field::Phone) }
                </label>
                <label>
                    {"Company (optional)"}
                    <input type="text" value={contact.company.clone()} oninput={text_input(|c, v| c.company = v)} />
                </label>

                <button type="submit" class="hero-cta" disabled={*is_submitting}>
                    { if *is_submitting { "Sending..." } else { "Request this quote" } }
                </button>
                {
                    if *sent {
                        html! { <p class="form-success">{"Quote request received. Our team will call you shortly."}</p> }
                    } else {
                        html! {}
                    }
                }
            </form>
        </div>
    }
}
