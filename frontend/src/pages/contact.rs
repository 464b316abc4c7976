use yew::prelude::*;

use crate::components::scroll_reveal::ScrollReveal;
use crate::config;
use crate::forms::contact_form::ContactFormView;
use crate::forms::quote_calculator::QuoteCalculator;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div class="contact-page">
            <section class="contact-hero">
                <h1>{"Contact Us"}</h1>
                <p>
                    {"Call "}
                    <a href={format!("tel:{}", config::CONTACT_PHONE.replace(' ', ""))}>{ config::CONTACT_PHONE }</a>
                    {" or write to "}
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{ config::CONTACT_EMAIL }</a>
                </p>
            </section>
            <div class="contact-columns">
                <ScrollReveal>
                    <ContactFormView />
                </ScrollReveal>
                <ScrollReveal delay={0.2}>
                    <QuoteCalculator />
                </ScrollReveal>
            </div>
        </div>
    }
}
