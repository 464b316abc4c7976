use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::reveal::RevealVariant;
use crate::components::parallax::Parallax;
use crate::components::scroll_reveal::ScrollReveal;
use crate::content::{find_service, SERVICES};
use crate::forms::quote_calculator::QuoteCalculator;
use crate::pages::not_found::NotFound;
use crate::tracking::tracker::track_click;
use crate::Route;

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <div class="services-page">
            <Parallax translate_y={(40.0, -40.0)} scale={(1.05, 1.0)} class="services-hero">
                <h1>{"Services"}</h1>
                <p>{"Everything a building needs to run safely and look its best."}</p>
            </Parallax>
            <section class="card-grid">
                {
                    for SERVICES.iter().enumerate().map(|(i, service)| html! {
                        <ScrollReveal delay={i as f64 * 0.15}>
                            <div class="service-card">
                                <h2>{ service.name }</h2>
                                <p class="service-tagline">{ service.tagline }</p>
                                <p>{ service.summary }</p>
                                <Link<Route> to={Route::ServiceDetail { id: service.id }} classes="forward-link">
                                    {"Learn more →"}
                                </Link<Route>>
                            </div>
                        </ScrollReveal>
                    })
                }
            </section>
            <section class="quote-section">
                <ScrollReveal variant={RevealVariant::Zoom}>
                    <QuoteCalculator />
                </ScrollReveal>
            </section>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceDetailProps {
    pub id: u32,
}

#[function_component(ServiceDetail)]
pub fn service_detail(props: &ServiceDetailProps) -> Html {
    let Some(service) = find_service(props.id) else {
        return html! { <NotFound /> };
    };
    let initial_tier = service.tier_ids.first().copied().unwrap_or("24h");
    let on_contact = {
        let id = format!("service-{}-contact", service.id);
        Callback::from(move |_: MouseEvent| track_click(&id))
    };

    html! {
        <div class="service-detail-page">
            <header class="service-detail-header">
                <h1>{ service.name }</h1>
                <p class="service-tagline">{ service.tagline }</p>
            </header>
            <ScrollReveal>
                <p>{ service.summary }</p>
            </ScrollReveal>
            <ul class="feature-list">
                {
                    for service.features.iter().enumerate().map(|(i, feature)| html! {
                        <ScrollReveal delay={i as f64 * 0.1} variant={RevealVariant::FadeRight}>
                            <li>{ *feature }</li>
                        </ScrollReveal>
                    })
                }
            </ul>
            <QuoteCalculator initial_tier={initial_tier} />
            <Link<Route> to={Route::Contact} classes="forward-link">
                <button class="secondary-button" onclick={on_contact}>{"Talk to our team"}</button>
            </Link<Route>>
        </div>
    }
}
